//! Forward-slash resource paths

use std::path::{Path, PathBuf};

/// Location of a resource file, stored with `/` separators.
///
/// The config tree is addressed as `{dir}/{category}/{name}.{ext}` on every
/// platform; the native form is only produced when a file is opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a segment. An empty segment leaves the path unchanged, which
    /// is how root-level resources (empty category) are addressed.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches('/');
        let inner = match (self.inner.as_str(), segment) {
            (_, "") => self.inner.clone(),
            ("", segment) => segment.to_string(),
            (dir, segment) => format!("{}/{}", dir.trim_end_matches('/'), segment),
        };
        Self { inner }
    }

    /// Directory containing this path. A bare file name lives in `.`.
    pub fn parent(&self) -> Self {
        let trimmed = self.inner.trim_end_matches('/');
        let inner = match trimmed.rfind('/') {
            Some(0) => "/".to_string(),
            Some(idx) => trimmed[..idx].to_string(),
            None => ".".to_string(),
        };
        Self { inner }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the file name; dotfiles such as `.konflux` have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn join_skips_empty_segment() {
        let dir = NormalizedPath::new("config");
        assert_eq!(dir.join("").as_str(), "config");
        assert_eq!(dir.join("repos").join("foo.yaml").as_str(), "config/repos/foo.yaml");
        assert_eq!(NormalizedPath::new("config/").join("a.yml").as_str(), "config/a.yml");
    }

    #[rstest]
    #[case("config/konflux.yaml", "config")]
    #[case("/konflux.yaml", "/")]
    #[case("konflux.yml", ".")]
    fn parent_of_root_file(#[case] file: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(file).parent().as_str(), expected);
    }

    #[test]
    fn extension_ignores_dotfiles() {
        assert_eq!(NormalizedPath::new("a/b.yml").extension(), Some("yml"));
        assert_eq!(NormalizedPath::new("a/.konflux").extension(), None);
        assert_eq!(NormalizedPath::new("a/konflux").extension(), None);
    }
}
