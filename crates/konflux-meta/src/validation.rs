//! Validation for resource and component names

use std::collections::HashSet;

use crate::{Error, Result};

/// Check that `name` is a lowercase identifier usable in file names,
/// image names and Kubernetes object names: `[a-z0-9][a-z0-9-]*`.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let first = name.chars().next().ok_or_else(|| invalid("name is empty"))?;
    if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
        return Err(invalid("must start with a lowercase letter or digit"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(invalid(&format!("unexpected character '{bad}'")));
    }
    Ok(())
}

/// Check that a version label is a single path segment: ASCII letters,
/// digits, `.`, `_` and `-`, not starting with `.`.
pub fn validate_version_label(label: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidName {
        name: label.to_string(),
        reason: reason.to_string(),
    };

    match label.chars().next() {
        None => return Err(invalid("version label is empty")),
        Some('.') => return Err(invalid("version label must not start with '.'")),
        Some(_) => {}
    }
    if let Some(bad) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(invalid(&format!("unexpected character '{bad}'")));
    }
    Ok(())
}

/// Check that no entry appears twice in `entries`.
pub fn ensure_unique<'a>(field: &str, entries: impl IntoIterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.as_str()) {
            return Err(Error::Duplicate {
                field: field.to_string(),
                entry: entry.clone(),
            });
        }
    }
    Ok(())
}
