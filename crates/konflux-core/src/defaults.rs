//! Component defaulting
//!
//! A component inherits naming, version, branch and organization context
//! from the repository and application it belongs to.

use std::sync::Arc;

use konflux_meta::validation::{ensure_unique, validate_name};
use konflux_meta::{Application, Component, Repository};

use crate::{Error, Result};

/// Fills in a component's inherited and defaulted fields.
///
/// Implementations must be deterministic and must leave `component`
/// untouched when they return an error.
pub trait ComponentDefaulter {
    fn apply(
        &self,
        component: &mut Component,
        repository: &Repository,
        application: &Application,
    ) -> Result<()>;
}

/// Default image suffix for product builds.
pub const DEFAULT_IMAGE_SUFFIX: &str = "-rhel9";

/// Registry host images are published to.
const IMAGE_REGISTRY: &str = "quay.io";

/// Standard defaulting rules.
///
/// - `application`, `repository`, `version`, `branch` come from context
/// - `dockerfile` defaults to `.konflux/dockerfiles/{name}.Dockerfile`
/// - `image-prefix` defaults to `{application}-`
/// - `image-suffix` defaults to `-rhel9`
/// - `image` is `quay.io/{org}/{prefix}{name}{suffix}`
#[derive(Debug, Clone)]
pub struct StandardDefaulter {
    org: String,
}

impl StandardDefaulter {
    pub fn new(org: impl Into<String>) -> Self {
        Self { org: org.into() }
    }
}

impl ComponentDefaulter for StandardDefaulter {
    fn apply(
        &self,
        component: &mut Component,
        repository: &Repository,
        application: &Application,
    ) -> Result<()> {
        let fail = |message: String| Error::Defaulting {
            component: component.name.clone(),
            repository: repository.name.clone(),
            message,
        };

        validate_name(&component.name).map_err(|e| fail(e.to_string()))?;
        ensure_unique("nudges", &component.nudges).map_err(|e| fail(e.to_string()))?;

        // Work on a copy so a failure never leaves a half-defaulted component.
        let mut defaulted = component.clone();
        defaulted.application = application.name.clone();
        defaulted.repository = repository.name.clone();
        defaulted.version = Some(Arc::clone(&application.version));
        defaulted.branch = repository.branch.name.clone();

        if defaulted.dockerfile.is_empty() {
            defaulted.dockerfile = format!(".konflux/dockerfiles/{}.Dockerfile", defaulted.name);
        }
        if defaulted.image_prefix.is_empty() {
            defaulted.image_prefix = format!("{}-", application.name);
        }
        if defaulted.image_suffix.is_empty() {
            defaulted.image_suffix = DEFAULT_IMAGE_SUFFIX.to_string();
        }
        defaulted.image = format!(
            "{IMAGE_REGISTRY}/{}/{}{}{}",
            self.org, defaulted.image_prefix, defaulted.name, defaulted.image_suffix
        );

        *component = defaulted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use konflux_meta::{Branch, Version};
    use pretty_assertions::assert_eq;

    fn context() -> (Repository, Application) {
        let application = Application::new("pipelines", Arc::new(Version::new("1.15")));
        let repository = Repository {
            name: "operator".into(),
            branch: Branch {
                name: "release-v1.15.x".into(),
                upstream_branch: "main".into(),
            },
            application: Some(application.snapshot()),
            ..Default::default()
        };
        (repository, application)
    }

    #[test]
    fn fills_inherited_and_default_fields() {
        let (repository, application) = context();
        let mut component = Component::new("bundle");

        StandardDefaulter::new("ORG")
            .apply(&mut component, &repository, &application)
            .unwrap();

        assert_eq!(component.application, "pipelines");
        assert_eq!(component.repository, "operator");
        assert_eq!(component.branch, "release-v1.15.x");
        assert_eq!(component.dockerfile, ".konflux/dockerfiles/bundle.Dockerfile");
        assert_eq!(component.image_prefix, "pipelines-");
        assert_eq!(component.image_suffix, "-rhel9");
        assert_eq!(component.image, "quay.io/ORG/pipelines-bundle-rhel9");
        assert!(Arc::ptr_eq(
            component.version.as_ref().unwrap(),
            &application.version
        ));
    }

    #[test]
    fn keeps_authored_values() {
        let (repository, application) = context();
        let mut component = Component {
            dockerfile: "Dockerfile".into(),
            image_prefix: "".into(),
            image_suffix: "-ubi".into(),
            ..Component::new("cli")
        };

        StandardDefaulter::new("ORG")
            .apply(&mut component, &repository, &application)
            .unwrap();

        assert_eq!(component.dockerfile, "Dockerfile");
        assert_eq!(component.image, "quay.io/ORG/pipelines-cli-ubi");
    }

    #[test]
    fn is_deterministic() {
        let (repository, application) = context();
        let defaulter = StandardDefaulter::new("ORG");
        let mut first = Component::new("webhook");
        let mut second = Component::new("webhook");

        defaulter.apply(&mut first, &repository, &application).unwrap();
        defaulter.apply(&mut second, &repository, &application).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_name_fails_without_mutation() {
        let (repository, application) = context();
        let original = Component::new("Bad_Name");
        let mut component = original.clone();

        let err = StandardDefaulter::new("ORG")
            .apply(&mut component, &repository, &application)
            .unwrap_err();

        assert!(matches!(err, Error::Defaulting { ref repository, .. } if repository == "operator"));
        assert_eq!(component, original);
    }

    #[test]
    fn duplicate_nudge_fails_without_mutation() {
        let (repository, application) = context();
        let original = Component {
            nudges: vec!["bundle".into(), "bundle".into()],
            ..Component::new("controller")
        };
        let mut component = original.clone();

        let err = StandardDefaulter::new("ORG")
            .apply(&mut component, &repository, &application)
            .unwrap_err();

        assert!(err.to_string().contains("nudges"), "got: {err}");
        assert_eq!(component, original);
    }
}
