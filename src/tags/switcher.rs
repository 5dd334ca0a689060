//! Tag switching with an existence probe

use super::path::{TagPaths, tag_paths};
use super::probe::ResourceProbe;
use crate::SrcnavError;
use crate::ui::Navigator;
use tracing::info;
use url::Url;

/// Outcome of probing the candidate location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagProbeResult {
    /// The same file exists under the new tag
    Exists(Url),
    /// It does not; go to the new tag's root instead
    NotFound { fallback: Url },
}

impl TagProbeResult {
    /// Where navigation goes
    #[must_use]
    pub const fn target(&self) -> &Url {
        match self {
            Self::Exists(url) => url,
            Self::NotFound { fallback } => fallback,
        }
    }
}

/// Moves the current page to another tag
#[derive(Debug, Clone)]
pub struct TagSwitcher<P> {
    probe: P,
}

impl<P: ResourceProbe> TagSwitcher<P> {
    pub const fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Probe the candidate for `tag` and decide where to go.
    ///
    /// The fallback is never probed.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `current` cannot be rewritten.
    pub async fn resolve(&self, current: &Url, tag: &str) -> Result<TagProbeResult, url::ParseError> {
        let TagPaths { candidate, fallback } = tag_paths(current, tag)?;
        if self.probe.exists(&candidate).await {
            info!(%candidate, "tag switch keeps current file");
            Ok(TagProbeResult::Exists(candidate))
        } else {
            info!(%candidate, %fallback, "tag switch falls back to root");
            Ok(TagProbeResult::NotFound { fallback })
        }
    }

    /// Resolve and navigate
    ///
    /// # Errors
    ///
    /// Returns `SrcnavError` if the URL cannot be rewritten or the
    /// navigator fails.
    pub async fn switch(
        &self,
        current: &Url,
        tag: &str,
        navigator: &mut dyn Navigator,
    ) -> Result<TagProbeResult, SrcnavError> {
        let result = self.resolve(current, tag).await?;
        navigator.navigate(result.target().as_str())?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockNavigator;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Probe answering from a fixed set of existing paths
    #[derive(Default)]
    struct SetProbe {
        existing: HashSet<String>,
        probed: Mutex<Vec<String>>,
    }

    impl SetProbe {
        fn with(paths: &[&str]) -> Self {
            Self {
                existing: paths.iter().map(|p| (*p).to_string()).collect(),
                probed: Mutex::default(),
            }
        }

        fn probed(&self) -> Vec<String> {
            self.probed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResourceProbe for SetProbe {
        async fn exists(&self, url: &Url) -> bool {
            self.probed.lock().unwrap().push(url.path().to_string());
            self.existing.contains(url.path())
        }
    }

    fn page() -> Url {
        Url::parse("http://code.example/v1/sources/proj/file.cpp").unwrap()
    }

    #[tokio::test]
    async fn test_candidate_exists() {
        let switcher = TagSwitcher::new(SetProbe::with(&["/v2/sources/proj/file.cpp"]));
        let mut nav = MockNavigator::default();

        let result = switcher.switch(&page(), "v2", &mut nav).await.unwrap();
        assert!(matches!(result, TagProbeResult::Exists(_)));
        assert_eq!(nav.last(), Some("http://code.example/v2/sources/proj/file.cpp"));
    }

    #[tokio::test]
    async fn test_missing_candidate_falls_back_without_probing_root() {
        let switcher = TagSwitcher::new(SetProbe::default());
        let mut nav = MockNavigator::default();

        let result = switcher.switch(&page(), "v2", &mut nav).await.unwrap();
        assert_eq!(result.target().path(), "/v2/sources/meta/index.html");
        assert_eq!(nav.last(), Some("http://code.example/v2/sources/meta/index.html"));
        assert_eq!(switcher.probe.probed(), vec!["/v2/sources/proj/file.cpp"]);
    }

    #[tokio::test]
    async fn test_navigation_failure_surfaces() {
        let switcher = TagSwitcher::new(SetProbe::default());
        let mut nav = MockNavigator::failing();

        let err = switcher.switch(&page(), "v2", &mut nav).await.unwrap_err();
        assert!(matches!(err, SrcnavError::UiError(_)));
    }
}
