use std::path;

use super::*;

/// Default file name for the publish overrides, looked up next to the base
/// config.
pub const PUBLISH_CONFIG_FILE: &str = "_umber.publish.yml";

/// Overrides layered over a fully-loaded base [`Config`] when building for
/// the publish target.  Every key is optional; keys left unset keep the
/// base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Overlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<relative_path::RelativePathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<relative_path::RelativePathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_destination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_urls: Option<bool>,
    pub site: Site,
    pub feeds: Feeds,
    pub integrations: Integrations,
}

impl Overlay {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Overlay> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Overlay> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read publish config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        if content.trim().is_empty() {
            Ok(Overlay::default())
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse publish config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn base() -> Config {
        let mut config = Config::default();
        config.site.title = Some("A Preview Site".to_owned());
        config.site.base_url = Some("http://localhost:8000".to_owned());
        config.integrations.disqus = Some("preview".into());
        config
    }

    #[test]
    fn from_file_ok() {
        let overlay = Overlay::from_file("tests/fixtures/config/_umber.publish.yml").unwrap();
        assert_eq!(overlay.relative_urls, Some(false));
        assert_eq!(overlay.clean_destination, Some(true));
        assert_eq!(
            overlay.feeds.all_atom.as_ref().map(|p| p.as_str()),
            Some("feeds/all.atom.xml")
        );
    }

    #[test]
    fn from_file_empty() {
        let overlay = Overlay::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(overlay, Overlay::default());
    }

    #[test]
    fn from_file_not_found() {
        let overlay = Overlay::from_file("tests/fixtures/config/no_such_overlay.yml");
        assert!(overlay.is_err());
    }

    #[test]
    fn merge_overrides_win() {
        let overlay = Overlay {
            relative_urls: Some(false),
            clean_destination: Some(true),
            site: Site {
                base_url: Some("http://example.com/blog".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = base().merge_overlay(&overlay);
        assert_eq!(merged.relative_urls, false);
        assert_eq!(merged.clean_destination, true);
        assert_eq!(merged.site.base_url.as_deref(), Some("http://example.com/blog"));
    }

    #[test]
    fn merge_keeps_base_for_unset_keys() {
        let overlay = Overlay {
            relative_urls: Some(false),
            ..Default::default()
        };
        let merged = base().merge_overlay(&overlay);
        assert_eq!(merged.site.title.as_deref(), Some("A Preview Site"));
        assert_eq!(merged.integrations.disqus.as_deref(), Some("preview"));
        assert_eq!(merged.clean_destination, false);
    }

    #[test]
    fn merge_empty_overlay_is_noop() {
        let merged = base().merge_overlay(&Overlay::default());
        assert_eq!(merged, base());
    }

    #[test]
    fn merge_sections_are_field_wise() {
        let overlay = Overlay {
            integrations: Integrations {
                google_analytics: Some("UA-12345678-1".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = base().merge_overlay(&overlay);
        assert_eq!(merged.integrations.disqus.as_deref(), Some("preview"));
        assert_eq!(
            merged.integrations.google_analytics.as_deref(),
            Some("UA-12345678-1")
        );
    }
}
