use std::fmt;
use std::path;

use super::Feeds;
use super::Site;

/// The effective settings mapping: base config with any overlay applied
/// and the derived values computed.  Built once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub source: relative_path::RelativePathBuf,
    pub destination: relative_path::RelativePathBuf,
    pub clean_destination: bool,
    pub relative_urls: bool,
    pub site: Site,
    pub feeds: Feeds,
    pub integrations: umber_config::Integrations,
}

impl Settings {
    pub fn from_config(config: umber_config::Config) -> anyhow::Result<Settings> {
        anyhow::ensure!(
            config.relative_urls || config.site.base_url.is_some(),
            "`site.base_url` must be set when `relative_urls` is false"
        );

        let site = Site::from_config(config.site);
        let feeds = Feeds::from_config(config.feeds, site.base_url.as_deref());

        Ok(Settings {
            root: config.root,
            source: config.source,
            destination: config.destination,
            clean_destination: config.clean_destination,
            relative_urls: config.relative_urls,
            site,
            feeds,
            integrations: config.integrations,
        })
    }

    /// Source directory resolved against the directory the config was
    /// found in.
    pub fn source_path(&self) -> path::PathBuf {
        self.source.to_logical_path(&self.root)
    }

    /// Destination directory resolved against the directory the config
    /// was found in.
    pub fn destination_path(&self) -> path::PathBuf {
        self.destination.to_logical_path(&self.root)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}
