use std::fmt;
use std::path;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub source: relative_path::RelativePathBuf,
    pub destination: relative_path::RelativePathBuf,
    pub clean_destination: bool,
    pub relative_urls: bool,
    pub site: Site,
    pub feeds: Feeds,
    pub integrations: Integrations,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            source: relative_path::RelativePath::new("./").to_owned(),
            destination: relative_path::RelativePath::new("./_site").to_owned(),
            clean_destination: false,
            relative_urls: true,
            site: Site::default(),
            feeds: Feeds::default(),
            integrations: Integrations::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == std::path::Path::new("") {
            root = std::path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, "_umber.yml");
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No _umber.yml file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// Layer publish-target overrides over this config.  Keys set in the
    /// overlay replace the base value; everything else is kept.
    pub fn merge_overlay(self, overlay: &Overlay) -> Config {
        let Config {
            root,
            source,
            destination,
            clean_destination,
            relative_urls,
            site,
            feeds,
            integrations,
        } = self;
        Config {
            root,
            source: overlay.source.clone().unwrap_or(source),
            destination: overlay.destination.clone().unwrap_or(destination),
            clean_destination: overlay.clean_destination.unwrap_or(clean_destination),
            relative_urls: overlay.relative_urls.unwrap_or(relative_urls),
            site: overlay.site.clone().merge(&site),
            feeds: overlay.feeds.clone().merge(&feeds),
            integrations: overlay.integrations.clone().merge(&integrations),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
