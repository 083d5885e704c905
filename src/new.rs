use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

const UMBER_YML: &str = "site:
  title: {title}
  base_url: http://localhost:8000
";

const UMBER_PUBLISH_YML: &str = "relative_urls: false
clean_destination: true
site:
  base_url: http://example.com
feeds:
  all_atom: feeds/all.atom.xml
  all_rss: feeds/all.rss.xml
  category_atom: feeds/category.{slug}.atom.xml
  category_rss: feeds/category.{slug}.rss.xml
  tag_atom: feeds/tag.{slug}.atom.xml
  tag_rss: feeds/tag.{slug}.rss.xml
";

/// Write starter config files into `dest`, leaving existing files alone.
pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> anyhow::Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> anyhow::Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Could not create `{}`", dest.display()))?;

    let title = site_title(dest)?;
    create_file(&dest.join("_umber.yml"), &UMBER_YML.replace("{title}", &title))?;
    create_file(
        &dest.join(umber_config::PUBLISH_CONFIG_FILE),
        UMBER_PUBLISH_YML,
    )?;

    Ok(())
}

fn site_title(dest: &path::Path) -> anyhow::Result<String> {
    let dest = dest
        .canonicalize()
        .with_context(|| format!("Could not resolve `{}`", dest.display()))?;
    let name = dest
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "site".to_owned());
    let title = umber_config::path::titleize_slug(umber_config::path::slugify(name));
    Ok(title)
}

fn create_file(path: &path::Path, content: &str) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Could not create `{}`", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Could not write `{}`", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_project_scaffolds_both_targets() {
        let dir = tempfile::Builder::new()
            .prefix("autumn-leaves")
            .tempdir()
            .unwrap();
        create_new_project(dir.path()).unwrap();

        let config = umber_config::Config::from_cwd(dir.path()).unwrap();
        assert!(config.site.title.as_deref().unwrap().starts_with("Autumn Leaves"));
        assert_eq!(config.relative_urls, true);
        assert_eq!(config.clean_destination, false);

        let overlay = umber_config::Overlay::from_file(
            dir.path().join(umber_config::PUBLISH_CONFIG_FILE),
        )
        .unwrap();
        let published = config.merge_overlay(&overlay);
        assert_eq!(published.relative_urls, false);
        assert_eq!(published.clean_destination, true);
        assert!(published.feeds.all_atom.is_some());
    }

    #[test]
    fn create_project_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        create_new_project(dir.path()).unwrap();
        assert!(create_new_project(dir.path()).is_err());
    }
}
