/// Site metadata as the generator sees it, with the publish-time
/// derivations applied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

impl Site {
    pub fn from_config(site: umber_config::Site) -> Self {
        // Recomputed on every build so a `base_url` override can never
        // leave it stale.
        let featured_image = site.base_url.as_deref().map(|url| {
            let url = url.trim_end_matches('/');
            format!("{url}{}", site.touch_icon_path)
        });

        Self {
            title: site.title,
            description: site.description,
            author: site.author,
            base_url: site.base_url,
            featured_image,
        }
    }
}
