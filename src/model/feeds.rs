use umber_config::FeedTemplate;

/// Feed outputs as the generator sees them.  `domain` always tracks the
/// site URL; it is recomputed on every build rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Feeds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_atom: Option<relative_path::RelativePathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_rss: Option<relative_path::RelativePathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_atom: Option<FeedTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_rss: Option<FeedTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_atom: Option<FeedTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_rss: Option<FeedTemplate>,
}

impl Feeds {
    pub fn from_config(feeds: umber_config::Feeds, base_url: Option<&str>) -> Self {
        Self {
            domain: base_url.map(str::to_owned),
            all_atom: feeds.all_atom,
            all_rss: feeds.all_rss,
            category_atom: feeds.category_atom,
            category_rss: feeds.category_rss,
            tag_atom: feeds.tag_atom,
            tag_rss: feeds.tag_rss,
        }
    }
}
