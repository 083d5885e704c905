#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub base_url: Option<String>,
    #[serde(skip)]
    pub touch_icon_path: &'static str,
}

impl Site {
    /// Field-wise merge; values set on `self` win over `other`.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            title,
            description,
            author,
            base_url,
            touch_icon_path,
        } = self;
        Self {
            title: title.or_else(|| other.title.clone()),
            description: description.or_else(|| other.description.clone()),
            author: author.or_else(|| other.author.clone()),
            base_url: base_url.or_else(|| other.base_url.clone()),
            touch_icon_path,
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: Default::default(),
            description: Default::default(),
            author: Default::default(),
            base_url: Default::default(),
            touch_icon_path: "/theme/images/apple-touch-icon-152x152.png",
        }
    }
}
