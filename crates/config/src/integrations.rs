/// Account identifiers for third-party services the theme embeds.  The
/// generator only passes these through to templates; they are usually left
/// unset during local preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disqus: Option<liquid_core::model::KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<liquid_core::model::KString>,
}

impl Integrations {
    /// Field-wise merge; values set on `self` win over `other`.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            disqus,
            google_analytics,
        } = self;
        Self {
            disqus: disqus.or_else(|| other.disqus.clone()),
            google_analytics: google_analytics.or_else(|| other.google_analytics.clone()),
        }
    }
}
