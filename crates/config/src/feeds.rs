use std::fmt;

const SLUG_PLACEHOLDER: &str = "{slug}";

/// Output paths for the syndication documents the generator writes.
///
/// Everything defaults to off; the publish overlay is the usual place to
/// turn feeds on.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Feeds {
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
    /// Field-wise merge; values set on `self` win over `other`.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            all_atom,
            all_rss,
            category_atom,
            category_rss,
            tag_atom,
            tag_rss,
        } = self;
        Self {
            all_atom: all_atom.or_else(|| other.all_atom.clone()),
            all_rss: all_rss.or_else(|| other.all_rss.clone()),
            category_atom: category_atom.or_else(|| other.category_atom.clone()),
            category_rss: category_rss.or_else(|| other.category_rss.clone()),
            tag_atom: tag_atom.or_else(|| other.tag_atom.clone()),
            tag_rss: tag_rss.or_else(|| other.tag_rss.clone()),
        }
    }
}

/// Relative feed path with a `{slug}` placeholder for the category or tag,
/// e.g. `feeds/category.{slug}.atom.xml`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct FeedTemplate(liquid_core::model::KString);

impl FeedTemplate {
    pub fn from_unchecked(value: &str) -> Self {
        Self(liquid_core::model::KString::from_ref(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Expand the template for a category or tag name.  The name is
    /// slugified before substitution.
    pub fn expand(&self, name: &str) -> relative_path::RelativePathBuf {
        let slug = crate::path::slugify(name);
        relative_path::RelativePathBuf::from(self.0.replace(SLUG_PLACEHOLDER, &slug))
    }
}

impl fmt::Display for FeedTemplate {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for FeedTemplate {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.starts_with('/') {
            Err("Feed templates must be relative to the site root")
        } else if value.matches(SLUG_PLACEHOLDER).count() != 1 {
            Err("Feed templates must contain `{slug}` exactly once")
        } else {
            let template = Self(liquid_core::model::KString::from_ref(value));
            Ok(template)
        }
    }
}

impl TryFrom<String> for FeedTemplate {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl std::ops::Deref for FeedTemplate {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for FeedTemplate {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from_ok() {
        let template = FeedTemplate::try_from("feeds/category.{slug}.atom.xml").unwrap();
        assert_eq!(template.as_str(), "feeds/category.{slug}.atom.xml");
    }

    #[test]
    fn try_from_absolute() {
        assert!(FeedTemplate::try_from("/feeds/category.{slug}.atom.xml").is_err());
    }

    #[test]
    fn try_from_missing_placeholder() {
        assert!(FeedTemplate::try_from("feeds/category.atom.xml").is_err());
    }

    #[test]
    fn try_from_repeated_placeholder() {
        assert!(FeedTemplate::try_from("{slug}/{slug}.atom.xml").is_err());
    }

    #[test]
    fn expand() {
        let template = FeedTemplate::try_from("feeds/tag.{slug}.rss.xml").unwrap();
        assert_eq!(
            template.expand("Data Wrangling").as_str(),
            "feeds/tag.data-wrangling.rss.xml"
        );
    }

    #[test]
    fn expand_unicode() {
        let template = FeedTemplate::try_from("feeds/tag.{slug}.atom.xml").unwrap();
        assert_eq!(
            template.expand("Æsthetics").as_str(),
            "feeds/tag.aesthetics.atom.xml"
        );
    }
}
