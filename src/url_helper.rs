use crate::compat::{OnceSlot, String, ToString};
use crate::error::{MalformedUrlError, Result};
use crate::expression::PartSet;
use crate::helpers::trim_url;
use crate::parser::parse_parts;
use crate::types::{Part, PartValue};
use crate::url_parts::{EMPTY_PARTS, UrlParts};

/// An immutable URL.
///
/// Keeps the string it was created from (trimmed) and splits it into
/// [`UrlParts`] the first time a part is needed. Every method that derives
/// a URL returns a new `UrlHelper` built from a freshly written string.
///
/// # Examples
///
/// ```
/// use url_helper::UrlHelper;
///
/// let url = UrlHelper::new("https://example.com:8080/docs/guide.html?lang=en#intro");
/// assert!(url.is_absolute());
/// assert_eq!(url.get_part("ext"), "html");
/// assert_eq!(url.get("base.dir").as_str(), "https://example.com:8080/docs/");
/// assert_eq!(url.to_string(), "https://example.com:8080/docs/guide.html?lang=en#intro");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlHelper {
    url: String,
    parts: OnceSlot<Result<UrlParts>>,
}

impl UrlHelper {
    /// Wrap a URL string.
    ///
    /// Never fails: if the string turns out to be malformed, all of its
    /// parts read as empty. Use [`UrlHelper::parse`] to get the error instead.
    pub fn new(url: &str) -> Self {
        Self::from_trimmed(trim_url(url).to_string())
    }

    /// Wrap a URL string, splitting it up front.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedUrlError`] if the authority has an invalid port
    /// or a missing host.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::{MalformedUrlError, UrlHelper};
    ///
    /// assert!(UrlHelper::parse("http://example.com:8080/").is_ok());
    /// assert_eq!(
    ///     UrlHelper::parse("http://example.com:http/").unwrap_err(),
    ///     MalformedUrlError::InvalidPort
    /// );
    /// ```
    pub fn parse(url: &str) -> Result<Self> {
        let helper = Self::new(url);
        helper.try_parts()?;
        Ok(helper)
    }

    fn from_trimmed(url: String) -> Self {
        Self {
            url,
            parts: OnceSlot::new(),
        }
    }

    /// The trimmed string this URL was created from
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Split the URL into parts, reporting malformed input.
    ///
    /// # Errors
    ///
    /// Returns the [`MalformedUrlError`] found while splitting.
    pub fn try_parts(&self) -> Result<&UrlParts> {
        self.parts
            .get_or_init(|| parse_parts(&self.url))
            .as_ref()
            .map_err(|err| *err)
    }

    /// The parts of this URL; all empty if the URL is malformed
    pub fn parts(&self) -> &UrlParts {
        self.try_parts().unwrap_or(&EMPTY_PARTS)
    }

    /// True if this URL has a host
    pub fn is_absolute(&self) -> bool {
        !self.parts().host.is_empty()
    }

    /// True if this URL has no host and its path starts with '/'
    pub fn is_root_relative(&self) -> bool {
        !self.is_absolute() && self.parts().path.starts_with('/')
    }

    /// True if this URL is relative to the document it appears in.
    ///
    /// `foo.html`, `./bar.html`, `foo/bar/` and the empty URL are all
    /// context-relative.
    pub fn is_context_relative(&self) -> bool {
        !self.is_absolute() && !self.is_root_relative()
    }

    /// Build a new URL from the parts named in a dot-separated expression.
    ///
    /// - Parts missing from this URL are left out, even when named.
    /// - Parts are always written in the order
    ///   `scheme.user.pass.host.port.dir.file.ext.query.fragment`,
    ///   whatever their order in the expression.
    /// - `base` is shorthand for `scheme.user.pass.host.port`.
    /// - Unknown names are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::UrlHelper;
    ///
    /// let url = UrlHelper::new("https://user:pw@example.com:8880/a/b.php?x=1#top");
    /// assert_eq!(url.get("fragment.host.scheme").as_str(), "https://example.com#top");
    /// assert_eq!(url.get("base.fragment").as_str(), "https://user:pw@example.com:8880#top");
    /// assert_eq!(UrlHelper::new("/a/b").get("base").as_str(), "");
    /// ```
    #[must_use]
    pub fn get(&self, expression: &str) -> Self {
        self.select(PartSet::from_expression(expression))
    }

    /// Same as `get` with every part selected
    #[must_use]
    pub fn get_full(&self) -> Self {
        self.select(PartSet::ALL)
    }

    /// Typed form of [`UrlHelper::get`]
    #[must_use]
    pub fn select(&self, selection: PartSet) -> Self {
        Self::new(&self.parts().compose(selection))
    }

    /// A single part by name, without delimiters.
    ///
    /// Returns an empty string for absent parts and unknown names; `base`
    /// is not a single part and also gives an empty string.
    pub fn get_part(&self, name: &str) -> String {
        Part::from_name(name)
            .map(|part| self.part(part).to_string())
            .unwrap_or_default()
    }

    /// A single part
    pub fn part(&self, part: Part) -> PartValue<'_> {
        self.parts().value(part)
    }

    /// `get("base.dir")`, always ending in exactly one '/'.
    ///
    /// Context-relative URLs found on the page this URL points to can be
    /// appended to the result.
    #[must_use]
    pub fn get_context_part(&self) -> Self {
        let base_dir = self.parts().compose(PartSet::BASE | Part::Dir);
        let mut context = trim_url(&base_dir).trim_end_matches('/').to_string();
        context.push('/');
        Self::from_trimmed(context)
    }
}

impl core::fmt::Display for UrlHelper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.url)
    }
}

impl core::str::FromStr for UrlHelper {
    type Err = MalformedUrlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&str> for UrlHelper {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for UrlHelper {
    fn from(url: String) -> Self {
        if trim_url(&url).len() == url.len() {
            Self::from_trimmed(url)
        } else {
            Self::new(&url)
        }
    }
}

impl AsRef<str> for UrlHelper {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl PartialEq for UrlHelper {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for UrlHelper {}

impl PartialEq<str> for UrlHelper {
    fn eq(&self, other: &str) -> bool {
        self.url == other
    }
}

impl PartialEq<&str> for UrlHelper {
    fn eq(&self, other: &&str) -> bool {
        self.url == *other
    }
}

impl core::hash::Hash for UrlHelper {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlHelper {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.url)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlHelper {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let url = String::deserialize(deserializer)?;
        Ok(Self::from(url))
    }
}
