use crate::types::Part;
use crate::url_parts::UrlParts;

/// Expression selecting every part of a URL
pub const DEFAULT_EXPRESSION: &str = "scheme.user.pass.host.port.dir.file.ext.query.fragment";

/// What the `base` shorthand stands for in an expression
const BASE_EXPANSION: &str = "scheme.user.pass.host.port";

/// A set of URL parts, one bit per [`Part`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartSet(u16);

impl PartSet {
    pub const EMPTY: Self = Self(0);

    /// Every part
    pub const ALL: Self = Self((1 << Part::ALL.len()) - 1);

    /// `scheme.user.pass.host.port`
    pub const BASE: Self = Self::EMPTY
        .with(Part::Scheme)
        .with(Part::User)
        .with(Part::Pass)
        .with(Part::Host)
        .with(Part::Port);

    const fn bit(part: Part) -> u16 {
        1 << part as u16
    }

    /// Parse a dot-separated part expression.
    ///
    /// Every occurrence of `base` is first replaced with
    /// `scheme.user.pass.host.port`, even inside a longer token.
    /// Unknown tokens are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::{Part, PartSet};
    ///
    /// let set = PartSet::from_expression("base.dir");
    /// assert!(set.contains(Part::Host));
    /// assert!(set.contains(Part::Dir));
    /// assert!(!set.contains(Part::File));
    /// ```
    pub fn from_expression(expression: &str) -> Self {
        expression
            .replace("base", BASE_EXPANSION)
            .split('.')
            .filter_map(Part::from_name)
            .collect()
    }

    #[must_use]
    pub const fn with(self, part: Part) -> Self {
        Self(self.0 | Self::bit(part))
    }

    pub fn insert(&mut self, part: Part) {
        self.0 |= Self::bit(part);
    }

    pub const fn contains(self, part: Part) -> bool {
        self.0 & Self::bit(part) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Keep only the parts that are present in `parts`
    #[must_use]
    pub fn filled_in(self, parts: &UrlParts) -> Self {
        self.iter()
            .filter(|&part| !parts.value(part).is_empty())
            .collect()
    }

    /// Iterate over the parts in canonical order
    pub fn iter(self) -> impl Iterator<Item = Part> {
        Part::ALL.into_iter().filter(move |&part| self.contains(part))
    }
}

impl FromIterator<Part> for PartSet {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for part in iter {
            set.insert(part);
        }
        set
    }
}

impl core::ops::BitOr for PartSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOr<Part> for PartSet {
    type Output = Self;

    fn bitor(self, rhs: Part) -> Self {
        self.with(rhs)
    }
}

impl From<Part> for PartSet {
    fn from(part: Part) -> Self {
        Self::EMPTY.with(part)
    }
}
