//! The [`Version`] value type and its ordering.
//!
//! A version is a `major.minor.patch` triple plus optional prerelease and
//! build tag sequences. Prerelease tags take part in ordering and equality;
//! build tags are carried for round-trip fidelity only.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::parser;
use crate::validation::{validate_tags, TagField, VersionError};

/// A comparable semantic version, modeled after <https://semver.org/>.
///
/// Fields are public and may be mutated after construction; the constructors
/// only guarantee that the value they return has no empty tags.
///
/// # Ordering
///
/// Versions order by `major`, `minor`, `patch`, then `prerelease`. Two
/// non-empty prerelease sequences compare element by element as plain strings,
/// with a shorter prefix ordering first. A version without prerelease tags
/// orders after every prerelease of the same triple, so `1.0.0-alpha < 1.0.0`.
/// `build` never affects ordering, equality or hashing.
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// Major version, for incompatible API changes.
    pub major: u64,

    /// Minor version, for functionality added in a backwards-compatible manner.
    pub minor: u64,

    /// Patch version, for backwards-compatible bug fixes.
    pub patch: u64,

    /// Prerelease tags (`-alpha.1`). Compared lexicographically when the
    /// numeric triple is equal.
    pub prerelease: Vec<String>,

    /// Build tags (`+sha.5114f85`). Not part of comparisons.
    pub build: Vec<String>,
}

impl Version {
    /// A release version with no prerelease or build tags.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Construct a version by passing every element explicitly.
    ///
    /// Fails with [`VersionError::InvalidArgument`] if any prerelease or build
    /// element is empty. Tag characters are otherwise unrestricted here; only
    /// the text parser limits them to ASCII alphanumerics.
    pub fn with_tags<P, B>(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: P,
        build: B,
    ) -> Result<Self, VersionError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let prerelease: Vec<String> = prerelease.into_iter().map(Into::into).collect();
        let build: Vec<String> = build.into_iter().map(Into::into).collect();

        validate_tags(TagField::Prerelease, &prerelease)?;
        validate_tags(TagField::Build, &build)?;

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    /// Parse the full textual form, `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
    ///
    /// The whole input must be consumed. Use [`Version::parse_prefix`] to read
    /// a version from the front of a longer string.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        parser::parse(input)
    }

    /// Parse a version from the start of `input` and return it together with
    /// the unconsumed remainder.
    ///
    /// ```rust,ignore
    /// let (v, rest) = Version::parse_prefix("1.4.0-rc1 (stable)")?;
    /// assert_eq!(rest, " (stable)");
    /// ```
    pub fn parse_prefix(input: &str) -> Result<(Self, &str), VersionError> {
        parser::parse_prefix(input)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Equality that also requires identical build tags.
    pub fn eq_exact(&self, other: &Self) -> bool {
        self == other && self.build == other.build
    }
}

/// Formats the canonical text form, e.g. `1.2.3-alpha.1+build.5`.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parser::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl Eq for Version {}

// Must agree with `PartialEq`, so `build` is skipped here as well.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A release (no tags) sorts after any prerelease; otherwise plain sequence
/// comparison of the tag strings.
fn compare_prerelease(lhs: &[String], rhs: &[String]) -> Ordering {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.cmp(rhs),
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pre(major: u64, minor: u64, patch: u64, tags: &[&str]) -> Version {
        Version::with_tags(major, minor, patch, tags.iter().copied(), Vec::<String>::new())
            .unwrap()
    }

    fn built(major: u64, minor: u64, patch: u64, tags: &[&str]) -> Version {
        Version::with_tags(major, minor, patch, Vec::<String>::new(), tags.iter().copied())
            .unwrap()
    }

    #[test]
    fn default_is_zero_version() {
        let v = Version::default();
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));
        assert!(v.prerelease.is_empty());
        assert!(v.build.is_empty());
        assert_eq!(v.to_string(), "0.0.0");
    }

    #[test]
    fn empty_prerelease_element_rejected() {
        let err = Version::with_tags(1, 0, 0, [""], Vec::<String>::new()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("prerelease"));
    }

    #[test]
    fn empty_build_element_rejected() {
        let err = Version::with_tags(1, 0, 0, ["rc1"], ["sha", ""]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("build"));
    }

    #[test]
    fn explicit_constructor_allows_non_alphanumeric_tags() {
        let v = Version::with_tags(2, 0, 0, ["rc-1"], ["linux_x64"]).unwrap();
        assert_eq!(v.to_string(), "2.0.0-rc-1+linux_x64");
    }

    #[test]
    fn display_formats() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(pre(1, 2, 3, &["alpha", "1"]).to_string(), "1.2.3-alpha.1");
        assert_eq!(built(1, 2, 3, &["build", "5"]).to_string(), "1.2.3+build.5");
        let both = Version::with_tags(1, 0, 0, ["beta"], ["exp", "sha"]).unwrap();
        assert_eq!(both.to_string(), "1.0.0-beta+exp.sha");
    }

    #[test]
    fn numeric_fields_order_by_priority() {
        assert!(Version::new(1, 2, 3) < Version::new(1, 2, 4));
        assert!(Version::new(1, 9, 9) < Version::new(2, 0, 0));
        assert!(Version::new(1, 2, 9) < Version::new(1, 3, 0));
        assert!(Version::new(10, 0, 0) > Version::new(9, 99, 99));
    }

    #[test]
    fn prerelease_tags_compare_as_strings() {
        assert!(pre(1, 0, 0, &["alpha"]) < pre(1, 0, 0, &["beta"]));
        assert!(pre(1, 0, 0, &["alpha"]) < pre(1, 0, 0, &["alpha", "1"]));
        // Plain string comparison, not numeric-aware.
        assert!(pre(1, 0, 0, &["10"]) < pre(1, 0, 0, &["9"]));
    }

    #[test]
    fn release_orders_after_prerelease() {
        assert!(pre(1, 0, 0, &["alpha"]) < Version::new(1, 0, 0));
        assert!(Version::new(1, 0, 0) > pre(1, 0, 0, &["rc", "9"]));
        // Numeric fields still decide first.
        assert!(Version::new(0, 9, 0) < pre(1, 0, 0, &["alpha"]));
    }

    #[test]
    fn build_ignored_by_equality_and_ordering() {
        let a = built(1, 0, 0, &["build1"]);
        let b = built(1, 0, 0, &["build2"]);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(!a.eq_exact(&b));
        assert!(a.eq_exact(&a.clone()));
    }

    #[test]
    fn derived_operators_are_consistent() {
        let lo = pre(1, 0, 0, &["alpha"]);
        let hi = Version::new(1, 0, 0);
        assert!(lo != hi);
        assert!(lo <= hi && lo < hi);
        assert!(hi > lo && hi >= lo);
        assert!(lo <= lo.clone() && lo >= lo.clone());
        assert!(!(lo > lo.clone()));
    }

    #[test]
    fn hash_ignores_build() {
        let mut set = HashSet::new();
        set.insert(built(1, 0, 0, &["x"]));
        assert!(!set.insert(built(1, 0, 0, &["y"])));
        assert!(set.insert(pre(1, 0, 0, &["y"])));
    }

    #[test]
    fn sorting_a_list() {
        let mut versions = vec![
            Version::new(1, 0, 0),
            pre(1, 0, 0, &["beta"]),
            Version::new(0, 1, 0),
            pre(1, 0, 0, &["alpha", "1"]),
            pre(1, 0, 0, &["alpha"]),
        ];
        versions.sort();
        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["0.1.0", "1.0.0-alpha", "1.0.0-alpha.1", "1.0.0-beta", "1.0.0"]
        );
    }

    #[test]
    fn is_prerelease() {
        assert!(pre(1, 0, 0, &["rc1"]).is_prerelease());
        assert!(!built(1, 0, 0, &["rc1"]).is_prerelease());
    }
}
