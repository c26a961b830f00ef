use thiserror::Error;

/// Errors returned when a [`Version`](crate::Version) cannot be constructed.
///
/// Both variants carry a human-readable message that identifies the offending
/// field and the nature of the failure, so callers can surface it directly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    /// A field or structured-value key was missing, had the wrong type, or
    /// contained an empty or non-string element.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The textual form did not follow the `MAJOR.MINOR.PATCH[-PRE][+BUILD]`
    /// grammar.
    #[error("parse error: {0}")]
    Parse(String),
}

impl VersionError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, VersionError::InvalidArgument(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, VersionError::Parse(_))
    }

    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            VersionError::InvalidArgument(msg) | VersionError::Parse(msg) => msg,
        }
    }
}

/// Which tag sequence of a version is being checked. Used to name the field in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Prerelease,
    Build,
}

impl TagField {
    pub fn as_str(self) -> &'static str {
        match self {
            TagField::Prerelease => "prerelease",
            TagField::Build => "build",
        }
    }
}

impl std::fmt::Display for TagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that every element of a prerelease or build sequence is non-empty.
///
/// Returns the first failure found, naming the field and the element index.
pub fn validate_tags<S: AsRef<str>>(field: TagField, tags: &[S]) -> Result<(), VersionError> {
    for (i, tag) in tags.iter().enumerate() {
        if tag.as_ref().is_empty() {
            return Err(VersionError::InvalidArgument(format!(
                "semver {field} element at index {i} may not be empty"
            )));
        }
    }
    Ok(())
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_tags_accepted() {
        assert_eq!(validate_tags(TagField::Prerelease, &["alpha", "1"]), Ok(()));
        assert_eq!(validate_tags::<&str>(TagField::Build, &[]), Ok(()));
    }

    #[test]
    fn empty_tag_rejected_with_field_and_index() {
        let err = validate_tags(TagField::Build, &["sha", ""]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.message(), "semver build element at index 1 may not be empty");
    }

    #[test]
    fn display_includes_kind_prefix() {
        let err = VersionError::Parse("unexpected character 'x' at offset 1".into());
        assert_eq!(err.to_string(), "parse error: unexpected character 'x' at offset 1");
        assert!(err.is_parse());
        assert!(!err.is_invalid_argument());
    }
}
