//! Text parser for `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
//!
//! Numbers are runs of ASCII digits and must fit in a `u64`; leading zeros are
//! accepted. Prerelease and build tags are runs of ASCII alphanumerics separated
//! by `.`, and may not be empty. Any other character ends the tag list it
//! appears in.

use tracing::debug;

use crate::validation::{TagField, VersionError};
use crate::version::Version;

/// Parse `input` as a version, requiring the whole string to be consumed.
pub fn parse(input: &str) -> Result<Version, VersionError> {
    let mut scanner = Scanner::new(input, false);
    let version = scanner
        .version()
        .and_then(|version| {
            if scanner.at_end() {
                Ok(version)
            } else {
                Err(scanner.unexpected("end of input"))
            }
        })
        .inspect_err(|e| debug!(input, error = %e, "rejected version string"))?;
    Ok(version)
}

/// Parse a version from the front of `input`, returning the remainder.
pub fn parse_prefix(input: &str) -> Result<(Version, &str), VersionError> {
    let mut scanner = Scanner::new(input, true);
    let version = scanner
        .version()
        .inspect_err(|e| debug!(input, error = %e, "rejected version prefix"))?;
    Ok((version, scanner.rest()))
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// A `.` not followed by a tag ends the version instead of failing.
    prefix: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, prefix: bool) -> Self {
        Self {
            input,
            pos: 0,
            prefix,
        }
    }

    fn version(&mut self) -> Result<Version, VersionError> {
        let major = self.number("major")?;
        self.separator()?;
        let minor = self.number("minor")?;
        self.separator()?;
        let patch = self.number("patch")?;

        let prerelease = if self.eat('-') {
            self.tags(TagField::Prerelease)?
        } else {
            Vec::new()
        };

        let build = if self.eat('+') {
            self.tags(TagField::Build)?
        } else {
            Vec::new()
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    fn tag_follows_dot(&self) -> bool {
        let mut chars = self.rest().chars();
        chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
    }

    fn unexpected(&self, expected: &str) -> VersionError {
        match self.peek() {
            Some(c) => VersionError::Parse(format!(
                "unexpected character {c:?} at offset {}, expected {expected}",
                self.pos
            )),
            None => VersionError::Parse(format!("unexpected end of input, expected {expected}")),
        }
    }

    fn number(&mut self, part: &str) -> Result<u64, VersionError> {
        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.unexpected(&format!("digits for the {part} version")));
        }
        digits.parse::<u64>().map_err(|_| {
            VersionError::Parse(format!(
                "{part} version {digits} at offset {start} does not fit in an unsigned 64-bit integer"
            ))
        })
    }

    fn separator(&mut self) -> Result<(), VersionError> {
        if self.eat('.') {
            Ok(())
        } else {
            Err(self.unexpected("'.'"))
        }
    }

    fn tags(&mut self, field: TagField) -> Result<Vec<String>, VersionError> {
        let mut tags = Vec::new();
        loop {
            let start = self.pos;
            let tag = self.take_while(|c| c.is_ascii_alphanumeric());
            if tag.is_empty() {
                return Err(VersionError::Parse(format!(
                    "empty {field} identifier at offset {start}"
                )));
            }
            tags.push(tag.to_owned());
            if self.prefix && !self.tag_follows_dot() {
                return Ok(tags);
            }
            if !self.eat('.') {
                return Ok(tags);
            }
        }
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(input: &str) -> String {
        let err = parse(input).unwrap_err();
        assert!(err.is_parse(), "{input:?} should be a parse error, got {err:?}");
        err.message().to_owned()
    }

    #[test]
    fn plain_triple() {
        let v = parse("1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert!(v.prerelease.is_empty());
        assert!(v.build.is_empty());
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn prerelease_tags() {
        let v = parse("1.2.3-alpha.1").unwrap();
        assert_eq!(v.prerelease, ["alpha", "1"]);
        assert!(v.build.is_empty());
        assert_eq!(v.to_string(), "1.2.3-alpha.1");
    }

    #[test]
    fn build_tags() {
        let v = parse("1.2.3+exp.sha5114f85").unwrap();
        assert!(v.prerelease.is_empty());
        assert_eq!(v.build, ["exp", "sha5114f85"]);

        let v = parse("1.0.0-rc1+20130313144700").unwrap();
        assert_eq!(v.prerelease, ["rc1"]);
        assert_eq!(v.build, ["20130313144700"]);
        assert_eq!(v.to_string(), "1.0.0-rc1+20130313144700");
    }

    #[test]
    fn leading_zeros_accepted() {
        let v = parse("01.002.0").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 0));
    }

    #[test]
    fn missing_separator_after_major() {
        let msg = parse_err("1-2.3");
        assert_eq!(msg, "unexpected character '-' at offset 1, expected '.'");
    }

    #[test]
    fn missing_separator_after_minor() {
        let msg = parse_err("1.2");
        assert_eq!(msg, "unexpected end of input, expected '.'");
    }

    #[test]
    fn missing_digits() {
        assert!(parse_err("").contains("digits for the major version"));
        assert!(parse_err("v1.2.3").contains("digits for the major version"));
        assert!(parse_err("1..3").contains("digits for the minor version"));
        assert!(parse_err("1.2.").contains("digits for the patch version"));
    }

    #[test]
    fn overflow_is_explicit_error() {
        let msg = parse_err("18446744073709551616.0.0");
        assert!(msg.contains("does not fit"), "{msg}");
        assert_eq!(parse("18446744073709551615.0.0").unwrap().major, u64::MAX);
    }

    #[test]
    fn empty_tags_rejected() {
        assert_eq!(parse_err("1.0.0-"), "empty prerelease identifier at offset 6");
        assert_eq!(parse_err("1.0.0-a..b"), "empty prerelease identifier at offset 8");
        assert_eq!(parse_err("1.0.0-a."), "empty prerelease identifier at offset 8");
        assert_eq!(parse_err("1.0.0+"), "empty build identifier at offset 6");
    }

    #[test]
    fn trailing_input_rejected() {
        let msg = parse_err("1.0.0-beta_2");
        assert_eq!(msg, "unexpected character '_' at offset 10, expected end of input");
        assert!(parse_err("1.0.0 ").contains("expected end of input"));
    }

    #[test]
    fn prefix_returns_remainder() {
        let (v, rest) = parse_prefix("1.4.0-rc1 (stable)").unwrap();
        assert_eq!(v.to_string(), "1.4.0-rc1");
        assert_eq!(rest, " (stable)");

        let (v, rest) = parse_prefix("2.0.0").unwrap();
        assert_eq!(v, Version::new(2, 0, 0));
        assert_eq!(rest, "");
    }

    #[test]
    fn prefix_stops_at_non_alphanumeric_tag_character() {
        let (v, rest) = parse_prefix("1.0.0-alpha-2").unwrap();
        assert_eq!(v.prerelease, ["alpha"]);
        assert_eq!(rest, "-2");
    }

    #[test]
    fn prefix_leaves_trailing_dot_in_remainder() {
        let (v, rest) = parse_prefix("1.0.0-rc1.").unwrap();
        assert_eq!(v.prerelease, ["rc1"]);
        assert_eq!(rest, ".");

        let (v, rest) = parse_prefix("2.1.0+sha.abc. Next up").unwrap();
        assert_eq!(v.build, ["sha", "abc"]);
        assert_eq!(rest, ". Next up");

        let (v, rest) = parse_prefix("1.0.0-a.b").unwrap();
        assert_eq!(v.prerelease, ["a", "b"]);
        assert_eq!(rest, "");
    }

    #[test]
    fn full_parse_still_rejects_trailing_dot() {
        assert_eq!(parse_err("1.0.0-rc1."), "empty prerelease identifier at offset 10");
    }

    #[test]
    fn non_ascii_input_reports_character() {
        let msg = parse_err("1.0.0-béta");
        assert!(msg.starts_with("unexpected character 'é' at offset 7"), "{msg}");
    }
}
