//! A comparable semantic version value type.
//!
//! This crate provides [`Version`], a `major.minor.patch` triple with optional
//! prerelease and build tags, modeled after <https://semver.org/>. It is the
//! foundation for the `semv` CLI and the conformance suite in this workspace.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`version`] | The [`Version`] type, its constructors, text form and ordering |
//! | [`parser`] | The `MAJOR.MINOR.PATCH[-PRE][+BUILD]` text grammar |
//! | [`json`] | Conversion to and from the structured object form, plus `serde` support |
//! | [`validation`] | [`VersionError`] and tag checks shared by the constructors |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use semver_core::Version;
//!
//! let v: Version = "1.2.3-alpha.1".parse()?;
//! assert_eq!(v.prerelease, ["alpha", "1"]);
//! assert!(v < Version::new(1, 2, 3));
//!
//! let json = v.to_json();
//! assert_eq!(Version::from_json(&json)?, v);
//! ```
//!
//! # Ordering
//!
//! Build tags never participate in equality or ordering. Prerelease tags
//! compare as plain strings, element by element; they are not numeric-aware,
//! so `1.0.0-10 < 1.0.0-9`.

pub mod json;
pub mod parser;
pub mod validation;
pub mod version;

pub use validation::{validate_tags, TagField, VersionError};
pub use version::Version;
