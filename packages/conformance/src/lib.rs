//! Shared vectors and generators for the semver-core conformance suite.
//!
//! The tables here describe inputs and their expected outcome; the tests in
//! `tests/conformance.rs` drive them through the public API. [`random_version`]
//! produces versions for the round-trip and ordering checks from a seeded RNG,
//! so failures are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use semver_core::Version;

/// A version string that must parse, with the fields it must produce.
#[derive(Debug, Clone, Copy)]
pub struct TextVector {
    pub input: &'static str,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: &'static [&'static str],
    pub build: &'static [&'static str],
    /// Canonical form printed back by `Display`.
    pub canonical: &'static str,
}

/// A version string that must be rejected with a parse error whose message
/// contains `reason`.
#[derive(Debug, Clone, Copy)]
pub struct RejectVector {
    pub input: &'static str,
    pub reason: &'static str,
}

pub const VALID_TEXT: &[TextVector] = &[
    TextVector {
        input: "0.0.0",
        major: 0,
        minor: 0,
        patch: 0,
        prerelease: &[],
        build: &[],
        canonical: "0.0.0",
    },
    TextVector {
        input: "1.2.3",
        major: 1,
        minor: 2,
        patch: 3,
        prerelease: &[],
        build: &[],
        canonical: "1.2.3",
    },
    TextVector {
        input: "1.2.3-alpha.1",
        major: 1,
        minor: 2,
        patch: 3,
        prerelease: &["alpha", "1"],
        build: &[],
        canonical: "1.2.3-alpha.1",
    },
    TextVector {
        input: "10.20.30-rc1+build.42",
        major: 10,
        minor: 20,
        patch: 30,
        prerelease: &["rc1"],
        build: &["build", "42"],
        canonical: "10.20.30-rc1+build.42",
    },
    TextVector {
        input: "2.0.0+20240101",
        major: 2,
        minor: 0,
        patch: 0,
        prerelease: &[],
        build: &["20240101"],
        canonical: "2.0.0+20240101",
    },
    TextVector {
        input: "007.08.09-0A.b",
        major: 7,
        minor: 8,
        patch: 9,
        prerelease: &["0A", "b"],
        build: &[],
        canonical: "7.8.9-0A.b",
    },
];

pub const INVALID_TEXT: &[RejectVector] = &[
    RejectVector { input: "1-2.3", reason: "unexpected character '-'" },
    RejectVector { input: "1.2", reason: "expected '.'" },
    RejectVector { input: "1.2.x", reason: "digits for the patch version" },
    RejectVector { input: "", reason: "digits for the major version" },
    RejectVector { input: "v1.0.0", reason: "digits for the major version" },
    RejectVector { input: "1.0.0-", reason: "empty prerelease identifier" },
    RejectVector { input: "1.0.0-a..1", reason: "empty prerelease identifier" },
    RejectVector { input: "1.0.0+", reason: "empty build identifier" },
    RejectVector { input: "1.0.0-beta_1", reason: "expected end of input" },
    RejectVector { input: "1.0.0 extra", reason: "expected end of input" },
    RejectVector { input: "99999999999999999999.0.0", reason: "does not fit" },
];

/// Strictly ascending chain; every earlier entry orders before every later one.
pub const ASCENDING: &[&str] = &[
    "0.0.1",
    "0.1.0",
    "1.0.0-1",
    "1.0.0-10",
    "1.0.0-9",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-rc1",
    "1.0.0",
    "1.0.1",
    "1.1.0",
    "2.0.0",
    "10.0.0",
];

/// Pairs that must compare equal because they differ only in build tags.
pub const EQUAL_IGNORING_BUILD: &[(&str, &str)] = &[
    ("1.0.0+build1", "1.0.0+build2"),
    ("1.0.0", "1.0.0+x"),
    ("3.1.4-rc1+a.b", "3.1.4-rc1+c"),
];

/// A deterministic RNG for the randomized checks.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a version with small numeric fields and zero to three
/// alphanumeric tags in each sequence.
///
/// Small ranges make collisions likely, which exercises the equal and
/// prerelease branches of the ordering.
pub fn random_version<R: Rng>(rng: &mut R) -> Version {
    let major = rng.gen_range(0..4);
    let minor = rng.gen_range(0..4);
    let patch = rng.gen_range(0..4);
    let prerelease = random_tags(rng);
    let build = random_tags(rng);
    Version {
        major,
        minor,
        patch,
        prerelease,
        build,
    }
}

fn random_tags<R: Rng>(rng: &mut R) -> Vec<String> {
    const ALPHABET: &[u8] = b"0123456789abcxyzABZ";
    let count = rng.gen_range(0..=3);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=4);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect::<String>()
        })
        .collect()
}
