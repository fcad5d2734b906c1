#![forbid(unsafe_code)]

//! Fast comparison of ssdeep-style context-triggered piecewise hash digests.
//!
//! This crate does not *compute* fuzzy hashes of files -- it parses,
//! validates, normalizes and compares digests that some other hasher already
//! produced. The entry points most callers want are [`compare`] (compare two
//! digest strings directly) and [`read_digest`]/[`read_udigest`] (parse once,
//! compare many times via [`score::compare_digest`]).
//!
//! Comparison never allocates on the heap: every buffer involved is a
//! fixed-size stack array sized to [`SPAMSUM_LENGTH`].

use fehler::throws;

pub mod blocksize;
pub mod common_substring;
pub mod digest;
pub mod edit_distance;
pub mod error;
pub(crate) mod parse_util;
pub mod rolling_hash;
pub mod score;
pub mod udigest;

pub use digest::Digest;
pub use error::ParseError;
pub use score::{
    compare_digest, compare_digest_near, compare_digest_near_eq, compare_digest_near_lt,
    score_cap, score_cap_1, score_strings,
};
pub use udigest::UDigest;

/// Maximum length, in characters, of either block of a digest.
pub const SPAMSUM_LENGTH: usize = 64;

const _: () = assert_min_match_matches_rolling_window();
const fn assert_min_match_matches_rolling_window() {
    if common_substring::MIN_MATCH != rolling_hash::ROLLING_WINDOW {
        panic!("MIN_MATCH must equal ROLLING_WINDOW");
    }
}

/// Parse a normalized digest out of its textual form.
#[throws(ParseError)]
pub fn read_digest(s: &str) -> Digest {
    Digest::parse(s)?
}

/// Parse an unnormalized digest out of its textual form, performing no
/// run-collapsing.
#[throws(ParseError)]
pub fn read_udigest(s: &str) -> UDigest {
    UDigest::parse(s)?
}

/// Compare two digest strings directly, returning a similarity score on
/// `[0, 100]`, or an error if either string fails to parse.
///
/// This is a convenience wrapper around [`read_digest`] and
/// [`score::compare_digest`] for callers who only need a one-shot
/// comparison; parse once and call [`score::compare_digest`] directly when
/// comparing the same digest against many others.
#[throws(ParseError)]
pub fn compare(str1: &str, str2: &str) -> i32 {
    let d1 = Digest::parse(str1)?;
    let d2 = Digest::parse(str2)?;
    score::compare_digest(&d1, &d2)
}

/// Render `digest` as `BLOCKSIZE:S1:S2`, NUL-terminated, into `buf`.
///
/// Thin free-function wrapper around [`Digest::pretty`] for callers who
/// prefer the capability-named form from the format's reference API.
pub fn pretty_digest(buf: &mut [u8], digest: &Digest) -> bool {
    digest.pretty(buf)
}

/// Render `udigest` as `BLOCKSIZE:S1:S2`, NUL-terminated, into `buf`.
pub fn pretty_udigest(buf: &mut [u8], udigest: &UDigest) -> bool {
    udigest.pretty(buf)
}

/// Convert a normalized digest into its unnormalized form.
///
/// A pure copy: every normalized digest is already a valid (if perhaps
/// differently-shaped) unnormalized one.
pub fn convert_digest_to_udigest(digest: &Digest) -> UDigest {
    UDigest::from_digest(digest)
}

/// Convert an unnormalized digest into its normalized form by re-applying
/// run-collapsing independently to each block.
pub fn convert_udigest_to_digest(udigest: &UDigest) -> Digest {
    udigest.to_digest()
}
