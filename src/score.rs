//! Scoring: turn a pair of same-block-size strings, or a pair of digests,
//! into a similarity score on `[0, 100]`.

use crate::blocksize::{self, MIN_BLOCKSIZE};
use crate::common_substring::{has_common_substring, MIN_MATCH};
use crate::digest::Digest;
use crate::edit_distance::edit_distn;
use crate::SPAMSUM_LENGTH;

/// Score two strings known to share a block size, on `[0, 100]`.
///
/// Returns 0 immediately if either string exceeds `SPAMSUM_LENGTH`, or if the
/// two strings share no [`MIN_MATCH`]-byte run (too weak a match to bother
/// scoring). Otherwise the edit distance is scaled into `[0, 100]` and capped
/// so that small block sizes cannot report an implausibly strong match.
pub fn score_strings(s1: &[u8], s2: &[u8], block_size: u64) -> i32 {
    if s1.len() > SPAMSUM_LENGTH || s2.len() > SPAMSUM_LENGTH {
        return 0;
    }
    if !has_common_substring(s1, s2) {
        return 0;
    }

    let dist = edit_distn(s1, s2) as i64;
    let total_len = (s1.len() + s2.len()) as i64;
    let mut score = dist * SPAMSUM_LENGTH as i64 / total_len;
    score = 100 - (100 * score) / SPAMSUM_LENGTH as i64;

    // Small block sizes should not be allowed to exaggerate the match.
    let block_scale = block_size / MIN_BLOCKSIZE;
    if block_scale >= 100 {
        // Skip the cap rather than risk it overflowing.
        return score as i32;
    }
    let score_cap = block_scale as i64 * s1.len().min(s2.len()) as i64;
    score.min(score_cap) as i32
}

/// Score cap for a block of length `minlen` at block size `b`.
///
/// `100` once `b` is at least `MIN_BLOCKSIZE * 100` (the block size is
/// "distinctive" enough on its own); otherwise the cap grows linearly with
/// both the block size and the shorter of the two block lengths. A `minlen`
/// of zero always caps at zero -- an empty block carries no evidence.
pub fn score_cap_1(minlen: usize, b: u64) -> i32 {
    if minlen == 0 {
        return 0;
    }
    if b / MIN_BLOCKSIZE >= 100 {
        return 100;
    }
    ((b / MIN_BLOCKSIZE) as i64 * minlen as i64) as i32
}

/// Score cap for a string pair at block size `b`, given both lengths.
///
/// Equivalent to `score_cap_1(len1.min(len2), b)`; kept as a separate entry
/// point because callers sometimes have the two lengths but not yet the
/// strings themselves.
pub fn score_cap(len1: usize, len2: usize, b: u64) -> i32 {
    score_cap_1(len1.min(len2), b)
}

/// Compare two digests known to share a block size `block_size`.
///
/// Handles the "two signatures are identical" fast path (whose score cap
/// depends on how distinctive each block is, not on edit distance), then
/// falls back to scoring both blocks and keeping the stronger result.
pub fn compare_digest_near_eq(d1: &Digest, d2: &Digest) -> i32 {
    let block_size = d1.block_size;
    if d1.s1() == d2.s1() && d1.s2() == d2.s2() {
        let cap1 = if d1.len1 >= MIN_MATCH {
            score_cap_1(d1.len1, block_size)
        } else {
            0
        };
        let cap2 = match block_size.checked_mul(2) {
            Some(b2) if d1.len2 >= MIN_MATCH => score_cap_1(d1.len2, b2),
            _ => 0,
        };
        return 100.min(cap1.max(cap2));
    }

    let score1 = score_strings(d1.s1(), d2.s1(), block_size);
    let score2 = match block_size.checked_mul(2) {
        Some(b2) => score_strings(d1.s2(), d2.s2(), b2),
        None => 0,
    };
    score1.max(score2)
}

/// Compare `lo`'s second block against `hi`'s first block, where
/// `hi.block_size == lo.block_size * 2`. Those are the two blocks that share
/// an effective block size of `hi.block_size`.
pub fn compare_digest_near_lt(lo: &Digest, hi: &Digest) -> i32 {
    debug_assert_eq!(hi.block_size, lo.block_size * 2);
    score_strings(lo.s2(), hi.s1(), hi.block_size)
}

/// Compare two digests already known to have near block sizes.
pub fn compare_digest_near(d1: &Digest, d2: &Digest) -> i32 {
    debug_assert!(blocksize::is_near(d1.block_size, d2.block_size));
    if d1.block_size == d2.block_size {
        compare_digest_near_eq(d1, d2)
    } else if d1.block_size < d2.block_size {
        compare_digest_near_lt(d1, d2)
    } else {
        compare_digest_near_lt(d2, d1)
    }
}

/// Compare two digests, returning a similarity score on `[0, 100]`.
///
/// Returns 0 if the block sizes are not near each other (too far apart to
/// ever produce a meaningful match).
pub fn compare_digest(d1: &Digest, d2: &Digest) -> i32 {
    if !blocksize::is_near(d1.block_size, d2.block_size) {
        return 0;
    }
    compare_digest_near(d1, d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrelated_strings_score_zero() {
        assert_eq!(score_strings(b"abcdefghij", b"zzzzzzzzzz", 3), 0);
    }

    #[test]
    fn score_cap_1_saturates_past_block_scale_100() {
        assert_eq!(score_cap_1(10, MIN_BLOCKSIZE * 100), 100);
        assert_eq!(score_cap_1(10, MIN_BLOCKSIZE * 200), 100);
    }

    #[test]
    fn score_cap_1_grows_with_block_size_and_length() {
        assert_eq!(score_cap_1(5, MIN_BLOCKSIZE), 5);
        assert_eq!(score_cap_1(5, MIN_BLOCKSIZE * 2), 10);
    }

    #[test]
    fn score_cap_1_is_zero_for_empty_block() {
        assert_eq!(score_cap_1(0, MIN_BLOCKSIZE * 1000), 0);
    }

    #[test]
    fn score_cap_picks_the_shorter_length() {
        assert_eq!(score_cap(5, 9, MIN_BLOCKSIZE), score_cap_1(5, MIN_BLOCKSIZE));
    }

    #[test]
    fn identical_strings_score_high_with_large_block_scale() {
        let d1 = Digest::parse("3072:AAAAAAAAAAAAAAAAAAAAAAAA:BBBBBBBBBBBBBBBBBBBBBBBB").unwrap();
        let d2 = Digest::parse("3072:AAAAAAAAAAAAAAAAAAAAAAAA:BBBBBBBBBBBBBBBBBBBBBBBB").unwrap();
        assert_eq!(compare_digest(&d1, &d2), 100);
    }

    #[test]
    fn identical_but_too_short_blocks_score_zero() {
        let d1 = Digest::parse("3:AAA:BBB").unwrap();
        let d2 = Digest::parse("3:AAA:BBB").unwrap();
        // len1 = len2 = 3 < MIN_MATCH(7), and block_scale is small, so both
        // caps are zero.
        assert_eq!(compare_digest(&d1, &d2), 0);
    }

    #[test]
    fn far_block_sizes_never_compare() {
        let d1 = Digest::parse("3:abcdefghij:klmnopqrst").unwrap();
        let d2 = Digest::parse("48:abcdefghij:klmnopqrst").unwrap();
        assert_eq!(compare_digest(&d1, &d2), 0);
    }

    #[test]
    fn unrelated_digests_score_zero() {
        let d1 = Digest::parse("3:abcdefghijklmno:pqrstuvwxyzABCDE").unwrap();
        let d2 = Digest::parse("3:1234567890zzzzz:QQQQQQQQQQQQQQQQ").unwrap();
        assert_eq!(compare_digest(&d1, &d2), 0);
    }

    #[test]
    fn near_half_block_size_compares_overlapping_blocks() {
        let d1 = Digest::parse("3:abcdefghijklmno:pqrstuvwxyzABCDE").unwrap();
        let d2 = Digest::parse("6:pqrstuvwxyzABCDE:FGHIJKLMNOPQRSTU").unwrap();
        // d1's second block and d2's first block are the same string, at
        // d2's block size.
        assert!(compare_digest(&d1, &d2) > 0);
    }

    #[test]
    fn score_is_symmetric() {
        let d1 = Digest::parse("3:abcdefghijklmno:pqrstuvwxyzABCDE").unwrap();
        let d2 = Digest::parse("3:abcdefghijklmnoX:pqrstuvwxyzABCDE").unwrap();
        assert_eq!(compare_digest(&d1, &d2), compare_digest(&d2, &d1));
    }

    #[test]
    fn score_is_within_range() {
        let d1 = Digest::parse("3:abcdefghijklmno:pqrstuvwxyzABCDE").unwrap();
        let d2 = Digest::parse("3:abcdefghijklmnoX:pqrstuvwxyzABCDE").unwrap();
        let s = compare_digest(&d1, &d2);
        assert!((0..=100).contains(&s));
    }
}
