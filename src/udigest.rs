//! The unnormalized digest type: a digest read verbatim, with no run-collapsing.
//!
//! Unlike [`crate::digest::Digest`], a [`UDigest`] may contain arbitrarily
//! long runs of identical bytes. It exists for tools that want to inspect a
//! digest exactly as produced (or as received from an untrusted source)
//! before normalizing it.

use std::cmp::Ordering;
use std::fmt;

use fehler::{throw, throws};

use crate::blocksize;
use crate::digest::{is_base64, pretty_into, Digest};
use crate::error::ParseError;
use crate::parse_util::parse_block_size;
use crate::SPAMSUM_LENGTH;

/// A parsed digest, kept exactly as read -- no run-collapsing applied.
#[derive(Debug, Clone, Copy)]
pub struct UDigest {
    /// Block size of the first block.
    pub block_size: u64,
    /// Length of the first block.
    pub len1: usize,
    /// Length of the second block.
    pub len2: usize,
    /// First block followed by second block.
    pub buf: [u8; 2 * SPAMSUM_LENGTH],
}

impl UDigest {
    /// Parse a digest out of its textual form `BLOCKSIZE:S1:S2[,tag]`
    /// verbatim, performing no run-collapsing.
    #[throws(ParseError)]
    pub fn parse(s: &str) -> UDigest {
        let s = s.as_bytes();
        let (block_size, mut i) = parse_block_size(s)?;
        if i >= s.len() || s[i] != b':' {
            throw!(ParseError::MissingColon);
        }
        i += 1;

        let mut buf = [0u8; 2 * SPAMSUM_LENGTH];
        let mut len1 = 0usize;
        loop {
            if i >= s.len() {
                throw!(ParseError::UnexpectedEnd);
            }
            let c = s[i];
            i += 1;
            if c == b':' {
                break;
            }
            if len1 >= SPAMSUM_LENGTH {
                throw!(ParseError::BlockTooLong { block: 1 });
            }
            buf[len1] = c;
            len1 += 1;
        }

        let mut len2 = 0usize;
        loop {
            let c = match s.get(i) {
                None => break,
                Some(&c) if c == b',' => break,
                Some(&c) => c,
            };
            i += 1;
            if len2 >= SPAMSUM_LENGTH {
                throw!(ParseError::BlockTooLong { block: 2 });
            }
            buf[len1 + len2] = c;
            len2 += 1;
        }

        UDigest {
            block_size,
            len1,
            len2,
            buf,
        }
    }

    /// The first block (length `len1`).
    pub fn s1(&self) -> &[u8] {
        &self.buf[..self.len1]
    }

    /// The second block (length `len2`).
    pub fn s2(&self) -> &[u8] {
        &self.buf[self.len1..self.len1 + self.len2]
    }

    /// `true` iff `len1`, `len2` and their sum fit within the bounds the
    /// format allows.
    pub fn is_valid_lengths(&self) -> bool {
        self.len1 <= SPAMSUM_LENGTH
            && self.len2 <= SPAMSUM_LENGTH
            && self.len1 + self.len2 <= 2 * SPAMSUM_LENGTH
    }

    /// `true` iff every byte of both blocks is base-64 (`[0-9A-Za-z+/]`).
    pub fn is_natural_buffer(&self) -> bool {
        self.s1().iter().all(|&c| is_base64(c)) && self.s2().iter().all(|&c| is_base64(c))
    }

    /// `true` iff the digest's block size and lengths are valid. Unlike
    /// [`Digest::is_valid`], there is no run-collapsing invariant to check.
    pub fn is_valid(&self) -> bool {
        blocksize::is_valid(self.block_size) && self.is_valid_lengths()
    }

    /// `true` iff the digest is valid and could plausibly have been produced
    /// by the reference hasher (natural block size, base-64 buffer).
    pub fn is_natural(&self) -> bool {
        blocksize::is_natural(self.block_size)
            && self.is_valid_lengths()
            && self.is_natural_buffer()
    }

    /// Render as `BLOCKSIZE:S1:S2` into `buf`, NUL-terminated.
    pub fn pretty(&self, buf: &mut [u8]) -> bool {
        pretty_into(buf, self.block_size, self.s1(), self.s2())
    }

    /// Re-apply run-collapsing to produce the equivalent normalized digest.
    ///
    /// Each block is collapsed independently: any run of four or more
    /// identical bytes is shortened to exactly three.
    pub fn to_digest(&self) -> Digest {
        let mut buf = [0u8; 2 * SPAMSUM_LENGTH];
        let mut len1 = 0usize;
        for &c in self.s1() {
            collapse_push(&mut buf, &mut len1, 0, c);
        }
        let mut len2 = 0usize;
        for &c in self.s2() {
            collapse_push(&mut buf, &mut len2, len1, c);
        }
        Digest {
            block_size: self.block_size,
            len1,
            len2,
            buf,
        }
    }

    /// Copy a normalized digest as-is; every normalized digest is already a
    /// valid (if perhaps differently-shaped) unnormalized one.
    pub fn from_digest(digest: &Digest) -> UDigest {
        UDigest {
            block_size: digest.block_size,
            len1: digest.len1,
            len2: digest.len2,
            buf: digest.buf,
        }
    }
}

impl PartialEq for UDigest {
    fn eq(&self, other: &Self) -> bool {
        udigestcmp(self, other) == Ordering::Equal
    }
}
impl Eq for UDigest {}

impl PartialOrd for UDigest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(udigestcmp(self, other))
    }
}
impl Ord for UDigest {
    fn cmp(&self, other: &Self) -> Ordering {
        udigestcmp(self, other)
    }
}

impl fmt::Display for UDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.block_size,
            String::from_utf8_lossy(self.s1()),
            String::from_utf8_lossy(self.s2())
        )
    }
}

/// Total order: block size, then `len1`, then `len2`, then buffer bytes.
pub fn udigestcmp(d1: &UDigest, d2: &UDigest) -> Ordering {
    d1.block_size
        .cmp(&d2.block_size)
        .then_with(|| d1.len1.cmp(&d2.len1))
        .then_with(|| d1.len2.cmp(&d2.len2))
        .then_with(|| d1.buf[..d1.len1 + d1.len2].cmp(&d2.buf[..d2.len1 + d2.len2]))
}

/// Order by block size alone.
pub fn udigestcmp_blocksize(d1: &UDigest, d2: &UDigest) -> Ordering {
    blocksize::cmp(d1.block_size, d2.block_size)
}

/// Order "natural"-block-size digests before "un-natural" ones, then by
/// block size.
pub fn udigestcmp_blocksize_n(d1: &UDigest, d2: &UDigest) -> Ordering {
    let nat1 = blocksize::is_natural(d1.block_size);
    let nat2 = blocksize::is_natural(d2.block_size);
    match (nat1, nat2) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => blocksize::cmp(d1.block_size, d2.block_size),
    }
}

fn collapse_push(buf: &mut [u8], len: &mut usize, base: usize, c: u8) {
    let emit = *len < 3
        || buf[base + *len - 1] != c
        || buf[base + *len - 2] != c
        || buf[base + *len - 3] != c;
    if emit {
        buf[base + *len] = c;
        *len += 1;
    }
}
