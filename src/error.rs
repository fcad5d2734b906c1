//! Errors produced while parsing a fuzzy hash digest.

use thiserror::Error;

/// Everything that can go wrong while reading a digest out of its textual form
/// (`BLOCKSIZE:S1:S2[,tag]`).
///
/// A `ParseError` always means the input was rejected outright: there is no
/// partially-populated digest to recover. See [`crate::read_digest`] and
/// [`crate::read_udigest`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not begin with a decimal digit.
    #[error("digest does not start with a block size")]
    MissingBlockSize,

    /// The decimal block size does not fit the platform's block-size integer.
    #[error("block size overflows the platform integer")]
    BlockSizeOverflow,

    /// The block size parsed but is not valid (doubling it would overflow).
    #[error("block size {0} is too large to be near any other block size")]
    InvalidBlockSize(u64),

    /// The byte expected to be `:` was something else, or the input ended early.
    #[error("expected ':' after the block size")]
    MissingColon,

    /// A block's emitted length would exceed `SPAMSUM_LENGTH` before its terminator.
    #[error("block {block} is longer than {} characters", crate::SPAMSUM_LENGTH)]
    BlockTooLong {
        /// Which block overflowed: 1 for S1, 2 for S2.
        block: u8,
    },

    /// Input ended before a required terminator (`:`, or the end of S2).
    #[error("unexpected end of input")]
    UnexpectedEnd,
}
