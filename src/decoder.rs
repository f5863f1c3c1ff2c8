//! COBS frame decoder
//!
//! The decoder operates on borrowed frames. [`BlockReader`] walks the blocks
//! of a frame and validates each length byte; [`decode`] and [`decode_into`]
//! reassemble the payload from those blocks, re-inserting the zeros the
//! encoder folded away.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::frame::{decoded_size, trim_terminator, Block};
use crate::{FULL_BLOCK_CODE, TERMINATOR};

/// Iterator over the blocks of a single frame
///
/// Yields each block together with whether it implies a zero after its data.
/// The frame's own terminator, if present, is not treated as a block, and
/// the last block never implies a zero. After the first error the reader
/// yields nothing more.
#[derive(Debug, Clone)]
pub struct BlockReader<'a> {
    buf: &'a [u8],
}

impl<'a> BlockReader<'a> {
    /// Create a reader over one complete frame, with or without its
    /// terminator
    #[inline]
    pub fn new(frame: &'a [u8]) -> Self {
        Self {
            buf: trim_terminator(frame),
        }
    }

    /// Frame bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Check if every block has been read
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    fn fail(&mut self, err: Error) -> Option<Result<(Block<'a>, bool)>> {
        self.buf = &[];
        Some(Err(err))
    }
}

impl<'a> Iterator for BlockReader<'a> {
    type Item = Result<(Block<'a>, bool)>;

    fn next(&mut self) -> Option<Self::Item> {
        let &code = self.buf.first()?;

        if code == TERMINATOR {
            return self.fail(Error::InvalidLength);
        }

        let len = code as usize;
        if len > self.buf.len() {
            return self.fail(Error::Truncated);
        }

        let (block, rest) = self.buf.split_at(len);
        self.buf = rest;

        let implies_zero = code != FULL_BLOCK_CODE && !rest.is_empty();
        Some(Ok((
            Block {
                code,
                data: &block[1..],
            },
            implies_zero,
        )))
    }
}

impl core::iter::FusedIterator for BlockReader<'_> {}

/// Decode one complete frame into a newly allocated payload
///
/// The trailing terminator is optional. Malformed frames are rejected as a
/// whole; no partial payload is returned.
pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(decoded_size(frame.len()));

    for block in BlockReader::new(frame) {
        let (block, implies_zero) = block?;
        payload.extend_from_slice(block.data);
        if implies_zero {
            payload.push(TERMINATOR);
        }
    }

    Ok(payload)
}

/// Decode one complete frame into `buf`, returning the payload length
///
/// A buffer of [`decoded_size`] bytes is always large enough. Blocks are
/// checked in order, so a frame that overflows `buf` before reaching a
/// malformed block reports [`Error::ShortBuffer`].
pub fn decode_into(frame: &[u8], buf: &mut [u8]) -> Result<usize> {
    let mut pos = 0;

    for block in BlockReader::new(frame) {
        let (block, implies_zero) = block?;

        let end = pos + block.data.len();
        if end > buf.len() {
            return Err(Error::ShortBuffer);
        }
        buf[pos..end].copy_from_slice(block.data);
        pos = end;

        if implies_zero {
            if pos >= buf.len() {
                return Err(Error::ShortBuffer);
            }
            buf[pos] = TERMINATOR;
            pos += 1;
        }
    }

    Ok(pos)
}
