//! COBS frame encoder
//!
//! Encoding splits the payload into blocks lazily through [`Blocks`] and a
//! single writer lays them out followed by the terminator. The writer either
//! grows a `Vec` ([`encode`]) or fills a caller-provided buffer with bounds
//! checking ([`encode_into`], [`FrameEncoder`]).

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::frame::{encoded_size, Block};
use crate::{MAX_BLOCK_DATA, TERMINATOR};

/// Iterator over the blocks that encode a payload
///
/// Runs of non-zero bytes become blocks of at most [`MAX_BLOCK_DATA`] bytes.
/// A zero that ends a run is folded into that run's block; a full block never
/// consumes a zero, so a zero right after one is carried by the next block.
/// The empty payload yields no blocks.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Blocks<'a> {
    /// Create a block iterator over `payload`
    #[inline]
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            rest: if payload.is_empty() {
                None
            } else {
                Some(payload)
            },
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.rest?;

        let max_len = bytes.len().min(MAX_BLOCK_DATA);
        let run_len = bytes[..max_len]
            .iter()
            .position(|&b| b == TERMINATOR)
            .unwrap_or(max_len);
        let (run, tail) = bytes.split_at(run_len);

        self.rest = if tail.is_empty() {
            None
        } else if run_len == MAX_BLOCK_DATA {
            Some(tail)
        } else {
            // Drop the separator
            Some(&tail[1..])
        };

        Some(Block::new(run))
    }
}

impl core::iter::FusedIterator for Blocks<'_> {}

/// Encode `payload` into a newly allocated frame
///
/// The frame contains no zero byte except its final terminator. Encoding
/// cannot fail.
pub fn encode(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(encoded_size(payload.len()));
    for block in Blocks::new(payload) {
        frame.push(block.code);
        frame.extend_from_slice(block.data);
    }
    frame.push(TERMINATOR);
    frame
}

/// Encode `payload` into `buf`, returning the frame length
///
/// A buffer of [`encoded_size`] bytes is always large enough; smaller
/// buffers work when the actual frame fits, otherwise
/// [`Error::ShortBuffer`] is returned.
#[inline]
pub fn encode_into(payload: &[u8], buf: &mut [u8]) -> Result<usize> {
    FrameEncoder::new(buf).push_frame(payload)
}

/// Frame encoder that writes consecutive frames into a user-provided buffer
#[derive(Debug)]
pub struct FrameEncoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
    frame_start: usize,
}

impl<'a> FrameEncoder<'a> {
    /// Create new encoder with the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            frame_start: 0,
        }
    }

    /// Append the frame for `payload` after any frames already written
    ///
    /// Returns the length of the new frame. On [`Error::ShortBuffer`] the
    /// encoder position is unchanged.
    pub fn push_frame(&mut self, payload: &[u8]) -> Result<usize> {
        let start = self.pos;
        let mut pos = start;

        for block in Blocks::new(payload) {
            // Keep room for the terminator
            if pos + block.encoded_len() >= self.buf.len() {
                return Err(Error::ShortBuffer);
            }
            pos += block.write_to(&mut self.buf[pos..]);
        }

        if pos >= self.buf.len() {
            return Err(Error::ShortBuffer);
        }
        self.buf[pos] = TERMINATOR;
        pos += 1;

        self.frame_start = start;
        self.pos = pos;
        Ok(pos - start)
    }

    /// Get current position in buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining buffer capacity
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reset encoder for reuse with the same buffer
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
        self.frame_start = 0;
    }

    /// Get all frames written so far
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Get the most recently written frame
    #[inline]
    pub fn last_frame(&self) -> &[u8] {
        &self.buf[self.frame_start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use alloc::vec;

    #[test]
    fn test_encode_vectors() {
        assert_eq!(encode(&[]), vec![0x00]);
        assert_eq!(encode(&[0x01, 0x02, 0x03]), vec![0x04, 0x01, 0x02, 0x03, 0x00]);
        assert_eq!(encode(&[0x00]), vec![0x01, 0x01, 0x00]);
        assert_eq!(encode(&[0x00, 0x00]), vec![0x01, 0x01, 0x01, 0x00]);
        assert_eq!(
            encode(&[0x11, 0x22, 0x00, 0x33]),
            vec![0x03, 0x11, 0x22, 0x02, 0x33, 0x00]
        );
        assert_eq!(
            encode(&[0x11, 0x00, 0x00]),
            vec![0x02, 0x11, 0x01, 0x01, 0x00]
        );
    }

    #[test]
    fn test_blocks_split_on_zero() {
        let payload = [0x0A, 0x00, 0x00, 0x0B, 0x0C];
        let blocks: Vec<_> = Blocks::new(&payload).collect();

        assert_eq!(
            blocks,
            vec![
                Block { code: 2, data: &[0x0A] },
                Block { code: 1, data: &[] },
                Block { code: 3, data: &[0x0B, 0x0C] },
            ]
        );
        assert_eq!(Blocks::new(&[]).count(), 0);
    }

    #[test]
    fn test_blocks_full_chunking() {
        let run = [0x42u8; 254];
        let blocks: Vec<_> = Blocks::new(&run).collect();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_full());

        let run = [0x42u8; 255];
        let blocks: Vec<_> = Blocks::new(&run).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].code, 0xFF);
        assert_eq!(blocks[1], Block { code: 2, data: &[0x42] });

        let run = [0x42u8; 508];
        let codes: Vec<u8> = Blocks::new(&run).map(|b| b.code).collect();
        assert_eq!(codes, vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_zero_after_full_block() {
        let mut payload = vec![0x07u8; 254];
        payload.push(0);

        let frame = encode(&payload);
        assert_eq!(frame.len(), 258);
        assert_eq!(frame[0], 0xFF);
        assert_eq!(&frame[255..], &[0x01, 0x01, 0x00]);
        assert_eq!(decode(&frame).unwrap(), payload);

        // Without the zero the trailing blocks disappear entirely
        let frame = encode(&payload[..254]);
        assert_eq!(frame.len(), 256);
        assert_eq!(frame[255], 0x00);
    }

    #[test]
    fn test_encode_into_matches_encode() {
        let payload = [0x10, 0x00, 0x20, 0x30, 0x00];
        let mut buf = [0xEEu8; encoded_size(5)];

        let len = encode_into(&payload, &mut buf).unwrap();
        assert_eq!(&buf[..len], encode(&payload).as_slice());
    }

    #[test]
    fn test_encode_into_exact_fit() {
        let payload = [0x01, 0x02, 0x03];
        let mut buf = [0u8; 5];
        assert_eq!(encode_into(&payload, &mut buf), Ok(5));

        let mut buf = [0u8; 4];
        assert_eq!(encode_into(&payload, &mut buf), Err(Error::ShortBuffer));

        let mut buf = [0u8; 0];
        assert_eq!(encode_into(&[], &mut buf), Err(Error::ShortBuffer));
    }

    #[test]
    fn test_encoder_multiple_frames() {
        let mut buf = [0u8; 32];
        let mut encoder = FrameEncoder::new(&mut buf);

        assert_eq!(encoder.push_frame(&[0xAA]).unwrap(), 3);
        assert_eq!(encoder.push_frame(&[]).unwrap(), 1);
        assert_eq!(encoder.push_frame(&[0x00, 0xBB]).unwrap(), 4);

        assert_eq!(encoder.position(), 8);
        assert_eq!(encoder.remaining(), 24);
        assert_eq!(encoder.last_frame(), &[0x01, 0x02, 0xBB, 0x00]);
        assert_eq!(
            encoder.as_slice(),
            &[0x02, 0xAA, 0x00, 0x00, 0x01, 0x02, 0xBB, 0x00]
        );
    }

    #[test]
    fn test_encoder_short_buffer_keeps_position() {
        let mut buf = [0u8; 6];
        let mut encoder = FrameEncoder::new(&mut buf);

        encoder.push_frame(&[0x01, 0x02]).unwrap();
        assert_eq!(encoder.position(), 4);

        assert_eq!(encoder.push_frame(&[0x03, 0x04]), Err(Error::ShortBuffer));
        assert_eq!(encoder.position(), 4);
        assert_eq!(encoder.as_slice(), &[0x03, 0x01, 0x02, 0x00]);
    }

    #[test]
    fn test_encoder_debug_output() {
        let mut buf = [0u8; 4];
        let mut encoder = FrameEncoder::new(&mut buf);
        encoder.push_frame(&[0x09]).unwrap();

        let text = alloc::format!("{:?}", encoder);
        assert!(text.starts_with("FrameEncoder"));
        assert!(text.contains("pos: 3"));
    }

    #[test]
    fn test_encoder_reset() {
        let mut buf = [0u8; 16];
        let mut encoder = FrameEncoder::new(&mut buf);

        encoder.push_frame(&[0x05; 4]).unwrap();
        let first_frame = encoder.as_slice().to_vec();

        encoder.reset();
        assert_eq!(encoder.position(), 0);
        encoder.push_frame(&[0x06]).unwrap();

        assert_eq!(decode(&first_frame).unwrap(), vec![0x05; 4]);
        assert_eq!(encoder.as_slice(), &[0x02, 0x06, 0x00]);
    }
}
