//! Frame and block structures and sizing utilities

use alloc::vec::Vec;

use crate::{FULL_BLOCK_CODE, MAX_BLOCK_DATA, TERMINATOR};

/// One length-prefixed block of a frame
///
/// On the wire a block is its `code` byte followed by `data`, where
/// `code == data.len() + 1` and `data` holds no zero byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Length byte (1..=255)
    pub code: u8,
    /// Non-zero data bytes (`code - 1` of them)
    pub data: &'a [u8],
}

impl<'a> Block<'a> {
    /// Create a block around a run already known to be valid
    #[inline]
    pub(crate) fn new(data: &'a [u8]) -> Self {
        debug_assert!(data.len() <= MAX_BLOCK_DATA);
        Self {
            code: (data.len() + 1) as u8,
            data,
        }
    }

    /// Create a block from `data`, or `None` if it holds more than
    /// [`MAX_BLOCK_DATA`] bytes or contains a zero
    #[inline]
    pub fn try_new(data: &'a [u8]) -> Option<Self> {
        if data.len() > MAX_BLOCK_DATA || data.contains(&TERMINATOR) {
            return None;
        }
        Some(Self::new(data))
    }

    /// Whether this is a full block (254 data bytes, code 0xFF)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.code == FULL_BLOCK_CODE
    }

    /// Bytes this block occupies on the wire (length byte + data)
    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.data.len() + 1
    }

    /// Write the block (length byte + data) into `buf`
    ///
    /// `buf` must hold at least [`Block::encoded_len`] bytes.
    #[inline]
    pub(crate) fn write_to(&self, buf: &mut [u8]) -> usize {
        let len = self.encoded_len();
        buf[0] = self.code;
        buf[1..len].copy_from_slice(self.data);
        len
    }
}

/// Upper bound on the encoded frame length for a payload of `n` bytes,
/// terminator included
///
/// One length byte per started 254-byte chunk, plus the terminator. The
/// result saturates at `usize::MAX`. This is a `const fn` so fixed-size
/// buffers can be declared with it:
///
/// ```
/// const PAYLOAD: usize = 300;
/// let payload = [0xAAu8; PAYLOAD];
/// let mut frame = [0u8; cobskit::encoded_size(PAYLOAD)];
/// let len = cobskit::encode_into(&payload, &mut frame).unwrap();
/// assert!(len <= frame.len());
/// ```
#[inline]
pub const fn encoded_size(n: usize) -> usize {
    let overhead = n / MAX_BLOCK_DATA + (n % MAX_BLOCK_DATA != 0) as usize;
    n.saturating_add(overhead).saturating_add(1)
}

/// Upper bound on the decoded payload length for a frame of `frame_len`
/// bytes
///
/// Every block of `n` wire bytes yields at most `n` payload bytes.
#[inline]
pub const fn decoded_size(frame_len: usize) -> usize {
    frame_len
}

/// Append a terminator unless `frame` already ends with one
pub fn terminate(mut frame: Vec<u8>) -> Vec<u8> {
    if frame.last() != Some(&TERMINATOR) {
        frame.push(TERMINATOR);
    }
    frame
}

/// Remove a single trailing terminator, if present
#[inline]
pub fn trim_terminator(frame: &[u8]) -> &[u8] {
    match frame.split_last() {
        Some((&TERMINATOR, body)) => body,
        _ => frame,
    }
}

/// Iterator over the complete, terminator-delimited frames of a buffer
///
/// Each yielded slice includes its terminator. Bytes after the last
/// terminator are an incomplete frame and are left for the caller, see
/// [`FrameSplitter::remainder`].
#[derive(Debug, Clone)]
pub struct FrameSplitter<'a> {
    buf: &'a [u8],
}

impl<'a> FrameSplitter<'a> {
    /// Bytes not yet yielded as part of a complete frame
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a> Iterator for FrameSplitter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.buf.iter().position(|&b| b == TERMINATOR)?;
        let (frame, rest) = self.buf.split_at(end + 1);
        self.buf = rest;
        Some(frame)
    }
}

/// Split an already-received buffer into its complete frames
#[inline]
pub fn split_frames(buf: &[u8]) -> FrameSplitter<'_> {
    FrameSplitter { buf }
}
