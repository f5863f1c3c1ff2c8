//! cobskit: Consistent Overhead Byte Stuffing for zero-delimited framing
//!
//! COBS turns an arbitrary byte payload into a frame that contains no zero
//! byte except a single terminator at the end, so frames can be delimited by
//! `0x00` on a serial link or socket. Overhead is bounded: at most one byte
//! per 254 payload bytes, plus the terminator.
//!
//! # Frame Format
//!
//! ```text
//! +------+----------------+------+----------------+-----+------+
//! | code | code-1 bytes   | code | code-1 bytes   | ... | 0x00 |
//! +------+----------------+------+----------------+-----+------+
//! ```
//!
//! - `code` is 0x01..=0xFF; the data bytes following it are never zero.
//! - `0xFF` marks a full block of 254 bytes, with no zero implied after it.
//! - Any other code implies a zero after its data, except on the last block.
//! - The empty payload encodes to the lone terminator.
//!
//! # Features
//!
//! - Allocating (`encode`/`decode`) and caller-buffer
//!   (`encode_into`/`decode_into`) variants
//! - `const fn` size bounds for fixed-size buffers
//! - Block-level iterators for inspecting frame structure
//! - `no_std` support with `alloc`
//!
//! Integrity checking is left to the caller; COBS only frames.
//!
//! # Example
//!
//! ```rust
//! use cobskit::*;
//!
//! let frame = encode(&[0x11, 0x00, 0x22]);
//! assert_eq!(frame, [0x02, 0x11, 0x02, 0x22, 0x00]);
//! assert!(frame.len() <= encoded_size(3));
//!
//! let payload = decode(&frame)?;
//! assert_eq!(payload, [0x11, 0x00, 0x22]);
//!
//! assert_eq!(decode(&[0x05, 0x01, 0x02]), Err(Error::Truncated));
//! # Ok::<(), cobskit::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame;

#[cfg(feature = "std")]
pub mod bench;

// Re-export main types
pub use decoder::{decode, decode_into, BlockReader};
pub use encoder::{encode, encode_into, Blocks, FrameEncoder};
pub use error::Error;
pub use frame::{
    decoded_size, encoded_size, split_frames, terminate, trim_terminator, Block, FrameSplitter,
};

/// Frame terminator byte
pub const TERMINATOR: u8 = 0x00;

/// Maximum data bytes in one block
pub const MAX_BLOCK_DATA: usize = 254;

/// Length byte of a full block
pub const FULL_BLOCK_CODE: u8 = 0xFF;
