//! Bit-level codec for character-device control-request codes.
//!
//! A control request is identified by a single `u32` that packs four
//! fields: the transfer direction, the owning driver's magic byte, a
//! per-driver command number, and the byte size of the payload structure
//! the request exchanges. Caller and driver must agree on this layout
//! bit-for-bit — a code built against a different layout silently
//! addresses the wrong operation. This crate is that agreement.
//!
//! - [`layout`] — the authoritative field layout
//! - [`codec`] — encoding (checked, unchecked, typed) and decoding
//!
//! Everything here is a `const fn` over plain integers: no state, no
//! I/O, safe to evaluate anywhere including in `const` items.

pub mod codec;
pub mod error;
pub mod layout;

pub use codec::{
    decode, decode_dir, decode_magic, decode_nr, decode_size, encode, encode_none, encode_read,
    encode_read_for, encode_read_unchecked, encode_read_write, encode_read_write_for,
    encode_read_write_unchecked, encode_unchecked, encode_write, encode_write_for,
    encode_write_unchecked, pack, Fields,
};
pub use error::{CodecError, Result};
pub use layout::Direction;
