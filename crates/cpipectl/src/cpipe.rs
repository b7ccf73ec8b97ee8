//! Fixed command codes of the cpipe driver.
//!
//! The codes below are frozen: they are the values user space and the
//! driver were shipped with, and the tests hold them to the published
//! literals rather than re-deriving them. New commands get the next
//! number and bump [`MAX_NR`]; existing entries never change.
//!
//! Both payloads are pinned to `i32` rather than the platform's native
//! integer width, so the codes reproduce bit-for-bit on every target.

use cpipectl_ioc::codec::{decode_magic, decode_nr, encode_read_for};

/// Magic byte identifying the cpipe driver.
pub const MAGIC: u8 = b'p';

/// Bytes readable from this endpoint without blocking (`i32` payload,
/// read out of the driver).
pub const GET_AVAILABLE_READ: u32 = encode_read_for::<i32>(MAGIC, 0);

/// Bytes of buffer space this endpoint will accept without blocking
/// (`i32` payload, read out of the driver).
pub const GET_AVAILABLE_WRITE: u32 = encode_read_for::<i32>(MAGIC, 1);

/// Highest command number currently assigned under [`MAGIC`].
pub const MAX_NR: u8 = 1;

/// Descriptor of one registry command, for listings and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub code: u32,
}

/// Every command currently assigned under [`MAGIC`].
pub const COMMANDS: [Command; 2] = [
    Command {
        name: "GET_AVAILABLE_READ",
        code: GET_AVAILABLE_READ,
    },
    Command {
        name: "GET_AVAILABLE_WRITE",
        code: GET_AVAILABLE_WRITE,
    },
];

/// Registry name of `code`, if it is exactly a cpipe command.
pub fn name(code: u32) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.code == code)
        .map(|cmd| cmd.name)
}

/// Receiver-side admission check: the code carries the cpipe magic and
/// an assigned command number.
///
/// This is the range check a dispatcher runs before anything else; it
/// says nothing about the direction or size fields.
pub const fn accepts(code: u32) -> bool {
    decode_magic(code) == MAGIC && decode_nr(code) <= MAX_NR
}
