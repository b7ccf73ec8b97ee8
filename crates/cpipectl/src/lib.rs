//! User-space support for the cpipe character-device pair driver.
//!
//! cpipe presents each pipe as two twin character devices; control
//! requests against either endpoint are identified by packed command
//! codes. This crate publishes the fixed cpipe command set and
//! re-exports the generic codec it is built from.
//!
//! - [`ioc`] — the command-code codec (bit layout, encoders, decoder)
//! - [`cpipe`] — the fixed commands of the cpipe driver

pub mod cpipe;

/// Re-export of the command-code codec.
pub mod ioc {
    pub use cpipectl_ioc::*;
}
