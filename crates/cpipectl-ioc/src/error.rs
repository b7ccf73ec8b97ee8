/// Errors from the checked encoding paths.
///
/// The decoder and the unchecked encoders never fail; direction, magic
/// and number cannot overflow their fields by construction of their
/// types, which leaves the payload size as the only fallible input.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload size does not fit the 14-bit size field.
    #[error("payload size too large ({size} bytes, max {max})")]
    SizeTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
