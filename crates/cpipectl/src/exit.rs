use std::fmt;

use cpipectl_ioc::CodecError;

pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err {
        CodecError::SizeTooLarge { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_overflow_maps_to_data_invalid() {
        let err = codec_error(
            "encode failed",
            CodecError::SizeTooLarge {
                size: 16384,
                max: 16383,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("16384"));
    }
}
