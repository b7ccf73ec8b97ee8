use cpipectl_ioc::codec::{encode, encode_unchecked};
use cpipectl_ioc::layout::Direction;
use tracing::debug;

use crate::cmd::{DirArg, EncodeArgs};
use crate::exit::{codec_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_code, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let magic = parse_magic(&args.magic)?;
    let dir = direction(args.dir);

    let code = if args.unchecked {
        encode_unchecked(dir, magic, args.nr, args.size)
    } else {
        encode(dir, magic, args.nr, args.size).map_err(|err| codec_error("encode failed", err))?
    };

    debug!(
        code,
        dir = dir.name(),
        magic,
        nr = args.nr,
        size = args.size,
        "encoded command code"
    );
    print_code(code, format);
    Ok(SUCCESS)
}

fn direction(arg: DirArg) -> Direction {
    match arg {
        DirArg::None => Direction::None,
        DirArg::Write => Direction::Write,
        DirArg::Read => Direction::Read,
        DirArg::Rw => Direction::ReadWrite,
    }
}

/// A magic is spelled either as the driver's letter (`p`) or as a
/// number (`112`, `0x70`). A single ASCII digit is taken as a number.
fn parse_magic(input: &str) -> CliResult<u8> {
    let trimmed = input.trim();

    let mut chars = trimmed.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_ascii() && !ch.is_ascii_digit() {
            return Ok(ch as u8);
        }
    }

    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => trimmed.parse::<u8>(),
    };
    parsed.map_err(|err| CliError::new(USAGE, format!("invalid magic {trimmed:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_accepts_letters_and_numbers() {
        assert_eq!(parse_magic("p").unwrap(), b'p');
        assert_eq!(parse_magic("0x70").unwrap(), 0x70);
        assert_eq!(parse_magic("112").unwrap(), 112);
        assert_eq!(parse_magic("7").unwrap(), 7);
        assert_eq!(parse_magic(" p ").unwrap(), b'p');
    }

    #[test]
    fn magic_rejects_garbage() {
        assert!(parse_magic("").is_err());
        assert!(parse_magic("pp").is_err());
        assert!(parse_magic("256").is_err());
        assert!(parse_magic("é").is_err());
    }

    #[test]
    fn direction_arg_maps_onto_the_field_values() {
        assert_eq!(direction(DirArg::None), Direction::None);
        assert_eq!(direction(DirArg::Write), Direction::Write);
        assert_eq!(direction(DirArg::Read), Direction::Read);
        assert_eq!(direction(DirArg::Rw), Direction::ReadWrite);
    }
}
