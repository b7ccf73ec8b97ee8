use clap::{Args, Subcommand, ValueEnum};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod check;
pub mod decode;
pub mod encode;
pub mod list;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a command code from its fields.
    Encode(EncodeArgs),
    /// Split a command code into its fields.
    Decode(DecodeArgs),
    /// Print the cpipe command registry.
    List(ListArgs),
    /// Validate a code against the cpipe registry, as a dispatcher would.
    Check(CheckArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::List(args) => list::run(args, format),
        Command::Check(args) => check::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DirArg {
    /// No payload.
    None,
    /// Caller writes a payload into the driver.
    Write,
    /// Caller reads a payload out of the driver.
    Read,
    /// Payload travels both ways.
    Rw,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Transfer direction.
    #[arg(long, value_enum, default_value = "none")]
    pub dir: DirArg,
    /// Driver magic: a single character or a number (e.g. p, 0x70).
    #[arg(long)]
    pub magic: String,
    /// Command number (0-255).
    #[arg(long)]
    pub nr: u8,
    /// Payload size in bytes.
    #[arg(long, default_value_t = 0)]
    pub size: usize,
    /// Mask an oversized size instead of failing (legacy behavior).
    #[arg(long)]
    pub unchecked: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// The command code, decimal or 0x-prefixed hex.
    pub code: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The command code, decimal or 0x-prefixed hex.
    pub code: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}

/// Parse a command code given in decimal or `0x` hex.
pub fn parse_code(input: &str) -> CliResult<u32> {
    let trimmed = input.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|err| CliError::new(USAGE, format!("invalid command code {trimmed:?}: {err}")))
}
