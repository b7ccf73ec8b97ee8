use cpipectl::cpipe;
use cpipectl_ioc::codec::{decode_magic, decode_nr};
use serde::Serialize;
use tracing::debug;

use crate::cmd::{parse_code, CheckArgs};
use crate::exit::{CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct CheckOutput<'a> {
    code: u32,
    accepted: bool,
    nr: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
}

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let code = parse_code(&args.code)?;
    let magic = decode_magic(code);
    let nr = decode_nr(code);

    if !cpipe::accepts(code) {
        let reason = if magic != cpipe::MAGIC {
            format!("magic {magic:#04x} does not address the cpipe driver")
        } else {
            format!(
                "command number {nr} exceeds highest assigned number {}",
                cpipe::MAX_NR
            )
        };
        debug!(code, magic, nr, "code rejected");
        return Err(CliError::new(DATA_INVALID, reason));
    }

    let command = cpipe::name(code);
    match format {
        OutputFormat::Json => {
            let out = CheckOutput {
                code,
                accepted: true,
                nr,
                command,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Raw => println!("ok"),
        OutputFormat::Table | OutputFormat::Pretty => match command {
            Some(name) => println!("ok: {name}"),
            None => println!("ok: cpipe command number {nr} (not a registered code)"),
        },
    }

    Ok(SUCCESS)
}
