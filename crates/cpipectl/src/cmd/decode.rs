use cpipectl::cpipe;
use cpipectl_ioc::codec::decode;

use crate::cmd::{parse_code, DecodeArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_fields, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let code = parse_code(&args.code)?;
    let fields = decode(code);
    print_fields(code, &fields, cpipe::name(code), format);
    Ok(SUCCESS)
}
