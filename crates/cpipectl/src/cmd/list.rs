use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use cpipectl::cpipe;
use cpipectl_ioc::codec::decode;
use serde::Serialize;

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct CommandRow {
    name: &'static str,
    code: u32,
    hex: String,
    dir: &'static str,
    nr: u8,
    size: usize,
}

pub fn run(_args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let rows: Vec<CommandRow> = cpipe::COMMANDS
        .iter()
        .map(|cmd| {
            let fields = decode(cmd.code);
            CommandRow {
                name: cmd.name,
                code: cmd.code,
                hex: format!("{:#010x}", cmd.code),
                dir: fields.dir.name(),
                nr: fields.nr,
                size: fields.size,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "CODE", "HEX", "DIR", "NR", "SIZE"]);
            for row in &rows {
                table.add_row(vec![
                    row.name.to_string(),
                    row.code.to_string(),
                    row.hex.clone(),
                    row.dir.to_string(),
                    row.nr.to_string(),
                    row.size.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                println!("{} = {} ({})", row.name, row.code, row.hex);
            }
        }
        OutputFormat::Raw => {
            for row in &rows {
                println!("{}", row.code);
            }
        }
    }

    Ok(SUCCESS)
}
