use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use cpipectl_ioc::codec::Fields;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CodeOutput {
    code: u32,
    hex: String,
}

pub fn print_code(code: u32, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = CodeOutput {
                code,
                hex: format!("{code:#010x}"),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "HEX"])
                .add_row(vec![code.to_string(), format!("{code:#010x}")]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("code={code} ({code:#010x})"),
        OutputFormat::Raw => println!("{code}"),
    }
}

#[derive(Serialize)]
struct FieldsOutput<'a> {
    code: u32,
    hex: String,
    dir: &'static str,
    magic: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    magic_char: Option<char>,
    nr: u8,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
}

pub fn print_fields(code: u32, fields: &Fields, command: Option<&str>, format: OutputFormat) {
    let magic_char = printable_magic(fields.magic);
    match format {
        OutputFormat::Json => {
            let out = FieldsOutput {
                code,
                hex: format!("{code:#010x}"),
                dir: fields.dir.name(),
                magic: fields.magic,
                magic_char,
                nr: fields.nr,
                size: fields.size,
                command,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["DIR", "MAGIC", "NR", "SIZE", "COMMAND"])
                .add_row(vec![
                    fields.dir.name().to_string(),
                    magic_display(fields.magic, magic_char),
                    fields.nr.to_string(),
                    fields.size.to_string(),
                    command.unwrap_or("-").to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let annotation = command.map(|name| format!(" [{name}]")).unwrap_or_default();
            println!(
                "dir={} magic={} nr={} size={}{}",
                fields.dir.name(),
                magic_display(fields.magic, magic_char),
                fields.nr,
                fields.size,
                annotation
            );
        }
        OutputFormat::Raw => {
            println!(
                "{} {} {} {}",
                fields.dir.bits(),
                fields.magic,
                fields.nr,
                fields.size
            );
        }
    }
}

fn magic_display(magic: u8, magic_char: Option<char>) -> String {
    match magic_char {
        Some(ch) => format!("{magic:#04x} '{ch}'"),
        None => format!("{magic:#04x}"),
    }
}

fn printable_magic(magic: u8) -> Option<char> {
    magic.is_ascii_graphic().then_some(magic as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_annotated_with_its_character_when_printable() {
        assert_eq!(printable_magic(b'p'), Some('p'));
        assert_eq!(printable_magic(0x00), None);
        assert_eq!(printable_magic(0xff), None);
        assert_eq!(magic_display(b'p', Some('p')), "0x70 'p'");
        assert_eq!(magic_display(0x01, None), "0x01");
    }
}
