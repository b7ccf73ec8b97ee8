//! Registry dump example — decodes every cpipe command code.
//!
//! Run with:
//!   cargo run --example registry-dump

use cpipectl::cpipe;
use cpipectl::ioc::decode;

fn main() {
    println!("cpipe commands (magic {:#04x} '{}'):", cpipe::MAGIC, cpipe::MAGIC as char);
    for cmd in cpipe::COMMANDS {
        let fields = decode(cmd.code);
        println!(
            "  {:<20} {:>10} ({:#010x})  dir={} nr={} size={}",
            cmd.name,
            cmd.code,
            cmd.code,
            fields.dir.name(),
            fields.nr,
            fields.size
        );
    }
    println!("highest assigned command number: {}", cpipe::MAX_NR);
}
