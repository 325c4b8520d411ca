use arithmos::io_utils::{arithmos_cli_error, simple_cli_error};
use arithmos::{CharacterValueTable, Script};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Table CSV to check; the builtin table if omitted
    table: Option<PathBuf>,
    /// Expected hex SHA-256 of the canonical CSV form
    #[arg(long)]
    expect: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let loaded;
    let table = match &args.table {
        Some(path) => {
            loaded = CharacterValueTable::from_csv_path(path)
                .map_err(|e| arithmos_cli_error("loading table", e))?;
            &loaded
        }
        None => CharacterValueTable::builtin(),
    };

    let checksum = table
        .checksum()
        .map_err(|e| arithmos_cli_error("hashing table", e))?;
    for script in Script::ALL {
        println!("{}: {} characters", script, table.script_records(script).count());
    }
    println!("sha256: {checksum}");

    if let Some(expected) = args.expect {
        if !expected.eq_ignore_ascii_case(&checksum) {
            return Err(simple_cli_error(&format!("checksum mismatch: expected {expected}")).into());
        }
    }
    Ok(())
}
