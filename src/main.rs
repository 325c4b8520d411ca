use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use arithmos::io_utils::{arithmos_cli_error, io_cli_error, simple_cli_error};
use arithmos::{CalculationMethod, CharacterValueTable, Config, Contribution, Selection};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arithmos", about = "Gematria values of Latin, Greek and Hebrew text")]
struct Args {
    /// Log at debug level unless RUST_LOG is set
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value of TEXT under each selected method
    Value {
        text: String,
        /// Method to report (repeatable); defaults to the config selection
        #[arg(long = "method", short = 'm')]
        methods: Vec<String>,
        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Table CSV to use instead of the builtin one
        #[arg(long)]
        table: Option<PathBuf>,
        /// Upper-case TEXT before computing
        #[arg(long)]
        uppercase: bool,
        /// Also list every character's contribution
        #[arg(long)]
        breakdown: bool,
        #[arg(long)]
        json: bool,
    },
    /// Write the active table as CSV
    Table {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output path; stdout if omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Apply toggles to a selection and print the result
    Toggle {
        /// Starting selection (repeatable); empty if omitted
        #[arg(long = "from")]
        from: Vec<String>,
        /// Methods to toggle, in order
        #[arg(required = true)]
        methods: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Value {
            text,
            methods,
            config,
            table,
            uppercase,
            breakdown,
            json,
        } => {
            let config = load_config(config, table)?;
            let selection = if methods.is_empty() {
                config.methods
            } else {
                CalculationMethod::from_names(&methods)
                    .map_err(|e| arithmos_cli_error("parsing --method", e))?
            };
            let table = config
                .load_table()
                .map_err(|e| arithmos_cli_error("loading table", e))?;
            let text = if uppercase { text.to_uppercase() } else { text };
            let selection = if config.skip_inapplicable {
                applicable_methods(&table, &text, selection)
            } else {
                selection
            };
            debug!(%selection, "computing values");
            report_values(&table, &text, selection, breakdown, json)
        }
        Command::Table {
            config,
            table,
            output,
        } => {
            let config = load_config(config, table)?;
            let table = config
                .load_table()
                .map_err(|e| arithmos_cli_error("loading table", e))?;
            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| io_cli_error("creating table", &path, e))?;
                    table
                        .to_csv_writer(file)
                        .map_err(|e| arithmos_cli_error("writing table", e))?;
                    info!(path = %path.display(), rows = table.len(), "wrote table");
                }
                None => table
                    .to_csv_writer(io::stdout().lock())
                    .map_err(|e| arithmos_cli_error("writing table", e))?,
            }
            Ok(())
        }
        Command::Toggle {
            from,
            methods,
            json,
        } => {
            let start =
                CalculationMethod::from_names(&from).map_err(|e| arithmos_cli_error("parsing --from", e))?;
            let mut selection = Selection::new(start);
            for name in &methods {
                let method = name
                    .parse::<CalculationMethod>()
                    .map_err(|e| arithmos_cli_error("parsing toggle", e))?;
                let now = selection.toggle(method);
                debug!(toggled = %method, selection = %now, "toggle");
            }
            if json {
                println!("{}", serde_json::to_string(&selection)?);
            } else {
                println!("{}", selection.current());
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>, table: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(p) => Config::load(&p).map_err(|e| arithmos_cli_error("loading config", e))?,
        None => Config::default(),
    };
    if table.is_some() {
        config.table = table;
    }
    Ok(config)
}

/// Drop methods that mean nothing for every script present in `text`.
/// Text with no table characters keeps the whole selection.
fn applicable_methods(table: &CharacterValueTable, text: &str, selection: CalculationMethod) -> CalculationMethod {
    let scripts: Vec<_> = text.chars().filter_map(|c| table.lookup(c).map(|r| r.script)).collect();
    if scripts.is_empty() {
        return selection;
    }
    selection
        .iter_methods()
        .filter(|m| scripts.iter().any(|s| s.supports(*m)))
        .fold(CalculationMethod::empty(), |acc, m| acc | m)
}

fn report_values(
    table: &CharacterValueTable,
    text: &str,
    selection: CalculationMethod,
    breakdown: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if selection.is_empty() {
        return Err(simple_cli_error("no calculation methods selected").into());
    }

    let mut values = BTreeMap::new();
    let mut parts: BTreeMap<&str, Vec<Contribution>> = BTreeMap::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for method in selection.iter_methods() {
        let name = method.name().unwrap_or_default();
        let total = table
            .compute_value(text, method)
            .map_err(|e| arithmos_cli_error("computing value", e))?;
        let contributions = if breakdown {
            table
                .breakdown(text, method)
                .map_err(|e| arithmos_cli_error("computing breakdown", e))?
        } else {
            Vec::new()
        };

        if !json {
            writeln!(out, "{name}: {total}")?;
            for c in &contributions {
                writeln!(out, "  {} = {}", c.character, c.value)?;
            }
        }
        values.insert(name, total);
        if breakdown {
            parts.insert(name, contributions);
        }
    }

    if json {
        let mut doc = serde_json::json!({ "text": text, "values": values });
        if breakdown {
            doc["breakdown"] = serde_json::to_value(&parts)?;
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    }
    Ok(())
}
