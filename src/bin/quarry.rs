//! quarry: compile query descriptors from the command line
//!
//! # Usage
//!
//! ```bash
//! # Compile a read
//! quarry compile animal.json --action read
//!
//! # JSON output for another tool
//! quarry compile animal.toml --action update --format json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use quarry::config::{Config, OutputFormat};
use quarry::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quarry")]
#[command(version)]
#[command(about = "Compile query descriptors into parameterized SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    quarry compile animal.json --action read
    quarry compile animal.toml --action create --format json
    quarry roles")]
struct Cli {
    /// Config file (defaults to ./quarry.toml, then the user config dir)
    #[arg(long, env = "QUARRY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    Create,
    Read,
    Update,
    Delete,
    Count,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Create => Action::Create,
            ActionArg::Read => Action::Read,
            ActionArg::Update => Action::Update,
            ActionArg::Delete => Action::Delete,
            ActionArg::Count => Action::Count,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a descriptor file (JSON or TOML)
    Compile {
        /// Descriptor file
        file: PathBuf,

        /// Statement to build
        #[arg(short, long, value_enum, default_value = "read")]
        action: ActionArg,

        /// Dialect name (overrides config)
        #[arg(short, long)]
        dialect: Option<String>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// List registered dialects
    Dialects,
    /// Show how schema roles are written
    Roles,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("loading config")?;
    init_tracing(&config, cli.verbose);

    match &cli.command {
        Commands::Compile {
            file,
            action,
            dialect,
            format,
        } => {
            let dialect = match dialect {
                Some(name) => name.parse::<Dialect>()?,
                None => config.dialect,
            };
            let format = match format {
                Some(FormatArg::Text) => OutputFormat::Text,
                Some(FormatArg::Json) => OutputFormat::Json,
                None => config.format,
            };
            compile_file(file, (*action).into(), dialect, format)
        }
        Commands::Dialects => {
            show_dialects();
            Ok(())
        }
        Commands::Roles => {
            show_roles();
            Ok(())
        }
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let default = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_descriptor(path: &Path) -> Result<QueryDescriptor> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let descriptor = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => QueryDescriptor::from_json(&content).map_err(QuarryError::from)?,
        Some("toml") => QueryDescriptor::from_toml(&content).map_err(QuarryError::from)?,
        _ => bail!("{}: expected a .json or .toml descriptor", path.display()),
    };
    Ok(descriptor)
}

fn compile_file(path: &Path, action: Action, dialect: Dialect, format: OutputFormat) -> Result<()> {
    let descriptor = load_descriptor(path)?;
    let result = descriptor.compile_with_dialect(action, dialect);

    match format {
        OutputFormat::Json => {
            let output = match &result {
                Ok(compiled) => serde_json::to_value(compiled)?,
                Err(e) => serde_json::json!({ "body": false, "error": e.to_string() }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => match &result {
            Ok(compiled) => print_compiled(compiled, action, dialect),
            Err(e) => {
                println!("{} {}", "body:".dimmed(), "false".red().bold());
                println!("{} {}", "reason:".dimmed(), e);
            }
        },
    }

    if let Err(e) = result {
        bail!("{} on '{}' did not compile: {}", action, descriptor.scope, e);
    }
    Ok(())
}

fn print_compiled(compiled: &CompiledQuery, action: Action, dialect: Dialect) {
    println!(
        "{} {} {}",
        "Generated SQL".green().bold(),
        format!("({})", action).dimmed(),
        format!("[{}]", dialect).cyan()
    );
    println!("{}", compiled.body.white());

    if !compiled.params.is_empty() {
        println!();
        println!("{}", "Bindings:".cyan());
        for (name, value) in &compiled.params {
            println!("  :{} = {}", name, value.to_string().yellow());
        }
    }
}

fn show_dialects() {
    println!("{}", "Registered dialects".cyan().bold());
    for dialect in Dialect::ALL {
        let marker = if dialect == Dialect::default() { " (default)" } else { "" };
        println!("  • {}{}", dialect.name().white(), marker.dimmed());
    }
}

fn show_roles() {
    println!("{}", "Schema roles".cyan().bold());
    println!();
    println!(
        "{:14} {:12} {}",
        "Role".white().bold(),
        "Create".white().bold(),
        "Update".white().bold()
    );
    println!("{}", "─".repeat(40).dimmed());

    let rows = [
        (ColumnRole::AutoIdentity, "NULL", "omitted"),
        (ColumnRole::AutoGuid, "bound", "bound"),
        (ColumnRole::CreateDate, "NOW()", "omitted"),
        (ColumnRole::CreateIdUser, "bound", "omitted"),
        (ColumnRole::UpdateDate, "NOW()", "NOW()"),
        (ColumnRole::UpdateIdUser, "bound", "bound"),
        (ColumnRole::Deleted, "bound", "bound"),
        (ColumnRole::DeleteIdUser, "omitted", "omitted"),
        (ColumnRole::DeleteDate, "omitted", "omitted"),
        (ColumnRole::Standard, "bound", "bound"),
    ];
    for (role, create, update) in rows {
        println!(
            "{:14} {:12} {}",
            role.to_string().yellow(),
            create,
            update
        );
    }
}
