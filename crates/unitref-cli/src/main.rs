// Rust guideline compliant 2026-02-06

//! Unitref CLI Application
//!
//! Command-line interface for resolving configuration unit identifiers.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use unitref_cli::{commands, create_formatter, load_catalog, should_use_color};
use unitref_core::{Config, FilterMode, Resolution, Resolver, CONFIG_DIR};

#[derive(Parser, Debug)]
#[command(
    name = "uref",
    version,
    about = "Unitref: resolve environment/application identifiers",
    long_about = "Unitref resolves short, possibly ambiguous names into environment/application identifiers from a candidate list of configuration files.",
    after_help = "Examples:\n  uref --catalog files.json all\n  uref apps app1\n  uref envs test\n  uref resolve test app1\n  uref file test/app1\n  uref search app1\n"
)]
struct Cli {
    /// Candidate list file ('-' for stdin)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Configuration directory
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log resolution decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List all application ids
    All {
        /// Print application ids as a flat list
        #[arg(long)]
        list: bool,
    },

    /// List applications, or all environments for the given applications
    #[command(alias = "app")]
    Apps {
        /// Application names (exact)
        names: Vec<String>,
    },

    /// List environments, or all applications for the given environments
    #[command(alias = "env")]
    Envs {
        /// Environment names (exact)
        names: Vec<String>,
    },

    /// List all files, or resolve one file name
    #[command(alias = "files")]
    File {
        /// File query, e.g. test/app1 or app1
        query: Option<String>,

        /// Application, searched as <query>/<application>
        application: Option<String>,
    },

    /// Resolve a query to exactly one application id
    Resolve {
        /// Application id query (full or partial)
        query: String,

        /// Application, searched as <query>/<application>
        application: Option<String>,
    },

    /// Search by application, environment or application id
    Search {
        /// Application, environment or application id
        query: String,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config_dir = PathBuf::from(cli.config.as_deref().unwrap_or(CONFIG_DIR));
    let config = Config::load(&config_dir)?;

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => unitref_core::OutputFormat::Json,
        Some(OutputFormat::Table) => unitref_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => unitref_core::OutputFormat::Plain,
        None if cli.json => unitref_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format, use_color);

    let catalog = load_catalog(cli.catalog.as_deref(), &config, &config_dir)?;
    let resolver = Resolver::with_ranker(config.ranker());
    let mut out = std::io::stdout().lock();

    match command {
        Commands::All { list } => {
            commands::all::execute(&catalog, list, formatter.as_ref(), &mut out)?;
        }
        Commands::Apps { names } => {
            commands::group::execute(
                FilterMode::ByApplication,
                &names,
                &catalog,
                &resolver,
                formatter.as_ref(),
                &mut out,
            )?;
        }
        Commands::Envs { names } => {
            commands::group::execute(
                FilterMode::ByEnvironment,
                &names,
                &catalog,
                &resolver,
                formatter.as_ref(),
                &mut out,
            )?;
        }
        Commands::File { query, application } => {
            commands::file::execute(
                query.as_deref(),
                application.as_deref(),
                &catalog,
                &resolver,
                formatter.as_ref(),
                &mut out,
            )?;
        }
        Commands::Resolve { query, application } => {
            commands::resolve::execute(
                &query,
                application.as_deref(),
                &catalog,
                &resolver,
                formatter.as_ref(),
                &mut out,
            )?;
        }
        Commands::Search { query } => {
            let resolution =
                commands::search::execute(&query, &catalog, &resolver, formatter.as_ref(), &mut out)?;
            if resolution == Resolution::NotFound {
                out.flush()?;
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
