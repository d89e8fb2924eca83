//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use sass_glob_import::output::OutputMode;

/// sass-glob-import - Expand wildcard imports in Sass stylesheets
#[derive(Parser, Debug)]
#[command(
    name = "sass-glob-import",
    version,
    about = "Expand wildcard imports in Sass stylesheets",
    long_about = "Rewrite @import, @use and @include meta.load-css directives whose path \
                  contains a wildcard.\n\n\
                  Each wildcard directive is replaced by one directive per matching \
                  stylesheet, resolved relative to the file being processed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand wildcard directives in a stylesheet
    Expand {
        /// Stylesheet to process
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// List wildcard directives and the files they resolve to
    Scan {
        /// Stylesheet to inspect
        file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Create a .sassglob.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Options shared by commands that expand directives
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Config file to use instead of the nearest .sassglob.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip paths matching this glob (repeatable)
    #[arg(short, long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Alias every expanded @use with this namespace (e.g. "*")
    #[arg(short, long, conflicts_with = "derive_namespace")]
    pub namespace: Option<String>,

    /// Derive @use namespaces from file paths
    #[arg(long)]
    pub derive_namespace: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Expand {
            file,
            output,
            options,
        }) => commands::expand(&file, output.as_deref(), &options, output_mode),
        Some(Command::Scan { file, options }) => commands::scan(&file, &options, output_mode),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("sass-glob-import v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("sass-glob-import v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'sass-glob-import --help' for usage");
                println!("Run 'sass-glob-import expand <file>' to expand a stylesheet");
            }
            Ok(())
        },
    }
}
