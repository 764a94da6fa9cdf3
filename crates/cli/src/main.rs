mod cmd;
mod completions;
mod logging;

use cardkit_core::config::ConfigLoader;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::{CompleteEnv, Shell};
use color_eyre::eyre::Result;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cardkit",
    version,
    about = "Inspect dashboard card ranges, sizes, number formatting and variables"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Locale used for number formatting (overrides the config file)
    #[arg(long, global = true, add = ArgValueCompleter::new(completions::complete_locales))]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved settings
    Doctor,

    /// Resolve a range picker token into its descriptor
    Range(RangeArgs),

    /// Compare two time grains (-1, 0 or 1)
    Grain(GrainArgs),

    /// Show the size policy for a card size
    Size(SizeArgs),

    /// Format a number for display
    Format(FormatArgs),

    /// Format a chart tooltip or axis value for a card size
    ChartValue(ChartValueArgs),

    /// Work with `{variable}` placeholders in card files
    #[command(subcommand)]
    Vars(VarsCommand),

    /// Download an image and print it as a data URL
    Fetch(FetchArgs),

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Range token (e.g. "last7Days" or "thisQuarter")
    #[arg(add = ArgValueCompleter::new(completions::complete_range_tokens))]
    pub token: String,

    /// Also print the concrete window anchored at the current local time
    #[arg(long)]
    pub window: bool,
}

#[derive(Debug, Args)]
pub struct GrainArgs {
    /// Current grain, or "none" when unset
    #[arg(add = ArgValueCompleter::new(completions::complete_grains))]
    pub current: String,

    /// Grain to compare against
    #[arg(add = ArgValueCompleter::new(completions::complete_grains))]
    pub other: String,
}

#[derive(Debug, Args)]
pub struct SizeArgs {
    /// Card size name (e.g. MEDIUM or LARGEWIDE)
    #[arg(add = ArgValueCompleter::new(completions::complete_sizes))]
    pub size: String,

    /// Number of attributes the card currently shows
    #[arg(long, default_value_t = 0)]
    pub attributes: usize,

    /// Card name used in size warnings
    #[arg(long)]
    pub card: Option<String>,

    /// Print the policy as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: f64,

    /// Fixed number of fraction digits
    #[arg(long)]
    pub precision: Option<u32>,

    /// Skip K/M/B/T abbreviation
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Args)]
pub struct ChartValueArgs {
    /// Value to render; anything that is not a number renders as "--"
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    #[arg(long, add = ArgValueCompleter::new(completions::complete_sizes))]
    pub size: String,

    /// Unit appended after the value
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum VarsCommand {
    /// List the placeholders a card file uses
    Discover {
        /// Card file (JSON, or YAML for .yaml/.yml)
        file: PathBuf,
    },

    /// Substitute placeholders and print the resolved card as JSON
    Resolve {
        /// Card file (JSON, or YAML for .yaml/.yml)
        file: PathBuf,

        /// Override a variable value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    pub url: String,

    /// Write the downloaded bytes here instead of printing the data URL
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn main() -> Result<()> {
    CompleteEnv::with_factory(Cli::command).complete();
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.locale.as_deref());
            return Ok(());
        }
        Commands::Completions { shell } => {
            completions::print(shell, &mut Cli::command());
            return Ok(());
        }
        _ => {}
    }

    let mut cfg = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        cfg.locale = locale;
    }
    logging::init(&cfg);

    match cli.command {
        Commands::Range(args) => cmd::range::run(&args),
        Commands::Grain(args) => cmd::grain::run(&args),
        Commands::Size(args) => cmd::size::run(&cfg, &args),
        Commands::Format(args) => {
            cmd::format::run(&cfg, &args);
            Ok(())
        }
        Commands::ChartValue(args) => cmd::format::run_chart_value(&cfg, &args),
        Commands::Vars(command) => cmd::vars::run(command),
        Commands::Fetch(args) => cmd::fetch::run(&args),
        Commands::Doctor | Commands::Completions { .. } => Ok(()),
    }
}
