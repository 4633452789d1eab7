use clap::{Parser, Subcommand};
use qirgen::commands::{run_convert, run_id, run_inspect, ConvertArgs, IdArgs, InspectArgs};
use qirgen::config::resolve_config;
use qirgen::logging::init_logging;
use qirgen::QirgenConfig;
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;
use tracing::debug;

fn print_banner() {
    use owo_colors::{OwoColorize, XtermColors};

    let violet = XtermColors::from(99);
    let teal = XtermColors::from(37);

    println!();
    println!("  {}{}", "qir".color(violet).bold(), "gen".color(teal).bold());
    println!(
        "  v{} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE")
    );
    println!();
}

/// qirgen - convert quantum circuits to QIR
#[derive(Parser)]
#[command(name = "qirgen")]
#[command(about = "Convert quantum circuits to QIR", long_about = None)]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print help
    #[arg(short, long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Path to a qirgen.toml (discovered from the working directory otherwise)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Convert a circuit JSON file to QIR
    Convert(ConvertArgs),
    /// Print a circuit's content-derived module ID
    Id(IdArgs),
    /// Summarise a circuit
    Inspect(InspectArgs),
}

/// Application session for the qirgen CLI
#[derive(Clone)]
struct QirgenSession {
    command: Commands,
    config_path: Option<PathBuf>,
    verbose: u8,
    config: QirgenConfig,
}

#[async_trait::async_trait]
impl AppSession for QirgenSession {
    async fn startup(&mut self) -> AppResult {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.config = resolve_config(self.config_path.as_deref(), &cwd)?;
        init_logging(self.verbose, self.config.log_level.as_deref());
        debug!(config = ?self.config, "session started");
        Ok(None)
    }

    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Convert(args) => run_convert(args, &self.config),
            Commands::Id(args) => run_id(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    // Check for help/version flags first to print our custom banner
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 1
        || args.iter().any(|a| a == "--help" || a == "-h")
        || args.iter().any(|a| a == "--version" || a == "-V")
    {
        print_banner();
    }

    let cli = Cli::parse();

    let session = QirgenSession {
        command: cli.command,
        config_path: cli.config,
        verbose: cli.verbose,
        config: QirgenConfig::default(),
    };

    // `App::run` already calls `QirgenSession::execute`; the closure must not
    // dispatch the command a second time.
    let exit_code = App::default()
        .run(session, |_session| async { Ok(None) })
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
