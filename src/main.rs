use clap::{Parser, Subcommand};
use scrimmage_analysis::PlayAnalyzer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod runner;

#[derive(Parser)]
#[command(name = "scrimmage")]
#[command(about = "Map NFL player detections onto the field and call the defensive coverage")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single detection file
    Analyze {
        /// Detection JSON (`{"predictions": [...]}` or a bare list)
        input: PathBuf,

        /// Write the analysis here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pipeline config JSON; missing keys keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Analyze every `*.json` file in a directory
    Batch {
        input_dir: PathBuf,

        /// Each play is written to `<output_dir>/<name>/output.json`
        output_dir: PathBuf,

        /// Overwrite outputs that already exist
        #[arg(long)]
        force: bool,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the default pipeline config
    PrintConfig,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { input, output, config } => {
            let analyzer = PlayAnalyzer::new(runner::load_config(config.as_deref())?);
            let result = runner::analyze_file(&analyzer, &input, output.as_deref())?;
            if output.is_some() {
                println!(
                    "{}: {} ({} offense, {} defense)",
                    input.display(),
                    result.coverage_analysis.coverage_call,
                    result.play.team_stats.offense_count,
                    result.play.team_stats.defense_count
                );
            }
        }
        Command::Batch {
            input_dir,
            output_dir,
            force,
            config,
        } => {
            let analyzer = PlayAnalyzer::new(runner::load_config(config.as_deref())?);
            let report = runner::run_batch(&analyzer, &input_dir, &output_dir, force)?;
            println!("{report}");
        }
        Command::PrintConfig => {
            let analyzer = PlayAnalyzer::default();
            println!("{}", analyzer.config().to_json_pretty()?);
        }
    }

    Ok(())
}
