use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use morsepanel::{init_logging, plan, write_scripts, Config, BUILD_DATE, FATAL_EXIT_CODE, VERSION};
use tracing::info;

#[derive(Parser)]
#[command(name = "morsepanel", version, about = "Lay out Morse code slots on a panel and write CAD scripts")]
struct Cli {
    #[arg(help = "Increase log detail (-v info, -vv per-glyph trace)", short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Lay out the panel and write one script per subpanel")]
    Generate {
        #[arg(help = "Design file (.toml or .json); the security gate design when omitted", short, long)]
        config: Option<PathBuf>,

        #[arg(help = "Directory for the script files, overrides the config", short, long)]
        output: Option<PathBuf>,

        #[arg(help = "Text to lay out, overrides the config", long)]
        text: Option<String>,

        #[arg(help = "Lay out and report without writing scripts", long, default_value_t = false)]
        dry_run: bool,

        #[arg(help = "Print the layout report as JSON", long, default_value_t = false)]
        json: bool,
    },

    #[command(about = "Write the default design to a config file")]
    Init {
        #[arg(help = "Config file to create (.toml or .json)")]
        path: PathBuf,

        #[arg(help = "Overwrite an existing file", long, default_value_t = false)]
        force: bool,
    },
}

fn generate(
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    text: Option<String>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = match config {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(text) = text {
        config.design.text = text;
        config.validate()?;
    }
    if let Some(output) = output {
        config.output.directory = output;
    }

    let report = plan(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for row in &report.layout.rows {
            println!("{}", row.text);
        }
        println!();
        println!("{}", report.utilization_line(config.output.report_precision));
    }

    if dry_run {
        return Ok(());
    }
    let written = write_scripts(&report, &config.script, &config.output.directory)
        .with_context(|| format!("writing scripts to {}", config.output.directory.display()))?;
    if !json {
        for script in &written {
            println!("{}", script.summary_line());
        }
    }
    Ok(())
}

fn init(path: PathBuf, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists, use --force to overwrite", path.display());
    }
    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("default design written to {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose)?;
    info!("morsepanel {} (built {})", VERSION, BUILD_DATE);

    match cli.command {
        Commands::Generate {
            config,
            output,
            text,
            dry_run,
            json,
        } => generate(config, output, text, dry_run, json),
        Commands::Init { path, force } => init(path, force),
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(FATAL_EXIT_CODE);
    }
}
