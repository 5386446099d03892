use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use classfinder::cli::output::{print_matches, OutputFormat};
use classfinder::cli::USAGE;
use classfinder::{ClassFinder, Config};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "classfinder")]
#[command(version, about = "Find classes by camel-case abbreviation", long_about = None)]
struct Cli {
    /// File with one qualified class name per line, followed by the search pattern
    /// (e.g. `FB`, `fbb`, `B*Baz`, `'FBar '`)
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip classes whose qualified name matches this regex
    #[arg(short = 'x', long, value_name = "REGEX")]
    exclude: Vec<String>,

    /// Config file (overrides global and local config)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "classfinder", &mut io::stdout());
        return Ok(());
    }

    let [file, pattern] = cli.args.as_slice() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    config.exclude_patterns.extend(cli.exclude);

    let finder = ClassFinder::new(&config);
    let classes = finder.find_in_file(Path::new(file), pattern)?;

    let colored = config.color && io::stdout().is_terminal();
    print_matches(pattern, &classes, colored, config.format).context("Failed to write results")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CLASSFINDER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
