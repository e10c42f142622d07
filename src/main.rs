use std::path::PathBuf;

use clap::Parser;
use fsgen::{ConfigFile, GenError, GenerationReport, Generator, GeneratorOptions};

#[derive(Parser)]
#[command(name = "fsgen")]
#[command(about = "Generate a random, self-consistent filesystem workload script")]
#[command(version)]
struct Cli {
    /// Number of commands to generate
    #[arg()]
    count: Option<u64>,

    /// Output file, or '-' for stdout
    #[arg(short = 'o', long = "output", default_value = "script.txt")]
    output: PathBuf,

    /// Seed for a reproducible script
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Maximum number of live files and directories
    #[arg(long = "capacity")]
    capacity: Option<usize>,

    /// TOML file with generator options
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long = "json")]
    json: bool,
}

fn options_from(cli: &Cli) -> Result<GeneratorOptions, GenError> {
    let mut options = GeneratorOptions::default();
    if let Some(ref path) = cli.config {
        options.merge(ConfigFile::load(path)?);
    }
    if let Some(count) = cli.count {
        options.command_count = count;
    }
    if let Some(capacity) = cli.capacity {
        options.capacity = capacity;
    }
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }
    Ok(options)
}

fn run(cli: &Cli) -> Result<GenerationReport, GenError> {
    let options = options_from(cli)?;
    let to_stdout = cli.output.as_os_str() == "-";
    let report = if to_stdout {
        let mut generator = Generator::new(options)?;
        let (_, report) = generator.run(std::io::stdout().lock())?;
        report
    } else {
        fsgen::generate_to_path(options, &cli.output)?
    };

    if cli.json {
        let json = serde_json::to_string(&report).unwrap_or_default();
        // keep the script stream clean when it is on stdout
        if to_stdout {
            eprintln!("{}", json);
        } else {
            println!("{}", json);
        }
    } else if !to_stdout {
        eprintln!(
            "fsgen: wrote {} lines to {} (seed {})",
            report.lines_written,
            cli.output.display(),
            report.seed
        );
    }
    Ok(report)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("fsgen: {}", e);
        std::process::exit(1);
    }
}
