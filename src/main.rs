//! project-autocomplete CLI

use clap::Parser;
use project_autocomplete::{
    load_project, project_sources, AutocompleteEngine, EngineConfig, FileSource, TextDocument,
    WordSource,
};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-autocomplete")]
#[command(about = "Aggregate word completions from all open files and project folders")]
#[command(version)]
struct Cli {
    /// Active buffer to complete in (use - for stdin)
    file: PathBuf,

    /// Completion prefix
    prefix: String,

    /// Cursor position in the active buffer (byte offset)
    location: Option<usize>,

    /// Project configuration JSON listing folders to scan
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Additional source file to draw words from (repeatable)
    #[arg(short, long = "source")]
    sources: Vec<PathBuf>,

    /// Engine configuration JSON (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Maximum number of completions to print
    #[arg(short, long)]
    limit: Option<usize>,

    /// Verbose output (source counts to stderr)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(format!("Unknown format: {}. Use 'json' or 'plain'", s)),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Read the active buffer
    let view = if cli.file.to_string_lossy() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        TextDocument::new("stdin", buf)
    } else {
        TextDocument::from_path(&cli.file)?
    };

    let config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };

    // Collect non-active sources: explicit files first, then the project
    // folders. A broken project config costs its words, not the request.
    let mut file_sources: Vec<FileSource> =
        cli.sources.iter().map(FileSource::new).collect();
    if let Some(project_path) = &cli.project {
        match load_project(project_path) {
            Ok(project) => {
                file_sources.extend(project_sources(&project, config.max_files));
            }
            Err(e) => log::warn!("ignoring project config: {e}"),
        }
    }
    let sources: Vec<&dyn WordSource> = file_sources
        .iter()
        .map(|s| s as &dyn WordSource)
        .collect();

    let engine = AutocompleteEngine::with_config(config);
    let locations: Vec<usize> = cli.location.into_iter().collect();

    if cli.verbose {
        eprintln!(
            "Completing {:?} in {} with {} extra sources",
            cli.prefix,
            view.name(),
            sources.len()
        );
    }

    let mut completions = engine.complete(&view, &cli.prefix, &locations, &sources);
    if let Some(limit) = cli.limit {
        completions.truncate(limit);
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&completions)?);
        }
        OutputFormat::Plain => {
            for entry in &completions {
                println!("{}", entry.trigger);
            }
            if cli.verbose {
                eprintln!("\n{} completions", completions.len());
            }
        }
    }

    Ok(())
}
