// src/main.rs
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use pronunciation_extractor::storage::StorageManager;
use pronunciation_extractor::utils::{self, html_debug, AppError};
use pronunciation_extractor::{ExtractorConfig, PronunciationExtractor, SectionDescriptor};

/// Environment variable consulted for a config file when `--config` is absent.
const CONFIG_ENV_VAR: &str = "PRONUNCIATION_CONFIG";

/// Extract pronunciation data from a dictionary entry page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML file to read, or "-" for stdin
    #[arg(short, long)]
    input: String,

    /// Section id to look for (a leading '#' is ignored)
    #[arg(short, long, default_value = "Pronunciation")]
    section: String,

    /// JSON config overriding selectors and label tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to save the record and its metadata in
    #[arg(short, long)]
    output_dir: Option<String>,

    /// File stem for saved output (defaults to the input file stem)
    #[arg(short, long)]
    name: Option<String>,

    /// Debug mode - save an annotated copy of the input next to the output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Load configuration, flag first, then environment
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));
    let config = match &config_path {
        Some(path) => {
            tracing::info!("Using extractor config: {}", path.display());
            ExtractorConfig::from_json_file(path)?
        }
        None => ExtractorConfig::default(),
    };
    let extractor = PronunciationExtractor::with_config(&config)?;

    // 4. Read the document
    let html = read_input(&args.input)?;
    tracing::info!("Read document ({} bytes)", html.len());

    // 5. Extract
    let section = SectionDescriptor::new(args.section.clone());
    let record = extractor.extract_from_html(&html, &section);
    if record.is_none() {
        tracing::warn!("No pronunciation data found for section '{}'", section.id);
    }
    println!("{}", serde_json::to_string_pretty(&record)?);

    // 6. Optionally persist
    let Some(output_dir) = &args.output_dir else {
        if args.debug {
            return Err(AppError::Config("--debug requires --output-dir".to_string()));
        }
        return Ok(());
    };
    let storage = StorageManager::new(output_dir)?;
    let stem = args.name.clone().unwrap_or_else(|| output_stem(&args.input));

    if args.debug {
        let debug_path = storage.base_dir().join(format!("{}_annotated.html", stem));
        if let Err(e) = html_debug::create_debug_html(&html, &debug_path, html_debug::PRONUNCIATION_DEBUG_PATTERNS) {
            tracing::warn!("Failed to create debug HTML: {}", e);
        }
    }

    if let Some(record) = &record {
        match storage.save_pronunciation(&stem, record) {
            Ok(path) => tracing::info!("Saved pronunciation record to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save pronunciation record: {}", e),
        }
        match storage.save_metadata(&stem, &section, &args.input, record) {
            Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save metadata: {}", e),
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String, AppError> {
    if input == "-" {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn output_stem(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty() && *s != "-")
        .unwrap_or("stdin")
        .to_string()
}
