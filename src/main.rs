// filingscan - analyze a quarterly filing from the command line
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use filingscan::{AnalyzerConfig, ExtractionMode, FilingAnalyzer, FilingError, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze a financial document (e.g., 10-Q report)")]
struct Args {
    /// Path to the PDF file to analyze
    file: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat FILE as already-extracted UTF-8 text
    #[arg(long)]
    from_text: bool,

    /// Override how page text is obtained
    #[arg(long, value_enum)]
    mode: Option<ExtractionMode>,

    /// Render resolution for OCR
    #[arg(long)]
    dpi: Option<u32>,

    /// Tesseract language
    #[arg(long)]
    lang: Option<String>,

    /// -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "filingscan=warn",
        1 => "filingscan=info",
        _ => "filingscan=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<AnalyzerConfig> {
    let mut config = AnalyzerConfig::discover(args.config.as_deref())?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(dpi) = args.dpi {
        config.ocr.dpi = dpi;
    }
    if let Some(lang) = &args.lang {
        config.ocr.language = lang.clone();
    }
    Ok(config)
}

fn open_analyzer(path: &Path, from_text: bool, config: AnalyzerConfig) -> filingscan::Result<FilingAnalyzer> {
    if !from_text {
        return FilingAnalyzer::open(path, config);
    }
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FilingError::FileNotFound(path.to_path_buf()),
        _ => FilingError::Io(e),
    })?;
    Ok(FilingAnalyzer::from_text(text, config)?.with_source(path.display().to_string()))
}

fn run(args: &Args) -> Result<String> {
    let config = load_config(args)?;
    let analyzer = open_analyzer(&args.file, args.from_text, config)?;
    let report = analyzer.full_report();
    report.render(args.format).context("failed to serialize report")
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            match err.downcast_ref::<FilingError>() {
                Some(FilingError::FileNotFound(_)) => {
                    eprintln!("Error: File '{}' not found.", args.file.display());
                }
                _ => eprintln!("Error analyzing document: {:#}", err),
            }
            process::exit(1);
        }
    }
}
