use anyhow::{Context, Result};
use clap::Parser;
use quizrank::correction::languagetool::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use quizrank::{
    extract_file, render, GrammarCorrector, LanguageToolCorrector, NoopCorrector, OutputFormat,
    QuestionPipeline, QuizConfig,
};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "quizrank",
    version,
    about = "Generate study questions from lecture notes, slides or any text document"
)]
struct Cli {
    /// Document to read (.txt, .md, or .pdf with the `pdf` feature)
    file: PathBuf,

    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for multiple-choice option order
    #[arg(long)]
    seed: Option<u64>,

    /// Skip grammar correction
    #[arg(long)]
    no_correct: bool,

    /// LanguageTool check endpoint
    #[arg(long, env = "QUIZRANK_LANGUAGETOOL_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Correction request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Output format: text, json or html
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log pipeline stages
    #[arg(long, short)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<QuizConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            QuizConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => QuizConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn build_corrector(cli: &Cli) -> Box<dyn GrammarCorrector> {
    if cli.no_correct {
        return Box::new(NoopCorrector);
    }
    match LanguageToolCorrector::with_endpoint(&cli.endpoint, Duration::from_secs(cli.timeout)) {
        Ok(corrector) => Box::new(corrector),
        Err(e) => {
            log::warn!("grammar correction disabled: {e}");
            Box::new(NoopCorrector)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(&cli)?;
    let text = extract_file(&cli.file);
    log::debug!("extracted {} bytes from {}", text.len(), cli.file.display());

    let pipeline = QuestionPipeline::with_corrector(config, build_corrector(&cli));
    let questions = match pipeline.try_run(&text) {
        Ok(questions) => questions,
        Err(e) if e.is_content_error() => {
            log::info!("{e}");
            vec![e.sentinel().to_string()]
        }
        Err(e) => return Err(e).context("question generation failed"),
    };
    let rendered = render(&questions, cli.format)?;

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
