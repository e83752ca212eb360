//! Contract Lens CLI
//!
//! `contract-lens analyze` prints the analysis of a document as JSON on
//! stdout. `contract-lens patterns` lists the risk catalog. Logs go to
//! stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contract_lens::adapters::{
    AiNarrativeGenerator, AiRewriteSuggester, DocumentTextExtractor, GeminiConfig,
    GeminiProvider, GenerationSettings,
};
use contract_lens::application::{
    AnalysisOrchestrator, AnalyzeDocumentCommand, AnalyzeTextCommand, ResponseAssembler,
};
use contract_lens::config::{AppConfig, TelemetryConfig};
use contract_lens::domain::foundation::AnalysisId;
use contract_lens::domain::risk::{PatternCatalog, RiskDetector};
use contract_lens::ports::AIProvider;

#[derive(Parser, Debug)]
#[command(name = "contract-lens")]
#[command(version, about = "Flag risky clauses in legal documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse a document or a string of text
    Analyze(AnalyzeArgs),
    /// List the risk patterns the detector looks for
    Patterns,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct AnalyzeArgs {
    /// PDF, DOCX or TXT file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Raw text to analyse
    #[arg(short, long)]
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.telemetry);

    match cli.command {
        Command::Analyze(args) => analyze(&config, args).await?,
        Command::Patterns => print_patterns(),
    }

    Ok(())
}

fn init_tracing(telemetry: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&telemetry.log_level));

    if telemetry.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_provider(config: &AppConfig) -> Option<Arc<dyn AIProvider>> {
    let key = config.ai.gemini_api_key.as_deref().filter(|_| config.ai.has_gemini_key())?;

    let gemini = GeminiConfig::new(key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());

    match GeminiProvider::new(gemini) {
        Ok(provider) => {
            info!(provider = "gemini", model = %config.ai.model, "AI provider configured");
            Some(Arc::new(provider))
        }
        Err(err) => {
            warn!(error = %err, "could not build Gemini client; continuing without AI");
            None
        }
    }
}

fn build_orchestrator(config: &AppConfig) -> AnalysisOrchestrator {
    let provider = build_provider(config);
    let settings = GenerationSettings {
        max_output_tokens: config.ai.max_output_tokens,
        temperature: config.ai.temperature,
    };

    let narrative = AiNarrativeGenerator::new(provider.clone())
        .with_policy(config.analysis.summary_policy())
        .with_settings(settings);
    let rewriter = AiRewriteSuggester::new(provider).with_settings(settings);

    AnalysisOrchestrator::new(
        RiskDetector::new(PatternCatalog::standard())
            .with_settings(config.analysis.detector_settings()),
        Arc::new(narrative),
        Arc::new(rewriter),
        Arc::new(DocumentTextExtractor::new(config.analysis.max_document_bytes)),
    )
    .with_boundary_timeout(config.analysis.boundary_timeout())
}

async fn analyze(config: &AppConfig, args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = build_orchestrator(config);
    let analysis_id = AnalysisId::new();

    let result = match (args.file, args.text) {
        (Some(path), _) => {
            let bytes = tokio::fs::read(&path).await?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            orchestrator
                .analyze_document(analysis_id, AnalyzeDocumentCommand { file_name, bytes })
                .await?
        }
        (None, Some(text)) => {
            orchestrator
                .analyze_text(
                    analysis_id,
                    AnalyzeTextCommand {
                        document_name: None,
                        text,
                    },
                )
                .await?
        }
        (None, None) => return Err("either --file or --text is required".into()),
    };

    let response = ResponseAssembler::assemble(analysis_id, &result);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn print_patterns() {
    for pattern in PatternCatalog::standard().iter() {
        println!(
            "{:<24} {:<6} {}",
            pattern.name(),
            pattern.severity().as_str(),
            pattern.explanation()
        );
    }
}
