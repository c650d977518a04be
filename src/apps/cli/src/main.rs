use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use factcheck_ai_adapters::HttpPlatform;
use factcheck_core::ports::ImageInput;
use factcheck_core::{
    global_platform_slot, FeedbackOutcome, PlatformAccessor, Store, StoreSnapshot,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod config;
mod logging;
mod render;

use config::CliConfig;
use render::render_outcome;

#[derive(Parser, Debug)]
#[command(name = "factcheck", version, about = "Fact-check news snippets with an AI model")]
struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a headline and a short news snippet
    Check {
        #[arg(long)]
        headline: String,
        #[arg(long)]
        snippet: String,
    },
    /// Check a long article, one verdict per chunk
    CheckLong {
        #[arg(long)]
        headline: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Extract text from an image file or URL
    Ocr {
        source: String,
        #[arg(long, default_value_t = false)]
        test_mode: bool,
    },
    /// Print the store state after startup
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Commands::Check { headline, snippet } = &cli.command {
        if headline.trim().is_empty() || snippet.trim().is_empty() {
            bail!("Please enter both headline and news snippet.");
        }
    }

    let config = CliConfig::load(cli.config.as_deref())?;
    config.core.validate()?;
    tracing::debug!("Loaded config: {:?}", config);

    let platform = HttpPlatform::new(config.platform.clone())?;
    global_platform_slot().inject(Arc::new(platform));

    let store = Store::new(PlatformAccessor::global(), config.core.clone());
    store.init();
    let snapshot = store.settled().await;
    if let Some(error) = &snapshot.error {
        tracing::warn!("Startup finished with error: {}", error);
    }

    match cli.command {
        Commands::Check { headline, snippet } => {
            run_check(&store, headline.trim(), snippet.trim()).await
        }
        Commands::CheckLong { headline, file } => run_check_long(&store, &headline, &file).await,
        Commands::Ocr { source, test_mode } => run_ocr(&store, &source, test_mode).await,
        Commands::Status => {
            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
            Ok(())
        }
    }
}

/// Signs in when needed; checks only run for an authenticated session.
async fn ensure_signed_in(store: &Store) -> anyhow::Result<()> {
    if !store.snapshot().auth.is_authenticated {
        store.sign_in().await;
    }
    require_signed_in(&store.snapshot())
}

fn require_signed_in(snapshot: &StoreSnapshot) -> anyhow::Result<()> {
    if snapshot.auth.is_authenticated {
        return Ok(());
    }
    bail!(snapshot
        .error
        .clone()
        .unwrap_or_else(|| "Sign in failed".to_string()))
}

fn is_failure(outcome: &FeedbackOutcome) -> bool {
    matches!(
        outcome,
        FeedbackOutcome::RequestFailed | FeedbackOutcome::Unavailable
    )
}

/// Turns a failed outcome into an error carrying the store's message.
fn check_outcome(outcome: &FeedbackOutcome, error: Option<String>) -> anyhow::Result<()> {
    if !is_failure(outcome) {
        return Ok(());
    }
    bail!(error.unwrap_or_else(|| {
        outcome
            .sentinel()
            .unwrap_or("Platform not available")
            .to_string()
    }))
}

async fn run_check(store: &Store, headline: &str, snippet: &str) -> anyhow::Result<()> {
    ensure_signed_in(store).await?;

    let outcome = store.feedback(headline, snippet).await;
    if !is_failure(&outcome) {
        println!("{}", render_outcome(&outcome));
    }
    check_outcome(&outcome, store.snapshot().error)
}

async fn run_check_long(store: &Store, headline: &str, file: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    if headline.trim().is_empty() || text.trim().is_empty() {
        bail!("Please enter both headline and news snippet.");
    }

    ensure_signed_in(store).await?;

    let outcomes = store.feedback_long(headline.trim(), &text).await;
    let total = outcomes.len();
    for (index, outcome) in outcomes.iter().enumerate() {
        println!("--- Chunk {}/{} ---", index + 1, total);
        println!("{}", render_outcome(outcome));
    }

    let failed = outcomes.iter().filter(|o| is_failure(o)).count();
    if failed > 0 {
        let reason = store
            .snapshot()
            .error
            .unwrap_or_else(|| "AI request failed".to_string());
        bail!("{} of {} chunks failed: {}", failed, total, reason);
    }
    Ok(())
}

async fn run_ocr(store: &Store, source: &str, test_mode: bool) -> anyhow::Result<()> {
    let image = load_image(source).await?;

    match store.img2txt(image, test_mode).await {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => bail!(store
            .snapshot()
            .error
            .unwrap_or_else(|| "Image to text conversion failed".to_string())),
    }
}

async fn load_image(source: &str) -> anyhow::Result<ImageInput> {
    if ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| source.starts_with(scheme))
    {
        return Ok(ImageInput::Url(source.to_string()));
    }

    let path = Path::new(source);
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    Ok(ImageInput::Bytes {
        data,
        mime_type: mime_type_for(path).to_string(),
    })
}

fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/png",
    }
}
