use clap::Parser;

use clipnote::cli::Cli;
use clipnote::config::Config;
use clipnote::error::Result;
use clipnote::summarize::GeminiSummarizer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("clipnote error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (request, config_path) = cli.into_request();
    let config = Config::load(config_path.as_deref())?;

    // The key is only required when a summary will actually be requested.
    let api_key = if request.extract_only {
        String::new()
    } else {
        config.api_key()?.to_string()
    };
    let summarizer = GeminiSummarizer::new(api_key, config.model_id.clone())?;

    let clipping = clipnote::clip(&request, &config, &summarizer).await?;
    println!(
        "Clipping \"{}\" created at {}",
        clipping.title,
        clipping.path.display()
    );
    Ok(())
}
