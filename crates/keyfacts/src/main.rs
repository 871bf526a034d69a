use anyhow::Result;
use clap::{Parser, Subcommand};
use keyfacts_common::{logger, AppConfig};
use keyfacts_llm::{PerplexityClient, SummaryPipeline};
use keyfacts_points::PointBudget;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "keyfacts")]
#[command(about = "Keyfacts - topic and text summarization into headed bullet points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // Override with CLI arguments before loading config
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Keyfacts starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Model: {}", config.llm_model);

            println!("Server listening on http://{}:{}", host, port);

            keyfacts_server::start_server(config).await?;
        }
        None => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            run_interactive(&config).await?;
        }
    }

    Ok(())
}

/// One-shot interactive mode: short input is a topic, longer input is text
async fn run_interactive(config: &AppConfig) -> Result<()> {
    print!("Enter a topic name or paste text: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        anyhow::bail!("No input provided");
    }

    let client = PerplexityClient::new(&config.api_base_url, &config.api_key)?;
    let pipeline = SummaryPipeline::new(
        Arc::new(client),
        &config.llm_model,
        PointBudget::Range(config.points_min, config.points_max),
    );

    let output = if input.split_whitespace().count() < 5 {
        println!("Fetching details from the content service...");
        pipeline.summarize_topic(input).await
    } else {
        pipeline.summarize_text(input).await
    };

    println!("\nGenerated key points:");
    for point in &output.points {
        println!("{}", point);
    }

    Ok(())
}
