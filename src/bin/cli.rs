//! OralScan CLI
//!
//! Command-line interface for the screening services:
//! - Classify an image and download its PDF report
//! - Chat with the AskOral chatbot
//! - Check upstream status
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

use oralscan::config::{generate_default_config, Config};
use oralscan::logging::init_tracing;
use oralscan::upstream::{ChatbotClient, PredictorClient};
use oralscan_core::{
    render_entry, ChatWidget, ClassificationResult, ClientSettings, ReplyFormat, ReplyView,
    ResultPresentation, SelectedImage, TransportError, UploadFlow,
};

#[derive(Parser)]
#[command(name = "oralscan-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Oral cancer image screening from the terminal")]
#[command(long_about = "OralScan CLI sends histopathologic images to the predictor,\nfetches PDF reports and talks to the AskOral chatbot.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Predictor URL (overrides config)
    #[arg(long, global = true)]
    pub predictor_url: Option<String>,

    /// Chatbot URL (overrides config)
    #[arg(long, global = true)]
    pub chat_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Show info-level logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify an image
    Classify {
        /// Path to the image
        image: PathBuf,
        /// Also download the PDF report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Ask the chatbot a question (interactive when no message is given)
    Chat {
        /// Message to send
        message: Vec<String>,
    },

    /// Show upstream status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, &content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Wrote default config to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let (mut config, config_path) =
        Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = &cli.predictor_url {
        config.endpoints.predictor_url = url.clone();
    }
    if let Some(url) = &cli.chat_url {
        config.endpoints.chat_url = url.clone();
    }
    if !cli.verbose {
        config.logging.level = "warn".to_string();
    }

    init_tracing(&config.logging);
    if let Some(path) = &config_path {
        tracing::info!("Loaded config from {:?}", path);
    }

    let settings = config.ui.client_settings();

    match cli.command {
        Commands::Classify { image, report } => {
            let predictor = PredictorClient::new(&config.endpoints)?;
            classify(&predictor, &settings, &image, report.as_deref(), cli.format).await?;
        }

        Commands::Chat { message } => {
            let chatbot = ChatbotClient::new(&config.endpoints)?;
            let mut widget = ChatWidget::new();

            if message.is_empty() {
                chat_repl(&chatbot, &mut widget, settings.reply_format).await?;
            } else {
                widget.set_input(message.join(" "));
                if !widget.send_message(&chatbot).await {
                    anyhow::bail!("Message cannot be empty");
                }
                print_bot_reply(&widget, settings.reply_format, cli.format)?;
            }
        }

        Commands::Status => {
            let predictor = PredictorClient::new(&config.endpoints)?;
            let chatbot = ChatbotClient::new(&config.endpoints)?;
            let (predictor_health, chatbot_health) =
                tokio::join!(predictor.health_check(), chatbot.health_check());

            let describe = |result: &Result<(), oralscan::UpstreamError>| match result {
                Ok(()) => "ok".to_string(),
                Err(e) => e.to_string(),
            };

            match cli.format {
                OutputFormat::Json => {
                    let status = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "config": config_path,
                        "predictor": {
                            "url": predictor.base_url(),
                            "status": describe(&predictor_health),
                        },
                        "chatbot": {
                            "url": chatbot.base_url(),
                            "status": describe(&chatbot_health),
                        },
                    });
                    println!("{}", serde_json::to_string_pretty(&status)?);
                }
                OutputFormat::Text => {
                    println!("OralScan v{}", env!("CARGO_PKG_VERSION"));
                    match &config_path {
                        Some(path) => println!("Config: {}", path.display()),
                        None => println!("Config: defaults"),
                    }
                    println!();
                    println!("{:<10} {:<32} {}", "Service", "URL", "Status");
                    println!("{}", "-".repeat(60));
                    println!(
                        "{:<10} {:<32} {}",
                        "predictor",
                        predictor.base_url(),
                        describe(&predictor_health)
                    );
                    println!(
                        "{:<10} {:<32} {}",
                        "chatbot",
                        chatbot.base_url(),
                        describe(&chatbot_health)
                    );
                }
            }

            if predictor_health.is_err() || chatbot_health.is_err() {
                std::process::exit(1);
            }
        }

        // Written before config resolution
        Commands::Config { .. } => {}
    }

    Ok(())
}

async fn classify(
    predictor: &PredictorClient,
    settings: &ClientSettings,
    path: &Path,
    report: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {:?}", path))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    let mut flow = UploadFlow::new();
    flow.select_file(Some(SelectedImage::new(name, mime_for(path), bytes)));

    let file = flow.begin_analyze()?.clone();
    let result = predictor
        .predict(&file.name, Some(&file.mime), file.bytes)
        .await;
    if let Err(e) = &result {
        tracing::warn!("Prediction failed: {}", e);
    }
    flow.finish_analyze(result.map_err(TransportError::from))?;

    if let (Some(result), Some(presentation)) = (flow.result(), flow.presentation()) {
        print_classification(result, presentation, settings, format)?;
    }

    if let Some(out) = report {
        if !settings.report_enabled {
            eprintln!("Report download is disabled in the [ui] config section");
            return Ok(());
        }
        match flow.download_report(predictor).await? {
            Some(pdf) => {
                tokio::fs::write(out, &pdf)
                    .await
                    .with_context(|| format!("Failed to write {:?}", out))?;
                eprintln!("Saved report to {}", out.display());
            }
            None => eprintln!("The predictor reported no confidence, so no report is available"),
        }
    }

    Ok(())
}

fn print_classification(
    result: &ClassificationResult,
    presentation: &ResultPresentation,
    settings: &ClientSettings,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        let body = serde_json::json!({
            "result": result,
            "presentation": presentation,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Prediction: {}", result.prediction);
    if settings.show_confidence {
        if let Some(confidence) = result.confidence_label() {
            println!("Confidence: {}", confidence);
        }
    }
    println!();
    println!("{}", presentation.message);

    if !presentation.info.cause.is_empty() {
        println!();
        println!("Cause:");
        println!("  {}", presentation.info.cause);
    }
    print_list("Associated Factors:", &presentation.info.conditions);
    print_list("Histopathologic Features:", &presentation.info.symptoms);

    let steps = presentation.recommendation_steps();
    if !steps.is_empty() {
        println!();
        println!("Recommendations:");
        for step in steps {
            println!("  {}", step);
        }
    }

    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", title);
    for item in items {
        println!("  - {}", item);
    }
}

fn print_bot_reply(
    widget: &ChatWidget,
    reply_format: ReplyFormat,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let Some(last) = widget.log().last() else {
        return Ok(());
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string(last)?);
        return Ok(());
    }

    match render_entry(last, reply_format) {
        ReplyView::Text(text) => println!("{}", text),
        ReplyView::Bullets(items) => {
            for item in items {
                println!("• {}", item);
            }
        }
    }
    Ok(())
}

async fn chat_repl(
    chatbot: &ChatbotClient,
    widget: &mut ChatWidget,
    reply_format: ReplyFormat,
) -> anyhow::Result<()> {
    println!("AskOral Chatbot (type 'exit' to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        widget.set_input(line);
        if widget.send_message(chatbot).await {
            print_bot_reply(widget, reply_format, OutputFormat::Text)?;
        }
    }

    Ok(())
}

/// Content type for an image path, by extension
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
