use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use promo_core::{load_config, Platform, Tone};
use promo_gemini::MarketingStudio;

mod render;

#[derive(Debug, Parser)]
#[command(name = "promo")]
#[command(about = "AI marketing studio command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate short social posts for one platform.
    Copy {
        #[arg(long)]
        topic: String,
        /// One of: twitter, instagram, linkedin, facebook, tiktok.
        #[arg(long, value_parser = Platform::from_str)]
        platform: Platform,
        /// One of: professional, casual, playful, bold, witty.
        #[arg(long, value_parser = Tone::from_str, default_value = "professional")]
        tone: Tone,
        #[arg(long)]
        audience: String,
    },
    /// Draft a mini campaign strategy for a product.
    Strategy {
        #[arg(long)]
        product: String,
        #[arg(long)]
        goal: String,
    },
    /// Run a SWOT analysis of a competitor.
    Swot {
        #[arg(long)]
        competitor: String,
        #[arg(long)]
        industry: String,
    },
    /// Synthesize a buyer persona.
    Persona {
        #[arg(long)]
        product: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        region: String,
    },
    /// Rewrite existing copy toward a goal.
    Optimize {
        #[arg(long)]
        text: String,
        #[arg(long)]
        goal: String,
    },
    /// Score a lead's conversion probability.
    LeadScore {
        #[arg(long)]
        name: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        interactions: String,
    },
    /// Research search keywords for a topic.
    Seo {
        #[arg(long)]
        topic: String,
    },
    /// Generate an ad visual.
    Image {
        #[arg(long)]
        prompt: String,
        /// Write the decoded image here instead of printing the data URL.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let studio = MarketingStudio::new(&config)?;

    match cli.command {
        Commands::Copy {
            topic,
            platform,
            tone,
            audience,
        } => {
            let generated = studio
                .generate_marketing_copy(&topic, platform, tone, &audience)
                .await;
            println!("{}", render::posts(&generated, &platform.to_string()));
        }
        Commands::Strategy { product, goal } => {
            match studio.generate_campaign_strategy(&product, &goal).await {
                Some(result) => println!("{}", render::strategy(&result)),
                None => println!("No strategy was generated. Check the logs and try again."),
            }
        }
        Commands::Swot {
            competitor,
            industry,
        } => match studio.analyze_competitor(&competitor, &industry).await {
            Some(result) => println!("{}", render::swot(&result)),
            None => println!("No analysis was generated. Check the logs and try again."),
        },
        Commands::Persona {
            product,
            industry,
            region,
        } => {
            match studio
                .generate_audience_persona(&product, &industry, &region)
                .await
            {
                Some(result) => println!("{}", render::persona(&result)),
                None => println!("No persona was generated. Check the logs and try again."),
            }
        }
        Commands::Optimize { text, goal } => match studio.optimize_content(&text, &goal).await {
            Some(result) => println!("{}", render::optimization(&result)),
            None => println!("No rewrite was generated. Check the logs and try again."),
        },
        Commands::LeadScore {
            name,
            source,
            interactions,
        } => {
            let score = studio.analyze_lead_score(&name, &source, &interactions).await;
            println!("{}", render::lead_score(&score));
        }
        Commands::Seo { topic } => match studio.research_keywords(&topic).await {
            Some(result) => println!("{}", render::seo(&result)),
            None => println!("No keywords were generated. Check the logs and try again."),
        },
        Commands::Image { prompt, out } => match studio.generate_marketing_image(&prompt).await {
            Some(data_url) => {
                if let Some(path) = out {
                    write_image(&data_url, &path)?;
                    println!("Saved image to {}", path.display());
                } else {
                    println!("{data_url}");
                }
            }
            None => println!("No image was generated. Check the logs and try again."),
        },
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Decodes a `data:{mime};base64,{payload}` URL and writes the bytes out.
fn write_image(data_url: &str, path: &Path) -> anyhow::Result<()> {
    let (_, payload) = data_url
        .split_once("base64,")
        .context("image payload is not base64-encoded")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .context("image payload failed to decode")?;
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
