use anyhow::Result;
use common::Config;
use github::DiscussionPublisher;
use groq::GroqClient;
use insight::{build_title, build_user_prompt, SYSTEM_PROMPT};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let _ = dotenv::dotenv();

    // Configure tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;

    let day_info = insight::current_day_info();
    info!(
        "Generating Daily Programming Insight for {} ({})",
        day_info.day_name, day_info.date
    );

    let groq_client = GroqClient::new(&config)?;
    let post_body = groq_client
        .generate_post(SYSTEM_PROMPT, &build_user_prompt(&day_info))
        .await?;
    let title = build_title(&day_info);

    if config.dry_run {
        info!("DRY_RUN enabled - not posting to GitHub");
        println!("--- Generated Post ---");
        println!("{}", title);
        println!();
        println!("{}", post_body);
        return Ok(());
    }

    let publisher = DiscussionPublisher::new(&config)?;
    let repository_id = publisher.fetch_repository_id().await?;
    let discussion_url = publisher
        .create_discussion(&repository_id, &title, &post_body)
        .await?;

    info!("Discussion created successfully: {}", discussion_url);

    Ok(())
}
