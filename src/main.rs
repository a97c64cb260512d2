use anyhow::Result;
use clap::{CommandFactory, Parser};
use fcm_notify::{
    clients::fcm::FcmClient,
    config::Config,
    models::notification::{NotificationKind, NotificationRequest, Target, parse_extra_data},
};
use serde_json::Map;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fcm_notify")]
#[command(about = "Send a test push notification via FCM", long_about = None)]
struct Cli {
    /// FCM device token (optional if using --topic)
    #[arg(long, conflicts_with = "topic")]
    token: Option<String>,

    /// FCM topic name (e.g., all_users)
    #[arg(long)]
    topic: Option<String>,

    /// Notification title
    #[arg(long)]
    title: String,

    /// Notification message/body
    #[arg(long)]
    message: String,

    /// Notification type
    #[arg(long = "type", value_enum, default_value_t = NotificationKind::Info)]
    kind: NotificationKind,

    /// Additional data as JSON string (e.g., '{"page": "home"}')
    #[arg(long)]
    data: Option<String>,

    /// Firebase server key (or set FCM_SERVER_KEY in .env)
    #[arg(long)]
    server_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let extra_data = match &cli.data {
        Some(raw) => parse_extra_data(raw)?,
        None => Map::new(),
    };

    let target = match Target::from_cli(cli.token, cli.topic) {
        Some(target) => target,
        None => {
            println!("❌ ERROR: Either --token or --topic must be provided");
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let mut config = Config::load()?;
    if let Some(key) = cli.server_key {
        config.fcm_server_key = Some(key);
    }

    let request = NotificationRequest {
        target,
        title: cli.title,
        body: cli.message,
        kind: cli.kind,
        extra_data,
    };

    let client = FcmClient::new(&config)?;
    client.send(&request).await?;

    Ok(())
}
