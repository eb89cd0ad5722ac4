use clap::{Parser, Subcommand};
use std::fs;
use std::sync::Arc;

use veggie_bot::application::messaging::{ReplyFormatter, RequestInterpreter};
use veggie_bot::domain::entities::InboundMessage;
use veggie_bot::domain::traits::Messenger;
use veggie_bot::infrastructure::adapters::console::ConsoleMessenger;
use veggie_bot::infrastructure::config::Config;
use veggie_bot::infrastructure::menus::{JsonMenuStore, VegetarianClassifier};
use veggie_bot::infrastructure::regions::StaticRegionTable;

#[derive(Parser)]
#[command(name = "veggie-bot")]
#[command(about = "SMS bot that finds vegetarian menu items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot in console dev mode
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config);
        }
        Commands::Version => {
            println!("veggie-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_bot(config_path: String) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting {}", config.bot.name);

    // Wire up the collaborators
    let classifier = VegetarianClassifier::new(
        config.filter.safe_words.clone(),
        config.filter.danger_words.clone(),
    );
    let menus = Arc::new(JsonMenuStore::new(&config.menus.directory, classifier));
    let regions = Arc::new(StaticRegionTable::new());

    let mut interpreter = RequestInterpreter::new(regions, menus)
        .with_formatter(ReplyFormatter::new().with_max_len(config.messaging.max_message_len));
    if let Some(region) = config.messaging.default_region.clone() {
        interpreter = interpreter.with_default_region(region.into());
    }

    let messenger = ConsoleMessenger::new();
    let sender = config.bot.dev_sender.clone();

    tracing::info!(
        "Console mode: messages are treated as texts from {}",
        sender
    );
    println!("Text a restaurant name, optionally '@ City, State'. 'quit' to exit.");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return;
        }
    };

    rt.block_on(async {
        loop {
            let line = match messenger.read_line("you> ") {
                Some(line) => line,
                None => break,
            };
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            let message = InboundMessage::new(&sender, line);
            let reply = interpreter.handle(&message).await;
            if let Err(e) = messenger.send(&message.sender, &reply).await {
                tracing::error!("Failed to send reply: {}", e);
            }
        }
    });

    tracing::info!("Shutting down");
}

fn init_config() {
    let config = Config::default();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => {
            if let Err(e) = fs::write("config.yaml", yaml) {
                tracing::error!("Failed to write config.yaml: {}", e);
            } else {
                println!("Wrote default config to config.yaml");
            }
        }
        Err(e) => {
            tracing::error!("Failed to serialize default config: {}", e);
        }
    }
}
