use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use emojireply::{
    EmojiReplyPlugin,
    config::{Args, PluginConfig},
    console::{ConsoleReactApi, parse_event_line},
    handlers::handle_message,
    storages::{StatusFileStorage, StatusMemoryStorage, StatusStorageTrait},
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinSet,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    pretty_env_logger::init();
    log::info!("Starting emoji reply plugin...");

    let config = match PluginConfig::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let storage: Arc<dyn StatusStorageTrait> = if args.memory_state {
        log::info!("Using in-memory status storage");
        Arc::new(StatusMemoryStorage::new())
    } else {
        log::info!("Using status storage in directory: {:?}", args.data_dir);
        Arc::new(StatusFileStorage::new(args.data_dir))
    };

    let plugin = Arc::new(EmojiReplyPlugin::new(config, storage, Arc::new(ConsoleReactApi)).await);

    // One task per message, so pacing on one message never delays another
    let mut tasks = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read event: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_event_line(&line, plugin.config()) {
            Ok(event) => event,
            Err(err_msg) => {
                log::warn!("{}", err_msg);
                continue;
            }
        };

        let plugin = plugin.clone();
        tasks.spawn(async move {
            if let Some(reply) = handle_message(&plugin, &event).await {
                println!("{}", reply);
            }
        });
    }

    // Let in-flight reactions finish before exiting
    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            log::error!("Message task failed: {}", e);
        }
    }

    ExitCode::SUCCESS
}
