mod commands;
mod config;
mod main_lib;
mod notices;
mod session;

use commands::{execute, Command, HELP};
use config::Config;
use main_lib::{build_state, init_tracing, load_deck};
use swipefund_core::SwipeServiceTrait;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;

    if let Err(e) = load_deck(&state).await {
        tracing::error!("Failed to load opportunities: {}", e);
        println!("Could not load opportunities; try 'refresh' once the API is reachable.");
    }
    println!("{}", HELP);
    execute(&state, Command::Show).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match execute(&state, command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::warn!("Command failed: {:#}", e);
                println!("Error: {:#}", e);
            }
        }
    }

    tracing::info!("Session stats: {:?}", state.swipe_service.stats());
    Ok(())
}
