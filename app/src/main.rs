//! FitTracker headless host
//!
//! Reads one JSON intent per line on stdin and prints every new snapshot as
//! a JSON line on stdout. Logs go to stderr.

use anyhow::Result;
use fittracker_app::{config::AppConfig, logging, runtime, AppController, Prompt};
use fittracker_shared::UserStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Answers every confirmation with yes; alerts only reach the log
struct HeadlessPrompt;

impl Prompt for HeadlessPrompt {
    fn alert(&mut self, message: &str) {
        warn!(message, "alert");
    }

    fn confirm(&mut self, message: &str) -> bool {
        info!(message, "confirmed");
        true
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = config.build.mode.as_str(),
        "Starting FitTracker"
    );

    let controller = AppController::new(UserStore::new(), &config);
    let (handle, task) = runtime::spawn(controller, HeadlessPrompt);

    let mut snapshots = handle.subscribe();
    println!("{}", serde_json::to_string(&*snapshots.borrow_and_update())?);
    let printer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let line = serde_json::to_string(&*snapshots.borrow_and_update());
            match line {
                Ok(line) => println!("{}", line),
                Err(e) => warn!(error = %e, "snapshot not serializable"),
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = handle.send_json(&line) {
            warn!(error = %e, "intent rejected");
        }
    }

    drop(handle);
    task.await?;
    printer.await?;
    info!("FitTracker stopped");
    Ok(())
}
