mod auction;
mod calc;
mod config;
mod error;
mod server;

use anyhow::Result;
use parking_lot::Mutex;
use tokio::sync::oneshot;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let bid_store = auction::InMemoryBidStore::new_shared();

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let shutdown_tx = Mutex::new(Some(shutdown_tx));
    ctrlc::set_handler(move || {
        eprintln!("Stopping server...");
        if let Some(tx) = shutdown_tx.lock().take() {
            let _ = tx.send(());
        }
    })?;

    tokio::runtime::Runtime::new()?.block_on(server::run(bid_store, shutdown_rx))?;

    Ok(())
}

#[cfg(test)]
mod tests;
