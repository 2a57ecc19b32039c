use anyhow::{Context, Result};
use deny_filter::DenyFilter;
use deny_filter_stdio::logger::flush_logger;
use deny_filter_stdio::main_init::init_main;
use deny_filter_stdio::main_loop::main_loop;
use deny_filter_stdio::reload::reload_on_hangup;
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tokio::signal;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = init_main(std::env::args());

    let filter = DenyFilter::open(config.filter_config(), &config.dict_path)
        .with_context(|| format!("failed to load dictionary from '{}'", config.dict_path))?;
    let filter = Arc::new(filter);

    tokio::spawn(reload_on_hangup(Arc::clone(&filter), config.dict_path.clone()));

    tokio::select! {
        () = main_loop(filter, stdin(), stdout()) => {}
        () = shutdown_signal() => {
            info!("Shutdown signal received, exiting");
        }
    }

    flush_logger();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(_) => {
                ctrl_c.await.ok();
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
    }
}
