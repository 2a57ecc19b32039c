use deny_filter::DenyFilter;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Reloads the dictionary, keeping the current one on failure
pub fn reload_dictionary(filter: &DenyFilter, pattern: &str) -> bool {
    match filter.reload_with_report(pattern) {
        Ok(report) => {
            for warning in &report.warnings {
                warn!("Dictionary source skipped: {warning}");
            }
            info!(
                words = report.word_count,
                sources = report.sources.len(),
                "Dictionary reloaded"
            );
            true
        }
        Err(e) => {
            error!("Dictionary reload failed, keeping previous dictionary: {e}");
            false
        }
    }
}

/// Reloads the dictionary on every SIGHUP
#[cfg(unix)]
pub async fn reload_on_hangup(filter: Arc<DenyFilter>, pattern: String) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(s) => s,
        Err(e) => {
            warn!("SIGHUP handler unavailable, reload disabled: {e}");
            return;
        }
    };

    while hangup.recv().await.is_some() {
        info!("SIGHUP received, reloading dictionary");
        let filter = Arc::clone(&filter);
        let pattern = pattern.clone();
        if let Err(e) =
            tokio::task::spawn_blocking(move || reload_dictionary(&filter, &pattern)).await
        {
            error!("Reload task failed: {e}");
        }
    }
}

/// Reload on signal is unix-only
#[cfg(not(unix))]
pub async fn reload_on_hangup(_filter: Arc<DenyFilter>, _pattern: String) {
    std::future::pending::<()>().await;
}
