use crate::domain::events::OverrideChange;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, instrument};

/// Consumes override changes until every sender is gone. Returns the number of changes seen.
#[instrument(skip_all)]
pub async fn store_listener(mut rx: UnboundedReceiver<OverrideChange>) -> usize {
    let mut seen = 0;
    while let Some(change) = rx.recv().await {
        seen += 1;
        match change.coordinate {
            Some(coordinate) => info!(changed_at = %change.changed_at, "📡 Location listeners now observe {}", coordinate),
            None => info!(changed_at = %change.changed_at, "📡 Location listeners fall back to the real location"),
        }
    }
    seen
}
