//! Sheet reachability probe.

use tracing::{debug, error};

use crate::client::{RowSource, SheetClient};

/// Check that the response sheet is reachable and decodes.
pub async fn check_connection(client: &SheetClient) -> bool {
    match client.fetch_rows().await {
        Ok(rows) => {
            debug!(rows = rows.len(), "Sheet connection healthy");
            true
        }
        Err(e) => {
            error!("Sheet health check failed: {e}");
            false
        }
    }
}
