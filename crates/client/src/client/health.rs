//! Health check operations.

use super::UserstoreClient;
use crate::error::{ClientError, Result};

impl UserstoreClient {
    /// Check that the server is accepting requests.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status.as_u16(), &body))
    }
}
