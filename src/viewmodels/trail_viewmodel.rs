// ============================================================================
// TRAIL VIEWMODEL - trail detail loading
// ============================================================================

use crate::services::api_client::TrailDetailData;
use crate::services::ApiClient;

pub struct TrailViewModel {
    api: ApiClient,
}

impl TrailViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Load the full detail bundle for one trail.
    pub async fn load_trail(&self, trail_id: i32) -> Result<TrailDetailData, String> {
        let data = self.api.fetch_trail_detail(trail_id).await?;

        if data.trail_details.is_empty() {
            return Err(format!("Trail {} not found", trail_id));
        }

        Ok(data)
    }
}

impl Default for TrailViewModel {
    fn default() -> Self {
        Self::new()
    }
}
