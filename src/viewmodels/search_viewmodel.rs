// ============================================================================
// SEARCH VIEWMODEL - trail search and result paging
// ============================================================================

use crate::models::TrailSummary;
use crate::services::ApiClient;

/// Results shown per page.
pub const RESULTS_PER_PAGE: usize = 8;

pub struct SearchViewModel {
    api: ApiClient,
}

impl SearchViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TrailSummary>, String> {
        self.api.search_trails(query).await
    }
}

impl Default for SearchViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Step the paging window forward, staying inside the result set.
pub fn next_result_idx(idx: usize, total: usize) -> usize {
    if idx + RESULTS_PER_PAGE < total {
        idx + RESULTS_PER_PAGE
    } else {
        idx
    }
}

/// Step the paging window back, clamped at zero.
pub fn prev_result_idx(idx: usize) -> usize {
    idx.saturating_sub(RESULTS_PER_PAGE)
}

/// Current page of results.
pub fn page_window(results: &[TrailSummary], idx: usize) -> &[TrailSummary] {
    let start = idx.min(results.len());
    let end = (idx + RESULTS_PER_PAGE).min(results.len());
    &results[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(n: usize) -> Vec<TrailSummary> {
        (0..n)
            .map(|i| TrailSummary {
                id: i.to_string(),
                name: format!("Trail {}", i),
                prop: "Park".to_string(),
                city: "Town".to_string(),
                state: "NY".to_string(),
            })
            .collect()
    }

    #[test]
    fn next_idx_advances_only_while_more_results_exist() {
        assert_eq!(next_result_idx(0, 20), 8);
        assert_eq!(next_result_idx(8, 20), 16);
        // Last page: stepping forward would run past the results
        assert_eq!(next_result_idx(16, 20), 16);
        assert_eq!(next_result_idx(0, 5), 0);
    }

    #[test]
    fn prev_idx_clamps_at_zero() {
        assert_eq!(prev_result_idx(16), 8);
        assert_eq!(prev_result_idx(8), 0);
        assert_eq!(prev_result_idx(0), 0);
    }

    #[test]
    fn page_window_slices_eight_results() {
        let results = summaries(20);
        assert_eq!(page_window(&results, 0).len(), 8);
        assert_eq!(page_window(&results, 16).len(), 4);
        assert_eq!(page_window(&results, 16)[0].name, "Trail 16");
    }

    #[test]
    fn page_window_handles_empty_results() {
        let results = summaries(0);
        assert!(page_window(&results, 0).is_empty());
    }
}
