// ============================================================================
// AUTH SERVICE - identity provider backed by locally persisted credentials
// ============================================================================
// Token presence only proves a login happened on this browser, not that
// the token is still valid. Authorization is enforced server-side; the
// client only uses this to gate which actions it offers.
// ============================================================================

use crate::utils::constants::AUTH_TOKEN_KEY;
use crate::utils::storage::get_local_storage;

/// Stored auth token, if any.
pub fn auth_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(AUTH_TOKEN_KEY).ok()?
}

/// Whether a locally persisted credential exists.
pub fn is_authenticated() -> bool {
    auth_token().is_some()
}
