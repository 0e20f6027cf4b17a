//! Where the operator's session token lives between page loads.
//!
//! Signing in happens elsewhere; this app only picks up a token that was
//! stored under [`TOKEN_KEY`] and forgets it on logout.

use web_sys::Storage;

pub const TOKEN_KEY: &str = "ops_token";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn stored_token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

pub fn clear_token() {
    if let Some(storage) = storage()
        && let Err(e) = storage.remove_item(TOKEN_KEY)
    {
        tracing::warn!(error = ?e, "could not clear stored token");
    }
}
