//! Read-only localStorage access. The token is written by the platform's
//! authentication flow; this shell never writes back.

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `None` covers key-absent as well as storage-unavailable; both render the
/// anonymous view.
pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}
