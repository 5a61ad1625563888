//! The wasm-only application: mounting, the one-shot token read, page layout.

use leptos::prelude::*;

use crate::claims::{self, TOKEN_STORAGE_KEY};
use crate::federation::HostManifest;
use crate::ui_model::{self, ShellSection};

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}

macro_rules! console_error {
    ($($t:tt)*) => {
        web_sys::console::error_1(&format!($($t)*).into())
    };
}

mod shell;
mod storage;

use shell::{GettingStartedCard, HeaderCard, PermissionsCard};

/// Entry point called by the wasm bootstrap in `main.rs`.
pub fn start() {
    console_error_panic_hook::set_once();

    let manifest = HostManifest::host_default();
    match manifest.validate() {
        Ok(()) => console_log!("{}", manifest.summary()),
        Err(e) => console_error!("invalid federation manifest: {e}"),
    }

    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let (permissions, set_permissions) = signal(Vec::<String>::new());

    // One-shot read after the first render. The effect tracks no signals, so
    // it never re-runs; a failed decode is logged and leaves the anonymous
    // view in place.
    Effect::new(move |_| {
        let stored = storage::local_storage_get_string(TOKEN_STORAGE_KEY);
        match claims::claims_from_stored(stored.as_deref()) {
            Ok(decoded) => {
                if !decoded.permissions.is_empty() {
                    set_permissions.set(decoded.permissions);
                }
            }
            Err(e) => console_error!("failed to decode stored token: {e}"),
        }
    });

    let show_permissions = move || {
        permissions.with(|p| ui_model::visible_sections(p).contains(&ShellSection::Permissions))
    };

    view! {
        <main class="page">
            <HeaderCard />
            <Show when=show_permissions>
                <PermissionsCard permissions=permissions />
            </Show>
            <GettingStartedCard />
        </main>
    }
}
