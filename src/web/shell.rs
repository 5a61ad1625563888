use leptos::prelude::*;

use crate::ui_model::ShellSection;

#[component]
pub(super) fn HeaderCard() -> impl IntoView {
    view! {
        <section class="card">
            <h2>{ShellSection::Header.title()}</h2>
            <p>"Module Federation Host Application"</p>
        </section>
    }
}

#[component]
pub(super) fn PermissionsCard(permissions: ReadSignal<Vec<String>>) -> impl IntoView {
    view! {
        <section class="card">
            <h2>{ShellSection::Permissions.title()}</h2>
            <ul class="permission-list">
                // Keyed by position: the list is set once per page load and
                // rendered in array order.
                <For
                    each=move || permissions.get().into_iter().enumerate().collect::<Vec<_>>()
                    key=|(idx, _)| *idx
                    children=move |(_, perm)| view! { <li>{perm}</li> }
                />
            </ul>
        </section>
    }
}

#[component]
pub(super) fn GettingStartedCard() -> impl IntoView {
    view! {
        <section class="card">
            <h2>{ShellSection::GettingStarted.title()}</h2>
            <p>
                "Welcome to the Direct Unified and Modular Portal. This application \
                 uses Module Federation to provide a flexible and modular architecture."
            </p>
            <div class="tile-grid">
                <div class="tile">
                    <h3>"Modular Design"</h3>
                    <p>"Load modules dynamically based on your permissions and requirements."</p>
                </div>
                <div class="tile">
                    <h3>"Secure Access"</h3>
                    <p>"JWT-based authentication ensures secure access to your resources."</p>
                </div>
            </div>
        </section>
    }
}
