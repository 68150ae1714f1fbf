use dioxus::prelude::*;
use ui::{Auth, Session};

pub use ui::use_auth;

/// Owns the in-memory session store for the lifetime of the app.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(Session::default);

    use_context_provider(|| Auth::new(session));

    rsx! {
        {children}
    }
}
