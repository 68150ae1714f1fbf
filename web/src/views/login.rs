use dioxus::prelude::*;
use ui::AuthIntent;

#[component]
pub fn LoginPage() -> Element {
    let mut username = use_signal(|| "".to_string());
    let mut error = use_signal(|| "".to_string());
    let mut auth = crate::auth::use_auth();

    let mut handle_login = move || match AuthIntent::login(&username.read()) {
        Ok(intent) => {
            error.set("".to_string());
            // AuthGuard moves us off /login once the session changes
            auth.dispatch(intent);
        }
        Err(e) => error.set(e.to_string()),
    };

    rsx! {
      section { class: "page login",
        h1 { class: "page-title", "Login" }
        div { class: "login-field",
          label { "Username" }
          input {
            value: "{username}",
            oninput: move |e| username.set(e.value()),
            "type": "text",
            placeholder: "Enter username",
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    handle_login();
                }
            },
          }
        }

        if !error().is_empty() {
          div { class: "login-error", "{error}" }
        }

        button { class: "page-action", onclick: move |_| handle_login(), "Login" }
      }
    }
}
