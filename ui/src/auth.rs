use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username must not be empty")]
    EmptyUsername,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        username: String,
    },
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username } => Some(username),
            Session::Anonymous => None,
        }
    }

    pub fn apply(self, intent: AuthIntent) -> Session {
        match intent {
            AuthIntent::Login { username } => Session::Authenticated { username },
            AuthIntent::Logout => Session::Anonymous,
        }
    }
}

/// A request for the session store to change state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthIntent {
    Login { username: String },
    Logout,
}

impl AuthIntent {
    pub fn login(username: &str) -> Result<Self, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        Ok(AuthIntent::Login {
            username: username.to_string(),
        })
    }
}

/// Handle on the application-wide session store.
#[derive(Clone, Copy, Debug)]
pub struct Auth {
    state: Signal<Session>,
}

impl Auth {
    pub fn new(state: Signal<Session>) -> Self {
        Self { state }
    }

    /// Hands the intent to the store. Nothing is returned; readers pick up
    /// the new session on their next render.
    pub fn dispatch(&mut self, intent: AuthIntent) {
        match &intent {
            AuthIntent::Login { username } => info!(%username, "Login dispatched"),
            AuthIntent::Logout => info!("Logout dispatched"),
        }
        let current = self.state.peek().clone();
        self.state.set(current.apply(intent));
    }

    pub fn logout(&mut self) {
        self.dispatch(AuthIntent::Logout);
    }

    pub fn username(&self) -> Option<String> {
        self.state.read().username().map(str::to_string)
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in()
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}
