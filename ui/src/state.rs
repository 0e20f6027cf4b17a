use dashboard_core::AuthStatus;
use payloads::{APIClient, responses::OperatorProfile};
use yewdux::prelude::*;

use crate::get_api_client;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(OperatorProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
    /// Bearer token for the current session, set together with
    /// `AuthState::LoggedIn`.
    pub token: Option<String>,
    /// Debounced text from the header search box. List pages adopt it as
    /// their search filter.
    pub global_search: String,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    /// What data fetching should do right now.
    pub fn auth_status(&self) -> AuthStatus {
        AuthStatus::from_signals(
            self.is_authenticated(),
            self.auth_state == AuthState::Unknown,
        )
    }

    pub fn profile(&self) -> Option<&OperatorProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    /// Client carrying this session's token.
    pub fn api_client(&self) -> APIClient {
        get_api_client(self.token.as_deref())
    }

    pub fn login(&mut self, token: String, profile: OperatorProfile) {
        self.token = Some(token);
        self.auth_state = AuthState::LoggedIn(profile);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.token = None;
        self.global_search.clear();
    }
}
