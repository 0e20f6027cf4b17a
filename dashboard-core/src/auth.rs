/// Where session bootstrap stands, as seen by data fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthStatus {
    /// The session is still being restored; fetches wait.
    Bootstrapping,
    /// Bootstrap finished without a session; fetches are skipped.
    Anonymous,
    Authenticated,
}

impl AuthStatus {
    /// Build from the `(is_authenticated, is_loading)` signal pair. While
    /// loading, the authenticated flag is not trusted yet.
    pub fn from_signals(is_authenticated: bool, is_loading: bool) -> Self {
        match (is_loading, is_authenticated) {
            (true, _) => AuthStatus::Bootstrapping,
            (false, true) => AuthStatus::Authenticated,
            (false, false) => AuthStatus::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_authenticated() {
        assert_eq!(
            AuthStatus::from_signals(true, true),
            AuthStatus::Bootstrapping
        );
        assert_eq!(
            AuthStatus::from_signals(false, true),
            AuthStatus::Authenticated
        );
        assert_eq!(
            AuthStatus::from_signals(false, false),
            AuthStatus::Anonymous
        );
    }
}
