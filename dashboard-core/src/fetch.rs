//! The data fetching state machine.
//!
//! A [`FetchMachine`] owns the `(data, loading, error)` triple for one
//! read operation. Every started fetch gets a new generation; only the
//! result of the newest generation is ever applied, and starting a new
//! fetch aborts the previous one so superseded requests stop consuming
//! the network instead of merely being ignored.

use futures::future::{AbortHandle, AbortRegistration};

use crate::AuthStatus;

/// Distinguishes "never loaded" from "loaded, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::NotFetched => None,
            FetchState::Fetched(data) => Some(data),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FetchState::NotFetched => None,
            FetchState::Fetched(data) => Some(data),
        }
    }
}

/// Permission to run one fetch. Carries the generation to settle with
/// and the registration that aborts the request if it is superseded.
pub struct Ticket {
    generation: u64,
    registration: AbortRegistration,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_parts(self) -> (u64, AbortRegistration) {
        (self.generation, self.registration)
    }
}

/// What a trigger asked the caller to do.
pub enum Trigger {
    /// Nothing to run: not authenticated, or the machine is torn down.
    Skipped,
    /// Session bootstrap still running; stay loading and wait.
    Waiting,
    /// Run the producer and settle with this ticket.
    Started(Ticket),
}

impl Trigger {
    pub fn is_started(&self) -> bool {
        matches!(self, Trigger::Started(_))
    }
}

/// Read-only copy of the state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSnapshot<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> FetchSnapshot<T> {
    /// Loading for the first time: nothing to show yet.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }
}

pub struct FetchMachine<T> {
    data: FetchState<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    in_flight: Option<AbortHandle>,
    torn_down: bool,
}

impl<T> Default for FetchMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchMachine<T> {
    /// A freshly mounted machine is loading and has nothing yet.
    pub fn new() -> Self {
        Self {
            data: FetchState::NotFetched,
            loading: true,
            error: None,
            generation: 0,
            in_flight: None,
            torn_down: false,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Called on mount and whenever dependencies or auth signals change.
    pub fn trigger(&mut self, auth: AuthStatus) -> Trigger {
        if self.torn_down {
            return Trigger::Skipped;
        }
        match auth {
            AuthStatus::Bootstrapping => {
                self.loading = true;
                Trigger::Waiting
            }
            AuthStatus::Anonymous => {
                // Whatever was in flight belongs to a session that is gone.
                self.supersede();
                self.loading = false;
                Trigger::Skipped
            }
            AuthStatus::Authenticated => Trigger::Started(self.start()),
        }
    }

    /// Manual reload. Does nothing unless authenticated.
    pub fn refetch(&mut self, auth: AuthStatus) -> Trigger {
        if self.torn_down || !auth.is_authenticated() {
            return Trigger::Skipped;
        }
        Trigger::Started(self.start())
    }

    /// Apply the outcome of the fetch started with `generation`.
    ///
    /// Returns false, leaving state untouched, if that fetch has been
    /// superseded or the machine torn down. A failure keeps the previous
    /// data so stale results stay readable next to the error.
    pub fn settle(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if self.torn_down || generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                torn_down = self.torn_down,
                "dropping stale fetch result"
            );
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = FetchState::Fetched(data);
                self.error = None;
            }
            Err(message) => {
                tracing::warn!(generation, %message, "fetch failed");
                self.error = Some(message);
            }
        }
        true
    }

    /// The owner is going away: abort whatever is running and refuse all
    /// later updates.
    pub fn teardown(&mut self) {
        self.supersede();
        self.torn_down = true;
    }

    fn start(&mut self) -> Ticket {
        self.supersede();
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        self.loading = true;
        self.error = None;
        tracing::debug!(generation = self.generation, "fetch started");
        Ticket {
            generation: self.generation,
            registration,
        }
    }

    /// Invalidate the current generation and abort its request.
    fn supersede(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.in_flight.take() {
            tracing::debug!(generation = self.generation, "aborting superseded fetch");
            handle.abort();
        }
    }
}

impl<T: Clone> FetchMachine<T> {
    pub fn snapshot(&self) -> FetchSnapshot<T> {
        FetchSnapshot {
            data: self.data.clone(),
            is_loading: self.loading,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started<T>(machine: &mut FetchMachine<T>) -> u64 {
        match machine.trigger(AuthStatus::Authenticated) {
            Trigger::Started(ticket) => ticket.generation(),
            _ => panic!("expected fetch to start"),
        }
    }

    #[test]
    fn mount_state_is_loading_without_data() {
        let machine = FetchMachine::<u32>::new();
        assert!(machine.is_loading());
        assert_eq!(machine.data(), None);
        assert_eq!(machine.error(), None);
        assert!(machine.snapshot().is_initial_loading());
    }

    #[test]
    fn success_sets_data_and_clears_loading() {
        let mut machine = FetchMachine::new();
        let generation = started(&mut machine);
        assert!(machine.settle(generation, Ok(7)));
        assert_eq!(machine.data(), Some(&7));
        assert!(!machine.is_loading());
        assert!(!machine.has_in_flight());
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut machine = FetchMachine::new();
        let first = started(&mut machine);
        machine.settle(first, Ok(vec![1, 2, 3]));

        let second = match machine.refetch(AuthStatus::Authenticated) {
            Trigger::Started(ticket) => ticket.generation(),
            _ => panic!("expected refetch to start"),
        };
        assert!(machine.is_loading());
        assert_eq!(machine.error(), None);

        machine.settle(second, Err("network down".to_string()));
        assert_eq!(machine.data(), Some(&vec![1, 2, 3]));
        assert_eq!(machine.error(), Some("network down"));
        assert!(!machine.is_loading());
    }

    #[test]
    fn older_generation_cannot_overwrite_newer() {
        let mut machine = FetchMachine::new();
        let old = started(&mut machine);
        let new = started(&mut machine);

        assert!(machine.settle(new, Ok("new")));
        assert!(!machine.settle(old, Ok("old")));
        assert_eq!(machine.data(), Some(&"new"));
    }

    #[test]
    fn older_failure_cannot_mark_newer_as_failed() {
        let mut machine = FetchMachine::<&str>::new();
        let old = started(&mut machine);
        let _new = started(&mut machine);

        assert!(!machine.settle(old, Err("timeout".into())));
        assert_eq!(machine.error(), None);
        assert!(machine.is_loading());
    }

    #[test]
    fn anonymous_skips_and_stops_loading() {
        let mut machine = FetchMachine::<u32>::new();
        assert!(matches!(
            machine.trigger(AuthStatus::Anonymous),
            Trigger::Skipped
        ));
        assert!(!machine.is_loading());
    }

    #[test]
    fn bootstrapping_waits_while_loading() {
        let mut machine = FetchMachine::<u32>::new();
        assert!(matches!(
            machine.trigger(AuthStatus::Bootstrapping),
            Trigger::Waiting
        ));
        assert!(machine.is_loading());
        assert!(!machine.has_in_flight());
    }

    #[test]
    fn logout_invalidates_in_flight_fetch() {
        let mut machine = FetchMachine::new();
        let generation = started(&mut machine);
        machine.trigger(AuthStatus::Anonymous);
        assert!(!machine.settle(generation, Ok(1)));
        assert_eq!(machine.data(), None);
    }

    #[test]
    fn refetch_is_noop_unless_authenticated() {
        let mut machine = FetchMachine::<u32>::new();
        machine.trigger(AuthStatus::Anonymous);
        let generation = machine.generation();
        for auth in [AuthStatus::Anonymous, AuthStatus::Bootstrapping] {
            assert!(!machine.refetch(auth).is_started());
        }
        assert_eq!(machine.generation(), generation);
        assert!(!machine.is_loading());
    }

    #[test]
    fn teardown_suppresses_late_results() {
        let mut machine = FetchMachine::new();
        let generation = started(&mut machine);
        machine.teardown();
        assert!(!machine.settle(generation, Ok(5)));
        assert_eq!(machine.data(), None);
        assert!(!machine.trigger(AuthStatus::Authenticated).is_started());
    }
}
