//! State for write operations run on demand (approve, reject, status
//! changes).
//!
//! Mutations never panic or throw past the caller: every outcome comes
//! back as a `Result<T, String>` and is mirrored into the machine's
//! `(data, loading, error)` so a modal can render it.

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use crate::error_message;

/// Returned when a mutation is started while another one on the same
/// instance is still running.
pub const MUTATION_BUSY: &str = "Another request is already in progress";

#[derive(Debug, Clone, PartialEq)]
pub struct MutationSnapshot<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct MutationMachine<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for MutationMachine<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> MutationMachine<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reset the error and mark loading. Refused while a call is running
    /// so two calls on one instance never interleave their states.
    pub fn begin(&mut self) -> Result<(), String> {
        if self.loading {
            return Err(MUTATION_BUSY.to_string());
        }
        self.loading = true;
        self.error = None;
        Ok(())
    }

    /// The running call went away without an outcome. Frees the machine
    /// for the next call and keeps the last committed data and error.
    pub fn abandon(&mut self) {
        self.loading = false;
    }

    /// Forget the previous outcome, e.g. when a modal is reopened.
    pub fn reset(&mut self) {
        if !self.loading {
            self.data = None;
            self.error = None;
        }
    }
}

impl<T: Clone> MutationMachine<T> {
    /// Commit the terminal state and hand the outcome back.
    pub fn finish(&mut self, result: Result<T, String>) -> Result<T, String> {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data.clone());
                self.error = None;
                Ok(data)
            }
            Err(message) => {
                tracing::warn!(%message, "mutation failed");
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }

    pub fn snapshot(&self) -> MutationSnapshot<T> {
        MutationSnapshot {
            data: self.data.clone(),
            is_loading: self.loading,
            error: self.error.clone(),
        }
    }
}

/// Single-threaded async driver around a [`MutationMachine`].
pub struct Mutator<T> {
    machine: Rc<RefCell<MutationMachine<T>>>,
    listener: Rc<dyn Fn()>,
}

impl<T> Clone for Mutator<T> {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<T: Clone + 'static> Default for Mutator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Mutator<T> {
    pub fn new() -> Self {
        Self::with_listener(|| {})
    }

    pub fn with_listener(listener: impl Fn() + 'static) -> Self {
        Self {
            machine: Rc::new(RefCell::new(MutationMachine::default())),
            listener: Rc::new(listener),
        }
    }

    /// Run `producer(variables)` and record its outcome.
    pub async fn mutate<V, F, Fut, E>(
        &self,
        producer: F,
        variables: V,
    ) -> Result<T, String>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.machine.borrow_mut().begin()?;
        (self.listener)();
        let guard = InFlight {
            machine: &self.machine,
            listener: &self.listener,
        };

        let result = producer(variables).await.map_err(|e| error_message(&e));

        std::mem::forget(guard);
        let outcome = self.machine.borrow_mut().finish(result);
        (self.listener)();
        outcome
    }

    pub fn reset(&self) {
        self.machine.borrow_mut().reset();
        (self.listener)();
    }

    pub fn snapshot(&self) -> MutationSnapshot<T> {
        self.machine.borrow().snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.borrow().is_loading()
    }
}

/// Releases the machine if a `mutate` future is dropped before the
/// producer settles (timeouts, `select!`, an aborted task).
struct InFlight<'a, T> {
    machine: &'a RefCell<MutationMachine<T>>,
    listener: &'a Rc<dyn Fn()>,
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut machine) = self.machine.try_borrow_mut() {
            machine.abandon();
        }
        tracing::debug!("mutation dropped before it settled");
        (self.listener)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_error() {
        let mut machine = MutationMachine::<u32>::default();
        machine.begin().unwrap();
        let _ = machine.finish(Err("boom".into()));
        assert_eq!(machine.error(), Some("boom"));

        machine.begin().unwrap();
        assert_eq!(machine.error(), None);
        assert!(machine.is_loading());
    }

    #[test]
    fn second_begin_while_running_is_refused() {
        let mut machine = MutationMachine::<u32>::default();
        machine.begin().unwrap();
        assert_eq!(machine.begin(), Err(MUTATION_BUSY.to_string()));
        assert!(machine.is_loading());
    }

    #[test]
    fn finish_returns_outcome_and_records_it() {
        let mut machine = MutationMachine::default();
        machine.begin().unwrap();
        assert_eq!(machine.finish(Ok("approved")), Ok("approved"));
        assert_eq!(machine.data(), Some(&"approved"));
        assert!(!machine.is_loading());
    }

    #[test]
    fn reset_is_ignored_while_running() {
        let mut machine = MutationMachine::<u32>::default();
        machine.begin().unwrap();
        let _ = machine.finish(Ok(1));
        machine.begin().unwrap();
        machine.reset();
        assert_eq!(machine.data(), Some(&1));
    }

    #[test]
    fn abandon_frees_without_recording_an_outcome() {
        let mut machine = MutationMachine::<u32>::default();
        machine.begin().unwrap();
        let _ = machine.finish(Ok(7));
        machine.begin().unwrap();
        machine.abandon();
        assert!(!machine.is_loading());
        assert_eq!(machine.data(), Some(&7));
        assert_eq!(machine.error(), None);
        assert!(machine.begin().is_ok());
    }
}
