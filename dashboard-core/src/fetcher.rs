use futures::future::{Abortable, Aborted, LocalBoxFuture};
use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use crate::fetch::{FetchMachine, FetchSnapshot, Trigger};
use crate::{AuthStatus, error_message};

type Listener = Rc<dyn Fn()>;

/// Single-threaded async driver around a [`FetchMachine`].
///
/// `fetch`/`refresh` return the future that performs the request; the
/// caller spawns it (`spawn_local` in the browser) or awaits it. The
/// listener runs after every visible state change so a component can
/// re-render.
pub struct Fetcher<T> {
    machine: Rc<RefCell<FetchMachine<T>>>,
    listener: Listener,
}

impl<T> Clone for Fetcher<T> {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<T: 'static> Default for Fetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Fetcher<T> {
    pub fn new() -> Self {
        Self::with_listener(|| {})
    }

    pub fn with_listener(listener: impl Fn() + 'static) -> Self {
        Self {
            machine: Rc::new(RefCell::new(FetchMachine::new())),
            listener: Rc::new(listener),
        }
    }

    /// Dependency or auth change: start a fetch if allowed.
    pub fn fetch<F, Fut, E>(
        &self,
        auth: AuthStatus,
        producer: F,
    ) -> Option<LocalBoxFuture<'static, ()>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let trigger = self.machine.borrow_mut().trigger(auth);
        self.run(trigger, producer)
    }

    /// Manual reload; `None` unless authenticated.
    pub fn refresh<F, Fut, E>(
        &self,
        auth: AuthStatus,
        producer: F,
    ) -> Option<LocalBoxFuture<'static, ()>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let trigger = self.machine.borrow_mut().refetch(auth);
        self.run(trigger, producer)
    }

    /// Abort anything in flight and ignore every later result.
    pub fn teardown(&self) {
        self.machine.borrow_mut().teardown();
    }

    pub fn is_loading(&self) -> bool {
        self.machine.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.machine.borrow().error().map(str::to_string)
    }

    fn run<F, Fut, E>(
        &self,
        trigger: Trigger,
        producer: F,
    ) -> Option<LocalBoxFuture<'static, ()>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        // Loading may have flipped even when nothing starts.
        (self.listener)();

        let Trigger::Started(ticket) = trigger else {
            return None;
        };
        let (generation, registration) = ticket.into_parts();
        let request = Abortable::new(producer(), registration);
        let machine = self.machine.clone();
        let listener = self.listener.clone();

        Some(Box::pin(async move {
            match request.await {
                Ok(result) => {
                    let result = result.map_err(|e| error_message(&e));
                    let applied = machine.borrow_mut().settle(generation, result);
                    if applied {
                        listener();
                    }
                }
                Err(Aborted) => {
                    tracing::debug!(generation, "fetch aborted before completion");
                }
            }
        }))
    }
}

impl<T: Clone + 'static> Fetcher<T> {
    pub fn snapshot(&self) -> FetchSnapshot<T> {
        self.machine.borrow().snapshot()
    }

    pub fn data(&self) -> Option<T> {
        self.machine.borrow().data().cloned()
    }
}
