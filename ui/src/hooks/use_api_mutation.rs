use dashboard_core::Mutator;
use payloads::APIClient;
use std::fmt::Display;
use std::future::Future;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Handle returned by [`use_api_mutation`].
#[derive(Clone)]
pub struct MutationHandle<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    mutator: Mutator<T>,
    client: APIClient,
}

impl<T: Clone + 'static> MutationHandle<T> {
    /// Run `producer` in the background and report the outcome to
    /// `on_done`. Failures come back as `Err(message)`, never as a panic.
    pub fn mutate<V, F, Fut, E>(
        &self,
        producer: F,
        variables: V,
        on_done: Callback<Result<T, String>>,
    ) where
        V: 'static,
        F: FnOnce(APIClient, V) -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let mutator = self.mutator.clone();
        let client = self.client.clone();
        yew::platform::spawn_local(async move {
            let outcome = mutator
                .mutate(move |variables| producer(client, variables), variables)
                .await;
            on_done.emit(outcome);
        });
    }

    /// Clear the previous outcome, e.g. when a modal is reopened.
    pub fn reset(&self) {
        self.mutator.reset();
    }
}

/// On-demand write against the API with its own loading and error state.
/// Two handles never share state.
#[hook]
pub fn use_api_mutation<T: Clone + 'static>() -> MutationHandle<T> {
    let (state, _) = use_store::<State>();
    let force_update = use_force_update();
    let mutator = use_memo((), move |_| {
        Mutator::<T>::with_listener(move || force_update.force_update())
    });

    let snapshot = mutator.snapshot();
    MutationHandle {
        data: snapshot.data,
        is_loading: snapshot.is_loading,
        error: snapshot.error,
        mutator: (*mutator).clone(),
        client: state.api_client(),
    }
}
