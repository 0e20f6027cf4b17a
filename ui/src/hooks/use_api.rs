use dashboard_core::{FetchState, Fetcher};
use payloads::APIClient;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::{EmptyState, ErrorPanel};

/// What [`use_api`] hands back to a component.
pub struct ApiHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Fetch again with the current dependencies. Does nothing without a
    /// session.
    pub refetch: Callback<()>,
}

impl<T> ApiHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: an error panel with a "Try Again" button wired to
    ///   `refetch`
    /// - Has data: `render_fn(data, is_loading, error)`, where `error` is
    ///   from a failed refetch and the previous data is still shown
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <ErrorPanel
                            message={format!("Error loading {context}: {error}")}
                            on_retry={self.refetch.clone()}
                        />
                    }
                } else if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {context}...")}
                            </p>
                        </div>
                    }
                } else {
                    // Not loading and nothing fetched: no session.
                    html! {
                        <EmptyState
                            message={format!("Sign in to view {context}.")}
                        />
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Fetch on mount and whenever `deps` or the session changes.
///
/// Waits while the session is still being restored and never calls
/// `producer` without one. A newer fetch aborts the one in flight, so a
/// slow earlier response can't overwrite a newer one. A failed refetch
/// keeps the last good data alongside the error.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_hospital(id: HospitalId) -> ApiHookReturn<Hospital> {
///     use_api(id, move |client| async move {
///         client.get_hospital(&id).await
///     })
/// }
/// ```
#[hook]
pub fn use_api<T, D, F, Fut, E>(deps: D, producer: F) -> ApiHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(APIClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    let (state, _) = use_store::<State>();
    let force_update = use_force_update();
    let fetcher = use_memo((), move |_| {
        Fetcher::<T>::with_listener(move || force_update.force_update())
    });
    let producer = Rc::new(producer);

    {
        let fetcher = fetcher.clone();
        let producer = producer.clone();
        let state = state.clone();
        use_effect_with(
            (deps, state.auth_status(), state.token.clone()),
            move |(_, auth, _)| {
                let client = state.api_client();
                if let Some(request) =
                    fetcher.fetch(*auth, move || (*producer)(client))
                {
                    yew::platform::spawn_local(request);
                }
            },
        );
    }

    {
        let fetcher = fetcher.clone();
        use_effect_with((), move |_| move || fetcher.teardown());
    }

    let refetch = {
        let fetcher = fetcher.clone();
        Callback::from(move |_| {
            let client = state.api_client();
            let producer = producer.clone();
            if let Some(request) = fetcher
                .refresh(state.auth_status(), move || (*producer)(client))
            {
                yew::platform::spawn_local(request);
            }
        })
    };

    let snapshot = fetcher.snapshot();
    ApiHookReturn {
        data: snapshot.data,
        is_loading: snapshot.is_loading,
        error: snapshot.error,
        refetch,
    }
}
