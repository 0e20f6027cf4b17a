//! Transient notifications for mutation outcomes and export failures.
//! They replace blocking browser alerts.

use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

const VISIBLE_FOR_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toasts {
    /// Oldest first.
    queue: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let queue = match action {
            ToastAction::Push(toast) => {
                self.queue.iter().cloned().chain([toast]).collect()
            }
            ToastAction::Dismiss(id) => {
                if !self.queue.iter().any(|toast| toast.id == id) {
                    return self;
                }
                self.queue.iter().filter(|t| t.id != id).cloned().collect()
            }
        };
        Rc::new(Toasts { queue })
    }
}

pub type ToastContext = UseReducerHandle<Toasts>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Cheap to clone. Outside a [`ToastProvider`] messages are only logged.
#[derive(Clone)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    fn push(&self, toast_type: ToastType, message: String) {
        let Some(context) = self.context.clone() else {
            tracing::warn!(%message, "toast without a provider");
            return;
        };
        let id = Uuid::new_v4();
        context.dispatch(ToastAction::Push(Toast {
            id,
            message,
            toast_type,
        }));

        yew::platform::spawn_local(async move {
            TimeoutFuture::new(VISIBLE_FOR_MS).await;
            context.dispatch(ToastAction::Dismiss(id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastType::Error, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastType::Success, message.into());
    }

    /// Notifications currently on screen, oldest first.
    pub fn live(&self) -> Vec<Toast> {
        self.context
            .as_ref()
            .map(|context| context.queue.clone())
            .unwrap_or_default()
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Dismiss(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}
