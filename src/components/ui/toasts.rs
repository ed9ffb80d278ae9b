//! Toast stack rendered in the top-right corner. Pages push messages through
//! [`use_toasts`]; each toast dismisses itself after the configured timeout.

use crate::app_lib::{
    AppError,
    config::AppConfig,
    in_flight::InFlight,
    toast::{ToastKind, ToastQueue},
};
use gloo_timers::callback::Timeout;
use leptos::{prelude::*, task::spawn_local};
use std::future::Future;

/// Row mutations still waiting for the backend. Row buttons bind `disabled`
/// to [`Pending::busy`], and [`Toasts::track`] drops a key that is already out.
#[derive(Clone, Copy)]
pub struct Pending(RwSignal<InFlight>);

impl Default for Pending {
    fn default() -> Self {
        Self(RwSignal::new(InFlight::default()))
    }
}

impl Pending {
    pub fn busy(self, key: impl Into<String>) -> Signal<bool> {
        let key = key.into();
        Signal::derive(move || self.0.with(|in_flight| in_flight.contains(&key)))
    }

    fn begin(self, key: &str) -> bool {
        self.0
            .try_update(|in_flight| in_flight.begin(key))
            .unwrap_or(false)
    }

    fn finish(self, key: &str) {
        self.0.try_update(|in_flight| in_flight.finish(key));
    }
}

#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Shows the error's user-facing text, or `fallback` for opaque failures.
    pub fn failure(&self, err: &AppError, fallback: &str) {
        tracing::warn!(error = %err, "{fallback}");
        self.error(err.user_message(fallback));
    }

    /// Runs a one-off mutation in the background and reports its outcome.
    /// Nothing is sent while `key` still has a request out. `on_success`
    /// usually refetches the affected list.
    pub fn track<F, S>(
        self,
        pending: Pending,
        key: impl Into<String>,
        future: F,
        success: &'static str,
        failure: &'static str,
        on_success: S,
    ) where
        F: Future<Output = Result<(), AppError>> + 'static,
        S: FnOnce() + 'static,
    {
        let key = key.into();
        if !pending.begin(&key) {
            tracing::debug!(%key, "request already in flight");
            return;
        }
        spawn_local(async move {
            let result = future.await;
            pending.finish(&key);
            match result {
                Ok(()) => {
                    self.success(success);
                    on_success();
                }
                Err(err) => self.failure(&err, failure),
            }
        });
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message));
        let queue = self.queue;
        Timeout::new(self.timeout_ms, move || {
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "flex items-center gap-3 w-80 p-4 rounded-lg shadow-lg text-sm cursor-pointer bg-emerald-600 text-white"
        }
        ToastKind::Error => {
            "flex items-center gap-3 w-80 p-4 rounded-lg shadow-lg text-sm cursor-pointer bg-red-600 text-white"
        }
        ToastKind::Info => {
            "flex items-center gap-3 w-80 p-4 rounded-lg shadow-lg text-sm cursor-pointer bg-gray-800 text-white"
        }
    }
}

fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "check_circle",
        ToastKind::Error => "error",
        ToastKind::Info => "info",
    }
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::new()),
        timeout_ms: AppConfig::load().toast_timeout_ms,
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.queue.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast_class(toast.kind)
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <span class="material-symbols-outlined text-xl">{toast_icon(toast.kind)}</span>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Returns the toast handle. Outside a provider the queue is never rendered,
/// so only the warnings from [`Toasts::failure`] remain visible, in the log.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| Toasts {
        queue: RwSignal::new(ToastQueue::new()),
        timeout_ms: AppConfig::load().toast_timeout_ms,
    })
}
