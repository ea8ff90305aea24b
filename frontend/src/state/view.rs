//! Fetch-on-mount state shared by every screen.
//!
//! A [`ViewResource`] moves through `Init -> Loading -> Ready | Error`. Each load takes a new
//! generation number; a response is applied only if its generation is still the latest and the
//! owning component has not been unmounted. Failed reloads keep the previous data on screen.

use leptos::*;
use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use crate::{api::ApiError, state::notify::Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Init,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub phase: ViewPhase,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Init,
            data: None,
            error: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn begin_loading(&mut self) {
        self.phase = ViewPhase::Loading;
    }

    pub fn apply(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                self.error = Some(err);
                self.phase = ViewPhase::Error;
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ViewPhase::Init | ViewPhase::Loading)
    }
}

type BoxedFetch<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;
type Fetcher<T> = Rc<dyn Fn() -> BoxedFetch<T>>;

pub struct ViewResource<T: 'static> {
    state: RwSignal<ViewState<T>>,
    generation: StoredValue<u64>,
    alive: StoredValue<Rc<Cell<bool>>>,
    fetcher: StoredValue<Fetcher<T>>,
    notifier: Option<Notifier>,
}

impl<T: 'static> Clone for ViewResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ViewResource<T> {}

impl<T: Clone + 'static> ViewResource<T> {
    /// Creates the resource in the current reactive owner. Nothing is fetched until
    /// [`ViewResource::load`] or [`ViewResource::reload`] runs.
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let alive = Rc::new(Cell::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.set(false));

        let fetcher: Fetcher<T> = Rc::new(move || Box::pin(fetch()) as BoxedFetch<T>);
        Self {
            state: create_rw_signal(ViewState::default()),
            generation: store_value(0),
            alive: store_value(alive),
            fetcher: store_value(fetcher),
            notifier: use_context::<Notifier>(),
        }
    }

    /// Same as [`ViewResource::new`], then loads once the component is mounted.
    pub fn on_mount<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let resource = Self::new(fetch);
        create_effect(move |_| resource.reload());
        resource
    }

    pub fn state(&self) -> ReadSignal<ViewState<T>> {
        self.state.read_only()
    }

    pub fn phase(&self) -> Signal<ViewPhase> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.phase))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(ViewState::is_loading))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    /// Last successfully loaded value, or `T::default()` before the first success.
    pub fn data(&self) -> Signal<T>
    where
        T: Default,
    {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone().unwrap_or_default()))
    }

    pub fn is_alive(&self) -> bool {
        self.alive
            .try_with_value(|alive| alive.get())
            .unwrap_or(false)
    }

    /// Marks the owner as gone; pending and future loads are dropped.
    pub fn release(&self) {
        if let Some(alive) = self.alive.try_get_value() {
            alive.set(false);
        }
    }

    /// Spawns [`ViewResource::load`] on the local executor.
    pub fn reload(&self) {
        let this = *self;
        spawn_local(async move { this.load().await });
    }

    pub async fn load(&self) {
        let Some(alive) = self.alive.try_get_value() else {
            return;
        };
        if !alive.get() {
            return;
        }
        let Some(fetcher) = self.fetcher.try_get_value() else {
            return;
        };
        self.generation.update_value(|g| *g = g.wrapping_add(1));
        let generation = self.generation.get_value();
        self.state.try_update(ViewState::begin_loading);

        let result = fetcher().await;

        if !alive.get() {
            log::debug!("Dropping response for an unmounted view");
            return;
        }
        if self.generation.try_get_value() != Some(generation) {
            log::debug!("Dropping stale response (generation {})", generation);
            return;
        }
        if let Err(err) = &result {
            self.report(err);
        }
        self.state.try_update(|state| state.apply(result));
    }

    fn report(&self, err: &ApiError) {
        if err.is_unauthorized() {
            return;
        }
        match self.notifier {
            Some(notifier) => notifier.error(err.error.clone()),
            None => log::error!("Failed to load view data: {}", err),
        }
    }
}

/// Routes a mutation result to a toast. Returns `true` when the caller should re-fetch.
pub fn report_mutation(
    result: Option<Result<Option<String>, ApiError>>,
    notifier: Notifier,
    success: &str,
) -> bool {
    match result {
        Some(Ok(message)) => {
            notifier.success(message.unwrap_or_else(|| success.to_string()));
            true
        }
        Some(Err(err)) => {
            if !err.is_unauthorized() {
                notifier.error(err.error);
            }
            false
        }
        None => false,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn load_moves_to_ready() {
        let runtime = create_runtime();
        let resource = ViewResource::new(|| async { Ok::<_, ApiError>(vec!["a".to_string()]) });
        assert_eq!(resource.phase().get_untracked(), ViewPhase::Init);
        resource.load().await;
        assert_eq!(resource.phase().get_untracked(), ViewPhase::Ready);
        assert_eq!(resource.data().get_untracked(), vec!["a".to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn stale_responses_are_dropped() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let resource = ViewResource::new(move || {
            let call = counter.get() + 1;
            counter.set(call);
            async move {
                if call == 1 {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok::<_, ApiError>("old".to_string())
                } else {
                    Ok("new".to_string())
                }
            }
        });
        futures::join!(resource.load(), resource.load());
        assert_eq!(calls.get(), 2);
        assert_eq!(resource.data().get_untracked(), "new");
        runtime.dispose();
    }

    #[tokio::test]
    async fn released_resource_ignores_loads() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let resource = ViewResource::new(move || {
            counter.set(counter.get() + 1);
            async { Ok::<_, ApiError>(1u8) }
        });
        resource.release();
        assert!(!resource.is_alive());
        resource.load().await;
        assert_eq!(calls.get(), 0);
        assert_eq!(resource.phase().get_untracked(), ViewPhase::Init);
        runtime.dispose();
    }

    #[tokio::test]
    async fn errors_are_toasted_and_keep_data() {
        let runtime = create_runtime();
        let notifier = Notifier::new();
        provide_context(notifier);
        let fail = Rc::new(Cell::new(false));
        let flag = fail.clone();
        let resource = ViewResource::new(move || {
            let should_fail = flag.get();
            async move {
                if should_fail {
                    Err(ApiError::request_failed("Server unavailable"))
                } else {
                    Ok(5u32)
                }
            }
        });
        resource.load().await;
        fail.set(true);
        resource.load().await;
        assert_eq!(resource.phase().get_untracked(), ViewPhase::Error);
        assert_eq!(resource.data().get_untracked(), 5);
        assert_eq!(
            notifier.toasts().get_untracked()[0].message,
            "Server unavailable"
        );
        runtime.dispose();
    }
}
