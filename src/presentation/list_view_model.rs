//! Observable list state driven by the page providers.
//!
//! `load`, `reload` and every [`LoadMore`] invocation are serialized through a
//! per-view-model lock, so the view model can be shared between tasks.

use std::fmt;
use std::sync::{Arc, Weak};

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::domain::entities::Game;
use crate::domain::errors::GamesError;
use crate::domain::pagination::{Continuation, Page};
use crate::domain::ports::PageProvider;

/// UI-facing list state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    /// Nothing loaded yet.
    #[default]
    Loading,
    /// Games available, possibly with a way to load more.
    Loaded(PresentableGames),
    /// The last load or reload failed.
    Error,
}

impl ListState {
    /// Returns the presentable games when loaded.
    #[must_use]
    pub const fn loaded(&self) -> Option<&PresentableGames> {
        match self {
            Self::Loaded(games) => Some(games),
            Self::Loading | Self::Error => None,
        }
    }
}

/// Games currently shown plus the optional "load more" action.
///
/// Two values are equal when their games are equal; the action is ignored.
#[derive(Debug, Clone)]
pub struct PresentableGames {
    items: Vec<Game>,
    load_more: Option<LoadMore>,
}

impl PresentableGames {
    /// Returns the games to display.
    #[must_use]
    pub fn items(&self) -> &[Game] {
        &self.items
    }

    /// Returns the "load more" action, if more games may exist.
    #[must_use]
    pub const fn load_more(&self) -> Option<&LoadMore> {
        self.load_more.as_ref()
    }
}

impl PartialEq for PresentableGames {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

struct Shared {
    state: watch::Sender<ListState>,
    generation: Mutex<u64>,
}

impl Shared {
    fn publish(&self, generation: &mut u64, state: ListState) {
        *generation += 1;
        self.state.send_replace(state);
    }

    fn publish_page(self: &Arc<Self>, generation: &mut u64, page: Page) {
        *generation += 1;
        let (items, next) = page.into_parts();
        let load_more = next.map(|continuation| LoadMore {
            continuation,
            generation: *generation,
            shared: Arc::downgrade(self),
        });
        debug!(
            count = items.len(),
            has_more = load_more.is_some(),
            "Publishing loaded games"
        );
        self.state
            .send_replace(ListState::Loaded(PresentableGames { items, load_more }));
    }
}

/// Fetches the next page and publishes it.
#[derive(Clone)]
pub struct LoadMore {
    continuation: Continuation,
    generation: u64,
    shared: Weak<Shared>,
}

impl LoadMore {
    /// Loads the next page and replaces the list state with it.
    ///
    /// On failure the current state is left as is and the error is returned
    /// to the caller only. An action taken from a state that has since been
    /// replaced fetches nothing and leaves the cache untouched.
    ///
    /// # Errors
    /// Returns error if the fetch or the cache write fails, if the list state
    /// was replaced since this action was published, or if the view model no
    /// longer exists.
    pub async fn invoke(&self) -> Result<(), GamesError> {
        let shared = self
            .shared
            .upgrade()
            .ok_or_else(|| GamesError::unexpected("list view model was dropped"))?;

        let mut generation = shared.generation.lock().await;

        if *generation != self.generation {
            debug!(
                action = self.generation,
                current = *generation,
                "Ignoring load more for superseded list state"
            );
            return Err(GamesError::unexpected("list state was replaced"));
        }

        let page = self.continuation.fetch_next().await.map_err(|e| {
            warn!(error = %e, "Loading more games failed");
            e
        })?;

        shared.publish_page(&mut generation, page);
        Ok(())
    }
}

impl fmt::Debug for LoadMore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadMore")
            .field("continuation", &self.continuation)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// State machine behind the games list.
pub struct GameListViewModel {
    load_provider: Arc<dyn PageProvider>,
    reload_provider: Arc<dyn PageProvider>,
    shared: Arc<Shared>,
}

impl GameListViewModel {
    /// Creates view model in the `Loading` state.
    #[must_use]
    pub fn new(
        load_provider: Arc<dyn PageProvider>,
        reload_provider: Arc<dyn PageProvider>,
    ) -> Self {
        let (state, _) = watch::channel(ListState::Loading);
        Self {
            load_provider,
            reload_provider,
            shared: Arc::new(Shared {
                state,
                generation: Mutex::new(0),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ListState {
        self.shared.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.shared.state.subscribe()
    }

    /// Performs the initial load, showing `Loading` first.
    pub async fn load(&self) {
        let mut generation = self.shared.generation.lock().await;

        if *self.shared.state.borrow() != ListState::Loading {
            self.shared.publish(&mut generation, ListState::Loading);
        }

        let result = self.load_provider.first_page().await;
        self.apply(&mut generation, result);
    }

    /// Reloads from the reload provider without passing through `Loading`.
    pub async fn reload(&self) {
        let mut generation = self.shared.generation.lock().await;
        let result = self.reload_provider.first_page().await;
        self.apply(&mut generation, result);
    }

    fn apply(&self, generation: &mut u64, result: Result<Page, GamesError>) {
        match result {
            Ok(page) => {
                info!(count = page.items().len(), "Games loaded");
                self.shared.publish_page(generation, page);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load games");
                self.shared.publish(generation, ListState::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::providers::{CacheFirstProvider, CachingRemoteProvider};
    use crate::domain::entities::CacheRecord;
    use crate::domain::pagination::PaginatedAccumulator;
    use crate::domain::ports::GamesCachePort;
    use crate::domain::pagination::test_support::make_games;
    use crate::domain::ports::mocks::{GamesCacheStub, RemoteGamesStub};
    use async_trait::async_trait;
    use std::collections::VecDeque;

    /// Provider replaying queued results and recording the state it saw.
    #[derive(Default)]
    struct ProbeProvider {
        results: std::sync::Mutex<VecDeque<Result<Page, GamesError>>>,
        probe: std::sync::Mutex<Option<watch::Receiver<ListState>>>,
        observed: std::sync::Mutex<Vec<ListState>>,
    }

    impl ProbeProvider {
        fn push(&self, result: Result<Page, GamesError>) {
            self.results.lock().unwrap().push_back(result);
        }

        fn attach(&self, view_model: &GameListViewModel) {
            *self.probe.lock().unwrap() = Some(view_model.subscribe());
        }

        fn observed(&self) -> Vec<ListState> {
            self.observed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageProvider for ProbeProvider {
        async fn first_page(&self) -> Result<Page, GamesError> {
            if let Some(rx) = self.probe.lock().unwrap().as_ref() {
                self.observed.lock().unwrap().push(rx.borrow().clone());
            }
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GamesError::network("no stubbed page")))
        }
    }

    struct Fixture {
        view_model: GameListViewModel,
        remote: Arc<RemoteGamesStub>,
    }

    fn remote_fixture(cache: GamesCacheStub) -> Fixture {
        let remote = Arc::new(RemoteGamesStub::new());
        let accumulator = PaginatedAccumulator::new(remote.clone(), Arc::new(cache));
        let view_model = GameListViewModel::new(
            Arc::new(CacheFirstProvider::new(accumulator.clone())),
            Arc::new(CachingRemoteProvider::new(accumulator)),
        );
        Fixture { view_model, remote }
    }

    fn loaded_items(state: &ListState) -> Vec<Game> {
        state.loaded().expect("expected loaded state").items().to_vec()
    }

    fn load_more(state: &ListState) -> LoadMore {
        state
            .loaded()
            .and_then(PresentableGames::load_more)
            .cloned()
            .expect("expected load more action")
    }

    #[test]
    fn test_initial_state_is_loading() {
        let fixture = remote_fixture(GamesCacheStub::absent());
        assert_eq!(fixture.view_model.state(), ListState::Loading);
    }

    #[tokio::test]
    async fn test_load_publishes_loaded_games() {
        let fixture = remote_fixture(GamesCacheStub::absent());
        fixture.remote.push_games(make_games(1..=10));

        fixture.view_model.load().await;

        let state = fixture.view_model.state();
        assert_eq!(loaded_items(&state), make_games(1..=10));
        assert!(state.loaded().unwrap().load_more().is_some());
    }

    #[tokio::test]
    async fn test_load_failure_publishes_error() {
        let fixture = remote_fixture(GamesCacheStub::absent());
        fixture.remote.push_error(GamesError::network("offline"));

        fixture.view_model.load().await;

        assert_eq!(fixture.view_model.state(), ListState::Error);
    }

    #[tokio::test]
    async fn test_load_more_accumulates_until_exhausted() {
        let fixture = remote_fixture(GamesCacheStub::with_games(make_games(1..=2)));
        fixture.remote.push_games(make_games(3..=12));
        fixture.remote.push_games(make_games(13..=14));

        fixture.view_model.load().await;
        let first = fixture.view_model.state();
        assert_eq!(loaded_items(&first), make_games(1..=2));

        load_more(&first).invoke().await.unwrap();
        let second = fixture.view_model.state();
        assert_eq!(loaded_items(&second), make_games(1..=12));

        load_more(&second).invoke().await.unwrap();
        let third = fixture.view_model.state();
        assert_eq!(loaded_items(&third), make_games(1..=14));
        assert!(third.loaded().unwrap().load_more().is_none());
    }

    #[tokio::test]
    async fn test_load_more_failure_leaves_state_unchanged() {
        let fixture = remote_fixture(GamesCacheStub::with_games(make_games(1..=2)));
        fixture.remote.push_error(GamesError::network("offline"));

        fixture.view_model.load().await;
        let before = fixture.view_model.state();

        let result = load_more(&before).invoke().await;
        let after = fixture.view_model.state();

        assert!(matches!(result, Err(GamesError::Network { .. })));
        assert_eq!(after, before);
        assert_eq!(
            after.loaded().unwrap().load_more().is_some(),
            before.loaded().unwrap().load_more().is_some()
        );
    }

    #[tokio::test]
    async fn test_load_more_failure_can_be_retried() {
        let fixture = remote_fixture(GamesCacheStub::with_games(make_games(1..=2)));
        fixture.remote.push_error(GamesError::network("offline"));
        fixture.remote.push_games(make_games(3..=4));

        fixture.view_model.load().await;
        let action = load_more(&fixture.view_model.state());

        assert!(action.invoke().await.is_err());
        action.invoke().await.unwrap();

        assert_eq!(loaded_items(&fixture.view_model.state()), make_games(1..=4));
    }

    #[tokio::test]
    async fn test_cache_write_failure_on_load_more_is_isolated() {
        let cache = GamesCacheStub::with_games(make_games(1..=2));
        cache.set_fail_store(true);
        let fixture = remote_fixture(cache);
        fixture.remote.push_games(make_games(3..=12));

        fixture.view_model.load().await;
        let before = fixture.view_model.state();

        let result = load_more(&before).invoke().await;

        assert!(matches!(result, Err(GamesError::CacheWrite { .. })));
        assert_eq!(fixture.view_model.state(), before);
    }

    #[tokio::test]
    async fn test_reload_failure_discards_items() {
        let fixture = remote_fixture(GamesCacheStub::absent());
        fixture.remote.push_games(make_games(1..=3));
        fixture.remote.push_error(GamesError::network("offline"));

        fixture.view_model.load().await;
        fixture.view_model.reload().await;

        assert_eq!(fixture.view_model.state(), ListState::Error);
    }

    #[tokio::test]
    async fn test_reload_does_not_pass_through_loading() {
        let load = Arc::new(ProbeProvider::default());
        let reload = Arc::new(ProbeProvider::default());
        load.push(Ok(Page::last(make_games(1..=2))));
        reload.push(Ok(Page::last(make_games(3..=4))));

        let view_model = GameListViewModel::new(load.clone(), reload.clone());
        reload.attach(&view_model);

        view_model.load().await;
        view_model.reload().await;

        assert_eq!(reload.observed().len(), 1);
        assert_eq!(loaded_items(&reload.observed()[0]), make_games(1..=2));
        assert_eq!(loaded_items(&view_model.state()), make_games(3..=4));
    }

    #[tokio::test]
    async fn test_load_after_error_passes_through_loading() {
        let load = Arc::new(ProbeProvider::default());
        let reload = Arc::new(ProbeProvider::default());
        load.push(Err(GamesError::network("offline")));
        load.push(Ok(Page::last(make_games(1..=2))));

        let view_model = GameListViewModel::new(load.clone(), reload);
        load.attach(&view_model);

        view_model.load().await;
        assert_eq!(view_model.state(), ListState::Error);

        view_model.load().await;

        assert_eq!(load.observed(), vec![ListState::Loading, ListState::Loading]);
        assert_eq!(loaded_items(&view_model.state()), make_games(1..=2));
    }

    #[tokio::test]
    async fn test_reload_from_error_recovers() {
        let load = Arc::new(ProbeProvider::default());
        let reload = Arc::new(ProbeProvider::default());
        load.push(Err(GamesError::network("offline")));
        reload.push(Ok(Page::last(make_games(1..=1))));

        let view_model = GameListViewModel::new(load, reload.clone());
        reload.attach(&view_model);

        view_model.load().await;
        view_model.reload().await;

        assert_eq!(reload.observed(), vec![ListState::Error]);
        assert_eq!(loaded_items(&view_model.state()), make_games(1..=1));
    }

    #[tokio::test]
    async fn test_superseded_load_more_is_rejected_without_fetching() {
        let cache = Arc::new(GamesCacheStub::absent());
        let remote = Arc::new(RemoteGamesStub::new());
        let accumulator = PaginatedAccumulator::new(remote.clone(), cache.clone());
        let view_model = GameListViewModel::new(
            Arc::new(CacheFirstProvider::new(accumulator.clone())),
            Arc::new(CachingRemoteProvider::new(accumulator)),
        );
        remote.push_games(make_games(1..=10));
        remote.push_games(make_games(21..=30));
        remote.push_games(make_games(11..=20));

        view_model.load().await;
        let stale = load_more(&view_model.state());

        view_model.reload().await;
        let stores_before = cache.store_count();

        let result = stale.invoke().await;

        assert!(matches!(result, Err(GamesError::Unexpected { .. })));
        assert_eq!(loaded_items(&view_model.state()), make_games(21..=30));
        assert_eq!(remote.requests(), vec![(10, 0), (10, 0)]);
        assert_eq!(cache.store_count(), stores_before);
        assert_eq!(
            cache.retrieve().await.unwrap(),
            CacheRecord::Present(make_games(21..=30))
        );
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let fixture = remote_fixture(GamesCacheStub::absent());
        fixture.remote.push_games(make_games(1..=3));
        let mut rx = fixture.view_model.subscribe();

        fixture.view_model.load().await;

        assert!(rx.has_changed().unwrap());
        rx.changed().await.unwrap();
        assert_eq!(loaded_items(&rx.borrow_and_update()), make_games(1..=3));
    }

    #[test]
    fn test_presentable_equality_ignores_load_more() {
        let without_more = PresentableGames {
            items: make_games(1..=2),
            load_more: None,
        };
        let remote = Arc::new(RemoteGamesStub::new());
        let accumulator =
            PaginatedAccumulator::new(remote, Arc::new(GamesCacheStub::absent()));
        let with_more = PresentableGames {
            items: make_games(1..=2),
            load_more: Some(LoadMore {
                continuation: accumulator.continuation(make_games(1..=2)),
                generation: 1,
                shared: Weak::new(),
            }),
        };

        assert_eq!(with_more, without_more);
    }

    #[tokio::test]
    async fn test_load_more_after_view_model_dropped_fails() {
        let fixture = remote_fixture(GamesCacheStub::with_games(make_games(1..=2)));
        fixture.view_model.load().await;
        let action = load_more(&fixture.view_model.state());

        drop(fixture);

        assert!(matches!(
            action.invoke().await,
            Err(GamesError::Unexpected { .. })
        ));
    }
}
