//! Shared player context
//!
//! One [`PlayerState`] per session, handed explicitly to every UI consumer
//! that needs it. Clones of a [`PlayerContext`] are handles to the same
//! state. Consumers subscribe to [`PlayerEvent`]s to learn when to re-render.
//!
//! The context is single-threaded (`Rc` + `RefCell`), matching the UI event
//! loop it serves: one event is handled to completion before the next.

use crate::{
    error::Result,
    events::PlayerEvent,
    state::PlayerState,
    types::{Episode, PlayerConfig, PlayerSnapshot},
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Handle returned by [`PlayerContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&PlayerEvent)>;

struct Shared {
    state: RefCell<PlayerState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,

    // Events waiting for delivery, in the order they happened
    queued: RefCell<VecDeque<PlayerEvent>>,
    notifying: Cell<bool>,
}

/// Cloneable handle to the session's player state
///
/// # Example
///
/// ```rust
/// use podcastr_playback::{Episode, PlayerContext, PlayerEvent};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let player = PlayerContext::default();
///
/// // A consumer somewhere else in the tree
/// let controls = player.clone();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// controls.subscribe(move |event: &PlayerEvent| sink.borrow_mut().push(event.clone()));
///
/// player.play(Episode::new(
///     "Episode 1",
///     "Host",
///     "https://example.com/1.jpg",
///     600,
///     "https://example.com/1.mp3",
/// ));
///
/// assert!(controls.is_playing());
/// assert!(!seen.borrow().is_empty());
/// ```
#[derive(Clone)]
pub struct PlayerContext {
    inner: Rc<Shared>,
}

impl PlayerContext {
    /// Create the session's player context
    pub fn new(config: PlayerConfig) -> Self {
        debug!(?config, "Creating player context");
        Self {
            inner: Rc::new(Shared {
                state: RefCell::new(PlayerState::new(config)),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                queued: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    // ===== Subscriptions =====

    /// Register a listener called with every event, after the change is applied
    ///
    /// Listeners run with no borrow of the state held, so they may read the
    /// context or trigger further operations. Events caused by a listener
    /// are delivered after the events already in flight, so every listener
    /// sees changes in the order they happened.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&PlayerEvent) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener, returning true if it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Tear the session down
    ///
    /// Resets the state to a fresh idle state built from the same
    /// config, sends [`PlayerEvent::TornDown`] to current listeners and then
    /// drops them. Other handles stay usable afterwards.
    pub fn teardown(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            let config = state.config().clone();
            *state = PlayerState::new(config);
        }
        self.inner.queued.borrow_mut().clear();

        let listeners = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        debug!(listeners = listeners.len(), "Tearing down player context");

        for (_, listener) in &listeners {
            listener(&PlayerEvent::TornDown);
        }
    }

    // ===== Operations =====

    /// See [`PlayerState::play`]
    pub fn play(&self, episode: Episode) {
        self.update(|state| state.play(episode));
    }

    /// See [`PlayerState::play_list`]
    pub fn play_list(&self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        self.update(|state| state.play_list(episodes, index))
    }

    pub fn toggle_play(&self) {
        self.update(PlayerState::toggle_play);
    }

    pub fn toggle_loop(&self) {
        self.update(PlayerState::toggle_loop);
    }

    pub fn toggle_shuffle(&self) {
        self.update(PlayerState::toggle_shuffle);
    }

    pub fn set_playing_state(&self, state: bool) {
        self.update(|s| s.set_playing_state(state));
    }

    pub fn play_next(&self) {
        self.update(PlayerState::play_next);
    }

    pub fn play_previous(&self) {
        self.update(PlayerState::play_previous);
    }

    /// See [`PlayerState::handle_episode_ended`]
    pub fn handle_episode_ended(&self) {
        self.update(PlayerState::handle_episode_ended);
    }

    // ===== State Queries =====

    pub fn has_previous(&self) -> bool {
        self.read(PlayerState::has_previous)
    }

    pub fn has_next(&self) -> bool {
        self.read(PlayerState::has_next)
    }

    pub fn current_index(&self) -> usize {
        self.read(PlayerState::current_index)
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.read(|state| state.current_episode().cloned())
    }

    pub fn episodes(&self) -> Vec<Episode> {
        self.read(|state| state.episodes().to_vec())
    }

    pub fn is_playing(&self) -> bool {
        self.read(PlayerState::is_playing)
    }

    pub fn is_looping(&self) -> bool {
        self.read(PlayerState::is_looping)
    }

    pub fn is_shuffling(&self) -> bool {
        self.read(PlayerState::is_shuffling)
    }

    pub fn is_idle(&self) -> bool {
        self.read(PlayerState::is_idle)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.read(PlayerState::snapshot)
    }

    // ===== Internal =====

    fn read<R>(&self, f: impl FnOnce(&PlayerState) -> R) -> R {
        f(&*self.inner.state.borrow())
    }

    /// Apply `f`, release the state, then deliver the events it queued
    fn update<R>(&self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        let (result, events) = {
            let mut state = self.inner.state.borrow_mut();
            let result = f(&mut *state);
            (result, state.drain_events())
        };

        self.notify(events);
        result
    }

    /// Queue `events` and deliver everything queued, oldest first
    ///
    /// Operations triggered by a listener only queue their events; the
    /// outermost call delivers them once every listener has seen the events
    /// that came before.
    fn notify(&self, events: Vec<PlayerEvent>) {
        if events.is_empty() {
            return;
        }

        self.inner.queued.borrow_mut().extend(events);
        if self.inner.notifying.replace(true) {
            trace!(
                queued = self.inner.queued.borrow().len(),
                "Nested change queued for delivery"
            );
            return;
        }

        loop {
            let next = self.inner.queued.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };

            // Snapshot the listener list so listeners can (un)subscribe freely
            let listeners: Vec<Listener> = self
                .inner
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();

            for listener in &listeners {
                listener(&event);
            }
        }

        self.inner.notifying.set(false);
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerContext")
            .field("state", &self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
