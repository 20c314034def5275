//! Swap direction state machine.
//!
//! [`DirectionState`] is a plain record moved through pure transitions by
//! [`DirectionState::apply`]. [`DirectionController`] owns one record and
//! performs the only side effects: loading the pair cache on initialization
//! and saving the raw pair after each commit.
//!
//! Ordering: the cache load completes before the one-time priority
//! resolution, and that resolution completes before any save. Edits made
//! while [`Phase::Initializing`] update the pair but are never persisted.
//!
//! A committed reversal swaps the raw pair and the saved document keeps the
//! orientation next to the mints, so a reload reproduces the same roles. The
//! chart toggle only flips [`DirectionState::chart_flipped`], which nothing
//! but [`ChartView`] reads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::cache::PairCache;
use crate::domain::{AssetId, PersistedPair, PriorityResolver, Roles, TokenPair};

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the pair cache to load.
    Initializing,
    /// Cache loaded; every commit is persisted.
    Settled,
}

/// Inputs to the direction state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionEvent {
    /// The pair cache finished loading (`None` on miss).
    CacheLoaded(Option<PersistedPair>),
    /// The selector committed a new input asset.
    InputChanged(AssetId),
    /// The selector committed a new output asset.
    OutputChanged(AssetId),
    /// The user asked to swap base and quote.
    ReverseRequested,
    /// Commit the current state without changing the pair.
    Settle,
    /// Chart-only role toggle. Not persisted, never changes [`Roles`].
    ViewToggled,
}

/// The single state record of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionState {
    pub phase: Phase,
    pub pair: TokenPair,
    /// Set by the load (stored orientation or priority) and nothing else.
    pub reversed: bool,
    pub pending_reverse_request: bool,
    pub cache_loaded: bool,
    /// Chart display flip on top of the resolved roles.
    pub chart_flipped: bool,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DirectionState,
    /// Pair to persist, set only by a commit of a non-degenerate pair.
    pub persist: Option<TokenPair>,
}

impl DirectionState {
    /// Fresh state holding `pair`, before the cache has loaded.
    #[must_use]
    pub fn initial(pair: TokenPair) -> Self {
        Self {
            phase: Phase::Initializing,
            pair,
            reversed: false,
            pending_reverse_request: false,
            cache_loaded: false,
            chart_flipped: false,
        }
    }

    /// Base and quote derived from the pair and the reversal flag.
    #[must_use]
    pub fn roles(&self) -> Roles {
        self.pair.roles(self.reversed)
    }

    /// Roles as the chart shows them, including the view-only flip.
    #[must_use]
    pub fn chart_roles(&self) -> Roles {
        self.pair.roles(self.reversed != self.chart_flipped)
    }

    /// Apply `event` and return the next state.
    #[must_use]
    pub fn apply(self, event: DirectionEvent, resolver: &PriorityResolver) -> Transition {
        match (self.phase, event) {
            (Phase::Initializing, DirectionEvent::CacheLoaded(cached)) => {
                self.load(cached.as_ref(), resolver).commit()
            }
            (Phase::Settled, DirectionEvent::CacheLoaded(_)) => {
                debug!("Cache already loaded, ignoring");
                self.unchanged()
            }
            (phase, DirectionEvent::InputChanged(asset)) => {
                let mut next = self;
                next.pair.input = asset;
                next.commit_if(phase == Phase::Settled)
            }
            (phase, DirectionEvent::OutputChanged(asset)) => {
                let mut next = self;
                next.pair.output = asset;
                next.commit_if(phase == Phase::Settled)
            }
            (_, DirectionEvent::ReverseRequested) => {
                let mut next = self;
                next.pending_reverse_request = true;
                next.unchanged()
            }
            (Phase::Settled, DirectionEvent::Settle) => self.commit(),
            (Phase::Settled, DirectionEvent::ViewToggled) => {
                let mut next = self;
                next.chart_flipped = !next.chart_flipped;
                next.unchanged()
            }
            (Phase::Initializing, event @ (DirectionEvent::Settle | DirectionEvent::ViewToggled)) => {
                debug!(?event, "Ignoring event before cache load");
                self.unchanged()
            }
        }
    }

    /// Merge the cached pair and mark the cache loaded. A stored orientation
    /// for exactly this pair is restored; otherwise the one-time priority
    /// resolution runs unless a reversal request is already pending.
    fn load(mut self, cached: Option<&PersistedPair>, resolver: &PriorityResolver) -> Self {
        let mut stored = None;
        if let Some(cached) = cached {
            self.pair = cached.apply_to(&self.pair);
            stored = cached.orientation_of(&self.pair);
        }
        self.cache_loaded = true;
        self.phase = Phase::Settled;
        if let Some(reversed) = stored {
            self.reversed = reversed;
        } else if !self.pending_reverse_request {
            self.reversed = resolver.should_reverse(&self.pair.input, &self.pair.output);
        }
        self
    }

    /// Apply a pending reversal and hand the raw pair over for persistence.
    ///
    /// The reversal swaps input and output, so the roles flip while
    /// `reversed` keeps its loaded value and the saved pair carries the
    /// new roles.
    fn commit(mut self) -> Transition {
        if self.pending_reverse_request {
            std::mem::swap(&mut self.pair.input, &mut self.pair.output);
            self.pending_reverse_request = false;
        }
        let persist = (!self.pair.is_degenerate()).then(|| self.pair.clone());
        Transition {
            state: self,
            persist,
        }
    }

    fn commit_if(self, settled: bool) -> Transition {
        if settled {
            self.commit()
        } else {
            self.unchanged()
        }
    }

    fn unchanged(self) -> Transition {
        Transition {
            state: self,
            persist: None,
        }
    }
}

/// What the chart panel needs to render the current pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartView {
    pub base: AssetId,
    pub quote: AssetId,
    /// Upper bound for historical queries, fixed when the controller is built.
    pub until: DateTime<Utc>,
}

impl ChartView {
    /// `until` as unix seconds.
    #[must_use]
    pub fn until_unix(&self) -> i64 {
        self.until.timestamp()
    }
}

/// Owns the swap direction state and its persistence.
pub struct DirectionController {
    state: DirectionState,
    cache: PairCache,
    resolver: PriorityResolver,
    default_pair: TokenPair,
    until: DateTime<Utc>,
}

impl DirectionController {
    /// Create a controller in [`Phase::Initializing`] holding `default_pair`.
    ///
    /// The chart's `until` timestamp is fixed here.
    pub fn new(cache: PairCache, resolver: PriorityResolver, default_pair: TokenPair) -> Self {
        Self {
            state: DirectionState::initial(default_pair.clone()),
            cache,
            resolver,
            default_pair,
            until: Utc::now(),
        }
    }

    /// Load the cached pair and settle. Has no effect once settled.
    pub fn initialize(&mut self) {
        if self.state.phase == Phase::Settled {
            return;
        }
        let cached = self.cache.load();
        self.dispatch(DirectionEvent::CacheLoaded(cached));
    }

    /// Start over from the default pair and load the cache fresh.
    ///
    /// This is the only path that re-runs the load, and with it the priority
    /// resolution for a pair saved without orientation.
    pub fn reload(&mut self) {
        self.state = DirectionState::initial(self.default_pair.clone());
        self.initialize();
    }

    /// Replace the input asset and commit once settled.
    pub fn on_input_asset_change(&mut self, asset: AssetId) {
        self.dispatch(DirectionEvent::InputChanged(asset));
    }

    /// Replace the output asset and commit once settled.
    pub fn on_output_asset_change(&mut self, asset: AssetId) {
        self.dispatch(DirectionEvent::OutputChanged(asset));
    }

    /// Record a reversal request. It takes effect on the next settle.
    pub fn on_reverse_requested(&mut self) {
        self.dispatch(DirectionEvent::ReverseRequested);
    }

    /// Commit the current state.
    pub fn settle(&mut self) {
        self.dispatch(DirectionEvent::Settle);
    }

    /// Flip the chart's displayed roles. Roles, link and cache are untouched.
    pub fn toggle_view(&mut self) {
        self.dispatch(DirectionEvent::ViewToggled);
    }

    /// Current state record.
    #[must_use]
    pub fn state(&self) -> &DirectionState {
        &self.state
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Resolved base and quote.
    #[must_use]
    pub fn roles(&self) -> Roles {
        self.state.roles()
    }

    /// What the chart renders: its own role orientation and the fixed `until`.
    #[must_use]
    pub fn chart_view(&self) -> ChartView {
        let Roles { base, quote } = self.state.chart_roles();
        ChartView {
            base,
            quote,
            until: self.until,
        }
    }

    fn dispatch(&mut self, event: DirectionEvent) {
        debug!(?event, phase = ?self.state.phase, "Direction event");
        let Transition { state, persist } = self.state.clone().apply(event, &self.resolver);
        self.state = state;

        if let Some(pair) = persist {
            self.cache.save(&pair, self.state.reversed);
            let roles = self.state.roles();
            info!(
                base = %roles.base,
                quote = %roles.quote,
                reversed = self.state.reversed,
                "Swap pair settled"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::cache::DEFAULT_CACHE_KEY;
    use crate::domain::mints;
    use crate::testkit::store::RecordingStore;

    fn asset(id: &str) -> AssetId {
        AssetId::new(id)
    }

    fn resolver() -> PriorityResolver {
        PriorityResolver::new([asset("a"), asset("b"), asset("c")])
    }

    fn settled(pair: TokenPair) -> DirectionState {
        DirectionState::initial(pair)
            .apply(DirectionEvent::CacheLoaded(None), &resolver())
            .state
    }

    #[test]
    fn load_settles_and_persists() {
        let t = DirectionState::initial(TokenPair::new(asset("a"), asset("b")))
            .apply(DirectionEvent::CacheLoaded(None), &resolver());

        assert_eq!(t.state.phase, Phase::Settled);
        assert!(t.state.cache_loaded);
        assert!(!t.state.reversed);
        assert_eq!(t.persist, Some(TokenPair::new(asset("a"), asset("b"))));
    }

    #[test]
    fn load_applies_priority_once() {
        let state = settled(TokenPair::new(asset("c"), asset("a")));
        assert!(state.reversed);
        assert_eq!(state.roles().base, asset("a"));

        // A later edit that would resolve the other way keeps the flag.
        let t = state.apply(DirectionEvent::InputChanged(asset("a")), &resolver());
        let t = t.state.apply(DirectionEvent::OutputChanged(asset("c")), &resolver());
        assert!(t.state.reversed);
    }

    #[test]
    fn edits_before_load_are_not_persisted() {
        let t = DirectionState::initial(TokenPair::default())
            .apply(DirectionEvent::InputChanged(asset("b")), &resolver());
        assert_eq!(t.state.phase, Phase::Initializing);
        assert_eq!(t.state.pair.input, asset("b"));
        assert!(t.persist.is_none());
    }

    #[test]
    fn pending_request_before_load_overrides_priority() {
        let state = DirectionState::initial(TokenPair::new(asset("a"), asset("b")))
            .apply(DirectionEvent::ReverseRequested, &resolver())
            .state;
        assert!(state.pending_reverse_request);

        let t = state.apply(DirectionEvent::CacheLoaded(None), &resolver());
        assert!(!t.state.reversed);
        assert!(!t.state.pending_reverse_request);
        assert_eq!(t.state.roles().base, asset("b"));
        assert_eq!(t.persist, Some(TokenPair::new(asset("b"), asset("a"))));
    }

    #[test]
    fn reverse_request_waits_for_settle() {
        let state = settled(TokenPair::new(asset("a"), asset("b")));

        let t = state.apply(DirectionEvent::ReverseRequested, &resolver());
        assert!(t.persist.is_none());
        assert!(!t.state.reversed);

        let t = t.state.apply(DirectionEvent::Settle, &resolver());
        assert!(!t.state.pending_reverse_request);
        assert_eq!(t.state.roles().base, asset("b"));
        assert_eq!(t.state.roles().quote, asset("a"));
        // The raw pair is swapped, so the saved pair carries the new roles.
        assert_eq!(t.persist, Some(TokenPair::new(asset("b"), asset("a"))));
    }

    #[test]
    fn reversal_keeps_priority_flag() {
        let state = settled(TokenPair::new(asset("c"), asset("a")));
        assert!(state.reversed);
        assert_eq!(state.roles().base, asset("a"));

        let state = state.apply(DirectionEvent::ReverseRequested, &resolver()).state;
        let t = state.apply(DirectionEvent::Settle, &resolver());
        assert!(t.state.reversed);
        assert_eq!(t.state.pair, TokenPair::new(asset("a"), asset("c")));
        assert_eq!(t.state.roles().base, asset("c"));
    }

    #[test]
    fn stored_orientation_wins_over_priority() {
        let pair = TokenPair::new(asset("c"), asset("a"));
        let cached = PersistedPair::new(&pair, false);
        let t = DirectionState::initial(TokenPair::default())
            .apply(DirectionEvent::CacheLoaded(Some(cached)), &resolver());

        assert!(!t.state.reversed);
        assert_eq!(t.state.roles().base, asset("c"));
    }

    #[test]
    fn repaired_pair_ignores_stored_orientation() {
        let cached = PersistedPair {
            input_mint: Some(asset("c")),
            output_mint: Some(asset("c")),
            reversed: Some(false),
        };
        let t = DirectionState::initial(TokenPair::new(asset("b"), asset("a")))
            .apply(DirectionEvent::CacheLoaded(Some(cached)), &resolver());

        assert_eq!(t.state.pair, TokenPair::new(asset("c"), asset("a")));
        assert!(t.state.reversed);
    }

    #[test]
    fn repeated_requests_flip_once() {
        let state = settled(TokenPair::new(asset("a"), asset("b")));
        let state = state.apply(DirectionEvent::ReverseRequested, &resolver()).state;
        let state = state.apply(DirectionEvent::ReverseRequested, &resolver()).state;
        let t = state.apply(DirectionEvent::Settle, &resolver());
        assert_eq!(t.state.roles().base, asset("b"));
    }

    #[test]
    fn degenerate_commit_is_not_persisted() {
        let state = settled(TokenPair::new(asset("a"), asset("b")));
        let t = state.apply(DirectionEvent::OutputChanged(asset("a")), &resolver());
        assert!(t.state.pair.is_degenerate());
        assert!(t.persist.is_none());
    }

    #[test]
    fn view_toggle_only_moves_the_chart() {
        let state = settled(TokenPair::new(asset("a"), asset("b")));
        let t = state.apply(DirectionEvent::ViewToggled, &resolver());
        assert!(t.state.chart_flipped);
        assert!(!t.state.reversed);
        assert!(t.persist.is_none());
        assert!(!t.state.pending_reverse_request);
        assert_eq!(t.state.roles().base, asset("a"));
        assert_eq!(t.state.chart_roles().base, asset("b"));
    }

    #[test]
    fn reversal_after_view_toggle_starts_from_resolved_roles() {
        let state = settled(TokenPair::new(asset("a"), asset("b")));
        let state = state.apply(DirectionEvent::ViewToggled, &resolver()).state;
        let state = state.apply(DirectionEvent::ReverseRequested, &resolver()).state;
        let t = state.apply(DirectionEvent::Settle, &resolver());

        assert_eq!(t.state.roles().base, asset("b"));
        assert_eq!(t.persist, Some(TokenPair::new(asset("b"), asset("a"))));
    }

    #[test]
    fn second_cache_load_is_ignored() {
        let state = settled(TokenPair::new(asset("a"), asset("b")));
        let cached = PersistedPair::new(&TokenPair::new(asset("c"), asset("a")), true);
        let t = state.clone().apply(DirectionEvent::CacheLoaded(Some(cached)), &resolver());
        assert_eq!(t.state, state);
        assert!(t.persist.is_none());
    }

    #[test]
    fn controller_reload_reproduces_roles() {
        let store = Arc::new(RecordingStore::new());
        let cache = PairCache::with_default_key(store);
        let mut controller = DirectionController::new(
            cache,
            PriorityResolver::default(),
            TokenPair::default(),
        );
        controller.initialize();
        controller.on_reverse_requested();
        controller.settle();
        assert_eq!(controller.roles().base, AssetId::default_quote());

        // Priority alone would put the native asset first again.
        controller.reload();
        assert_eq!(
            controller.state().pair,
            TokenPair::new(AssetId::default_quote(), AssetId::native())
        );
        assert_eq!(controller.roles().base, AssetId::default_quote());
        assert_eq!(controller.roles().quote, AssetId::native());
    }

    #[test]
    fn controller_reload_orders_mint_only_cache_by_priority() {
        let store = Arc::new(RecordingStore::seeded(
            DEFAULT_CACHE_KEY,
            &format!(r#"{{"inputMint":"{}","outputMint":"{}"}}"#, mints::USDC, mints::NATIVE),
        ));
        let mut controller = DirectionController::new(
            PairCache::with_default_key(store),
            PriorityResolver::default(),
            TokenPair::default(),
        );
        controller.initialize();
        assert!(controller.state().reversed);
        assert_eq!(controller.roles().base, AssetId::native());
    }

    #[test]
    fn chart_view_mirrors_roles() {
        let cache = PairCache::with_default_key(Arc::new(RecordingStore::new()));
        let mut controller = DirectionController::new(
            cache,
            PriorityResolver::default(),
            TokenPair::default(),
        );
        controller.initialize();
        let before = controller.chart_view();
        let roles = controller.roles();

        controller.toggle_view();
        let after = controller.chart_view();

        assert_eq!(before.base, after.quote);
        assert_eq!(before.until, after.until);
        assert!(after.until_unix() > 0);
        assert_eq!(controller.roles(), roles);
    }
}
