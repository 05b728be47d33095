//! Location picker orchestration
//!
//! Drives the pickup/dropoff resolution flow: debounced text search, map
//! marker drags, candidate selection, and route computation once both
//! endpoints are resolved. All mutable state lives behind one mutex owned
//! by the picker; provider calls run in spawned tasks that are cancelled
//! (aborted) when superseded, and every response is checked against a
//! per-endpoint sequence number so a slow early response can never
//! overwrite a faster later one.

use std::sync::Arc;
use std::time::Duration;

use domain::value_objects::{
    Coordinate, LocationCandidate, ResolvedLocation, RouteResult, TripEndpoint,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ports::{GeocodingPort, MapViewPort};
use crate::services::RoutePlanner;

/// Tuning for the location picker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPickerConfig {
    /// Quiet period before a typed query is searched, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

const fn default_debounce_ms() -> u64 {
    500
}

impl Default for LocationPickerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Resolution state of one trip endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointState {
    /// Nothing entered, or the last search found nothing
    Empty,
    /// A search is pending or in flight
    Searching,
    /// Candidates are shown, awaiting selection
    CandidatesShown(Vec<LocationCandidate>),
    /// A coordinate has been resolved
    Resolved,
}

struct EndpointSlot {
    state: EndpointState,
    location: ResolvedLocation,
    /// Bumped on every input event for this endpoint; responses carrying an
    /// older value are stale and discarded
    seq: u64,
    pending: Option<JoinHandle<()>>,
}

impl EndpointSlot {
    fn new() -> Self {
        Self {
            state: EndpointState::Empty,
            location: ResolvedLocation::default(),
            seq: 0,
            pending: None,
        }
    }

    fn supersede(&mut self) -> u64 {
        self.seq += 1;
        if let Some(task) = self.pending.take() {
            task.abort();
        }
        self.seq
    }
}

struct Inner {
    pickup: EndpointSlot,
    dropoff: EndpointSlot,
    route_seq: u64,
    route_task: Option<JoinHandle<()>>,
    route: Option<RouteResult>,
}

impl Inner {
    fn slot(&self, endpoint: TripEndpoint) -> &EndpointSlot {
        match endpoint {
            TripEndpoint::Pickup => &self.pickup,
            TripEndpoint::Dropoff => &self.dropoff,
        }
    }

    fn slot_mut(&mut self, endpoint: TripEndpoint) -> &mut EndpointSlot {
        match endpoint {
            TripEndpoint::Pickup => &mut self.pickup,
            TripEndpoint::Dropoff => &mut self.dropoff,
        }
    }
}

struct Shared {
    geocoding: Arc<dyn GeocodingPort>,
    planner: RoutePlanner,
    map_view: Arc<dyn MapViewPort>,
    config: LocationPickerConfig,
    inner: Mutex<Inner>,
    route_tx: watch::Sender<Option<RouteResult>>,
}

/// Orchestrates pickup/dropoff resolution and route visualization
///
/// Exclusively owns the two [`ResolvedLocation`] instances and the current
/// [`RouteResult`]. The host UI feeds it text changes, candidate selections,
/// and marker drags; it feeds the map view and a route watch channel back.
pub struct LocationPicker {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for LocationPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationPicker").finish_non_exhaustive()
    }
}

impl LocationPicker {
    /// Create a picker over the given ports
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        planner: RoutePlanner,
        map_view: Arc<dyn MapViewPort>,
        config: LocationPickerConfig,
    ) -> Self {
        let (route_tx, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                geocoding,
                planner,
                map_view,
                config,
                inner: Mutex::new(Inner {
                    pickup: EndpointSlot::new(),
                    dropoff: EndpointSlot::new(),
                    route_seq: 0,
                    route_task: None,
                    route: None,
                }),
                route_tx,
            }),
        }
    }

    /// The user edited the text field of one endpoint
    ///
    /// Cancels any pending search for that endpoint and starts a new
    /// debounced one. An empty or whitespace-only text resets the endpoint
    /// without touching the provider. Any current route is discarded.
    pub fn text_changed(&self, endpoint: TripEndpoint, text: &str) {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        Self::invalidate_route(shared, &mut inner);

        let slot = inner.slot_mut(endpoint);
        let seq = slot.supersede();
        slot.location.query = text.to_string();
        slot.location.coordinate = None;

        let query = text.trim().to_string();
        if query.is_empty() {
            slot.state = EndpointState::Empty;
            return;
        }
        slot.state = EndpointState::Searching;

        let debounce = Duration::from_millis(shared.config.debounce_ms);
        let task_shared = Arc::clone(shared);
        slot.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let candidates = match task_shared.geocoding.search(&query).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    // Provider failure reads as "no candidates"; the booking
                    // flow must not block on the geocoder.
                    warn!(error = %e, %query, "Geocoding search failed");
                    Vec::new()
                },
            };

            let mut inner = task_shared.inner.lock();
            let slot = inner.slot_mut(endpoint);
            if slot.seq != seq {
                debug!(%endpoint, %query, "Dropping stale search response");
                return;
            }
            slot.pending = None;
            slot.state = if candidates.is_empty() {
                EndpointState::Empty
            } else {
                EndpointState::CandidatesShown(candidates)
            };
        }));
    }

    /// The user picked a candidate from the shown list
    pub fn candidate_selected(&self, endpoint: TripEndpoint, candidate: &LocationCandidate) {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        Self::invalidate_route(shared, &mut inner);

        let slot = inner.slot_mut(endpoint);
        slot.supersede();
        slot.location = ResolvedLocation {
            query: candidate.display_name.clone(),
            coordinate: Some(candidate.coordinate),
        };
        slot.state = EndpointState::Resolved;
        debug!(%endpoint, name = %candidate.display_name, "Candidate selected");

        shared.map_view.place_marker(endpoint, candidate.coordinate);
        Self::maybe_compute_route(shared, &mut inner);
    }

    /// A marker drag for this endpoint completed at the given coordinate
    ///
    /// The dragged coordinate is authoritative immediately; reverse
    /// geocoding only refreshes the query text and its outcome never
    /// unresolves the endpoint. Any in-flight forward search that predates
    /// the drag is superseded.
    pub fn marker_dragged(&self, endpoint: TripEndpoint, coordinate: Coordinate) {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        Self::invalidate_route(shared, &mut inner);

        let slot = inner.slot_mut(endpoint);
        let seq = slot.supersede();
        slot.location.coordinate = Some(coordinate);
        slot.state = EndpointState::Resolved;
        debug!(%endpoint, %coordinate, "Marker dragged");

        shared.map_view.place_marker(endpoint, coordinate);

        let task_shared = Arc::clone(shared);
        slot.pending = Some(tokio::spawn(async move {
            match task_shared.geocoding.reverse(coordinate).await {
                Ok(Some(name)) => {
                    let mut inner = task_shared.inner.lock();
                    let slot = inner.slot_mut(endpoint);
                    if slot.seq != seq {
                        return;
                    }
                    slot.pending = None;
                    slot.location.query = name;
                },
                Ok(None) => debug!(%endpoint, "No address known for dragged coordinate"),
                Err(e) => warn!(error = %e, %endpoint, "Reverse geocoding failed"),
            }
        }));

        Self::maybe_compute_route(shared, &mut inner);
    }

    /// Reset one endpoint to empty, discarding any current route
    pub fn clear(&self, endpoint: TripEndpoint) {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        Self::invalidate_route(shared, &mut inner);

        let slot = inner.slot_mut(endpoint);
        slot.supersede();
        slot.location = ResolvedLocation::default();
        slot.state = EndpointState::Empty;
    }

    /// Reset both endpoints and cancel everything in flight (form reset)
    pub fn reset(&self) {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        Self::invalidate_route(shared, &mut inner);

        for endpoint in [TripEndpoint::Pickup, TripEndpoint::Dropoff] {
            let slot = inner.slot_mut(endpoint);
            slot.supersede();
            slot.location = ResolvedLocation::default();
            slot.state = EndpointState::Empty;
        }
    }

    /// Current resolution state of one endpoint
    #[must_use]
    pub fn endpoint_state(&self, endpoint: TripEndpoint) -> EndpointState {
        self.shared.inner.lock().slot(endpoint).state.clone()
    }

    /// Current query/coordinate pair of one endpoint
    #[must_use]
    pub fn location(&self, endpoint: TripEndpoint) -> ResolvedLocation {
        self.shared.inner.lock().slot(endpoint).location.clone()
    }

    /// The current route, if both endpoints are resolved and one computed
    #[must_use]
    pub fn current_route(&self) -> Option<RouteResult> {
        self.shared.inner.lock().route.clone()
    }

    /// Subscribe to route changes
    ///
    /// The receiver yields `Some` on every new [`RouteResult`] and `None`
    /// whenever the route is invalidated.
    #[must_use]
    pub fn route_updates(&self) -> watch::Receiver<Option<RouteResult>> {
        self.shared.route_tx.subscribe()
    }

    /// The resolved pickup/dropoff pair for booking submission
    ///
    /// `None` until both endpoints carry a coordinate.
    #[must_use]
    pub fn resolved_pair(&self) -> Option<(ResolvedLocation, ResolvedLocation)> {
        let inner = self.shared.inner.lock();
        (inner.pickup.location.is_resolved() && inner.dropoff.location.is_resolved())
            .then(|| (inner.pickup.location.clone(), inner.dropoff.location.clone()))
    }

    /// Discard the current route and cancel any in-flight computation
    fn invalidate_route(shared: &Shared, inner: &mut Inner) {
        inner.route_seq += 1;
        if let Some(task) = inner.route_task.take() {
            task.abort();
        }
        if inner.route.take().is_some() {
            shared.map_view.clear_route();
            let _ = shared.route_tx.send(None);
        }
    }

    /// Kick off route computation when both endpoints are resolved
    ///
    /// A new trigger supersedes any in-flight computation; the completion
    /// checks the route sequence number before publishing.
    fn maybe_compute_route(shared: &Arc<Shared>, inner: &mut Inner) {
        let resolved = |slot: &EndpointSlot| match slot.state {
            EndpointState::Resolved => slot.location.coordinate,
            _ => None,
        };
        let (Some(pickup), Some(dropoff)) = (resolved(&inner.pickup), resolved(&inner.dropoff))
        else {
            return;
        };

        inner.route_seq += 1;
        let seq = inner.route_seq;
        if let Some(task) = inner.route_task.take() {
            task.abort();
        }

        let task_shared = Arc::clone(shared);
        inner.route_task = Some(tokio::spawn(async move {
            let result = task_shared.planner.compute(pickup, dropoff).await;

            let mut inner = task_shared.inner.lock();
            if inner.route_seq != seq {
                debug!("Dropping superseded route computation");
                return;
            }
            inner.route_task = None;
            match result {
                Ok(route) => {
                    task_shared.map_view.draw_route(&route.path, route.is_estimate);
                    task_shared.map_view.fit_bounds(&route.path);
                    inner.route = Some(route.clone());
                    let _ = task_shared.route_tx.send(Some(route));
                },
                Err(e) => {
                    warn!(error = %e, "Route computation failed, no route available");
                    inner.route = None;
                    let _ = task_shared.route_tx.send(None);
                },
            }
        }));
    }
}

impl Drop for LocationPicker {
    fn drop(&mut self) {
        let mut inner = self.shared.inner.lock();
        if let Some(task) = inner.pickup.pending.take() {
            task.abort();
        }
        if let Some(task) = inner.dropoff.pending.take() {
            task.abort();
        }
        if let Some(task) = inner.route_task.take() {
            task.abort();
        }
    }
}
