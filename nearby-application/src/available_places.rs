use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use super::*;

/// Drives the available-places listing.
///
/// One pipeline run per controller lifetime: fetch the places, determine
/// the current position, sort by distance and render the result. Every
/// state transition is rendered through the attached views.
pub struct AvailablePlacesController<F, G, L, E> {
    fetch: F,
    geolocation: G,
    list_view: L,
    error_view: E,
    on_select_place: OnSelectPlace,
    captions: Captions,
    state: Mutex<ViewState>,
    started: AtomicBool,
    alive: AtomicBool,
}

impl<F, G, L, E> AvailablePlacesController<F, G, L, E>
where
    F: PlaceGateway,
    G: GeolocationGateway,
    L: PlaceListView,
    E: ErrorView,
{
    pub fn new(
        fetch: F,
        geolocation: G,
        list_view: L,
        error_view: E,
        on_select_place: OnSelectPlace,
    ) -> Self {
        Self {
            fetch,
            geolocation,
            list_view,
            error_view,
            on_select_place,
            captions: Captions::default(),
            state: Mutex::new(ViewState::Idle),
            started: AtomicBool::new(false),
            alive: AtomicBool::new(true),
        }
    }

    /// Runs the pipeline once. Any further activation is ignored.
    pub async fn activate(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Controller has already been activated");
            return;
        }
        self.apply(ViewState::Loading);
        let places = match self.fetch.fetch_available_places().await {
            Ok(places) => places,
            Err(err) => {
                self.apply(ViewState::Failed(err));
                return;
            }
        };
        match self.geolocation.current_position().await {
            Ok(pos) => {
                self.apply(ViewState::Loaded(places.sorted_by_distance_to(&pos)));
            }
            Err(err) => {
                // The listing deliberately stays in its loading state:
                // no timeout, no fallback ordering.
                warn!("Unable to determine the current position: {err}");
            }
        }
    }

    /// Marks the controller as torn down.
    ///
    /// Outstanding fetch or geolocation requests are not cancelled;
    /// their completions are discarded instead of being applied.
    pub fn deactivate(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    /// Snapshot of the current render state.
    pub fn state(&self) -> ViewState {
        self.state.lock().unwrap().clone()
    }

    fn apply(&self, next: ViewState) {
        if !self.alive.load(Ordering::SeqCst) {
            debug!("Discarding a state transition after teardown");
            return;
        }
        let mut state = self.state.lock().unwrap();
        *state = next;
        self.render(&state);
    }

    fn render(&self, state: &ViewState) {
        match project(state, &self.captions) {
            Rendering::List(config) => self
                .list_view
                .render_places(&config, self.on_select_place.clone()),
            Rendering::Error(config) => self.error_view.render_error(&config),
        }
    }
}
