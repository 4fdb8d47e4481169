use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use nearby_entities::builders::*;

fn new_place(id: &str, lat: f64, lng: f64) -> Place {
    Place::build()
        .id(id)
        .title(id)
        .pos(MapPoint::from_lat_lng_deg(lat, lng))
        .finish()
}

#[derive(Default)]
struct FetchStub {
    places: Vec<Place>,
    fail_with: Option<String>,
    calls: Arc<Mutex<u32>>,
}

impl FetchStub {
    fn ok(places: Vec<Place>) -> Self {
        Self {
            places,
            ..Default::default()
        }
    }
    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PlaceGateway for FetchStub {
    async fn fetch_available_places(&self) -> Result<Vec<Place>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        match &self.fail_with {
            Some(message) => Err(FetchError::new(message.clone())),
            None => Ok(self.places.clone()),
        }
    }
}

#[derive(Default)]
struct PositionStub {
    position: Option<MapPoint>,
    calls: Arc<Mutex<u32>>,
}

impl PositionStub {
    fn ok(lat: f64, lng: f64) -> Self {
        Self {
            position: Some(MapPoint::from_lat_lng_deg(lat, lng)),
            ..Default::default()
        }
    }
    fn denied() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GeolocationGateway for PositionStub {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        *self.calls.lock().unwrap() += 1;
        self.position.ok_or(PositionError::PermissionDenied)
    }
}

/// A position source that never resolves.
#[derive(Default)]
struct SilentPosition {
    calls: Arc<Mutex<u32>>,
}

#[async_trait]
impl GeolocationGateway for SilentPosition {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        *self.calls.lock().unwrap() += 1;
        std::future::pending().await
    }
}

/// A position source that resolves as soon as the gate opens.
struct GatedPosition {
    gate: Arc<Notify>,
    position: MapPoint,
}

#[async_trait]
impl GeolocationGateway for GatedPosition {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        self.gate.notified().await;
        Ok(self.position)
    }
}

#[derive(Default, Clone)]
struct RecordingListView {
    renders: Arc<Mutex<Vec<(bool, Vec<Place>)>>>,
    on_select: Arc<Mutex<Option<OnSelectPlace>>>,
}

impl PlaceListView for RecordingListView {
    fn render_places(&self, config: &PlaceList<'_>, on_select: OnSelectPlace) {
        self.renders
            .lock()
            .unwrap()
            .push((config.is_loading, config.places.to_vec()));
        *self.on_select.lock().unwrap() = Some(on_select);
    }
}

#[derive(Default, Clone)]
struct RecordingErrorView {
    renders: Arc<Mutex<Vec<(String, String)>>>,
}

impl ErrorView for RecordingErrorView {
    fn render_error(&self, config: &ErrorPage<'_>) {
        self.renders
            .lock()
            .unwrap()
            .push((config.title.into(), config.message.into()));
    }
}

struct Fixture<F, G> {
    controller: Arc<AvailablePlacesController<F, G, RecordingListView, RecordingErrorView>>,
    list_view: RecordingListView,
    error_view: RecordingErrorView,
    selected: Arc<Mutex<Vec<Place>>>,
}

fn fixture<F, G>(fetch: F, geolocation: G) -> Fixture<F, G>
where
    F: PlaceGateway,
    G: GeolocationGateway,
{
    let _ = env_logger::builder().is_test(true).try_init();
    let list_view = RecordingListView::default();
    let error_view = RecordingErrorView::default();
    let selected = Arc::new(Mutex::new(Vec::new()));
    let on_select: OnSelectPlace = {
        let selected = Arc::clone(&selected);
        Arc::new(move |place| selected.lock().unwrap().push(place))
    };
    let controller = Arc::new(AvailablePlacesController::new(
        fetch,
        geolocation,
        list_view.clone(),
        error_view.clone(),
        on_select,
    ));
    Fixture {
        controller,
        list_view,
        error_view,
        selected,
    }
}

fn rendered_ids(places: &[Place]) -> Vec<&str> {
    places.iter().map(|p| p.id.as_str()).collect()
}

#[tokio::test]
async fn renders_the_places_ordered_by_distance() {
    let places = vec![new_place("1", 10.0, 10.0), new_place("2", 0.0, 0.0)];
    let fix = fixture(FetchStub::ok(places), PositionStub::ok(0.0, 0.0));

    fix.controller.activate().await;

    let renders = fix.list_view.renders.lock().unwrap();
    assert_eq!(renders.len(), 2);
    assert_eq!(renders[0], (true, vec![]));
    let (is_loading, rendered) = &renders[1];
    assert!(!is_loading);
    assert_eq!(rendered_ids(rendered), vec!["2", "1"]);
    assert!(fix.error_view.renders.lock().unwrap().is_empty());
    assert!(!fix.controller.state().is_loading());
}

#[tokio::test]
async fn keeps_every_fetched_place_in_the_ordered_result() {
    let places = vec![
        new_place("far", 50.0, 50.0),
        new_place("mid", 20.0, 20.0),
        new_place("near", 1.0, 1.0),
    ];
    let fix = fixture(FetchStub::ok(places), PositionStub::ok(0.0, 0.0));

    fix.controller.activate().await;

    let renders = fix.list_view.renders.lock().unwrap();
    let (_, rendered) = renders.last().unwrap();
    assert_eq!(rendered_ids(rendered), vec!["near", "mid", "far"]);
}

#[tokio::test]
async fn fetch_failure_renders_the_error_view_and_skips_geolocation() {
    let geolocation = PositionStub::ok(0.0, 0.0);
    let position_calls = Arc::clone(&geolocation.calls);
    let fix = fixture(FetchStub::failing("network unreachable"), geolocation);

    fix.controller.activate().await;

    let errors = fix.error_view.renders.lock().unwrap();
    assert_eq!(
        *errors,
        vec![(
            "An error occurred!".to_string(),
            "network unreachable".to_string()
        )]
    );
    // Only the initial loading render, nothing afterwards.
    assert_eq!(*fix.list_view.renders.lock().unwrap(), vec![(true, vec![])]);
    assert_eq!(*position_calls.lock().unwrap(), 0);
    assert!(!fix.controller.state().is_loading());
}

#[tokio::test]
async fn stays_loading_when_geolocation_never_resolves() {
    let geolocation = SilentPosition::default();
    let position_calls = Arc::clone(&geolocation.calls);
    let fix = fixture(FetchStub::ok(vec![new_place("1", 1.0, 1.0)]), geolocation);

    let controller = Arc::clone(&fix.controller);
    let pipeline = tokio::spawn(async move { controller.activate().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(*position_calls.lock().unwrap(), 1);
    assert_eq!(*fix.list_view.renders.lock().unwrap(), vec![(true, vec![])]);
    assert!(fix.error_view.renders.lock().unwrap().is_empty());
    assert!(fix.controller.state().is_loading());
    pipeline.abort();
}

#[tokio::test]
async fn stays_loading_when_geolocation_is_denied() {
    let fix = fixture(
        FetchStub::ok(vec![new_place("1", 1.0, 1.0)]),
        PositionStub::denied(),
    );

    fix.controller.activate().await;

    assert_eq!(*fix.list_view.renders.lock().unwrap(), vec![(true, vec![])]);
    assert!(fix.error_view.renders.lock().unwrap().is_empty());
    assert!(fix.controller.state().is_loading());
}

#[tokio::test]
async fn forwards_the_selected_place() {
    let place = new_place("1", 1.0, 1.0);
    let fix = fixture(
        FetchStub::ok(vec![place.clone()]),
        PositionStub::ok(0.0, 0.0),
    );

    fix.controller.activate().await;

    let on_select = fix.list_view.on_select.lock().unwrap().clone().unwrap();
    (*on_select)(place.clone());
    assert_eq!(*fix.selected.lock().unwrap(), vec![place]);
}

#[tokio::test]
async fn renders_the_empty_list_when_no_places_are_available() {
    let fix = fixture(FetchStub::ok(vec![]), PositionStub::ok(0.0, 0.0));

    fix.controller.activate().await;

    let renders = fix.list_view.renders.lock().unwrap();
    assert_eq!(renders.last(), Some(&(false, vec![])));
    assert!(fix.error_view.renders.lock().unwrap().is_empty());
}

#[tokio::test]
async fn a_second_activation_is_ignored() {
    let fetch = FetchStub::ok(vec![new_place("1", 1.0, 1.0)]);
    let fetch_calls = Arc::clone(&fetch.calls);
    let fix = fixture(fetch, PositionStub::ok(0.0, 0.0));

    fix.controller.activate().await;
    fix.controller.activate().await;

    assert_eq!(*fetch_calls.lock().unwrap(), 1);
    assert_eq!(fix.list_view.renders.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn discards_completions_after_teardown() {
    let gate = Arc::new(Notify::new());
    let geolocation = GatedPosition {
        gate: Arc::clone(&gate),
        position: MapPoint::from_lat_lng_deg(0.0, 0.0),
    };
    let fix = fixture(FetchStub::ok(vec![new_place("1", 1.0, 1.0)]), geolocation);

    let controller = Arc::clone(&fix.controller);
    let pipeline = tokio::spawn(async move { controller.activate().await });
    tokio::time::sleep(Duration::from_millis(10)).await;

    fix.controller.deactivate();
    gate.notify_one();
    pipeline.await.unwrap();

    // The position arrived after teardown and must not be rendered.
    assert_eq!(*fix.list_view.renders.lock().unwrap(), vec![(true, vec![])]);
    assert!(fix.error_view.renders.lock().unwrap().is_empty());
}
