use std::sync::Arc;

use crate::{
    entities::Place,
    gateways::place::FetchError,
};

/// Render state of the place listing.
///
/// `Idle` is the freshly constructed state before the first pipeline run.
/// `Loaded` and `Failed` are terminal; a fetch cycle ends in exactly one
/// of them, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Vec<Place>),
    Failed(FetchError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Static display strings of the place listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    pub title: &'static str,
    pub loading_text: &'static str,
    pub fallback_text: &'static str,
    pub error_title: &'static str,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            title: "Available Places",
            loading_text: "Fetching place data",
            fallback_text: "No places available.",
            error_title: "An error occurred!",
        }
    }
}

/// Configuration handed to the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceList<'a> {
    pub title: &'a str,
    pub loading_text: &'a str,
    pub fallback_text: &'a str,
    pub is_loading: bool,
    pub places: &'a [Place],
}

/// Configuration handed to the error view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendering<'a> {
    List(PlaceList<'a>),
    Error(ErrorPage<'a>),
}

/// Projects a render state onto one of the two view configurations.
pub fn project<'a>(state: &'a ViewState, captions: &'a Captions) -> Rendering<'a> {
    let list = |is_loading: bool, places: &'a [Place]| {
        Rendering::List(PlaceList {
            title: captions.title,
            loading_text: captions.loading_text,
            fallback_text: captions.fallback_text,
            is_loading,
            places,
        })
    };
    match state {
        ViewState::Idle => list(false, &[]),
        ViewState::Loading => list(true, &[]),
        ViewState::Loaded(places) => list(false, places.as_slice()),
        ViewState::Failed(err) => Rendering::Error(ErrorPage {
            title: captions.error_title,
            message: &err.message,
        }),
    }
}

/// Capability to notify the surrounding application of a selected place.
pub type OnSelectPlace = Arc<dyn Fn(Place) + Send + Sync>;

/// Stateless renderer of the place list.
pub trait PlaceListView {
    fn render_places(&self, config: &PlaceList<'_>, on_select: OnSelectPlace);
}

/// Stateless renderer of a terminal failure.
pub trait ErrorView {
    fn render_error(&self, config: &ErrorPage<'_>);
}
