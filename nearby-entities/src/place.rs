use url::Url;

use crate::{geo::*, id::*};

/// A place that can be visited.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub pos: MapPoint,
    pub image: Option<Image>,
}

/// Display image of a place.
///
/// Opaque pass-through data for the presentation layer,
/// unrelated to any ordering logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: Url,
    pub alt: String,
}
