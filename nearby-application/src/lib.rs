#[macro_use]
extern crate log;

mod available_places;

pub use self::available_places::AvailablePlacesController;

pub(crate) use nearby_core::{
    entities::*,
    gateways::{geolocation::*, place::*},
    util::sort::*,
    view::*,
};

#[cfg(test)]
pub(crate) mod tests;
