use std::cmp::Ordering;

use crate::entities::{distance_km, MapPoint, Place};

trait DistanceTo {
    fn distance_to(&self, pos: &MapPoint) -> f64;
}

impl DistanceTo for Place {
    fn distance_to(&self, pos: &MapPoint) -> f64 {
        distance_km(self.pos, *pos)
    }
}

pub trait SortByDistanceTo {
    /// Returns the places ordered by non-decreasing distance from `pos`.
    ///
    /// The input is left untouched. Places with an invalid coordinate are
    /// moved to the end; between equal distances the input order is kept.
    /// An invalid reference position returns the input order unchanged.
    fn sorted_by_distance_to(&self, pos: &MapPoint) -> Vec<Place>;
}

impl SortByDistanceTo for [Place] {
    fn sorted_by_distance_to(&self, pos: &MapPoint) -> Vec<Place> {
        let mut sorted = self.to_vec();
        if !pos.is_valid() {
            log::warn!("invalid reference coordinate: {pos}");
            return sorted;
        }
        for place in sorted.iter().filter(|p| !p.pos.is_valid()) {
            log::warn!("invalid coordinate: {}", place.pos);
        }
        sorted.sort_by(|a, b| match (a.pos.is_valid(), b.pos.is_valid()) {
            (true, true) => a
                .distance_to(pos)
                .partial_cmp(&b.distance_to(pos))
                .unwrap_or(Ordering::Equal),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        });
        sorted
    }
}
