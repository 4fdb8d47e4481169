use std::fmt;

/// Latitude in degrees, valid between -90 and 90.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90.0)
    }

    pub const fn max() -> Self {
        Self(90.0)
    }

    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::min().0 && self.0 <= Self::max().0
    }
}

/// Longitude in degrees, valid between -180 and 180.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180.0)
    }

    pub const fn max() -> Self {
        Self(180.0)
    }

    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::min().0 && self.0 <= Self::max().0
    }
}

/// A geographical point on the map.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordRangeError;

impl fmt::Display for CoordRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("coordinate out of range")
    }
}

impl std::error::Error for CoordRangeError {}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        Self::new(LatCoord::from_deg(lat_deg), LngCoord::from_deg(lng_deg))
    }

    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Result<Self, CoordRangeError> {
        let pos = Self::from_lat_lng_deg(lat_deg, lng_deg);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(CoordRangeError)
        }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat.to_deg(), self.lng.to_deg())
    }
}

// The Earth's radius in kilometers.
const EARTH_RADIUS: f64 = 6371.0;

/// Great-circle (haversine) distance between two points in kilometers.
///
/// Returns `NaN` if any of the coordinates is not finite.
pub fn distance_km(a: MapPoint, b: MapPoint) -> f64 {
    let lat1 = a.lat().to_rad();
    let lat2 = b.lat().to_rad();
    let dlat = (b.lat().to_deg() - a.lat().to_deg()).to_radians();
    let dlng = (b.lng().to_deg() - a.lng().to_deg()).to_radians();

    let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}
