/// Geographic coordinate in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}


// IUGG mean Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// Great-circle distance in meters between two coordinates
/// Uses the haversine formula
/// https://en.wikipedia.org/wiki/Haversine_formula
///
/// This is the single straight-line metric in the crate: the adjacency
/// builder's weight fallback and the A* heuristic must share it, otherwise
/// the heuristic's admissibility argument breaks down.
pub fn great_circle(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
