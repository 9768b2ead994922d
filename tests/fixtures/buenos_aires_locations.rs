//! Real Buenos Aires locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Used as stand-ins for client
//! addresses on a delivery run.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Landmarks (good for depot/start locations)
// ============================================================================

pub const OBELISCO: Location = Location::new("Obelisco", -34.6037, -58.3816);

pub const LANDMARKS: &[Location] = &[
    OBELISCO,
    Location::new("Casa Rosada", -34.6081, -58.3703),
    Location::new("Teatro Colon", -34.6011, -58.3833),
    Location::new("Congreso", -34.6098, -58.3925),
    Location::new("Planetario", -34.5696, -58.4116),
];

// ============================================================================
// Neighborhood shops (typical delivery clients)
// ============================================================================

pub const PALERMO: &[Location] = &[
    Location::new("Plaza Serrano", -34.5885, -58.4305),
    Location::new("Mercado de Palermo", -34.5863, -58.4228),
    Location::new("Plaza Armenia", -34.5891, -58.4262),
    Location::new("Alto Palermo", -34.5882, -58.4102),
];

pub const SAN_TELMO: &[Location] = &[
    Location::new("Plaza Dorrego", -34.6206, -58.3714),
    Location::new("Mercado de San Telmo", -34.6210, -58.3729),
    Location::new("Parque Lezama", -34.6285, -58.3695),
];

pub const BELGRANO: &[Location] = &[
    Location::new("Barrancas de Belgrano", -34.5612, -58.4504),
    Location::new("Barrio Chino", -34.5592, -58.4521),
    Location::new("Plaza Manuel Belgrano", -34.5620, -58.4566),
];

/// Every client location, grouped roughly by neighborhood.
pub fn all_client_locations() -> Vec<Location> {
    PALERMO
        .iter()
        .chain(SAN_TELMO)
        .chain(BELGRANO)
        .cloned()
        .collect()
}
