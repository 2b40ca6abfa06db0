//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use canvass_core::{BoundaryRing, Coordinate, Located};

/// A named visit address with coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

impl Located for Location {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// The Strip territory: Sahara Ave down to Russell Rd, I-15 to Paradise Rd,
/// bulging east toward Paradise Rd.
pub fn strip_territory() -> BoundaryRing {
    BoundaryRing::from(vec![
        (36.1350, -115.1820),
        (36.1350, -115.1600),
        (36.1100, -115.1550),
        (36.0850, -115.1600),
        (36.0850, -115.1820),
    ])
}

// ============================================================================
// Major Casinos / Hotels (route waypoints)
// ============================================================================

pub const CASINOS: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
];

// ============================================================================
// Strip addresses (inside the territory)
// ============================================================================

pub const STRIP_ADDRESSES: &[Location] = &[
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("SW Steakhouse", 36.1262145, -115.1669146),
    Location::new("Sinatra", 36.1300035, -115.1654850),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Otto Pizzeria", 36.1231219, -115.1684514),
    Location::new("Bacchanal Buffet", 36.1159581, -115.1762929),
    Location::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
];

// ============================================================================
// Outlying addresses (outside the territory)
// ============================================================================

pub const OUTLYING_ADDRESSES: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Location::new("Beers and Bets", 36.1428945, -115.1573836),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
];

/// Strip and outlying addresses interleaved, as the zone listing returns them.
pub fn mixed_addresses() -> Vec<Location> {
    let mut mixed = Vec::new();
    let mut outlying = OUTLYING_ADDRESSES.iter();
    for (i, address) in STRIP_ADDRESSES.iter().enumerate() {
        mixed.push(address.clone());
        if i % 2 == 0 {
            if let Some(far) = outlying.next() {
                mixed.push(far.clone());
            }
        }
    }
    mixed
}

/// Three candidates in the service's JSON shape, best first.
pub const DIRECTIONS_PAYLOAD: &str = r#"[
    {
        "summary": "Las Vegas Blvd S",
        "overviewPolyline": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
        "legs": [
            {
                "distanceMeters": 2900,
                "durationSeconds": 480,
                "startAddress": "3131 Las Vegas Blvd S",
                "endAddress": "3600 Las Vegas Blvd S",
                "startCoordinate": {"lat": 36.1263781, "lng": -115.165818},
                "endCoordinate": {"lat": 36.1126, "lng": -115.1767}
            },
            {
                "distanceMeters": 1400,
                "durationSeconds": 300,
                "startAddress": "3600 Las Vegas Blvd S",
                "endAddress": "3799 Las Vegas Blvd S",
                "startCoordinate": {"lat": 36.1126, "lng": -115.1767},
                "endCoordinate": {"lat": 36.1023654, "lng": -115.168872}
            }
        ]
    },
    {
        "summary": "I-15 S",
        "overviewPolyline": "_p~iF~ps|U_ulLnnqC",
        "legs": [
            {
                "distanceMeters": 3600,
                "durationSeconds": 420,
                "startCoordinate": {"lat": 36.1263781, "lng": -115.165818},
                "endCoordinate": {"lat": 36.1126, "lng": -115.1767}
            },
            {
                "distanceMeters": 1900,
                "durationSeconds": 240,
                "startCoordinate": {"lat": 36.1126, "lng": -115.1767},
                "endCoordinate": {"lat": 36.1023654, "lng": -115.168872}
            }
        ]
    },
    {
        "overviewPolyline": "",
        "legs": [
            {
                "distanceMeters": 4100,
                "durationSeconds": 700,
                "startCoordinate": {"lat": 36.1263781, "lng": -115.165818},
                "endCoordinate": {"lat": 36.1023654, "lng": -115.168872}
            }
        ]
    }
]"#;
