use crate::domain::Coordinate;

#[derive(PartialEq, Debug)]
pub struct PresetLocation {
    pub title: &'static str,
    pub coordinate: Coordinate,
}

impl PresetLocation {
    const fn new(title: &'static str, latitude: f64, longitude: f64) -> Self {
        PresetLocation {
            title,
            coordinate: Coordinate::from_degrees(latitude, longitude),
        }
    }
}

#[rustfmt::skip]
pub static PRESET_CATALOG: [PresetLocation; 17] = [
    PresetLocation::new("London, England", 51.509980, -0.133700),
    PresetLocation::new("Johannesburg, South Africa", -26.204103, 28.047305),
    PresetLocation::new("Moscow, Russia", 55.755786, 37.617633),
    PresetLocation::new("Mumbai, India", 19.017615, 72.856164),
    PresetLocation::new("Tokyo, Japan", 35.702069, 139.775327),
    PresetLocation::new("Sydney, Australia", -33.863400, 151.211000),
    PresetLocation::new("Hong Kong, China", 22.284681, 114.158177),
    // Indian tier 1 cities
    PresetLocation::new("Delhi, India", 28.613939, 77.209021),
    PresetLocation::new("Bangalore, India", 12.971599, 77.594566),
    PresetLocation::new("Chennai, India", 13.082680, 80.270718),
    PresetLocation::new("Hyderabad, India", 17.385044, 78.486671),
    PresetLocation::new("Kolkata, India", 22.572646, 88.363895),
    // Indian tier 2 cities
    PresetLocation::new("Pune, India", 18.520430, 73.856744),
    PresetLocation::new("Ahmedabad, India", 23.022505, 72.571362),
    PresetLocation::new("Jaipur, India", 26.912434, 75.787270),
    PresetLocation::new("Lucknow, India", 26.846694, 80.946166),
    PresetLocation::new("Coimbatore, India", 11.016844, 76.955832),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_are_valid_coordinates() {
        for preset in PRESET_CATALOG.iter() {
            let coordinate = preset.coordinate;
            assert_eq!(
                Coordinate::new(coordinate.latitude(), coordinate.longitude()),
                Ok(coordinate),
                "preset '{}' is out of range",
                preset.title
            );
        }
    }

    #[test]
    fn no_preset_uses_the_zero_sentinel() {
        for preset in PRESET_CATALOG.iter() {
            assert_ne!(preset.coordinate.latitude(), 0.0, "{}", preset.title);
            assert_ne!(preset.coordinate.longitude(), 0.0, "{}", preset.title);
        }
    }
}
