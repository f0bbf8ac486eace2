use crate::defaults::Defaults;
use crate::domain::events::OverrideChange;
use crate::domain::{Coordinate, CoordinateError, PRESET_CATALOG, PresetLocation};
use crate::location_listeners::LocationListeners;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, instrument};

pub const LATITUDE_KEY: &str = "_simulatedLocationLatitude";
pub const LONGITUDE_KEY: &str = "_simulatedLocationLongitude";

/// Owns the simulated location that replaces the device's real location.
///
/// The override is persisted as two separate numbers. A stored zero in either
/// component means "no override", which makes any coordinate on the equator or
/// the prime meridian unrepresentable. Existing persisted data depends on this
/// encoding, so it is kept as is.
///
/// `pair` guards both components so a reader never observes half of a write.
#[derive(Debug)]
pub struct LocationOverrideStore {
    defaults: Arc<dyn Defaults>,
    pair: RwLock<()>,
    listeners: LocationListeners,
}

impl LocationOverrideStore {
    pub fn new(defaults: Arc<dyn Defaults>) -> Self {
        LocationOverrideStore {
            defaults,
            pair: RwLock::new(()),
            listeners: LocationListeners::new(),
        }
    }

    pub fn listeners(&self) -> &LocationListeners {
        &self.listeners
    }

    pub fn get_override(&self) -> Option<Coordinate> {
        let (latitude, longitude) = {
            let _guard = self.pair.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            (self.defaults.double(LATITUDE_KEY), self.defaults.double(LONGITUDE_KEY))
        };
        if latitude == 0.0 || longitude == 0.0 {
            return None;
        }

        match Coordinate::new(latitude, longitude) {
            Ok(coordinate) => Some(coordinate),
            Err(err) => {
                debug!("🌍 Ignoring persisted override: {}", err);
                None
            }
        }
    }

    #[instrument(skip(self))]
    pub fn set_override(&self, coordinate: Coordinate) {
        {
            let _guard = self.pair.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            self.defaults.set_double(LATITUDE_KEY, coordinate.latitude());
            self.defaults.set_double(LONGITUDE_KEY, coordinate.longitude());
        }
        info!("🌍 Simulating location {}", coordinate);

        self.listeners.publish(&OverrideChange::now(Some(coordinate)));
    }

    #[instrument(skip(self))]
    pub fn set_custom_location(&self, latitude: f64, longitude: f64) -> Result<Coordinate, CoordinateError> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        self.set_override(coordinate);
        Ok(coordinate)
    }

    #[instrument(skip(self))]
    pub fn clear_override(&self) {
        {
            let _guard = self.pair.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            self.defaults.remove(LATITUDE_KEY);
            self.defaults.remove(LONGITUDE_KEY);
        }
        info!("🌍 Cleared simulated location");

        self.listeners.publish(&OverrideChange::now(None));
    }

    pub fn preset_catalog(&self) -> &'static [PresetLocation] {
        &PRESET_CATALOG
    }

    /// The 1-based position of the preset that exactly equals the override.
    ///
    /// `None` when there is no override or it was not set from a preset. Position 0
    /// belongs to the custom entry and is never returned.
    pub fn matched_preset_index(&self) -> Option<usize> {
        let active = self.get_override()?;
        self.preset_catalog()
            .iter()
            .position(|preset| preset.coordinate == active)
            .map(|index| index + 1)
    }
}
