use crate::coordinate_picker::{CoordinateInputError, CoordinatePicker, parse_degrees};
use crate::domain::Coordinate;
use crate::location_override_store::LocationOverrideStore;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const CUSTOM_ROW: usize = 0;
const CUSTOM_TITLE: &str = "Custom...";

/// What a row looks like in the location list.
#[derive(PartialEq, Debug)]
pub struct RowModel {
    pub title: String,
    pub subtitle: Option<String>,
    pub checked: bool,
}

#[derive(PartialEq, Debug)]
pub enum RowSelection {
    Custom(Coordinate),
    Preset { row: usize, coordinate: Coordinate },
    Cancelled,
}

/// Maps the rows of the location list onto the override store.
///
/// Row 0 is the custom entry and every following row is a preset, in catalog order.
#[derive(Debug)]
pub struct LocationSelector {
    store: Arc<LocationOverrideStore>,
}

impl LocationSelector {
    pub fn new(store: Arc<LocationOverrideStore>) -> Self {
        LocationSelector { store }
    }

    pub fn row_count(&self) -> usize {
        self.store.preset_catalog().len() + 1
    }

    /// The row that shows a checkmark, `None` when no location is simulated.
    pub fn selected_row(&self) -> Option<usize> {
        self.store.get_override()?;
        Some(self.store.matched_preset_index().unwrap_or(CUSTOM_ROW))
    }

    pub fn reset_enabled(&self) -> bool {
        self.store.get_override().is_some()
    }

    pub fn rows(&self) -> Vec<RowModel> {
        let selected_row = self.selected_row();
        let custom_selected = selected_row == Some(CUSTOM_ROW);

        let custom = RowModel {
            title: CUSTOM_TITLE.to_string(),
            subtitle: self.store.get_override().filter(|_| custom_selected).map(|c| c.to_string()),
            checked: custom_selected,
        };

        let presets = self.store.preset_catalog().iter().enumerate().map(|(index, preset)| RowModel {
            title: preset.title.to_string(),
            subtitle: None,
            checked: selected_row == Some(index + 1),
        });

        std::iter::once(custom).chain(presets).collect()
    }

    #[instrument(skip(self, picker))]
    pub fn select_row(&self, row: usize, picker: &mut dyn CoordinatePicker) -> Result<RowSelection, SelectorError> {
        if row == CUSTOM_ROW {
            let Some(coordinate) = picker.pick(self.store.get_override()) else {
                debug!("📍 Picking a custom location... cancelled");
                return Ok(RowSelection::Cancelled);
            };

            self.store.set_override(coordinate);
            info!("📍 Selected custom location {}", coordinate);
            return Ok(RowSelection::Custom(coordinate));
        }

        let Some(preset) = self.store.preset_catalog().get(row - 1) else {
            return Err(SelectorError::RowOutOfRange {
                row,
                row_count: self.row_count(),
            });
        };

        self.store.set_override(preset.coordinate);
        info!("📍 Selected preset '{}'", preset.title);
        Ok(RowSelection::Preset {
            row,
            coordinate: preset.coordinate,
        })
    }

    /// Sets the override from the manual entry fields. Leaves the store untouched on invalid input.
    #[instrument(skip(self))]
    pub fn submit_manual_entry(&self, latitude: &str, longitude: &str) -> Result<Coordinate, CoordinateInputError> {
        let (latitude, longitude) = parse_degrees(latitude, longitude)?;
        Ok(self.store.set_custom_location(latitude, longitude)?)
    }

    pub fn manual_entry_prefill(&self) -> Option<(String, String)> {
        self.store
            .get_override()
            .map(|coordinate| (coordinate.latitude().to_string(), coordinate.longitude().to_string()))
    }

    pub fn reset(&self) {
        self.store.clear_override();
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SelectorError {
    #[error("row {row} does not exist, expected a row below {row_count}")]
    RowOutOfRange { row: usize, row_count: usize },
}
