use crate::domain::Coordinate;
use chrono::{DateTime, Utc};

#[derive(Clone, PartialEq, Debug)]
pub struct OverrideChange {
    /// The override after the change, `None` once it has been cleared.
    pub coordinate: Option<Coordinate>,
    pub changed_at: DateTime<Utc>,
}

impl OverrideChange {
    pub fn now(coordinate: Option<Coordinate>) -> Self {
        OverrideChange {
            coordinate,
            changed_at: Utc::now(),
        }
    }
}
