mod file_defaults;
mod memory_defaults;

pub use file_defaults::FileDefaults;
pub use memory_defaults::MemoryDefaults;

use std::fmt::Debug;

/// A string-keyed store of scalar numbers that outlives the process.
///
/// Reads never fail: a key that was never written, was removed or could not be
/// decoded reads back as `0.0`.
pub trait Defaults: Debug + Send + Sync {
    fn double(&self, key: &str) -> f64;

    fn set_double(&self, key: &str, value: f64);

    fn remove(&self, key: &str);
}
