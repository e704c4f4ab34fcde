//! Core data types for a sheet run.
//!
//! Everything here is owned by a single run: loaded once, read-only
//! afterward, dropped when the run ends.

use std::collections::HashMap;

/// Two-level stats mapping: category name -> statistic name -> value.
///
/// This is the shape of the `"stats"` section of a vanilla stats file,
/// e.g. `"minecraft:mined" -> "minecraft:stone" -> 512`.
pub type StatMap = HashMap<String, HashMap<String, i64>>;

/// One player's stats, keyed by the UUID the stats file was named after.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// UUID taken from the file stem (never validated; offline-mode servers
    /// write non-standard identifiers and those files still count).
    pub uuid: String,

    /// The player's stats section. Empty if the file had none.
    pub stats: StatMap,
}
