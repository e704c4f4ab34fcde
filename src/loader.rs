//! Stats folder ingestion.
//!
//! This module handles:
//! - Scanning the stats folder for per-player .json files
//! - Parsing each file's "stats" section
//! - Normalizing files with no stats section to an empty mapping

use crate::types::{PlayerRecord, StatMap};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of one <uuid>.json stats file.
///
/// The game writes `{"stats": {...}, "DataVersion": n}`; anything besides
/// the stats section is irrelevant here and ignored. A file without a
/// stats section still names a player, so it loads as an empty mapping.
#[derive(Deserialize)]
struct StatsFile {
    #[serde(default, deserialize_with = "lenient_stats")]
    stats: StatMap,
}

/// Accept a stats section that is missing, null, or not the expected
/// two-level map as an empty mapping. A file the game truncated or an old
/// pre-1.13 layout still names a player; only unparseable JSON is fatal.
fn lenient_stats<'de, D>(deserializer: D) -> Result<StatMap, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Load every <uuid>.json file in the stats folder.
///
/// Files are sorted by path before loading so the column order of the
/// final sheet is identical across runs; read_dir order is
/// platform-dependent. The returned records keep that order.
pub fn load_stats_dir(dir: &Path) -> Result<Vec<PlayerRecord>, String> {
    let entries = fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to list {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    debug!("found {} stats files in {}", paths.len(), dir.display());

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        records.push(load_stats_file(&path)?);
    }

    Ok(records)
}

/// Load a single stats file. The file stem is the player's UUID.
fn load_stats_file(path: &Path) -> Result<PlayerRecord, String> {
    let uuid = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let body = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let parsed: StatsFile =
        serde_json::from_str(&body).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    debug!("loaded {} ({} stat categories)", uuid, parsed.stats.len());

    Ok(PlayerRecord { uuid, stats: parsed.stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_loads_files_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "bbb.json", r#"{"stats": {}}"#);
        write_file(dir.path(), "aaa.json", r#"{"stats": {}}"#);

        let records = load_stats_dir(dir.path()).unwrap();
        let uuids: Vec<&str> = records.iter().map(|r| r.uuid.as_str()).collect();
        assert_eq!(uuids, ["aaa", "bbb"]);
    }

    #[test]
    fn test_ignores_non_json_files() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.json", r#"{"stats": {}}"#);
        write_file(dir.path(), "session.lock", "lock");
        write_file(dir.path(), "notes.txt", "not stats");

        let records = load_stats_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].uuid, "a");
    }

    #[test]
    fn test_parses_stats_section() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "a.json",
            r#"{"stats": {"minecraft:mined": {"minecraft:stone": 5}}, "DataVersion": 3465}"#,
        );

        let records = load_stats_dir(dir.path()).unwrap();
        assert_eq!(records[0].stats["minecraft:mined"]["minecraft:stone"], 5);
    }

    #[test]
    fn test_missing_stats_section_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.json", r#"{"DataVersion": 3465}"#);

        let records = load_stats_dir(dir.path()).unwrap();
        assert_eq!(records[0].uuid, "a");
        assert!(records[0].stats.is_empty());
    }

    #[test]
    fn test_malformed_stats_section_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.json", r#"{"stats": null}"#);
        write_file(dir.path(), "b.json", r#"{"stats": "corrupt"}"#);
        write_file(dir.path(), "c.json", r#"{"stat.mineBlock.minecraft.stone": 5}"#);

        let records = load_stats_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record.stats.is_empty(), "{} should load as empty", record.uuid);
        }
    }

    #[test]
    fn test_empty_dir_yields_no_records() {
        let dir = TempDir::new().unwrap();
        assert!(load_stats_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_fails_with_path() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "broken.json", "{not json");

        let err = load_stats_dir(dir.path()).unwrap_err();
        assert!(err.contains("broken.json"), "error should name the file: {}", err);
    }

    #[test]
    fn test_missing_dir_fails() {
        let err = load_stats_dir(Path::new("/no/such/stats")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
