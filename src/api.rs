//! API module for talking to Mojang.
//!
//! This module handles:
//! - Resolving a player UUID to a display name via the profile API
//! - Fanning lookups out over a bounded worker pool
//!
//! A lookup failure carries the UUID it was for; the caller decides what
//! to do with it (the pipeline aborts the whole run).

use lazy_static::lazy_static;
use log::debug;
use rayon::prelude::*;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

const USER_AGENT: &str = "statsheet/0.1.0";

const PROFILE_API_BASE: &str = "https://api.mojang.com/user/profiles";

lazy_static! {
    static ref AGENT: ureq::Agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(10))
        .build();
}

/// A name lookup that failed, tagged with the UUID it was for.
#[derive(Debug, Clone, PartialEq)]
pub struct NameLookupError {
    pub uuid: String,
    pub reason: String,
}

impl NameLookupError {
    fn new(uuid: &str, reason: String) -> Self {
        Self { uuid: uuid.to_string(), reason }
    }
}

impl fmt::Display for NameLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not resolve a name for {}: {}", self.uuid, self.reason)
    }
}

/// Build the profile API URL for a UUID
fn profile_url(uuid: &str) -> String {
    format!("{}/{}/names", PROFILE_API_BASE, uuid)
}

/// Resolve one UUID to a display name via the Mojang profile API.
///
/// The API returns the player's full name history; the first entry's name
/// is used. An unknown UUID answers 204 with no body, which counts as a
/// failure rather than a blank name.
pub fn get_player_name(uuid: &str) -> Result<String, NameLookupError> {
    debug!("looking up name for {}", uuid);

    let url = profile_url(uuid);
    let resp = AGENT
        .get(&url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| NameLookupError::new(uuid, e.to_string()))?;

    if resp.status() == 204 {
        return Err(NameLookupError::new(uuid, "no profile found".to_string()));
    }

    let body = resp
        .into_string()
        .map_err(|e| NameLookupError::new(uuid, format!("failed to read response: {}", e)))?;

    parse_name_response(&body).map_err(|reason| NameLookupError::new(uuid, reason))
}

/// Parse a profile API response body into a display name.
///
/// The body is a JSON array of name-history entries ordered oldest first:
/// `[{"name": "jeb_"}, {"name": "jeb__", "changedToAt": ...}]`.
pub fn parse_name_response(body: &str) -> Result<String, String> {
    #[derive(Deserialize)]
    struct NameEntry {
        name: String,
    }

    let history: Vec<NameEntry> =
        serde_json::from_str(body).map_err(|e| format!("unexpected response: {}", e))?;

    history
        .into_iter()
        .next()
        .map(|entry| entry.name)
        .ok_or_else(|| "empty name history".to_string())
}

/// Resolve a batch of UUIDs to display names.
///
/// Lookups run on a worker pool capped at `concurrency` threads; the
/// returned names are positionally aligned with `uuids`. The first
/// failure aborts the batch.
pub fn resolve_names(uuids: &[String], concurrency: usize) -> Result<Vec<String>, NameLookupError> {
    if uuids.is_empty() {
        return Ok(Vec::new());
    }

    let workers = concurrency.clamp(1, uuids.len());
    debug!("resolving {} names with {} workers", uuids.len(), workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|n| format!("name-lookup-{}", n))
        .build()
        .map_err(|e| NameLookupError::new("*", format!("failed to start lookup pool: {}", e)))?;

    pool.install(|| uuids.par_iter().map(|uuid| get_player_name(uuid)).collect())
}
