use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use zwi_core::{CalculatorConfig, CampaignItem, DirectoryEntry, EventItem, ResourceItem};

/// Errors that can occur when loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in {name}: {message}")]
    JsonParse { name: String, message: String },

    #[error("CSV parse error: {0}")]
    CsvParse(String),
}

impl From<csv::Error> for FixtureError {
    fn from(err: csv::Error) -> Self {
        FixtureError::CsvParse(err.to_string())
    }
}

pub const DIRECTORY_FILE: &str = "directory.json";
pub const RESOURCES_FILE: &str = "resources.json";
pub const CAMPAIGNS_FILE: &str = "campaigns.json";
pub const EVENTS_FILE: &str = "events.json";
pub const CONFIG_FILE: &str = "calculator.config.json";

fn parse_json<T: DeserializeOwned, R: Read>(reader: R, name: &str) -> Result<T, FixtureError> {
    serde_json::from_reader(reader).map_err(|e| FixtureError::JsonParse {
        name: name.to_string(),
        message: e.to_string(),
    })
}

pub fn load_directory<R: Read>(reader: R) -> Result<Vec<DirectoryEntry>, FixtureError> {
    parse_json(reader, DIRECTORY_FILE)
}

pub fn load_resources<R: Read>(reader: R) -> Result<Vec<ResourceItem>, FixtureError> {
    parse_json(reader, RESOURCES_FILE)
}

pub fn load_campaigns<R: Read>(reader: R) -> Result<Vec<CampaignItem>, FixtureError> {
    parse_json(reader, CAMPAIGNS_FILE)
}

pub fn load_events<R: Read>(reader: R) -> Result<Vec<EventItem>, FixtureError> {
    parse_json(reader, EVENTS_FILE)
}

pub fn load_config<R: Read>(reader: R) -> Result<CalculatorConfig, FixtureError> {
    parse_json(reader, CONFIG_FILE)
}

fn open(dir: &Path, name: &str) -> Result<File, FixtureError> {
    File::open(dir.join(name)).map_err(|source| FixtureError::Io {
        name: name.to_string(),
        source,
    })
}

/// Loads a single fixture file from `dir` by name.
pub fn load_file<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, FixtureError> {
    parse_json(open(dir, name)?, name)
}

/// Every bundled fixture, loaded in one pass. The whole set is read-only
/// reference data; nothing in the application mutates it after load.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub directory: Vec<DirectoryEntry>,
    pub resources: Vec<ResourceItem>,
    pub campaigns: Vec<CampaignItem>,
    pub events: Vec<EventItem>,
    pub config: CalculatorConfig,
}

impl FixtureSet {
    pub fn load_dir(dir: &Path) -> Result<Self, FixtureError> {
        Ok(Self {
            directory: load_directory(open(dir, DIRECTORY_FILE)?)?,
            resources: load_resources(open(dir, RESOURCES_FILE)?)?,
            campaigns: load_campaigns(open(dir, CAMPAIGNS_FILE)?)?,
            events: load_events(open(dir, EVENTS_FILE)?)?,
            config: load_config(open(dir, CONFIG_FILE)?)?,
        })
    }
}

/// A single row from a directory CSV export.
///
/// Expected columns: `id,name,entry_type,city,province,country,lng,lat,
/// topics,verified`. `topics` is `;`-separated; `lng`/`lat` may be empty for
/// entries without a map pin; `verified` accepts `true`/`yes`/`1`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct DirectoryCsvRecord {
    id: String,
    name: String,
    entry_type: String,
    #[serde(deserialize_with = "deserialize_optional_string")]
    city: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    province: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    country: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_f64")]
    lng: Option<f64>,
    #[serde(deserialize_with = "deserialize_optional_f64")]
    lat: Option<f64>,
    #[serde(default)]
    topics: String,
    #[serde(default)]
    verified: String,
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Importer for directory data maintained as a CSV sheet.
///
/// Partner organizations submit directory updates as spreadsheets; this
/// converts a CSV export of that sheet into [`DirectoryEntry`] records that
/// can be merged with the JSON fixture.
pub struct DirectoryCsvImporter;

impl DirectoryCsvImporter {
    /// Parse directory entries from a CSV reader.
    ///
    /// Rows with only one of `lng`/`lat` get no coordinates; the half-pair
    /// is discarded with a warning rather than inventing a location.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<DirectoryEntry>, FixtureError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();

        for result in csv_reader.deserialize() {
            let record: DirectoryCsvRecord = result?;

            let coords = match (record.lng, record.lat) {
                (Some(lng), Some(lat)) => Some([lng, lat]),
                (None, None) => None,
                _ => {
                    tracing::warn!(id = %record.id, "dropping half-specified coordinates");
                    None
                }
            };

            let topics = record
                .topics
                .split(';')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();

            let verified = matches!(
                record.verified.trim().to_lowercase().as_str(),
                "true" | "yes" | "1"
            );

            entries.push(DirectoryEntry {
                id: record.id,
                name: record.name,
                entry_type: record.entry_type,
                city: record.city,
                province: record.province,
                country: record.country,
                coords,
                topics,
                verified,
                description: None,
            });
        }

        Ok(entries)
    }
}
