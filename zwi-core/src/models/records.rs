use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One organization, facility or initiative in the map directory.
///
/// Loaded verbatim from `directory.json`; the application never creates,
/// updates or deletes entries. Optional fields are tolerated as absent so a
/// sparse record degrades to "does not match" in filters instead of failing
/// the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub entry_type: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// `[longitude, latitude]`, WGS84. `None` when the entry has no pin.
    #[serde(default)]
    pub coords: Option<[f64; 2]>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// One report, guide or toolkit in the resource library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub access_type: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Call-to-action link on a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCta {
    pub label: String,
    pub url: String,
}

/// One advocacy campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub cta: Option<CampaignCta>,
}

/// One community event. Fixtures carry calendar dates only, no times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rsvp: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl EventItem {
    /// Inclusive last day of the event; single-day events end when they start.
    pub fn end_date(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.start > today
    }
}
