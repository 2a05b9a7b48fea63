use std::fmt;

use serde::{Deserialize, Serialize};

/// A waste stream tracked by the impact calculator.
///
/// The set is closed: composition fixtures and coefficient tables key off
/// exactly these five streams, so an unknown stream name is a data error
/// caught at load time rather than a category that silently appears at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Organics,
    Paper,
    Plastics,
    Metals,
    Glass,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 5] = [
        Self::Organics,
        Self::Paper,
        Self::Plastics,
        Self::Metals,
        Self::Glass,
    ];

    /// Stable lowercase name matching the fixture keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organics => "organics",
            Self::Paper => "paper",
            Self::Plastics => "plastics",
            Self::Metals => "metals",
            Self::Glass => "glass",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "organics" => Some(Self::Organics),
            "paper" => Some(Self::Paper),
            "plastics" => Some(Self::Plastics),
            "metals" => Some(Self::Metals),
            "glass" => Some(Self::Glass),
            _ => None,
        }
    }

    /// The employment bucket this stream feeds.
    ///
    /// Paper, metals and glass move through recycling facilities and share
    /// one coefficient; plastics stand proxy for reuse programs.
    pub fn job_bucket(&self) -> JobBucket {
        match self {
            Self::Organics => JobBucket::Organics,
            Self::Paper | Self::Metals | Self::Glass => JobBucket::Recyclables,
            Self::Plastics => JobBucket::Reuse,
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment coefficient buckets used by the jobs estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobBucket {
    Organics,
    Recyclables,
    Reuse,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_category() {
        for category in MaterialCategory::ALL {
            assert_eq!(MaterialCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn parse_rejects_unknown_stream() {
        assert_eq!(MaterialCategory::parse("textiles"), None);
    }

    #[test]
    fn recyclables_bucket_covers_paper_metals_glass() {
        assert_eq!(MaterialCategory::Paper.job_bucket(), JobBucket::Recyclables);
        assert_eq!(MaterialCategory::Metals.job_bucket(), JobBucket::Recyclables);
        assert_eq!(MaterialCategory::Glass.job_bucket(), JobBucket::Recyclables);
        assert_eq!(MaterialCategory::Organics.job_bucket(), JobBucket::Organics);
        assert_eq!(MaterialCategory::Plastics.job_bucket(), JobBucket::Reuse);
    }
}
