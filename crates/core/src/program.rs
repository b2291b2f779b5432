//! Program records as returned by the NPO guide API, and the per-channel
//! filter that decides which of them end up in the listing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Category label emitted for live broadcasts.
pub const LIVE_CATEGORY: &str = "Live";
/// Category label emitted for repeats.
pub const REPEAT_CATEGORY: &str = "Herhaling";
/// Only images with this role become programme icons.
pub const DEFAULT_IMAGE_ROLE: &str = "default";

/// One entry of a guide-channel response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    pub guid: String,
    #[serde(default)]
    pub main_title: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(deserialize_with = "epoch_seconds")]
    pub program_start: DateTime<Utc>,
    #[serde(deserialize_with = "epoch_seconds")]
    pub program_end: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_filler: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_live: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_repeat: bool,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub name: String,
    #[serde(default)]
    pub secondaries: Vec<SubGenre>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubGenre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub role: String,
    pub url: String,
}

/// Flags are sometimes sent as `null`; that reads as unset.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EpochSeconds {
    Whole(i64),
    Fractional(f64),
}

/// Unix seconds, integral or not. Fractions are kept to the millisecond.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let instant = match EpochSeconds::deserialize(deserializer)? {
        EpochSeconds::Whole(secs) => DateTime::from_timestamp(secs, 0),
        EpochSeconds::Fractional(secs) if secs.is_finite() => {
            DateTime::from_timestamp_millis((secs * 1000.0) as i64)
        }
        EpochSeconds::Fractional(_) => None,
    };

    instant.ok_or_else(|| serde::de::Error::custom("timestamp out of range"))
}

impl ProgramRecord {
    /// The title, if the guide knows one. Empty strings count as unknown.
    pub fn title(&self) -> Option<&str> {
        self.main_title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.synopsis.as_deref().filter(|s| !s.is_empty())
    }

    /// Category labels in output order: live, repeat, then each genre
    /// followed by its secondaries.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = Vec::new();

        if self.is_live {
            categories.push(LIVE_CATEGORY);
        }
        if self.is_repeat {
            categories.push(REPEAT_CATEGORY);
        }
        for genre in &self.genres {
            categories.push(genre.name.as_str());
            categories.extend(genre.secondaries.iter().map(|s| s.name.as_str()));
        }

        categories
    }

    /// URLs of the images tagged with the default role, in upstream order.
    pub fn icon_urls(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .filter(|image| image.role == DEFAULT_IMAGE_ROLE)
            .map(|image| image.url.as_str())
    }
}

/// Drop duplicates, filler and untitled entries from one day's records.
///
/// `seen` holds the guids already accepted for the current channel; every
/// accepted record's guid is added to it. Order is preserved.
pub fn filter_programs(
    records: Vec<ProgramRecord>,
    seen: &mut HashSet<String>,
) -> Vec<ProgramRecord> {
    records
        .into_iter()
        .filter(|record| {
            if seen.contains(&record.guid) || record.is_filler || record.title().is_none() {
                return false;
            }
            seen.insert(record.guid.clone());
            true
        })
        .collect()
}
