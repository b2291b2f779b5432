//! Static channel catalog.
//!
//! The catalog ships inside the binary (`data/channels.json`) and can be
//! replaced at startup by pointing `CHANNELS_PATH` at a file of the same
//! shape. It is loaded once and never mutated afterwards.

use serde::Deserialize;

use crate::error::CoreError;

const BUNDLED_CATALOG: &str = include_str!("../data/channels.json");

/// A single channel as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// XMLTV channel id, referenced by every `programme` of this channel.
    pub external_id: String,
    /// Display name.
    pub title: String,
    /// Logo URL, emitted as the channel icon.
    pub logo: String,
    /// Identifier used to look the channel up in the guide API.
    pub guid: String,
}

/// Ordered, read-only list of channels.
#[derive(Debug, Clone, Default)]
pub struct ChannelCatalog {
    channels: Vec<Channel>,
}

impl ChannelCatalog {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// Parse the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from a JSON array of channel objects.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let channels: Vec<Channel> = serde_json::from_str(json)?;
        Ok(Self { channels })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &str) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Channel> {
        self.channels.iter()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChannelCatalog {
    type Item = &'a Channel;
    type IntoIter = std::slice::Iter<'a, Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}
