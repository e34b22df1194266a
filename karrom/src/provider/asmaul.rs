//! Asmaul Husna (99 names of Allah) provider.
//!
//! # Endpoint
//!
//! `GET {base}/husna/semua` - all 99 names, Indonesian meanings only.
//!
//! The upstream schema has changed over time: the position field has been
//! published as `urutan` and as `id`, sometimes as a string. Every field is
//! therefore optional on the wire and normalized in [`AsmaulClient::all`].

use serde::{Deserialize, Deserializer};

use super::types::decode_data;
use super::url::join_url;
use crate::catalog::{bundled_name, AsmaulHusna};
use crate::provider::{HttpClient, ProviderError};

/// Default base URL of the Asmaul Husna API.
pub const DEFAULT_ASMAUL_BASE_URL: &str = "https://api.myquran.com/v2/";

/// One name as published by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AsmaulHusnaRecord {
    #[serde(
        default,
        alias = "urutan",
        alias = "id",
        deserialize_with = "number_or_string"
    )]
    pub index: Option<u16>,
    #[serde(default)]
    pub arab: Option<String>,
    #[serde(default)]
    pub latin: Option<String>,
    #[serde(default, rename = "indo")]
    pub meaning: Option<String>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u16),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

impl AsmaulHusnaRecord {
    /// Converts to the display record.
    ///
    /// `position` (1-based) stands in for a missing index. The API carries
    /// no English meaning, so it is taken from the bundled table.
    pub fn into_name(self, position: u16) -> AsmaulHusna {
        let index = self.index.unwrap_or(position);
        let meaning_en = bundled_name(index)
            .map(|bundled| bundled.meaning_en)
            .unwrap_or_default();

        AsmaulHusna {
            index,
            arabic: self.arab.unwrap_or_default(),
            latin: self.latin.unwrap_or_default(),
            meaning_id: self.meaning.unwrap_or_default(),
            meaning_en,
        }
    }
}

/// Client for the Asmaul Husna API.
pub struct AsmaulClient<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> AsmaulClient<C> {
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_ASMAUL_BASE_URL)
    }

    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the raw records.
    pub fn records(&self) -> Result<Vec<AsmaulHusnaRecord>, ProviderError> {
        let url = join_url(&self.base_url, "husna/semua");
        let body = self.http_client.get(&url)?;
        decode_data(&url, &body)
    }

    /// Fetches all names, normalized for display.
    pub fn all(&self) -> Result<Vec<AsmaulHusna>, ProviderError> {
        Ok(self
            .records()?
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_name(i as u16 + 1))
            .collect())
    }
}
