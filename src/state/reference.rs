//! Country and city reference data

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a custom country/city table
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid country table in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("country table is empty")]
    Empty,
    #[error("country name is blank")]
    BlankCountry,
    #[error("country '{0}' is listed more than once")]
    DuplicateCountry(String),
    #[error("country '{0}' has no cities")]
    NoCities(String),
    #[error("country '{0}' has a blank city name")]
    BlankCity(String),
}

/// One country and its selectable cities, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country: String,
    pub cities: Vec<String>,
}

/// Immutable country → ordered city list mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCityTable {
    entries: Vec<CountryEntry>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "India",
        &[
            "Delhi",
            "Mumbai",
            "Bangalore",
            "Chennai",
            "Kolkata",
            "Hyderabad",
            "Ahmedabad",
            "Pune",
            "Jaipur",
            "Lucknow",
        ],
    ),
    ("Canada", &["Toronto", "Vancouver", "Montreal"]),
    ("Australia", &["Sydney", "Melbourne", "Brisbane"]),
    ("Germany", &["Berlin", "Munich", "Frankfurt"]),
    ("France", &["Paris", "Lyon", "Marseille"]),
    ("Japan", &["Tokyo", "Osaka", "Kyoto"]),
    ("Brazil", &["Sao Paulo", "Rio de Janeiro", "Salvador"]),
    ("USA", &["New York", "Los Angeles", "Chicago"]),
    ("UK", &["London", "Manchester", "Birmingham"]),
];

impl Default for CountryCityTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(country, cities)| CountryEntry {
                    country: country.to_string(),
                    cities: cities.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl CountryCityTable {
    /// Build a table from entries, rejecting malformed reference data
    pub fn new(entries: Vec<CountryEntry>) -> Result<Self, ReferenceDataError> {
        if entries.is_empty() {
            return Err(ReferenceDataError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.country.trim().is_empty() {
                return Err(ReferenceDataError::BlankCountry);
            }
            if !seen.insert(entry.country.as_str()) {
                return Err(ReferenceDataError::DuplicateCountry(entry.country.clone()));
            }
            if entry.cities.is_empty() {
                return Err(ReferenceDataError::NoCities(entry.country.clone()));
            }
            if entry.cities.iter().any(|c| c.trim().is_empty()) {
                return Err(ReferenceDataError::BlankCity(entry.country.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Load a table from a JSON array of `{"country", "cities"}` objects
    pub fn from_path(path: &Path) -> Result<Self, ReferenceDataError> {
        let content = fs::read_to_string(path).map_err(|source| ReferenceDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<CountryEntry> =
            serde_json::from_str(&content).map_err(|source| ReferenceDataError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(entries)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.country.as_str())
    }

    /// Cities for `country`; empty for an unknown or unselected country
    pub fn cities(&self, country: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.country == country)
            .map(|e| e.cities.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_city(&self, country: &str, city: &str) -> bool {
        self.cities(country).iter().any(|c| c == city)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
