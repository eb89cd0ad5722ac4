//! Static NANP area-code table
//!
//! Stands in for an external area-code/location collaborator: a fixed map
//! of common North American area codes to their anchor city and state.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::entities::Region;
use crate::domain::traits::RegionLookup;

/// Built-in area-code to (city, state) entries
const ENTRIES: &[(&str, &str, &str)] = &[
    ("202", "Washington", "DC"),
    ("206", "Seattle", "WA"),
    ("212", "New York", "NY"),
    ("213", "Los Angeles", "CA"),
    ("215", "Philadelphia", "PA"),
    ("216", "Cleveland", "OH"),
    ("303", "Denver", "CO"),
    ("305", "Miami", "FL"),
    ("312", "Chicago", "IL"),
    ("313", "Detroit", "MI"),
    ("404", "Atlanta", "GA"),
    ("408", "San Jose", "CA"),
    ("410", "Baltimore", "MD"),
    ("412", "Pittsburgh", "PA"),
    ("414", "Milwaukee", "WI"),
    ("415", "San Francisco", "CA"),
    ("503", "Portland", "OR"),
    ("504", "New Orleans", "LA"),
    ("510", "Oakland", "CA"),
    ("512", "Austin", "TX"),
    ("602", "Phoenix", "AZ"),
    ("612", "Minneapolis", "MN"),
    ("614", "Columbus", "OH"),
    ("615", "Nashville", "TN"),
    ("617", "Boston", "MA"),
    ("619", "San Diego", "CA"),
    ("702", "Las Vegas", "NV"),
    ("704", "Charlotte", "NC"),
    ("713", "Houston", "TX"),
    ("801", "Salt Lake City", "UT"),
    ("816", "Kansas City", "MO"),
    ("916", "Sacramento", "CA"),
    ("949", "Irvine", "CA"),
];

/// In-memory RegionLookup backed by the built-in table
pub struct StaticRegionTable {
    regions: HashMap<String, Region>,
}

impl StaticRegionTable {
    pub fn new() -> Self {
        let regions = ENTRIES
            .iter()
            .map(|(code, city, state)| (code.to_string(), Region::new(*city, *state)))
            .collect();
        Self { regions }
    }

    /// Add or replace a mapping
    pub fn with_region(mut self, area_code: impl Into<String>, region: Region) -> Self {
        self.regions.insert(area_code.into(), region);
        self
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for StaticRegionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionLookup for StaticRegionTable {
    async fn lookup(&self, area_code: &str) -> Option<Region> {
        self.regions.get(area_code).cloned()
    }
}
