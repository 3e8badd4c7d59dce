pub mod sources;

pub use sources::{BundledSource, DataSource, JsonFileSource};

use crate::error::{RentalError, Result};
use crate::models::{Listing, UserProfile};
use std::collections::HashSet;
use tracing::{debug, info};

/// Immutable in-memory collection of listings plus the sample profile.
///
/// Built once at startup; nothing mutates it afterwards, so it can be
/// shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DataStore {
    listings: Vec<Listing>,
    sample_profile: UserProfile,
}

impl DataStore {
    /// Build a store, rejecting duplicate ids and listings without rooms
    pub fn new(listings: Vec<Listing>, sample_profile: UserProfile) -> Result<Self> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(RentalError::DuplicateListing {
                    id: listing.id.clone(),
                });
            }
            if listing.rooms == 0 {
                return Err(RentalError::InvalidListing {
                    id: listing.id.clone(),
                    message: "room count must be positive".to_string(),
                });
            }
        }

        debug!("Data store holds {} listings", listings.len());

        Ok(Self {
            listings,
            sample_profile,
        })
    }

    /// Load listings and the sample profile from a data source
    pub async fn load(source: &dyn DataSource) -> Result<Self> {
        info!("Loading data from {}", source.source_name());

        let listings = source.listings().await?;
        let profile = source.profile().await?;

        Self::new(listings, profile)
    }

    /// Store backed by the bundled sample data
    pub fn bundled() -> Result<Self> {
        Self::new(BundledSource::parse_listings()?, BundledSource::parse_profile()?)
    }

    /// All listings, in insertion order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Linear scan by id
    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn sample_profile(&self) -> &UserProfile {
        &self.sample_profile
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_store_has_sample_data() {
        let store = DataStore::bundled().unwrap();

        assert_eq!(store.len(), 6);
        let ids: Vec<&str> = store.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(store.sample_profile().id, "user-1");
    }

    #[test]
    fn test_find_returns_none_for_unknown_id() {
        let store = DataStore::bundled().unwrap();

        assert_eq!(store.find("3").map(|l| l.district.as_str()), Some("Şişli"));
        assert!(store.find("42").is_none());
        assert!(store.find("").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut listings = BundledSource::parse_listings().unwrap();
        let mut copy = listings[0].clone();
        copy.name = "Copy".to_string();
        listings.push(copy);

        let err = DataStore::new(listings, BundledSource::parse_profile().unwrap()).unwrap_err();
        assert!(matches!(err, RentalError::DuplicateListing { id } if id == "1"));
    }

    #[test]
    fn test_zero_rooms_are_rejected() {
        let mut listings = BundledSource::parse_listings().unwrap();
        listings[2].rooms = 0;

        let err = DataStore::new(listings, BundledSource::parse_profile().unwrap()).unwrap_err();
        assert!(matches!(err, RentalError::InvalidListing { id, .. } if id == "3"));
    }
}
