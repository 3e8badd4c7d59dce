use crate::error::Result;
use crate::models::{Listing, UserProfile};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

const BUNDLED_LISTINGS: &str = include_str!("../../data/listings.json");
const BUNDLED_PROFILE: &str = include_str!("../../data/profile.json");

/// Common trait for everything that can feed the data store
/// New backends (a real listings API, a database export) plug in here
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every listing, in the order they should be presented
    async fn listings(&self) -> Result<Vec<Listing>>;

    /// Fetch the profile a session starts from
    async fn profile(&self) -> Result<UserProfile>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}

/// Sample dataset compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn parse_listings() -> Result<Vec<Listing>> {
        Ok(serde_json::from_str(BUNDLED_LISTINGS)?)
    }

    pub fn parse_profile() -> Result<UserProfile> {
        Ok(serde_json::from_str(BUNDLED_PROFILE)?)
    }
}

#[async_trait]
impl DataSource for BundledSource {
    async fn listings(&self) -> Result<Vec<Listing>> {
        Self::parse_listings()
    }

    async fn profile(&self) -> Result<UserProfile> {
        Self::parse_profile()
    }

    fn source_name(&self) -> &'static str {
        "bundled sample data"
    }
}

/// JSON files on disk, falling back to the bundled data for any path not given
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    listings_path: Option<PathBuf>,
    profile_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(listings_path: Option<PathBuf>, profile_path: Option<PathBuf>) -> Self {
        Self {
            listings_path,
            profile_path,
        }
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn listings(&self) -> Result<Vec<Listing>> {
        match &self.listings_path {
            Some(path) => {
                debug!("Reading listings from {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                Ok(serde_json::from_str(&content)?)
            }
            None => BundledSource::parse_listings(),
        }
    }

    async fn profile(&self) -> Result<UserProfile> {
        match &self.profile_path {
            Some(path) => {
                debug!("Reading profile from {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                Ok(serde_json::from_str(&content)?)
            }
            None => BundledSource::parse_profile(),
        }
    }

    fn source_name(&self) -> &'static str {
        "json files"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentalError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_json_file_source_reads_listings_and_falls_back_for_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listings.json");
        let listings = r#"[{
            "id": "a",
            "name": "Çatı Katı",
            "city": "Ankara",
            "district": "Çankaya",
            "rooms": 2,
            "rent": 9000,
            "buildingAge": 20,
            "commuteTimes": {},
            "dailyCost": 300
        }]"#;
        tokio::fs::write(&path, listings).await.unwrap();

        let source = JsonFileSource::new(Some(path), None);

        let loaded = source.listings().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Çatı Katı");
        assert!(loaded[0].photos.is_empty());

        let profile = source.profile().await.unwrap();
        assert_eq!(profile.name, "Ahmet Yılmaz");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(Some(dir.path().join("nope.json")), None);

        let err = source.listings().await.unwrap_err();
        assert!(matches!(err, RentalError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_profile_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        tokio::fs::write(&path, "{\"id\": 1}").await.unwrap();

        let source = JsonFileSource::new(None, Some(path));

        let err = source.profile().await.unwrap_err();
        assert!(matches!(err, RentalError::Json(_)));
    }
}
