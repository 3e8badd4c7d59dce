use anyhow::Result;
use rental_scout::models::{FilterCriteria, TransportMode};
use rental_scout::services::{summarize, RECOMMENDATION_LIMIT};
use rental_scout::store::JsonFileSource;
use rental_scout::{AppConfig, DataStore, LatencyConfig, ProfileEdit, QueryService, Session};
use std::sync::Arc;
use tempfile::TempDir;

fn bundled_service() -> QueryService {
    QueryService::new(Arc::new(DataStore::bundled().unwrap()), LatencyConfig::none())
}

fn ids(listings: &[rental_scout::Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.clone()).collect()
}

#[tokio::test]
async fn test_istanbul_under_13000() {
    let service = bundled_service();
    let criteria = FilterCriteria::new().with_city("İstanbul").with_max_rent(13000);

    let listings = service.filter(&criteria).await;

    assert_eq!(ids(&listings), vec!["1", "2"]);
}

#[tokio::test]
async fn test_sample_profile_recommendations() {
    let service = bundled_service();
    let session = Session::start(&service);

    let picks = session.recommendations(&service).await;

    // 2 is in Beylikdüzü, 4 in Çankaya, 5 in Konak with four rooms
    assert_eq!(ids(&picks), vec!["1", "3", "6"]);
    assert!(picks.len() <= RECOMMENDATION_LIMIT);
}

#[tokio::test]
async fn test_filter_preserves_list_order() {
    let service = bundled_service();
    let all = ids(&service.list_all().await);

    let filtered = ids(&service.filter(&FilterCriteria::new().with_rooms([2, 4])).await);

    assert_eq!(filtered, vec!["3", "4", "5", "6"]);
    let positions: Vec<usize> = filtered
        .iter()
        .map(|id| all.iter().position(|a| a == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_lookup_every_listing_by_id() {
    let service = bundled_service();

    for listing in service.list_all().await {
        let found = service.get_by_id(&listing.id).await;
        assert_eq!(found.as_ref(), Some(&listing));
    }
    assert!(service.get_by_id("0").await.is_none());
}

#[tokio::test]
async fn test_compare_and_routes_for_detail_page() -> Result<()> {
    let service = bundled_service();

    let comparison = service
        .compare(&["3".to_string(), "1".to_string(), "nope".to_string()])
        .await?;
    assert_eq!(ids(&comparison.listings), vec!["1", "3"]);
    assert_eq!(comparison.insights.len(), 4);

    let plan = service.route_options("4", "Kızılay").await?.expect("listing 4 exists");
    let car = plan
        .routes
        .iter()
        .find(|r| r.mode == TransportMode::Car)
        .expect("car is always offered");
    assert_eq!((car.duration, car.cost), (35, 25));
    assert_eq!(plan.routes.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_summary_of_filtered_listings() {
    let service = bundled_service();

    let istanbul = service.filter(&FilterCriteria::new().with_city("İstanbul")).await;
    let summary = summarize(&istanbul);
    assert_eq!(summary.count, 4);
    assert_eq!(summary.city_count, 1);
    assert_eq!(summary.average_rent, 12250.0);

    let nothing = service.filter(&FilterCriteria::new().with_city("Bursa")).await;
    assert_eq!(summarize(&nothing).average_rent, 0.0);
}

#[tokio::test]
async fn test_store_from_config_with_custom_files() -> Result<()> {
    let dir = TempDir::new()?;
    let listings_path = dir.path().join("listings.json");
    tokio::fs::write(
        &listings_path,
        r#"[
          {"id": "a", "name": "Bahçeli", "city": "Bursa", "district": "Nilüfer", "rooms": 3,
           "rent": 11000, "buildingAge": 6, "commuteTimes": {"bus": {"duration": 40, "cost": 17}},
           "dailyCost": 367},
          {"id": "b", "name": "Merkez", "city": "Bursa", "district": "Osmangazi", "rooms": 1,
           "rent": 7000, "buildingAge": 30, "commuteTimes": {}, "dailyCost": 233}
        ]"#,
    )
    .await?;
    let config_path = dir.path().join("rental-scout.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "[data]\nlistings = {:?}\n\n[latency]\nfilter_ms = 0\n",
            listings_path.to_string_lossy()
        ),
    )
    .await?;

    let config = AppConfig::load(Some(config_path.as_path()))?;
    let store = DataStore::load(config.data_source().as_ref()).await?;
    let service = QueryService::new(Arc::new(store), LatencyConfig::none());

    let cheap = service.filter(&FilterCriteria::new().with_max_rent(8000)).await;
    assert_eq!(ids(&cheap), vec!["b"]);
    assert_eq!(service.store().sample_profile().id, "user-1");

    Ok(())
}

#[tokio::test]
async fn test_duplicate_ids_in_file_fail_to_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("listings.json");
    let one = r#"{"id": "x", "name": "n", "city": "c", "district": "d", "rooms": 1,
                  "rent": 1, "buildingAge": 0, "commuteTimes": {}, "dailyCost": 1}"#;
    tokio::fs::write(&path, format!("[{}, {}]", one, one)).await?;

    let source = JsonFileSource::new(Some(path), None);
    let err = DataStore::load(&source).await.unwrap_err();

    assert!(err.to_string().contains("Duplicate listing id: x"));
    Ok(())
}

#[tokio::test]
async fn test_profile_edit_refreshes_recommendations() {
    let service = bundled_service();
    let mut session = Session::start(&service);
    assert_eq!(ids(&session.recommendations(&service).await), vec!["1", "3", "6"]);

    let edit = ProfileEdit {
        max_rent: Some(20000),
        preferred_districts: Some(vec!["Konak".to_string(), "Beylikdüzü".to_string()]),
        preferred_rooms: Some(vec![]),
        ..ProfileEdit::default()
    };
    let profile = session.edit_profile(edit).clone();

    assert_eq!(profile.preferred_rooms, None);
    assert_eq!(profile.name, "Ahmet Yılmaz");
    assert_eq!(ids(&session.recommendations(&service).await), vec!["2", "5"]);
    assert_eq!(session.profile(&service).await, profile);
}
