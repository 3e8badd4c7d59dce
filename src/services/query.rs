use crate::config::{simulate_latency, LatencyConfig};
use crate::error::Result;
use crate::models::{FilterCriteria, Listing, UserProfile};
use crate::services::insights::CannedInsights;
use crate::services::routes::StaticRoutePlanner;
use crate::services::traits::{InsightGenerator, RoutePlanner};
use crate::services::types::{Comparison, RoutePlan, RECOMMENDATION_LIMIT};
use crate::store::DataStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Listings satisfying every present criterion, in source order
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

/// First matches for a profile, in source order, capped at [`RECOMMENDATION_LIMIT`].
/// No scoring is applied.
pub fn recommend_listings(listings: &[Listing], profile: &UserProfile) -> Vec<Listing> {
    let criteria = profile.criteria();
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .take(RECOMMENDATION_LIMIT)
        .cloned()
        .collect()
}

/// Listings whose id was requested, in source order. Unknown ids are dropped.
pub fn resolve_listings(listings: &[Listing], ids: &[String]) -> Vec<Listing> {
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    listings
        .iter()
        .filter(|listing| wanted.contains(listing.id.as_str()))
        .cloned()
        .collect()
}

/// Read operations over the data store, each behind an artificial delay
#[derive(Clone)]
pub struct QueryService {
    store: Arc<DataStore>,
    insights: Arc<dyn InsightGenerator>,
    routes: Arc<dyn RoutePlanner>,
    latency: LatencyConfig,
}

impl QueryService {
    /// Service with the canned insight generator and static route planner
    pub fn new(store: Arc<DataStore>, latency: LatencyConfig) -> Self {
        Self {
            store,
            insights: Arc::new(CannedInsights),
            routes: Arc::new(StaticRoutePlanner),
            latency,
        }
    }

    pub fn with_insights(mut self, insights: Arc<dyn InsightGenerator>) -> Self {
        self.insights = insights;
        self
    }

    pub fn with_route_planner(mut self, routes: Arc<dyn RoutePlanner>) -> Self {
        self.routes = routes;
        self
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }

    /// Copy of every listing in insertion order
    pub async fn list_all(&self) -> Vec<Listing> {
        simulate_latency(self.latency.list_all_ms).await;
        debug!("Listing all {} listings", self.store.len());
        self.store.listings().to_vec()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Listing> {
        simulate_latency(self.latency.get_by_id_ms).await;
        let found = self.store.find(id).cloned();
        if found.is_none() {
            debug!("Listing {} not found", id);
        }
        found
    }

    pub async fn filter(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        simulate_latency(self.latency.filter_ms).await;
        if criteria.is_unconstrained() {
            debug!("Unconstrained filter, every listing matches");
        }
        let matches = filter_listings(self.store.listings(), criteria);
        info!("Filter matched {} of {} listings", matches.len(), self.store.len());
        matches
    }

    pub async fn recommend(&self, profile: &UserProfile) -> Vec<Listing> {
        simulate_latency(self.latency.recommend_ms).await;
        let picks = recommend_listings(self.store.listings(), profile);
        info!("Recommending {} listings for {}", picks.len(), profile.id);
        picks
    }

    /// Resolve the ids that exist and attach insights for them
    pub async fn compare(&self, ids: &[String]) -> Result<Comparison> {
        simulate_latency(self.latency.compare_ms).await;
        let listings = resolve_listings(self.store.listings(), ids);
        if listings.len() < ids.len() {
            debug!(
                "Dropped {} unresolved ids from comparison",
                ids.len() - listings.len()
            );
        }

        let insights = self.insights.insights(&listings).await?;
        info!(
            "Compared {} listings with {} insights from {}",
            listings.len(),
            insights.len(),
            self.insights.provider_name()
        );

        Ok(Comparison { listings, insights })
    }

    /// Commute options for a listing; `None` when the listing does not exist
    pub async fn route_options(&self, listing_id: &str, destination: &str) -> Result<Option<RoutePlan>> {
        simulate_latency(self.latency.routes_ms).await;
        let Some(listing) = self.store.find(listing_id) else {
            debug!("No routes: listing {} not found", listing_id);
            return Ok(None);
        };

        let routes = self.routes.plan(listing, destination).await?;
        debug!(
            "Planned {} routes for listing {} via {}",
            routes.len(),
            listing_id,
            self.routes.provider_name()
        );

        Ok(Some(RoutePlan {
            listing_id: listing.id.clone(),
            destination: destination.to_string(),
            routes,
        }))
    }
}
