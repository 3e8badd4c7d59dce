use crate::error::Result;
use crate::models::Listing;
use crate::services::types::RouteOption;
use async_trait::async_trait;

/// Produces advisory text for a set of listings being compared
/// A language-model backed generator can replace the canned one behind this trait
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn insights(&self, listings: &[Listing]) -> Result<Vec<String>>;

    /// Get the name of the insight provider
    fn provider_name(&self) -> &'static str;
}

/// Computes commute options from a listing to a destination
/// A real routing API can replace the static planner behind this trait
#[async_trait]
pub trait RoutePlanner: Send + Sync {
    /// One option per transport mode, in bus, metro, car order
    async fn plan(&self, listing: &Listing, destination: &str) -> Result<Vec<RouteOption>>;

    /// Get the name of the routing provider
    fn provider_name(&self) -> &'static str;
}
