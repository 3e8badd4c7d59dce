pub mod insights;
pub mod query;
pub mod routes;
pub mod traits;
pub mod types;

pub use insights::CannedInsights;
pub use query::{filter_listings, recommend_listings, resolve_listings, QueryService};
pub use routes::StaticRoutePlanner;
pub use traits::{InsightGenerator, RoutePlanner};
pub use types::{summarize, Comparison, ListingSummary, RouteOption, RoutePlan, RECOMMENDATION_LIMIT};
