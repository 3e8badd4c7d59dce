use crate::error::Result;
use crate::models::{Listing, TransportMode};
use crate::services::traits::RoutePlanner;
use crate::services::types::RouteOption;
use async_trait::async_trait;

/// Reads commute data off the listing and fills gaps with per-mode defaults.
/// The destination is not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoutePlanner;

impl StaticRoutePlanner {
    pub fn options_for(listing: &Listing) -> Vec<RouteOption> {
        TransportMode::ALL
            .iter()
            .map(|&mode| {
                let (duration, cost) = listing
                    .commute_times
                    .leg(mode)
                    .unwrap_or_else(|| mode.fallback_leg());
                RouteOption {
                    mode,
                    duration,
                    cost,
                    label: mode.label().to_string(),
                }
            })
            .collect()
    }
}

#[async_trait]
impl RoutePlanner for StaticRoutePlanner {
    async fn plan(&self, listing: &Listing, _destination: &str) -> Result<Vec<RouteOption>> {
        Ok(Self::options_for(listing))
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}
