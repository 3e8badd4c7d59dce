use crate::models::{Listing, TransportMode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Most listings a recommendation returns
pub const RECOMMENDATION_LIMIT: usize = 10;

/// A way to commute from a listing, with its one-way duration and cost
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteOption {
    pub mode: TransportMode,
    /// Minutes
    pub duration: u32,
    /// TL per trip
    pub cost: u32,
    pub label: String,
}

impl RouteOption {
    /// Cost of a round trip
    pub fn daily_cost(&self) -> u32 {
        self.cost.saturating_mul(2)
    }
}

/// Commute options for one listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutePlan {
    pub listing_id: String,
    pub destination: String,
    pub routes: Vec<RouteOption>,
}

/// Listings placed side by side plus advisory text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub listings: Vec<Listing>,
    pub insights: Vec<String>,
}

/// Figures shown above a list of listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ListingSummary {
    pub count: usize,
    /// Zero when there are no listings
    pub average_rent: f64,
    pub city_count: usize,
}

pub fn summarize(listings: &[Listing]) -> ListingSummary {
    let count = listings.len();
    let average_rent = if count == 0 {
        0.0
    } else {
        listings.iter().map(|l| l.rent as f64).sum::<f64>() / count as f64
    };
    let city_count = listings
        .iter()
        .map(|l| l.city.as_str())
        .collect::<HashSet<_>>()
        .len();

    ListingSummary {
        count,
        average_rent,
        city_count,
    }
}
