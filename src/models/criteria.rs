use super::Listing;
use serde::{Deserialize, Serialize};

/// Search criteria for listings. An absent field places no constraint.
///
/// A present but empty room or district set is also treated as no
/// constraint; [`FilterCriteria::normalized`] makes that explicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Inclusive lower bound on monthly rent (TL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rent: Option<u32>,
    /// Inclusive upper bound on monthly rent (TL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_min_rent(mut self, min_rent: u32) -> Self {
        self.min_rent = Some(min_rent);
        self
    }

    pub fn with_max_rent(mut self, max_rent: u32) -> Self {
        self.max_rent = Some(max_rent);
        self
    }

    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = u32>) -> Self {
        self.rooms = Some(rooms.into_iter().collect());
        self
    }

    pub fn with_districts<S: Into<String>>(mut self, districts: impl IntoIterator<Item = S>) -> Self {
        self.districts = Some(districts.into_iter().map(Into::into).collect());
        self
    }

    /// Fold empty sets to absent
    pub fn normalized(mut self) -> Self {
        if self.rooms.as_ref().is_some_and(Vec::is_empty) {
            self.rooms = None;
        }
        if self.districts.as_ref().is_some_and(Vec::is_empty) {
            self.districts = None;
        }
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        let normalized = self.clone().normalized();
        normalized == FilterCriteria::default()
    }

    /// True when the listing satisfies every present predicate
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(city) = &self.city {
            if listing.city != *city {
                return false;
            }
        }

        if let Some(districts) = self.districts.as_ref().filter(|d| !d.is_empty()) {
            if !districts.iter().any(|d| *d == listing.district) {
                return false;
            }
        }

        if let Some(min_rent) = self.min_rent {
            if listing.rent < min_rent {
                return false;
            }
        }

        if let Some(max_rent) = self.max_rent {
            if listing.rent > max_rent {
                return false;
            }
        }

        if let Some(rooms) = self.rooms.as_ref().filter(|r| !r.is_empty()) {
            if !rooms.contains(&listing.rooms) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommuteTimes;

    fn listing(city: &str, district: &str, rooms: u32, rent: u32) -> Listing {
        Listing {
            id: "x".to_string(),
            name: "x".to_string(),
            city: city.to_string(),
            district: district.to_string(),
            rooms,
            rent,
            building_age: 1,
            photos: vec![],
            commute_times: CommuteTimes::default(),
            daily_cost: rent / 30,
            description: None,
            features: None,
            size: None,
        }
    }

    #[test]
    fn test_rent_bounds_are_inclusive() {
        let home = listing("İstanbul", "Şişli", 2, 15000);

        assert!(FilterCriteria::new().with_max_rent(15000).matches(&home));
        assert!(FilterCriteria::new().with_min_rent(15000).matches(&home));
        assert!(!FilterCriteria::new().with_max_rent(14999).matches(&home));
        assert!(!FilterCriteria::new().with_min_rent(15001).matches(&home));
    }

    #[test]
    fn test_zero_max_rent_is_a_real_bound() {
        let home = listing("Ankara", "Çankaya", 1, 6500);
        assert!(!FilterCriteria::new().with_max_rent(0).matches(&home));
    }

    #[test]
    fn test_empty_sets_do_not_constrain() {
        let home = listing("İzmir", "Konak", 4, 18000);
        let criteria = FilterCriteria::new()
            .with_rooms(Vec::<u32>::new())
            .with_districts(Vec::<String>::new());

        assert!(criteria.matches(&home));
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.normalized(), FilterCriteria::default());
    }

    #[test]
    fn test_city_match_is_exact() {
        let home = listing("İstanbul", "Kadıköy", 1, 8500);

        assert!(FilterCriteria::new().with_city("İstanbul").matches(&home));
        assert!(!FilterCriteria::new().with_city("istanbul").matches(&home));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let home = listing("İstanbul", "Levent", 2, 13500);
        let criteria = FilterCriteria::new()
            .with_city("İstanbul")
            .with_districts(["Levent"])
            .with_rooms([3]);

        assert!(!criteria.matches(&home));
        assert!(criteria.clone().with_rooms([2, 3]).matches(&home));
    }
}
