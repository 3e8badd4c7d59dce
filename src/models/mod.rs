pub mod criteria;

pub use criteria::FilterCriteria;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A leg travelled by public transport
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransitLeg {
    /// Minutes
    pub duration: u32,
    /// TL per trip
    pub cost: u32,
}

/// A leg travelled by car, priced by fuel instead of a fare
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriveLeg {
    /// Minutes
    pub duration: u32,
    /// TL per trip
    pub fuel_cost: u32,
}

/// Commute data known for a listing; any mode may be missing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommuteTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<TransitLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro: Option<TransitLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<DriveLeg>,
}

impl CommuteTimes {
    /// Duration and cost for a mode, if the listing carries data for it
    pub fn leg(&self, mode: TransportMode) -> Option<(u32, u32)> {
        match mode {
            TransportMode::Bus => self.bus.map(|leg| (leg.duration, leg.cost)),
            TransportMode::Metro => self.metro.map(|leg| (leg.duration, leg.cost)),
            TransportMode::Car => self.car.map(|leg| (leg.duration, leg.fuel_cost)),
        }
    }
}

/// Ways of getting from a listing to work
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Metro,
    Car,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [TransportMode::Bus, TransportMode::Metro, TransportMode::Car];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Otobüs ile",
            TransportMode::Metro => "Metro ile",
            TransportMode::Car => "Araç ile",
        }
    }

    /// Duration and cost assumed when a listing has no data for this mode
    pub fn fallback_leg(&self) -> (u32, u32) {
        match self {
            TransportMode::Bus => (30, 15),
            TransportMode::Metro => (25, 18),
            TransportMode::Car => (35, 25),
        }
    }
}

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub city: String,
    pub district: String,
    pub rooms: u32,
    /// Monthly rent in TL
    pub rent: u32,
    /// Years
    pub building_age: u32,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub commute_times: CommuteTimes,
    /// Rent spread over a day, in TL
    pub daily_cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Floor area in m²
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Listing {
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkSchedule {
    Morning,
    Afternoon,
    Night,
    Flexible,
}

impl WorkSchedule {
    pub fn label(&self) -> &'static str {
        match self {
            WorkSchedule::Morning => "Sabah",
            WorkSchedule::Afternoon => "Öğleden sonra",
            WorkSchedule::Night => "Gece",
            WorkSchedule::Flexible => "Esnek",
        }
    }
}

impl FromStr for WorkSchedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(WorkSchedule::Morning),
            "afternoon" => Ok(WorkSchedule::Afternoon),
            "night" => Ok(WorkSchedule::Night),
            "flexible" => Ok(WorkSchedule::Flexible),
            other => Err(format!(
                "unknown work schedule '{}', expected morning, afternoon, night or flexible",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkLocation {
    pub city: String,
    pub district: String,
}

/// Preferences of the person searching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// Monthly income in TL
    pub income: u32,
    /// Empty means any district
    #[serde(default)]
    pub preferred_districts: Vec<String>,
    pub has_vehicle: bool,
    pub work_schedule: WorkSchedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_location: Option<WorkLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_rooms: Option<Vec<u32>>,
}

impl UserProfile {
    /// The criteria recommendations are drawn from
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            city: None,
            min_rent: None,
            max_rent: self.max_rent,
            rooms: self.preferred_rooms.clone(),
            districts: Some(self.preferred_districts.clone()),
        }
        .normalized()
    }
}
