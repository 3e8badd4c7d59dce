pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod models;
pub mod services;
pub mod session;
pub mod store;

pub use config::{AppConfig, LatencyConfig};
pub use error::{RentalError, Result};
pub use models::{FilterCriteria, Listing, TransportMode, UserProfile};
pub use services::{Comparison, QueryService, RoutePlan};
pub use session::{CompareSelection, PhotoCursor, ProfileEdit, Session};
pub use store::DataStore;
