use crate::config::simulate_latency;
use crate::models::{Listing, UserProfile, WorkSchedule};
use crate::services::QueryService;
use tracing::info;

/// Most listings that can be compared at once
pub const MAX_COMPARE: usize = 3;
/// Fewest listings a comparison needs
pub const MIN_COMPARE: usize = 2;

/// State owned by one browsing session: the current profile and the
/// listings picked for comparison. Nothing here outlives the session.
#[derive(Debug, Clone)]
pub struct Session {
    profile: UserProfile,
    selection: CompareSelection,
}

impl Session {
    /// Start from the store's sample profile
    pub fn start(service: &QueryService) -> Self {
        Self::with_profile(service.store().sample_profile().clone())
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile,
            selection: CompareSelection::default(),
        }
    }

    /// Copy of the current profile, behind the profile latency
    pub async fn profile(&self, service: &QueryService) -> UserProfile {
        simulate_latency(service.latency().profile_ms).await;
        self.profile.clone()
    }

    pub fn current_profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the profile wholesale, returning the one it replaced
    pub fn update_profile(&mut self, profile: UserProfile) -> UserProfile {
        info!("Profile {} updated", profile.id);
        std::mem::replace(&mut self.profile, profile)
    }

    /// Apply an edit to the current profile and make the result current
    pub fn edit_profile(&mut self, edit: ProfileEdit) -> &UserProfile {
        let edited = edit.apply(self.profile.clone());
        self.update_profile(edited);
        &self.profile
    }

    pub async fn recommendations(&self, service: &QueryService) -> Vec<Listing> {
        service.recommend(&self.profile).await
    }

    pub fn selection(&self) -> &CompareSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut CompareSelection {
        &mut self.selection
    }
}

/// Changes to a profile; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub income: Option<u32>,
    pub max_rent: Option<u32>,
    /// An empty list clears the district preference
    pub preferred_districts: Option<Vec<String>>,
    /// An empty list clears the room preference
    pub preferred_rooms: Option<Vec<u32>>,
    pub has_vehicle: Option<bool>,
    pub work_schedule: Option<WorkSchedule>,
}

impl ProfileEdit {
    pub fn is_empty(&self) -> bool {
        *self == ProfileEdit::default()
    }

    /// New profile with the edited fields replaced
    pub fn apply(self, mut profile: UserProfile) -> UserProfile {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(income) = self.income {
            profile.income = income;
        }
        if let Some(max_rent) = self.max_rent {
            profile.max_rent = Some(max_rent);
        }
        if let Some(districts) = self.preferred_districts {
            profile.preferred_districts = districts;
        }
        if let Some(rooms) = self.preferred_rooms {
            profile.preferred_rooms = Some(rooms).filter(|r| !r.is_empty());
        }
        if let Some(has_vehicle) = self.has_vehicle {
            profile.has_vehicle = has_vehicle;
        }
        if let Some(schedule) = self.work_schedule {
            profile.work_schedule = schedule;
        }
        profile
    }
}

/// Outcome of changing the comparison selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// Picked again while already selected; nothing changed
    AlreadySelected,
    /// Already holding [`MAX_COMPARE`] listings; nothing changed
    Full,
}

/// Listings picked for side-by-side comparison, in pick order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSelection {
    ids: Vec<String>,
}

impl CompareSelection {
    pub fn toggle(&mut self, id: &str) -> SelectionChange {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            SelectionChange::Removed
        } else if self.ids.len() < MAX_COMPARE {
            self.ids.push(id.to_string());
            SelectionChange::Added
        } else {
            SelectionChange::Full
        }
    }

    /// Add a listing without deselecting it when picked twice
    pub fn pick(&mut self, id: &str) -> SelectionChange {
        if self.contains(id) {
            SelectionChange::AlreadySelected
        } else {
            self.toggle(id)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_COMPARE
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Which photo of a listing is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoCursor {
    index: usize,
    count: usize,
}

impl PhotoCursor {
    pub fn new(listing: &Listing) -> Self {
        Self {
            index: 0,
            count: listing.photos.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance, wrapping from the last photo to the first
    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    /// Step back, wrapping from the first photo to the last
    pub fn prev(&mut self) {
        if self.count > 0 {
            self.index = if self.index == 0 { self.count - 1 } else { self.index - 1 };
        }
    }

    /// Jump to a photo; out-of-range indexes clamp to the last one
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.count.saturating_sub(1));
    }

    pub fn current<'a>(&self, listing: &'a Listing) -> Option<&'a str> {
        listing.photos.get(self.index).map(String::as_str)
    }
}
