//! Barber domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A barber working at exactly one shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barber {
    pub id: Uuid,
    pub name: String,
    /// Owning shop, fixed at creation.
    pub barber_shop_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarberDraft {
    pub name: String,
}

impl Barber {
    pub fn create(draft: BarberDraft, barber_shop_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            barber_shop_id,
            created_at: Utc::now(),
        }
    }

    pub fn apply_update(&mut self, draft: BarberDraft) {
        self.name = draft.name;
    }
}
