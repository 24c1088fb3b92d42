//! Address domain entity

use uuid::Uuid;

/// Street address of a barber shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub district: String,
    pub city: String,
    pub number: String,
}

/// Address fields supplied by a client, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub street: String,
    pub district: String,
    pub city: String,
    pub number: String,
}

impl Address {
    pub fn create(draft: AddressDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            street: draft.street,
            district: draft.district,
            city: draft.city,
            number: draft.number,
        }
    }

    /// Replace every field except the id.
    pub fn apply_update(&mut self, draft: AddressDraft) {
        self.street = draft.street;
        self.district = draft.district;
        self.city = draft.city;
        self.number = draft.number;
    }
}
