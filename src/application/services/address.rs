//! Address store service

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Address, AddressDraft, DomainResult, RepositoryProvider};

pub struct AddressService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AddressService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Persist a new address under a freshly generated id.
    pub async fn save(&self, draft: AddressDraft) -> DomainResult<Address> {
        let address = Address::create(draft);
        debug!(address_id = %address.id, "Saving address");
        self.repos.addresses().save(address).await
    }

    /// Copy the new address fields onto the stored one, keeping its id.
    pub async fn update(&self, current: &Address, new: AddressDraft) -> DomainResult<Address> {
        let mut address = current.clone();
        address.apply_update(new);
        self.repos.addresses().update(address.clone()).await?;
        debug!(address_id = %address.id, "Address updated");
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryRepositoryProvider;

    fn draft(street: &str) -> AddressDraft {
        AddressDraft {
            street: street.into(),
            district: "Centro".into(),
            city: "Recife".into(),
            number: "10".into(),
        }
    }

    #[tokio::test]
    async fn save_then_update_in_place() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = AddressService::new(repos.clone());

        let saved = service.save(draft("Rua da Aurora")).await.unwrap();
        let updated = service.update(&saved, draft("Rua do Sol")).await.unwrap();

        assert_eq!(updated.id, saved.id);
        let stored = repos.addresses().find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(stored.street, "Rua do Sol");
    }
}
