use std::collections::HashMap;

use crate::domain::errors::DomainError;
use crate::domain::item::Item;
use crate::domain::ports::ItemRepository;

/// Read-only catalog lookup keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemRepository {
    items: HashMap<u64, Item>,
}

impl MemoryItemRepository {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }
}

impl ItemRepository for MemoryItemRepository {
    fn get_by_id(&self, id: u64) -> Result<Option<Item>, DomainError> {
        let item = self.items.get(&id).cloned();
        if item.is_none() {
            log::debug!("Item {} not in catalog", id);
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Dimensions;

    #[test]
    fn finds_item_by_id() {
        let repo = MemoryItemRepository::new(vec![Item::new(
            3,
            "Cable",
            30,
            Dimensions::new(10, 10, 10),
            1000,
        )]);

        let cable = repo.get_by_id(3).unwrap().expect("cable exists");
        assert_eq!(cable.description, "Cable");
        assert!(repo.get_by_id(4).unwrap().is_none());
    }
}
