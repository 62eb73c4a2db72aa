use serde::{Deserialize, Serialize};

/// Relief stock held for dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub item: String,
    pub available: u32,
    pub reserved: u32,
    pub unit: String,
}

impl InventoryItem {
    /// Stock not yet reserved by a dispatch order. Never negative.
    pub fn free_stock(&self) -> u32 {
        self.available.saturating_sub(self.reserved)
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(available: u32, reserved: u32) -> InventoryItem {
        InventoryItem {
            item: "ORS Packets".into(),
            available,
            reserved,
            unit: "packets".into(),
        }
    }

    #[test]
    fn test_free_stock() {
        assert_eq!(item(2500, 500).free_stock(), 2000);
        assert_eq!(item(300, 0).free_stock(), 300);
        assert!(!item(300, 0).is_reserved());
    }

    #[test]
    fn test_free_stock_saturates() {
        assert_eq!(item(10, 25).free_stock(), 0);
    }

    proptest! {
        #[test]
        fn prop_free_stock_never_exceeds_available(available in 0u32..100_000, reserved in 0u32..100_000) {
            let free = item(available, reserved).free_stock();
            prop_assert!(free <= available);
            if reserved <= available {
                prop_assert_eq!(free + reserved, available);
            }
        }
    }
}
