pub mod aggregate;
pub mod inventory;
pub mod seed;

pub use aggregate::{Alert, DispatchOrder, ResponseAction, ResponseCounters};
pub use inventory::InventoryItem;
pub use seed::{alerts, dispatch_inventory};
