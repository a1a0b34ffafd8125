//! Inventory domain module.
//!
//! This crate contains the business rules for the product inventory,
//! implemented purely as deterministic domain logic (no IO, no presentation).
//!
//! [`Inventory`] is the aggregate root; callers read products through the
//! [`ProductView`] capability or as detached [`ProductSnapshot`]s.

pub mod inventory;
pub mod product;
pub mod report;
pub mod view;

pub use inventory::{Inventory, ProductUpdate};
pub use product::Product;
pub use report::InventoryReport;
pub use view::{ProductList, ProductSnapshot, ProductView};

pub use stockroom_core::{AggregateRoot, DomainError, DomainResult, ProductCode};
