//! Console front-end for the stockroom inventory.
//!
//! Thin I/O glue: it only calls the public [`Inventory`](stockroom_inventory::Inventory)
//! API and prints the read-only results.

pub mod menu;
pub mod prompt;

pub use menu::Console;
pub use prompt::{InputClosed, Prompter};
