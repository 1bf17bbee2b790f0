//! In-memory layout model.
//!
//! Pure data: fixtures, shelf levels, the product catalog, and the slot
//! assignments that form a [`Layout`]. No scoring or search logic lives
//! here; those consume the model read-only and build candidate layouts as
//! full copies.
//!
//! Malformed data is tolerated rather than rejected: a level may exceed its
//! fixture's capacity (scored as a penalty downstream), and a slot may
//! reference a product code the catalog does not know (resolved to
//! [`UNKNOWN_ATTRIBUTE`] at scoring time).

mod catalog;
mod model;
mod types;

pub use catalog::{FixtureSet, ProductCatalog, UNKNOWN_ATTRIBUTE};
pub use model::{Layout, LevelKey};
pub use types::{Fixture, Product, ShelfLevel, SlotAssignment};
