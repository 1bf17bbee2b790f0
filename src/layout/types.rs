//! Plain data rows as handed over by ingestion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A physical display stand.
///
/// `capacity` is the face-width of the stand; every shelf level of the
/// fixture shares it. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fixture {
    /// Unique fixture identifier.
    pub id: String,
    /// Total slot capacity (face-width) of each level of this fixture.
    pub capacity: u32,
}

/// One horizontal shelf within a fixture.
///
/// Carries no capacity of its own; capacity is inherited from the owning
/// fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShelfLevel {
    /// Identifier of the owning fixture.
    pub fixture_id: String,
    /// Level identifier, unique within the fixture.
    pub level_id: String,
}

/// A product catalog entry. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// Unique product code.
    pub code: String,
    /// Categorical attribute used for adjacency scoring (e.g. a beverage
    /// type tag).
    pub attribute: String,
    /// Display name.
    pub name: String,
}

/// One product placed at an ordinal position on a shelf level.
///
/// The mutable core entity: a collection of slot assignments fully
/// determines a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotAssignment {
    /// Identifier of the fixture this slot belongs to.
    pub fixture_id: String,
    /// Identifier of the shelf level within the fixture.
    pub level_id: String,
    /// Code of the product occupying the slot.
    pub product_code: String,
    /// Ordinal position within the level; defines the left-to-right order.
    pub position: u32,
    /// Face-width consumed by this product at this position.
    pub face_width: u32,
}
