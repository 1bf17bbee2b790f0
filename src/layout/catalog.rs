//! Lookup containers for ingested reference data.

use std::collections::HashMap;

use super::types::{Fixture, Product, ShelfLevel};

/// Attribute substituted when a slot references a product code the catalog
/// does not know. The sentinel behaves as a category of its own, so scoring
/// proceeds instead of failing.
pub const UNKNOWN_ATTRIBUTE: &str = "unknown";

/// Product reference data, keyed by product code.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Builds a catalog from ingested product rows. Later rows win on
    /// duplicate codes.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.code.clone(), product))
                .collect(),
        }
    }

    /// Looks up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// The categorical attribute of `code`, or [`UNKNOWN_ATTRIBUTE`] when
    /// the code is absent from the catalog.
    pub fn attribute(&self, code: &str) -> &str {
        self.products
            .get(code)
            .map_or(UNKNOWN_ATTRIBUTE, |product| product.attribute.as_str())
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Fixture and shelf-level reference data.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    fixtures: HashMap<String, Fixture>,
    levels: Vec<ShelfLevel>,
}

impl FixtureSet {
    /// Builds the set from ingested fixture and shelf-level rows.
    pub fn new(fixtures: impl IntoIterator<Item = Fixture>, levels: Vec<ShelfLevel>) -> Self {
        Self {
            fixtures: fixtures
                .into_iter()
                .map(|fixture| (fixture.id.clone(), fixture))
                .collect(),
            levels,
        }
    }

    /// Looks up a fixture by id.
    pub fn fixture(&self, fixture_id: &str) -> Option<&Fixture> {
        self.fixtures.get(fixture_id)
    }

    /// Face-width capacity of the fixture, shared by all of its levels.
    /// `None` when the fixture id is unknown.
    pub fn capacity(&self, fixture_id: &str) -> Option<u32> {
        self.fixtures.get(fixture_id).map(|fixture| fixture.capacity)
    }

    /// All shelf levels, as ingested.
    pub fn levels(&self) -> &[ShelfLevel] {
        &self.levels
    }

    /// Shelf levels belonging to one fixture.
    pub fn levels_of<'a>(&'a self, fixture_id: &'a str) -> impl Iterator<Item = &'a ShelfLevel> {
        self.levels
            .iter()
            .filter(move |level| level.fixture_id == fixture_id)
    }
}
