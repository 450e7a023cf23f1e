//! Symbol identifiers and the symbol catalog

use serde::{Deserialize, Serialize};

/// Unique identifier of a symbol. Catalog ids are dense `1..=len` so the
/// generator can draw uniformly over `[1, catalog_size]`.
pub type SymbolId = u32;

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: SymbolId,
    /// Display name (e.g., "cherry", "wild")
    pub name: String,
}

impl Symbol {
    pub fn new(id: SymbolId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The full symbol set of a game, with one id designated as the wild.
///
/// Immutable after load; consistency (dense ids, wild present) is enforced
/// by [`crate::config::GameConfig::validate`] before a session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    /// Symbol definitions in id order
    pub symbols: Vec<Symbol>,
    /// The wild symbol ID
    pub wild_id: SymbolId,
}

impl SymbolCatalog {
    pub fn new(symbols: Vec<Symbol>, wild_id: SymbolId) -> Self {
        Self { symbols, wild_id }
    }

    /// The fruit set of the classic game: nine paying symbols plus a wild.
    pub fn fruit() -> Self {
        let symbols = vec![
            Symbol::new(1, "apple"),
            Symbol::new(2, "banana"),
            Symbol::new(3, "blueberry"),
            Symbol::new(4, "cherry"),
            Symbol::new(5, "grape"),
            Symbol::new(6, "orange"),
            Symbol::new(7, "raspberry"),
            Symbol::new(8, "watermelon"),
            Symbol::new(9, "gem"),
            Symbol::new(10, "wild"),
        ];
        Self::new(symbols, 10)
    }

    /// Get symbol by ID
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Get symbol display name by ID
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.get(id).map(|s| s.name.as_str())
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_wild(&self, id: SymbolId) -> bool {
        id == self.wild_id
    }

    /// Number of symbols in the catalog
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
