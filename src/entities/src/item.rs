// src/entities/src/item.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{EntityKind, GameObject, Position};

/// A collectible lying on the grid. Not movable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(flatten)]
    pub position: Position,
    pub value: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, x: i32, y: i32, value: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            value,
        }
    }

    /// Whether the item sits exactly on `pos`.
    pub fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }
}

impl GameObject for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Item
    }

    fn update(&self) -> Vec<String> {
        vec![format!("Item {} waiting to be collected", self.name)]
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
