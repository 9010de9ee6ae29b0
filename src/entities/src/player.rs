// src/entities/src/player.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::Item;
use crate::{Character, EntityKind, GameObject, Movable, Position};

/// The player character. Collects items for score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(flatten)]
    pub position: Position,
    pub health: i32,
    #[serde(default)]
    pub score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, x: i32, y: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            health,
            score: 0,
        }
    }

    /// Add the item's value to the score and return the new score.
    pub fn collect(&mut self, item: &Item) -> i32 {
        self.score = self.score.saturating_add(item.value);
        self.score
    }
}

impl GameObject for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn update(&self) -> Vec<String> {
        vec![self.status_line(), format!("Player score: {}", self.score)]
    }
}

impl Movable for Player {
    fn move_by(&mut self, dx: i32, dy: i32) -> Position {
        self.position = self.position.offset(dx, dy);
        self.position
    }
}

impl Character for Player {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
