// src/entities/src/lib.rs
//! Passive entity model for the simulation.
//!
//! Every entity has a name and a grid position. Concrete kinds form a closed
//! set (`EntityKind`), and behaviour is opted into through the capability
//! traits below rather than through a class hierarchy:
//! - `GameObject`: anything that reports status once per turn
//! - `Movable`: anything that can be translated on the grid
//! - `Character`: anything with health and liveness

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter};

pub mod enemy;
pub mod item;
pub mod player;
pub mod rng;

pub use crate::enemy::{BossAbilities, Enemy};
pub use crate::item::Item;
pub use crate::player::Player;
pub use crate::rng::SimRng;

/// Grid coordinate. Unbounded in both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position translated by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Closed set of concrete entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Boss,
    Item,
}

/// Something that lives on the grid and reports its status every turn.
pub trait GameObject {
    fn name(&self) -> &str;

    fn position(&self) -> Position;

    fn kind(&self) -> EntityKind;

    /// Status lines for the update phase. Never mutates the entity.
    fn update(&self) -> Vec<String>;

    /// `"{name} at ({x}, {y})"`
    fn describe(&self) -> String {
        format!("{} at {}", self.name(), self.position())
    }
}

/// Something that can be moved on the grid.
pub trait Movable {
    /// Translate unconditionally and return the new position.
    fn move_by(&mut self, dx: i32, dy: i32) -> Position;
}

/// An entity with health.
pub trait Character: GameObject {
    fn health(&self) -> i32;

    fn health_mut(&mut self) -> &mut i32;

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Base status line shared by every character.
    fn status_line(&self) -> String {
        format!("{} updated, health: {}", self.name(), self.health())
    }
}
