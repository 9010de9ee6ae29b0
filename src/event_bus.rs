//! Event bus carrying the run's trace from the game loop to renderers.
//!
//! The game loop publishes one `GameEvent` per observable action; renderers
//! drain them after each turn. Events are kept in publish order.

use entities::{EntityKind, Position};
use serde::{Deserialize, Serialize};

use crate::turn_system::FinishReason;

/// Event categories, used for grouping and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Run start and end
    System,
    /// Turn banners
    TurnPhase,
    /// Update-phase status lines
    Status,
    /// Attacks, heals, summons
    Combat,
    /// Item pickups
    Items,
    /// Player movement
    Movement,
}

/// Everything the simulation reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        seed: u64,
        max_turns: u32,
    },
    TurnStarted {
        turn: u32,
    },
    /// One status line from an entity's update.
    Status {
        kind: EntityKind,
        name: String,
        message: String,
    },
    /// One combat line (attack, special attack, heal or summon).
    Combat {
        actor: String,
        message: String,
    },
    ItemCollected {
        item: String,
        value: i32,
        score: i32,
    },
    PlayerMoved {
        name: String,
        position: Position,
    },
    PlayerDied {
        name: String,
        turn: u32,
    },
    GameEnded {
        reason: FinishReason,
        turns_played: u32,
        final_score: i32,
        final_health: i32,
    },
}

impl GameEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            GameEvent::GameStarted { .. } | GameEvent::GameEnded { .. } => EventCategory::System,
            GameEvent::TurnStarted { .. } => EventCategory::TurnPhase,
            GameEvent::Status { .. } => EventCategory::Status,
            GameEvent::Combat { .. } | GameEvent::PlayerDied { .. } => EventCategory::Combat,
            GameEvent::ItemCollected { .. } => EventCategory::Items,
            GameEvent::PlayerMoved { .. } => EventCategory::Movement,
        }
    }
}

/// Ordered queue of published events
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<GameEvent>,
    published: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, event: GameEvent) {
        self.published += 1;
        self.events.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn by_category(&self, category: EventCategory) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.category() == category)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events published over the bus's lifetime, drained or not.
    pub fn total_published(&self) -> usize {
        self.published
    }
}
