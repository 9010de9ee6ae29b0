//! Turn-based simulation of a player, enemies, a boss and items.

pub mod config;
pub mod event_bus;
pub mod game_loop;
pub mod renderer;
pub mod turn_system;

pub use combat::{Combat, CombatResult, Combatant};
pub use entities::{
    BossAbilities, Character, Enemy, EntityKind, GameObject, Item, Movable, Player, Position,
    SimRng,
};
pub use error::{SimError, handle_error};

pub use crate::config::{Scenario, SimConfig, SpawnPolicy};
pub use crate::event_bus::{EventBus, EventCategory, GameEvent};
pub use crate::game_loop::{GameLoop, GameSummary, TurnOutcome};
pub use crate::renderer::{JsonRenderer, OutputFormat, Renderer, TextRenderer};
pub use crate::turn_system::{FinishReason, TurnPhase, TurnState, TurnSystem};
