//! Turn state machine driving the fixed five-phase pipeline.
//!
//! `TurnSystem` only tracks where a run is; `GameLoop` performs the work of
//! each phase and asks the system for permission before entering it. States
//! move `NotStarted → Running { turn } → Finished { .. }` and never back.

use error::SimError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Phases of a single turn, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum TurnPhase {
    /// Every entity reports status; bosses heal.
    Update,
    /// Living enemies act against the player.
    EnemyAction,
    /// Items under the player are collected.
    Collection,
    /// The run ends here if the player is dead.
    SurvivalCheck,
    /// The player takes one random step.
    Movement,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FinishReason {
    PlayerDied,
    TurnsExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TurnState {
    NotStarted,
    Running { turn: u32 },
    Finished { reason: FinishReason, turns_played: u32 },
}

/// Tracks turn count, current phase and the run's terminal state.
#[derive(Debug, Clone)]
pub struct TurnSystem {
    state: TurnState,
    max_turns: u32,
    phase: Option<TurnPhase>,
}

impl TurnSystem {
    pub fn new(max_turns: u32) -> Self {
        Self {
            state: TurnState::NotStarted,
            max_turns,
            phase: None,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn phase(&self) -> Option<TurnPhase> {
        self.phase
    }

    pub fn current_turn(&self) -> Option<u32> {
        match self.state {
            TurnState::Running { turn } => Some(turn),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TurnState::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::Finished { .. })
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        match self.state {
            TurnState::Finished { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Number of turns begun so far.
    pub fn turns_played(&self) -> u32 {
        match self.state {
            TurnState::NotStarted => 0,
            TurnState::Running { turn } => turn,
            TurnState::Finished { turns_played, .. } => turns_played,
        }
    }

    /// `NotStarted → Running { turn: 1 }`. A zero-turn budget finishes at once.
    pub fn start(&mut self) -> Result<(), SimError> {
        if self.state != TurnState::NotStarted {
            return Err(SimError::invalid_transition(self.state, "Running"));
        }
        self.state = if self.max_turns == 0 {
            TurnState::Finished {
                reason: FinishReason::TurnsExhausted,
                turns_played: 0,
            }
        } else {
            TurnState::Running { turn: 1 }
        };
        self.phase = None;
        Ok(())
    }

    /// Enter `phase` of the current turn. Phases only move forward.
    pub fn enter_phase(&mut self, phase: TurnPhase) -> Result<(), SimError> {
        if !self.is_running() {
            return Err(SimError::invalid_transition(self.state, phase));
        }
        if let Some(current) = self.phase {
            if phase <= current {
                return Err(SimError::invalid_transition(current, phase));
            }
        }
        self.phase = Some(phase);
        Ok(())
    }

    /// End the run because the player died during the current turn.
    pub fn finish_player_died(&mut self) -> Result<(), SimError> {
        let TurnState::Running { turn } = self.state else {
            return Err(SimError::invalid_transition(self.state, FinishReason::PlayerDied));
        };
        self.state = TurnState::Finished {
            reason: FinishReason::PlayerDied,
            turns_played: turn,
        };
        self.phase = None;
        Ok(())
    }

    /// Close the current turn and either advance or exhaust the budget.
    pub fn end_turn(&mut self) -> Result<(), SimError> {
        let TurnState::Running { turn } = self.state else {
            return Err(SimError::invalid_transition(self.state, "next turn"));
        };
        self.state = if turn >= self.max_turns {
            TurnState::Finished {
                reason: FinishReason::TurnsExhausted,
                turns_played: turn,
            }
        } else {
            TurnState::Running { turn: turn + 1 }
        };
        self.phase = None;
        Ok(())
    }
}
