//! Renderers turning the event stream into terminal output.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::event_bus::GameEvent;
use crate::game_loop::GameSummary;

/// Output format for the run trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Turn-by-turn human readable trace
    #[default]
    Text,
    /// Final summary as JSON
    Json,
}

/// Trait for presenting a run
pub trait Renderer {
    /// Present one event
    fn render(&mut self, event: &GameEvent) -> io::Result<()>;

    /// Called once after the final event
    fn finish(&mut self, summary: &GameSummary) -> io::Result<()>;
}

/// Human readable trace, one line per event line.
pub struct TextRenderer<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, quiet: false }
    }

    /// Only print the end-of-game block.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Text for a single event. Multi-line events use embedded newlines.
pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted { .. } => "\n=== GAME START ===\n".to_string(),
        GameEvent::TurnStarted { turn } => format!("\n--- Turn {turn} ---"),
        GameEvent::Status { message, .. } | GameEvent::Combat { message, .. } => message.clone(),
        GameEvent::ItemCollected { item, score, .. } => {
            format!("Collected {item}, score: {score}")
        }
        GameEvent::PlayerMoved { name, position } => format!("{name} moved to {position}"),
        GameEvent::PlayerDied { .. } => "\nPlayer died! Game over.".to_string(),
        GameEvent::GameEnded {
            final_score,
            final_health,
            ..
        } => format!(
            "\n=== GAME END ===\nFinal score: {final_score}\nPlayer health: {final_health}"
        ),
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        if self.quiet && !matches!(event, GameEvent::GameEnded { .. }) {
            return Ok(());
        }
        writeln!(self.out, "{}", format_event(event))
    }

    fn finish(&mut self, _summary: &GameSummary) -> io::Result<()> {
        self.out.flush()
    }
}

/// Emits only the summary, as pretty JSON.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, _event: &GameEvent) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &GameSummary) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, summary)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
