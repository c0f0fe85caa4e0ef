use std::{fmt, str::FromStr};

use glam::Vec3A;
use thiserror::Error;

use super::{Difficulty, ItemKind, Race, UnknownDifficulty, UnknownItem};

/// Race counters exposed to developer tooling
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugSnapshot {
    pub lap_count: u32,
    pub elapsed: f32,
    pub player_pos: Vec3A,
    pub held_item: Option<ItemKind>,
    pub kart_amount: usize,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lap {} | {:.2}s | pos ({:.2}, {:.2}, {:.2}) | item {} | {} karts",
            self.lap_count,
            self.elapsed,
            self.player_pos.x,
            self.player_pos.y,
            self.player_pos.z,
            self.held_item.map_or("none", ItemKind::name),
            self.kart_amount,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugCommand {
    Restart,
    SetDifficulty(Difficulty),
    GiveItem(ItemKind),
    State,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DebugCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),
    #[error("\"{0}\" needs an argument")]
    MissingArgument(&'static str),
    #[error("unexpected argument \"{extra}\" for \"{command}\"")]
    UnexpectedArgument { command: &'static str, extra: String },
    #[error(transparent)]
    UnknownDifficulty(#[from] UnknownDifficulty),
    #[error(transparent)]
    UnknownItem(#[from] UnknownItem),
}

impl FromStr for DebugCommand {
    type Err = DebugCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(DebugCommandError::Empty);
        };

        let (command, cmd_name) = match name.to_ascii_lowercase().as_str() {
            "restart" | "reset" => (Self::Restart, "restart"),
            "state" => (Self::State, "state"),
            "difficulty" => {
                let arg = words
                    .next()
                    .ok_or(DebugCommandError::MissingArgument("difficulty"))?;
                (Self::SetDifficulty(arg.parse()?), "difficulty")
            }
            "give" => {
                let arg = words
                    .next()
                    .ok_or(DebugCommandError::MissingArgument("give"))?;
                (Self::GiveItem(arg.parse()?), "give")
            }
            _ => return Err(DebugCommandError::UnknownCommand(name.to_owned())),
        };

        if let Some(extra) = words.next() {
            return Err(DebugCommandError::UnexpectedArgument {
                command: cmd_name,
                extra: extra.to_owned(),
            });
        }

        Ok(command)
    }
}

/// What a debug command did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DebugReply {
    Restarted,
    DifficultySet(Difficulty),
    ItemGiven(ItemKind),
    State(DebugSnapshot),
}

impl fmt::Display for DebugReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restarted => f.write_str("race restarted"),
            Self::DifficultySet(difficulty) => write!(f, "AI difficulty set to {difficulty}"),
            Self::ItemGiven(item) => write!(f, "gave {} {item}", item.icon()),
            Self::State(snapshot) => fmt::Display::fmt(snapshot, f),
        }
    }
}

impl Race {
    #[must_use]
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            lap_count: self.state().lap_count,
            elapsed: self.state().clock,
            player_pos: self.player().state.pos,
            held_item: self.state().held_item,
            kart_amount: self.karts().len(),
        }
    }

    pub fn run_debug_command(&mut self, command: DebugCommand) -> DebugReply {
        match command {
            DebugCommand::Restart => {
                self.restart();
                DebugReply::Restarted
            }
            DebugCommand::SetDifficulty(difficulty) => {
                self.set_difficulty(difficulty);
                DebugReply::DifficultySet(difficulty)
            }
            DebugCommand::GiveItem(item) => {
                self.give_item(item);
                DebugReply::ItemGiven(item)
            }
            DebugCommand::State => DebugReply::State(self.debug_snapshot()),
        }
    }

    /// Parses and runs one console line
    pub fn run_debug_line(&mut self, line: &str) -> Result<DebugReply, DebugCommandError> {
        Ok(self.run_debug_command(line.parse()?))
    }
}
