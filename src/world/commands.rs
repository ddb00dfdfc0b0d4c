//! A world that records calls as game commands

use std::fmt;

use crate::placement::BlockPos;
use crate::world::World;

/// One recorded world call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetBlock { block: String, pos: BlockPos },
    Summon { entity: String, pos: BlockPos },
    Fill {
        block: String,
        from: BlockPos,
        to: BlockPos,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetBlock { block, pos } => write!(f, "setblock {} {}", pos, block),
            Command::Summon { entity, pos } => write!(f, "summon {} {}", entity, pos),
            Command::Fill { block, from, to } => write!(f, "fill {} {} {}", from, to, block),
        }
    }
}

/// Configuration options for command output
#[derive(Debug, Clone)]
pub struct CommandConfig {
    /// Prefix every command with `/`
    pub slash_prefix: bool,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self { slash_prefix: true }
    }
}

impl CommandConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether commands start with `/`
    pub fn with_slash_prefix(mut self, slash_prefix: bool) -> Self {
        self.slash_prefix = slash_prefix;
        self
    }
}

/// Records every call in order, along with logged diagnostics
#[derive(Debug, Default)]
pub struct CommandWorld {
    config: CommandConfig,
    commands: Vec<Command>,
    diagnostics: Vec<String>,
}

impl CommandWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CommandConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Render all commands, one per line
    pub fn render(&self) -> String {
        let prefix = if self.config.slash_prefix { "/" } else { "" };
        self.commands
            .iter()
            .map(|c| format!("{}{}", prefix, c))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl World for CommandWorld {
    fn create(&mut self, block: &str, pos: BlockPos) {
        self.commands.push(Command::SetBlock {
            block: block.to_string(),
            pos,
        });
    }

    fn summon(&mut self, entity: &str, pos: BlockPos) {
        self.commands.push(Command::Summon {
            entity: entity.to_string(),
            pos,
        });
    }

    fn fill(&mut self, block: &str, from: BlockPos, to: BlockPos) {
        self.commands.push(Command::Fill {
            block: block.to_string(),
            from,
            to,
        });
    }

    fn log(&mut self, message: &str) {
        log::warn!("{}", message);
        self.diagnostics.push(message.to_string());
    }
}
