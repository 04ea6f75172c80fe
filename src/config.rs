use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::ai::{Agent, HumanAgent, RandomAgent, SearchAgent, ThreatAgent, Tiebreak};
use crate::error::ConfigError;
use crate::game::{Board, BoardError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::session::SessionConfig;

/// Deepest search accepted from configuration. Search is exhaustive, so each
/// extra ply multiplies the work by the board width.
pub const MAX_PLY: usize = 9;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: SessionConfig,
    pub x: PlayerConfig,
    pub o: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            game: SessionConfig::default(),
            x: PlayerConfig {
                kind: AgentKind::Human,
                ..PlayerConfig::default()
            },
            o: PlayerConfig {
                tiebreak: Tiebreak::Random,
                ..PlayerConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.width, self.height)
    }
}

/// Which move source plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Human,
    Search,
    Threat,
    Random,
}

impl AgentKind {
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Human => "human",
            AgentKind::Search => "search",
            AgentKind::Threat => "threat",
            AgentKind::Random => "random",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player kind {0:?} (expected human, search, threat or random)")]
pub struct ParseAgentKindError(String);

impl FromStr for AgentKind {
    type Err = ParseAgentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(AgentKind::Human),
            "search" | "ai" => Ok(AgentKind::Search),
            "threat" => Ok(AgentKind::Threat),
            "random" => Ok(AgentKind::Random),
            _ => Err(ParseAgentKindError(s.to_string())),
        }
    }
}

/// Move source for one side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub kind: AgentKind,
    pub tiebreak: Tiebreak,
    pub ply: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            kind: AgentKind::Search,
            tiebreak: Tiebreak::Left,
            ply: 3,
        }
    }
}

impl PlayerConfig {
    /// Build the agent. `seed` makes random choices reproducible.
    pub fn build_agent(&self, seed: Option<u64>) -> Box<dyn Agent> {
        match self.kind {
            AgentKind::Human => Box::new(HumanAgent::stdio()),
            AgentKind::Threat => Box::new(ThreatAgent),
            AgentKind::Search => Box::new(match seed {
                Some(seed) => SearchAgent::with_seed(self.tiebreak, self.ply, seed),
                None => SearchAgent::new(self.tiebreak, self.ply),
            }),
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.game.random_move_chance) {
            return Err(ConfigError::Validation(
                "game.random_move_chance must be in [0, 1]".into(),
            ));
        }
        for (side, player) in [("x", &self.x), ("o", &self.o)] {
            if player.kind == AgentKind::Search && player.ply > MAX_PLY {
                return Err(ConfigError::Validation(format!(
                    "{side}.ply must be <= {MAX_PLY}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
