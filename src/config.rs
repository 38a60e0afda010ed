//! Agent and tournament configuration, loadable from TOML.
//!
//! [`SearchConfig`] describes one search agent and mirrors the agent's
//! constructor defaults. [`TournamentConfig`] describes a round-robin run of
//! the tournament binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::ai::{HeuristicKind, SearchMethod, DEFAULT_TIMEOUT_MS};
use crate::error::ConfigError;
use crate::game_repr::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Settings of a single search agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched when `iterative` is off
    pub search_depth: u32,
    /// Deepen 1, 2, 3, ... until time runs out instead of a single fixed-depth search
    pub iterative: bool,
    pub method: SearchMethod,
    /// Safety margin in milliseconds: the search aborts once the remaining
    /// time drops below it
    pub timeout: f64,
    /// Stop deepening after this depth even with time left (None = unbounded)
    pub max_depth: Option<u32>,
    pub heuristic: HeuristicKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            method: SearchMethod::Minimax,
            timeout: DEFAULT_TIMEOUT_MS,
            max_depth: None,
            heuristic: HeuristicKind::Improved,
        }
    }
}

impl SearchConfig {
    /// Single search at a fixed depth.
    pub fn fixed(method: SearchMethod, search_depth: u32, heuristic: HeuristicKind) -> Self {
        Self {
            search_depth,
            iterative: false,
            method,
            heuristic,
            ..Self::default()
        }
    }

    /// Iterative deepening until the deadline.
    pub fn iterative(method: SearchMethod, heuristic: HeuristicKind) -> Self {
        Self {
            iterative: true,
            method,
            heuristic,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation("search_depth must be > 0".into()));
        }
        if !(self.timeout.is_finite() && self.timeout > 0.0) {
            return Err(ConfigError::Validation(
                "timeout must be a positive number of milliseconds".into(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Validation("max_depth must be > 0".into()));
        }
        Ok(())
    }
}

/// How a tournament contender picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContenderKind {
    Random,
    Greedy {
        #[serde(default)]
        heuristic: HeuristicKind,
    },
    Search(SearchConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContenderConfig {
    pub name: String,
    pub kind: ContenderKind,
}

impl ContenderConfig {
    pub fn new(name: &str, kind: ContenderKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Round-robin tournament settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Wall-clock budget per move in milliseconds
    pub time_limit_ms: f64,
    /// Games played by every ordered pair of contenders
    pub games_per_pairing: u32,
    /// Random plies played before the contenders take over
    pub opening_plies: u32,
    pub seed: u64,
    /// Worker threads (None = one per CPU)
    pub threads: Option<usize>,
    pub board_width: usize,
    pub board_height: usize,
    pub contenders: Vec<ContenderConfig>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        use HeuristicKind::*;
        use SearchMethod::*;

        let fixed = |method, heuristic| ContenderKind::Search(SearchConfig::fixed(method, 3, heuristic));

        TournamentConfig {
            time_limit_ms: 150.0,
            games_per_pairing: 5,
            opening_plies: 2,
            seed: 0x1507_a7e5,
            threads: None,
            board_width: DEFAULT_WIDTH,
            board_height: DEFAULT_HEIGHT,
            contenders: vec![
                ContenderConfig::new("Random", ContenderKind::Random),
                ContenderConfig::new("Greedy", ContenderKind::Greedy { heuristic: Improved }),
                ContenderConfig::new("MM_Null", fixed(Minimax, Null)),
                ContenderConfig::new("MM_Open", fixed(Minimax, OpenMove)),
                ContenderConfig::new("MM_Improved", fixed(Minimax, Improved)),
                ContenderConfig::new("AB_Null", fixed(AlphaBeta, Null)),
                ContenderConfig::new("AB_Open", fixed(AlphaBeta, OpenMove)),
                ContenderConfig::new("AB_Improved", fixed(AlphaBeta, Improved)),
                ContenderConfig::new(
                    "ID_Improved",
                    ContenderKind::Search(SearchConfig::iterative(AlphaBeta, Improved)),
                ),
                ContenderConfig::new(
                    "ID_Aggressive",
                    ContenderKind::Search(SearchConfig::iterative(AlphaBeta, Aggressive)),
                ),
            ],
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: TournamentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Empty board of the configured size.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.board_width, self.board_height)?)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board()?;

        if !(self.time_limit_ms.is_finite() && self.time_limit_ms > 0.0) {
            return Err(ConfigError::Validation("time_limit_ms must be > 0".into()));
        }
        if self.games_per_pairing == 0 {
            return Err(ConfigError::Validation("games_per_pairing must be > 0".into()));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Validation("threads must be > 0".into()));
        }
        if self.contenders.len() < 2 {
            return Err(ConfigError::Validation(
                "at least two contenders are required".into(),
            ));
        }

        for contender in &self.contenders {
            if let ContenderKind::Search(search) = &contender.kind {
                search.validate().map_err(|e| {
                    ConfigError::Validation(format!("contender '{}': {}", contender.name, e))
                })?;
                if search.timeout >= self.time_limit_ms {
                    return Err(ConfigError::Validation(format!(
                        "contender '{}': timeout {} ms must be below time_limit_ms {}",
                        contender.name, search.timeout, self.time_limit_ms
                    )));
                }
            }
        }
        Ok(())
    }
}
