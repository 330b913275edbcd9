//! Session configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the classic 35×35 board with 20-pixel cells and 5-pixel margins.
//!
//! ```toml
//! [grid]
//! size = 35
//! wall_probability = 0.5
//! seed = 42
//! start = { row = 0, col = 0 }
//!
//! [layout]
//! cell_width = 20
//! cell_height = 20
//! margin = 5
//!
//! [search]
//! heuristic = "squared_euclidean"
//! revisit = "skip_closed"
//! max_expansions = 100000
//!
//! [logging]
//! level = "info"
//! ```

use std::fs;
use std::path::Path;

use log::LevelFilter;
use pathgrid_core::{Bounds, CellLayout, Pos};
use pathgrid_paths::{EngineConfig, HeuristicKind, Revisit};
use serde::Deserialize;

use crate::error::SessionError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub layout: CellLayout,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_wall_probability")]
    pub wall_probability: f64,
    /// Seed for wall generation; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub start: Option<Pos>,
    #[serde(default)]
    pub end: Option<Pos>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub heuristic: HeuristicKind,
    #[serde(default)]
    pub revisit: Revisit,
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

/// Largest accepted board side.
pub const MAX_GRID_SIZE: usize = 1024;

fn default_size() -> usize {
    35
}

fn default_wall_probability() -> f64 {
    0.5
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            wall_probability: default_wall_probability(),
            seed: None,
            start: None,
            end: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl SearchConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            revisit: self.revisit,
            max_expansions: self.max_expansions,
        }
    }
}

impl LoggingConfig {
    /// Parse `level` ("off", "error", "warn", "info", "debug", "trace").
    pub fn level_filter(&self) -> Result<LevelFilter, SessionError> {
        self.level
            .parse()
            .map_err(|_| SessionError::InvalidConfig(format!("unknown log level {:?}", self.level)))
    }
}

impl SessionConfig {
    /// Read and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, SessionError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no session can be built from.
    pub fn validate(&self) -> Result<(), SessionError> {
        let g = &self.grid;
        if g.size == 0 || g.size > MAX_GRID_SIZE {
            return Err(SessionError::InvalidConfig(format!(
                "grid.size {} is not within 1..={MAX_GRID_SIZE}",
                g.size
            )));
        }
        if !(0.0..=1.0).contains(&g.wall_probability) {
            return Err(SessionError::InvalidConfig(format!(
                "grid.wall_probability {} is not within [0, 1]",
                g.wall_probability
            )));
        }
        let bounds = Bounds::square(g.size);
        for (name, p) in [("grid.start", g.start), ("grid.end", g.end)] {
            if let Some(p) = p.filter(|&p| !bounds.contains(p)) {
                return Err(SessionError::InvalidConfig(format!(
                    "{name} {p} is outside the {bounds} board"
                )));
            }
        }
        if self.layout.cell_width == 0 || self.layout.cell_height == 0 {
            return Err(SessionError::InvalidConfig("layout cell size must be non-zero".into()));
        }
        if self.layout.checked_window_size(bounds).is_none() {
            return Err(SessionError::InvalidConfig(format!(
                "layout is too large to draw a {bounds} board"
            )));
        }
        if self.search.revisit == Revisit::Faithful && self.search.max_expansions.is_none() {
            return Err(SessionError::InvalidConfig(
                "search.revisit = \"faithful\" requires search.max_expansions".into(),
            ));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let cfg = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.grid.size, 35);
        assert_eq!(cfg.grid.wall_probability, 0.5);
        assert_eq!(cfg.layout, CellLayout::new(20, 20, 5));
        assert_eq!(cfg.search.engine_config(), EngineConfig::default());
        assert_eq!(cfg.logging.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn full_file_parses() {
        let cfg = SessionConfig::from_toml_str(
            r#"
            [grid]
            size = 10
            wall_probability = 0.25
            seed = 7
            start = { row = 1, col = 2 }
            end = { row = 9, col = 9 }

            [layout]
            cell_width = 12
            cell_height = 8
            margin = 2

            [search]
            heuristic = "chebyshev"
            revisit = "faithful"
            max_expansions = 5000

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.grid.size, 10);
        assert_eq!(cfg.grid.seed, Some(7));
        assert_eq!(cfg.grid.start, Some(Pos::new(1, 2)));
        assert_eq!(cfg.layout, CellLayout::new(12, 8, 2));
        assert_eq!(cfg.search.heuristic, HeuristicKind::Chebyshev);
        assert_eq!(cfg.search.engine_config(), EngineConfig::faithful(5000));
        assert_eq!(cfg.logging.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn partial_layout_keeps_other_defaults() {
        let cfg = SessionConfig::from_toml_str("[layout]\nmargin = 1\n").unwrap();
        assert_eq!(cfg.layout, CellLayout::new(20, 20, 1));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for text in [
            "[grid]\nsize = 0\n",
            "[grid]\nsize = 5000\n",
            "[grid]\nwall_probability = 1.5\n",
            "[grid]\nsize = 4\nend = { row = 4, col = 0 }\n",
            "[layout]\ncell_width = 0\n",
            "[logging]\nlevel = \"loud\"\n",
            "[layout]\ncell_width = 4000000000\n",
            "[search]\nrevisit = \"faithful\"\n",
        ] {
            assert!(
                matches!(SessionConfig::from_toml_str(text), Err(SessionError::InvalidConfig(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn faithful_revisit_needs_a_budget() {
        let err = SessionConfig::from_toml_str("[search]\nrevisit = \"faithful\"\n").unwrap_err();
        assert!(err.to_string().contains("max_expansions"));
        let cfg =
            SessionConfig::from_toml_str("[search]\nrevisit = \"faithful\"\nmax_expansions = 50\n")
                .unwrap();
        assert_eq!(cfg.search.engine_config(), EngineConfig::faithful(50));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            SessionConfig::from_toml_str("[grid\nsize = 3"),
            Err(SessionError::Toml(_))
        ));
        assert!(matches!(
            SessionConfig::from_toml_str("[search]\nheuristic = \"astral\"\n"),
            Err(SessionError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SessionConfig::load("/nonexistent/pathgrid.toml").unwrap_err();
        assert!(matches!(err, SessionError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pathgrid.toml"));
    }
}
