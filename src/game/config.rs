use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound on `columns * rows`
pub const MAX_CELLS: i64 = 1 << 24;

/// 24-bit color used by render commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed colors of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
    /// Fill for the head cell, `None` draws it like the body
    pub head: Option<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            food: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
            head: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("board {axis} {value} is not a positive multiple of cell size {cell_size}")]
    MisalignedBoard {
        axis: &'static str,
        value: u32,
        cell_size: u32,
    },
    #[error("board {width}x{height} with cell size {cell_size} is too large")]
    BoardTooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("tick rate must be greater than zero")]
    ZeroTickRate,
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: u32,
    /// Board height in pixels
    pub board_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Simulation rate
    pub ticks_per_second: u32,
    pub palette: Palette,
    /// Seed for food placement and reset directions. Entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 640,
            board_height: 480,
            cell_size: 20,
            ticks_per_second: 20,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board in cells
    pub fn with_cells(columns: u32, rows: u32, cell_size: u32) -> Self {
        Self {
            board_width: columns * cell_size,
            board_height: rows * cell_size,
            cell_size,
            ..Default::default()
        }
    }

    /// Small deterministic board for tests
    pub fn small() -> Self {
        Self {
            seed: Some(42),
            ..Self::with_cells(10, 10, 20)
        }
    }

    /// Load a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for (axis, value) in [("width", self.board_width), ("height", self.board_height)] {
            if value == 0 || value % self.cell_size != 0 {
                return Err(ConfigError::MisalignedBoard {
                    axis,
                    value,
                    cell_size: self.cell_size,
                });
            }
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        self.dimensions()?;
        Ok(())
    }

    /// Board width, height and cell size as grid coordinates.
    ///
    /// Fails when a dimension does not fit in `i32` or the board holds more
    /// than [`MAX_CELLS`] cells.
    pub fn dimensions(&self) -> Result<(i32, i32, i32), ConfigError> {
        let too_large = || ConfigError::BoardTooLarge {
            width: self.board_width,
            height: self.board_height,
            cell_size: self.cell_size,
        };
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let width = i32::try_from(self.board_width).map_err(|_| too_large())?;
        let height = i32::try_from(self.board_height).map_err(|_| too_large())?;
        let cell_size = i32::try_from(self.cell_size).map_err(|_| too_large())?;

        let cells = (width / cell_size)
            .checked_mul(height / cell_size)
            .ok_or_else(too_large)?;
        if i64::from(cells) > MAX_CELLS {
            return Err(too_large());
        }
        Ok((width, height, cell_size))
    }
}
