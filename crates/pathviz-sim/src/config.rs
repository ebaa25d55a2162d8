//! Simulation configuration.

use std::fmt;

use pathviz_core::{CellId, Dims, Grid, GridError};

/// Configuration for creating a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub rows: usize,
    pub columns: usize,
    pub start: CellId,
    pub end: CellId,
    /// Traversal steps shown per second by a pacing driver.
    pub frames_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 20,
            start: CellId(0),
            end: CellId(110),
            frames_per_second: 60,
        }
    }
}

impl SimConfig {
    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.columns)
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_grid().map(drop)
    }

    /// Build the initial grid described by this configuration.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(Grid::new(self.dims(), self.start, self.end)?)
    }
}

/// Errors reported by [`SimConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A frame rate of zero would never advance a paced run.
    ZeroFrameRate,
    /// The grid described cannot be built.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrameRate => f.write_str("config: frames_per_second must be positive"),
            Self::Grid(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::ZeroFrameRate => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = SimConfig::default();
        assert_eq!(c.validate(), Ok(()));
        let g = c.build_grid().unwrap();
        assert_eq!(g.len(), 200);
        assert_eq!(g.start(), CellId(0));
        assert_eq!(g.end(), CellId(110));
    }

    #[test]
    fn rejects_bad_values() {
        let c = SimConfig {
            frames_per_second: 0,
            ..SimConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroFrameRate));

        let c = SimConfig {
            rows: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Grid(GridError::EmptyDims(_)))
        ));

        let c = SimConfig {
            rows: usize::MAX,
            columns: 2,
            ..SimConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::Grid(GridError::TooLarge(c.dims())))
        );

        let c = SimConfig {
            end: CellId(200),
            ..SimConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::Grid(GridError::InvalidCell {
                id: CellId(200),
                len: 200
            }))
        );

        let c = SimConfig {
            end: CellId(0),
            ..SimConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::Grid(GridError::SameEndpoints(CellId(0))))
        );
    }
}
