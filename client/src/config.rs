use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use libgame::{
    board::GridBounds,
    rule::{Preset, Rule},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub width: usize,
    pub height: usize,

    // Dimension policy for the grid; creation and resizes outside it are refused.
    pub min_width: usize,
    pub min_height: usize,
    pub max_width: usize,
    pub max_height: usize,

    /// Delay between generations while the simulation runs.
    pub tick_interval_millis: u64,

    pub rule: Rule,
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(
            self.min_width,
            self.min_height,
            self.max_width,
            self.max_height,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let bounds = GridBounds::default();

        Self {
            width: bounds.max_width,
            height: bounds.max_height,
            min_width: bounds.min_width,
            min_height: bounds.min_height,
            max_width: bounds.max_width,
            max_height: bounds.max_height,
            tick_interval_millis: 1000,
            rule: Rule::Preset(Preset::Life),
        }
    }
}
