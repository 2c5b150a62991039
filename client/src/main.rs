use std::{
    env,
    sync::{Arc, RwLock},
};

use anyhow::Context;
use config::ClientConfig;
use libgame::{
    Game,
    catalog::RuleCatalog,
    rule::Rule,
};
use ticker::TickerHost;
use tracing::info;

mod cli;
mod config;
mod renderer;
mod ticker;

pub struct State {
    game: Game,
    catalog: RuleCatalog,
    ticker: Option<TickerHost>,
    config: ClientConfig,
}

impl State {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let mut catalog = RuleCatalog::new();

        let rule = match config.rule {
            Rule::Preset(preset) => catalog.select_preset(preset.name())?,
            Rule::Custom { survive, birth } => {
                catalog.apply_custom_rule(&survive.digits(), &birth.digits())?
            }
        };

        let game = Game::new(config.width, config.height, config.bounds(), rule)
            .context("Configured grid doesn't fit the configured bounds")?;

        Ok(Self {
            game,
            catalog,
            ticker: None,
            config,
        })
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match env::args().nth(1) {
        Some(config_path) => ClientConfig::load(config_path)?,
        None => ClientConfig::default(),
    };

    let state = State::new(config)?;
    info!(
        width = state.game.width(),
        height = state.game.height(),
        rule = %state.game.rule(),
        "Starting life client"
    );

    let state_arc = Arc::new(RwLock::new(state));
    cli::run_cli(state_arc)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
