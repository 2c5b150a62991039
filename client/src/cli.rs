use std::{
    io,
    sync::{Arc, RwLock, RwLockWriteGuard},
    time::Duration,
};

use anyhow::{Context, anyhow, bail, ensure};
use libgame::{catalog::RuleCatalog, rule::validate_digits};
use tracing::{info, warn};

use crate::{State, renderer, ticker::TickerHost};

pub fn run_cli(state_arc: Arc<RwLock<State>>) -> anyhow::Result<()> {
    for line_res in io::stdin().lines() {
        let line = line_res.context("Couldn't read command")?;
        let args = line.split_whitespace();

        match handle_cmd(&state_arc, args) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => eprintln!("! {e:?}"),
        }
    }

    if let Ok(mut state) = state_arc.write() {
        if let Some(ticker) = state.ticker.take() {
            ticker.stop();
        }
    }

    Ok(())
}

enum Flow {
    Continue,
    Exit,
}

fn lock(state_arc: &Arc<RwLock<State>>) -> anyhow::Result<RwLockWriteGuard<'_, State>> {
    state_arc
        .write()
        .map_err(|_| anyhow!("Game state lock poisoned"))
}

fn ensure_stopped(state: &State) -> anyhow::Result<()> {
    ensure!(state.ticker.is_none(), "Simulation is running, stop it first");
    Ok(())
}

fn parse_next<'a, I, T>(args: &mut I, what: &str) -> anyhow::Result<T>
where
    I: Iterator<Item = &'a str>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = args.next().with_context(|| format!("missing {what}"))?;
    arg.parse::<T>()
        .with_context(|| format!("invalid {what}: {arg}"))
}

fn handle_cmd<'a, I>(state_arc: &Arc<RwLock<State>>, mut args: I) -> anyhow::Result<Flow>
where
    I: Iterator<Item = &'a str>,
{
    let Some(cmd) = args.next() else {
        return Ok(Flow::Continue);
    };

    match cmd {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            let mut state = lock(state_arc)?;
            ensure_stopped(&state)?;
            for _ in 0..times {
                state.game.step();
            }
            print!("{}", renderer::render(&state.game));
        }

        "run" => {
            let mut state = lock(state_arc)?;

            let interval = match args.next() {
                Some(millis) => Duration::from_millis(millis.parse()?),
                None => state.config.tick_interval(),
            };

            if let Some(ticker) = &mut state.ticker {
                ticker.set_rate(interval);
            } else {
                state.ticker = Some(TickerHost::start(state_arc.clone(), interval));
            }
        }

        "rate" => {
            let interval = Duration::from_millis(parse_next(&mut args, "interval")?);

            let mut state = lock(state_arc)?;
            state.config.tick_interval_millis = interval.as_millis() as u64;
            if let Some(ticker) = &mut state.ticker {
                ticker.set_rate(interval);
            }
        }

        "stop" => {
            let mut state = lock(state_arc)?;
            let ticker = state.ticker.take().context("Simulation isn't running")?;
            ticker.stop();
            print!("{}", renderer::render(&state.game));
        }

        "clear" => {
            let mut state = lock(state_arc)?;
            ensure_stopped(&state)?;
            state.game.clear();
        }

        "resize" => {
            let width = parse_next(&mut args, "width")?;
            let height = parse_next(&mut args, "height")?;

            let mut state = lock(state_arc)?;
            ensure_stopped(&state)?;

            let bounds = state.game.bounds();
            state.game.resize(width, height).with_context(|| {
                format!(
                    "allowed sizes are {}x{} to {}x{}",
                    bounds.min_width, bounds.min_height, bounds.max_width, bounds.max_height
                )
            })?;
            info!(width, height, "Resized grid");
        }

        "toggle" => {
            let row: usize = parse_next(&mut args, "row")?;
            let col: usize = parse_next(&mut args, "col")?;

            let mut state = lock(state_arc)?;
            let alive = state.game.toggle_cell((row, col))?;
            println!("({row}, {col}) is now {}", if alive { "alive" } else { "dead" });
        }

        "random" => {
            let alive_count = parse_next(&mut args, "alive count")?;

            let mut state = lock(state_arc)?;
            ensure_stopped(&state)?;
            state.game.randomize(alive_count)?;
        }

        "rules" => {
            let state = lock(state_arc)?;
            let active = state.game.rule().name();
            for name in state.catalog.preset_names() {
                let marker = if name == active { '*' } else { ' ' };
                println!("{marker} {name}");
            }
        }

        "rule" => {
            let name = args.collect::<Vec<_>>().join(" ");
            ensure!(!name.is_empty(), "missing rule name");

            let mut state = lock(state_arc)?;
            ensure_stopped(&state)?;

            let rule = state.catalog.select_preset(&name)?;
            state.game.set_rule(rule);
            info!(%rule, "Selected rule");
            println!("{}", renderer::rule_line(&rule));
        }

        "custom" => {
            let survive_digits = args.next().unwrap_or_default();
            let birth_digits = args.next().unwrap_or_default();

            let mut state = lock(state_arc)?;
            ensure_stopped(&state)?;

            match state.catalog.apply_custom_rule(survive_digits, birth_digits) {
                Ok(rule) => {
                    state.game.set_rule(rule);
                    info!(%rule, "Applied custom rule");
                    println!("{}", renderer::rule_line(&rule));
                }
                Err(e) => {
                    let (survive, birth) = RuleCatalog::digits_for_rule(&state.game.rule());
                    warn!(error = %e, %survive, %birth, "Rejected custom rule, keeping last valid one");
                    println!("{}", renderer::rule_line(&state.game.rule()));
                    return Err(e.into());
                }
            }
        }

        "check" => {
            let digits = args.next().unwrap_or_default();
            match validate_digits(digits) {
                Ok(_) => println!("valid"),
                Err(e) => println!("invalid: {e}"),
            }
        }

        "show" => {
            let state = lock(state_arc)?;
            print!("{}", renderer::render(&state.game));
        }

        "exit" => return Ok(Flow::Exit),

        _ => bail!("Unknown command"),
    }

    println!("OK");
    Ok(Flow::Continue)
}
