use std::fmt::Write;

use colored::Colorize;
use libgame::{Game, catalog::RuleCatalog, rule::Rule};

/// The step label never shows more than this.
pub const MAX_DISPLAYED_STEP: u64 = 9999;

const ALIVE_GLYPH: &str = "██";
const DEAD_GLYPH: &str = "··";

pub fn display_step(step_count: u64) -> u64 {
    step_count.min(MAX_DISPLAYED_STEP)
}

pub fn rule_line(rule: &Rule) -> String {
    let (survive_digits, birth_digits) = RuleCatalog::digits_for_rule(rule);
    format!("{}: S {survive_digits} / B {birth_digits}", rule.name())
}

/// Draws the grid as text, one line per row, under a status line.
pub fn render(game: &Game) -> String {
    let mut frame = String::new();

    let _ = writeln!(
        frame,
        "Step: {} | {} | {}x{} | alive {}",
        display_step(game.step_count()),
        rule_line(&game.rule()),
        game.width(),
        game.height(),
        game.alive_count(),
    );

    for row in game.board().rows() {
        for &alive in row {
            let glyph = if alive {
                ALIVE_GLYPH.bright_white()
            } else {
                DEAD_GLYPH.dimmed()
            };
            let _ = write!(frame, "{glyph}");
        }
        frame.push('\n');
    }

    frame
}

#[cfg(test)]
mod tests {
    use libgame::{
        board::GridBounds,
        rule::{NeighborSet, Preset},
    };

    use super::*;

    #[test]
    fn step_label_saturates() {
        assert_eq!(display_step(0), 0);
        assert_eq!(display_step(9999), 9999);
        assert_eq!(display_step(123_456), 9999);
    }

    #[test]
    fn rule_line_shows_digits() {
        assert_eq!(
            rule_line(&Rule::Preset(Preset::DayAndNight)),
            "Day & Night: S 34678 / B 3678"
        );
        assert_eq!(
            rule_line(&Rule::custom(
                NeighborSet::from_counts(&[1]),
                NeighborSet::from_counts(&[2])
            )),
            "Custom: S 1 / B 2"
        );
    }

    #[test]
    fn render_draws_one_line_per_row() {
        colored::control::set_override(false);

        let mut game = Game::new(10, 10, GridBounds::default(), Rule::default()).unwrap();
        game.toggle_cell((0, 1)).unwrap();

        let frame = render(&game);
        let mut lines = frame.lines();

        assert_eq!(
            lines.next(),
            Some("Step: 0 | Life: S 23 / B 3 | 10x10 | alive 1")
        );
        assert_eq!(lines.next(), Some("··██················"));
        assert_eq!(lines.count(), 9);
    }
}
