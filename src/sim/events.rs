//! Tile-triggered gameplay events: coin pickup and hazard damage
//!
//! Runs after both axis commits. Sound and HUD effects are not performed
//! here; they are reported as [`GameEvent`]s for the shell to act on.

use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::grid::TileGrid;
use super::progress::{Outcome, ProgressState};
use super::zone::DamageZone;
use crate::tuning::RulesTuning;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin cell was consumed
    CoinCollected { col: i32, row: i32, score: u32 },
    /// A hazard took health; `audible` marks the hit that should play a sound
    Damaged { health: u32, audible: bool },
    /// The run just ended
    Finished(Outcome),
}

/// Apply coin pickup and hazard damage for the body's committed position.
///
/// The coin test uses the body's center cell; damage uses the full bounding
/// box against every zone. Damage repeats every tick the overlap persists,
/// but only a hit taken at full health is audible.
pub fn process_tile_events(
    grid: &mut TileGrid,
    zones: &[DamageZone],
    body: &KinematicBody,
    progress: &mut ProgressState,
    rules: &RulesTuning,
    events: &mut Vec<GameEvent>,
) {
    let (col, row) = grid.cell_at(body.center());
    if grid.clear_coin(col, row) {
        progress.add_score(rules.coin_value);
        log::debug!(
            "Coin collected at ({}, {}), score {}",
            col,
            row,
            progress.score()
        );
        events.push(GameEvent::CoinCollected {
            col,
            row,
            score: progress.score(),
        });
    }

    let bounds = body.bounds();
    for zone in zones {
        if zone.overlaps(&bounds) {
            let audible = progress.at_full_health();
            progress.decrease_health(rules.damage_per_tick);
            events.push(GameEvent::Damaged {
                health: progress.health(),
                audible,
            });
        }
    }
}
