use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde::Serialize;

use crate::category::CategoryTable;

/// Maximum number of tiles per draw sequence.
pub const MAX_TILES: usize = 6;

const FULL_TURN: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No category selected yet.
    Idle,
    /// Spin in flight, waiting for the delay to elapse.
    Spinning,
    /// Category selected, fewer than six tiles drawn.
    Selected { category: usize },
    /// Six tiles drawn; the wheel is unlocked again.
    LimitReached { category: usize },
}

/// View model handed to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct WheelView {
    pub spinning: bool,
    pub selected_category: Option<String>,
    pub pointer_angle: f32,
    pub category_names: Vec<String>,
    pub drawn_tiles: Vec<String>,
    pub can_spin: bool,
    pub can_draw: bool,
}

/// The category wheel state machine.
///
/// `spin` only arms the wheel; the selection itself happens in `finish_spin`,
/// which the owner calls once the spin delay elapses. Both commands tolerate
/// being called out of turn and degrade to no-ops, mirroring a disabled
/// control.
pub struct Wheel {
    table: CategoryTable,
    phase: Phase,
    drawn: Vec<String>,
    pointer_angle: f32,
    rng: Box<dyn RngCore>,
}

impl Wheel {
    pub fn new(table: CategoryTable, seed: u64) -> Self {
        Self {
            table,
            phase: Phase::Idle,
            drawn: Vec::with_capacity(MAX_TILES),
            pointer_angle: 0.0,
            rng: Box::new(XorShiftRng::seed_from_u64(seed)),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// The wheel is locked while spinning and while a draw sequence is in
    /// progress; reaching the tile limit unlocks it again.
    pub fn can_spin(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::LimitReached { .. })
    }

    pub fn can_draw(&self) -> bool {
        matches!(self.phase, Phase::Selected { .. })
    }

    /// Arm a spin. Returns false when the wheel is locked or already
    /// spinning; the in-flight spin is unaffected.
    pub fn spin(&mut self) -> bool {
        if !self.can_spin() {
            debug!("spin ignored in phase {:?}", self.phase);
            return false;
        }

        self.phase = Phase::Spinning;

        true
    }

    /// Settle an in-flight spin: pick a category, reset the draw sequence
    /// and compute the pointer angle. No-op unless a spin is in flight.
    pub fn finish_spin(&mut self) -> Option<&str> {
        if self.phase != Phase::Spinning {
            debug!("finish_spin ignored in phase {:?}", self.phase);
            return None;
        }

        let count = self.table.len();
        let index = self.rng.gen_range(0..count);
        let turns = self.rng.gen_range(3..=6);

        self.pointer_angle = FULL_TURN * turns as f32 + index as f32 * (FULL_TURN / count as f32);
        self.drawn.clear();
        self.phase = Phase::Selected { category: index };

        let name = self.table.get(index).name();
        info!("wheel settled on {:?} (pointer at {}°)", name, self.displayed_angle());

        Some(name)
    }

    /// Draw one tile from the selected category, with replacement. No-op
    /// when no category is selected or the limit is already reached.
    pub fn draw_tile(&mut self) -> Option<&str> {
        let Phase::Selected { category } = self.phase else {
            debug!("draw_tile ignored in phase {:?}", self.phase);
            return None;
        };

        let words = self.table.get(category).words();
        let word = &words[self.rng.gen_range(0..words.len())];

        self.drawn.push(word.clone());
        debug!("drew tile {:?} ({}/{})", word, self.drawn.len(), MAX_TILES);

        if self.drawn.len() == MAX_TILES {
            self.phase = Phase::LimitReached { category };
            info!("tile limit reached, wheel unlocked");
        }

        self.drawn.last().map(String::as_str)
    }

    pub fn drawn_tiles(&self) -> &[String] {
        &self.drawn
    }

    pub fn selected_category(&self) -> Option<&str> {
        match self.phase {
            Phase::Selected { category } | Phase::LimitReached { category } => {
                Some(self.table.get(category).name())
            }
            _ => None,
        }
    }

    /// Raw accumulated angle, including the full turns of the spin.
    pub fn pointer_angle(&self) -> f32 {
        self.pointer_angle
    }

    /// Angle actually shown by a renderer, folded into [0, 360).
    pub fn displayed_angle(&self) -> f32 {
        self.pointer_angle % FULL_TURN
    }

    pub fn view(&self) -> WheelView {
        WheelView {
            spinning: self.phase == Phase::Spinning,
            selected_category: self.selected_category().map(str::to_owned),
            pointer_angle: self.displayed_angle(),
            category_names: self.table.names(),
            drawn_tiles: self.drawn.clone(),
            can_spin: self.can_spin(),
            can_draw: self.can_draw(),
        }
    }
}
