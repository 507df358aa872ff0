//! Resonance field: the cosmetic 60×60 grid behind the spiral view
//!
//! Each frame: cell = cell × 0.99 + (sin(dist × 0.2 + phase) × 0.3 + 0.7) × resonance × 0.01.
//! Consumes resonance, never feeds anything back into the engine.

use std::f64::consts::TAU;

pub const FIELD_SIZE: usize = 60;
pub const FIELD_CENTER: f64 = 30.0;
pub const FIELD_DECAY: f64 = 0.99;
pub const FIELD_FORCING: f64 = 0.01;
pub const PHASE_STEP: f64 = 0.01;

/// Down-sampled grid edge (every 6th cell)
pub const SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct ResonanceField {
    cells: Vec<f64>,
    /// Distance of each cell from the centre, precomputed
    distances: Vec<f64>,
    phase: f64,
    frames: u64,
}

impl Default for ResonanceField {
    fn default() -> Self {
        Self::new()
    }
}

impl ResonanceField {
    pub fn new() -> Self {
        let distances = (0..FIELD_SIZE * FIELD_SIZE)
            .map(|i| {
                let x = (i / FIELD_SIZE) as f64 - FIELD_CENTER;
                let y = (i % FIELD_SIZE) as f64 - FIELD_CENTER;
                (x * x + y * y).sqrt()
            })
            .collect();
        Self {
            cells: vec![0.0; FIELD_SIZE * FIELD_SIZE],
            distances,
            phase: 0.0,
            frames: 0,
        }
    }

    /// Advance one frame, forced by `resonance`
    pub fn advance(&mut self, resonance: f64) {
        let phase = self.phase;
        for (cell, dist) in self.cells.iter_mut().zip(&self.distances) {
            let spiral = (dist * 0.2 + phase).sin() * 0.3 + 0.7;
            *cell = *cell * FIELD_DECAY + spiral * resonance * FIELD_FORCING;
        }
        self.phase += PHASE_STEP;
        self.frames += 1;
    }

    /// Intensity at (x, y); out of range reads as 0
    pub fn cell(&self, x: usize, y: usize) -> f64 {
        if x >= FIELD_SIZE || y >= FIELD_SIZE {
            return 0.0;
        }
        self.cells[x * FIELD_SIZE + y]
    }

    /// 10×10 view, sampling every 6th cell
    pub fn sample(&self) -> [[f64; SAMPLE_SIZE]; SAMPLE_SIZE] {
        let step = FIELD_SIZE / SAMPLE_SIZE;
        let mut out = [[0.0; SAMPLE_SIZE]; SAMPLE_SIZE];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = self.cell(i * step, j * step);
            }
        }
        out
    }

    pub fn mean_intensity(&self) -> f64 {
        self.cells.iter().sum::<f64>() / self.cells.len() as f64
    }

    pub fn max_intensity(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Spiral phase wrapped to [0, 2π)
    pub fn phase(&self) -> f64 {
        self.phase % TAU
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
