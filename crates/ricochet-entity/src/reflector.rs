//! Binary-modulated reflector array.
//!
//! Each cell re-radiates what it currently receives. An "on" cell scales
//! the amplitude by `amp` without a phase shift; an "off" cell keeps the
//! amplitude and applies a fixed phase delay:
//!
//! ```text
//! output = amp · S · bit + S · (1 − bit) · exp(i · k0 · phase)
//! ```
//!
//! Received state is overwritten on every illumination, and the output is
//! recomputed in the same call, so no stale output is ever observable.

use num_complex::Complex64;
use ricochet_core::{GeometryError, Grid, Incident, Position, PropagationError};
use std::f64::consts::PI;

use crate::entity::{EntityKind, Emitter, Receiver};
use crate::pattern::Pattern;

/// Amplitude factor of an "on" cell unless configured otherwise.
pub const DEFAULT_AMPLITUDE: f64 = 0.7;

/// Phase parameter of an "off" cell unless configured otherwise.
pub const DEFAULT_PHASE: f64 = PI;

/// A planar `rows × cols` array of modulated cells with normal along z.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflectorArray {
    grid: Grid,
    pattern: Pattern,
    amplitude: f64,
    phase: f64,
    k0: f64,
    received: Vec<Complex64>,
    output: Vec<Complex64>,
}

impl ReflectorArray {
    /// Array centred on `center` with default amplitude and phase.
    pub fn new(
        center: Position,
        dx: f64,
        dy: f64,
        k0: f64,
        pattern: Pattern,
    ) -> Result<Self, GeometryError> {
        Self::builder(pattern, k0)
            .center(center)
            .pitch(dx, dy)
            .build()
    }

    /// Start building an array for `pattern` modulated at wavenumber `k0`.
    pub fn builder(pattern: Pattern, k0: f64) -> ReflectorArrayBuilder {
        ReflectorArrayBuilder {
            pattern,
            k0,
            center: [0.0; 3],
            dx: 0.0,
            dy: 0.0,
            amplitude: DEFAULT_AMPLITUDE,
            phase: DEFAULT_PHASE,
        }
    }

    /// Cell positions, shape `[rows, cols, 1]`.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current modulation pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Amplitude factor of "on" cells.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Phase parameter of "off" cells.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Modulation wavenumber.
    pub fn k0(&self) -> f64 {
        self.k0
    }

    /// Most recent received field per cell.
    pub fn received(&self) -> &[Complex64] {
        &self.received
    }

    /// Re-radiated amplitude per cell.
    pub fn output(&self) -> &[Complex64] {
        &self.output
    }

    /// Overwrite the received field and recompute the output.
    pub fn update_state(&mut self, received: Vec<Complex64>) -> Result<&[Complex64], PropagationError> {
        if received.len() != self.grid.len() {
            return Err(PropagationError::ShapeMismatch {
                expected: self.grid.len(),
                actual: received.len(),
            });
        }
        self.received = received;
        self.recompute();
        Ok(&self.output)
    }

    /// Swap the modulation pattern. Geometry is unchanged; the output is
    /// recomputed from the current received field.
    pub fn set_pattern(&mut self, pattern: Pattern) -> Result<(), GeometryError> {
        if (pattern.rows(), pattern.cols()) != (self.pattern.rows(), self.pattern.cols()) {
            return Err(GeometryError::InvalidPattern {
                reason: format!(
                    "pattern is {}x{}, array is {}x{}",
                    pattern.rows(),
                    pattern.cols(),
                    self.pattern.rows(),
                    self.pattern.cols()
                ),
            });
        }
        self.pattern = pattern;
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        let off = Complex64::new(0.0, self.k0 * self.phase).exp();
        self.output.clear();
        self.output.extend(
            self.received
                .iter()
                .zip(self.pattern.bits())
                .map(|(&s, &on)| if on { s * self.amplitude } else { s * off }),
        );
    }
}

impl Emitter for ReflectorArray {
    fn emission(&self) -> &[Complex64] {
        &self.output
    }
}

impl Receiver for ReflectorArray {
    fn kind(&self) -> EntityKind {
        EntityKind::Reflector
    }

    fn accumulate(&mut self, incident: Incident) -> Result<(), PropagationError> {
        let Incident::Scalar(s) = incident else {
            return Err(PropagationError::UnsupportedIncident { expected: "scalar" });
        };
        if s.len() != self.received.len() {
            return Err(PropagationError::ShapeMismatch {
                expected: self.received.len(),
                actual: s.len(),
            });
        }
        for (acc, v) in self.received.iter_mut().zip(s) {
            *acc += v;
        }
        self.recompute();
        Ok(())
    }

    fn clear(&mut self) {
        self.received.fill(Complex64::new(0.0, 0.0));
        self.recompute();
    }
}

/// Builder for [`ReflectorArray`].
#[derive(Clone, Debug)]
pub struct ReflectorArrayBuilder {
    pattern: Pattern,
    k0: f64,
    center: Position,
    dx: f64,
    dy: f64,
    amplitude: f64,
    phase: f64,
}

impl ReflectorArrayBuilder {
    /// Array centre. Cells lie in the plane `z = center[2]`.
    pub fn center(mut self, center: Position) -> Self {
        self.center = center;
        self
    }

    /// Cell spacing along x (columns) and y (rows).
    pub fn pitch(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Amplitude factor of "on" cells.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Phase parameter of "off" cells.
    pub fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Lay out the cells and build the array with zero received field.
    ///
    /// `k0` must be finite and positive. Each pitch must be finite and
    /// non-negative, and positive along an axis with more than one cell.
    pub fn build(self) -> Result<ReflectorArray, GeometryError> {
        if !self.k0.is_finite() || self.k0 <= 0.0 {
            return Err(GeometryError::InvalidWavenumber { value: self.k0 });
        }
        let (rows, cols) = (self.pattern.rows(), self.pattern.cols());
        let pitch_ok = |step: f64, cells: usize| {
            step.is_finite() && step >= 0.0 && (cells == 1 || step > 0.0)
        };
        if !pitch_ok(self.dx, cols) || !pitch_ok(self.dy, rows) {
            return Err(GeometryError::InvalidPitch {
                dx: self.dx,
                dy: self.dy,
            });
        }
        let [cx, cy, cz] = self.center;
        let row_mid = (rows as f64 - 1.0) / 2.0;
        let col_mid = (cols as f64 - 1.0) / 2.0;
        let mut positions = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                positions.push([
                    cx + (col as f64 - col_mid) * self.dx,
                    cy + (row as f64 - row_mid) * self.dy,
                    cz,
                ]);
            }
        }
        let grid = Grid::from_positions([rows, cols, 1], positions)?;
        let n = grid.len();
        Ok(ReflectorArray {
            grid,
            pattern: self.pattern,
            amplitude: self.amplitude,
            phase: self.phase,
            k0: self.k0,
            received: vec![Complex64::new(0.0, 0.0); n],
            output: vec![Complex64::new(0.0, 0.0); n],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn checker() -> Pattern {
        Pattern::from_rows(&[vec![true, false], vec![false, true]]).unwrap()
    }

    #[test]
    fn cells_are_centred_on_the_array_centre() {
        let r = ReflectorArray::new([1.0, 2.0, 3.0], 0.1, 0.2, 10.0, Pattern::uniform(2, 3, true).unwrap())
            .unwrap();
        assert_eq!(r.grid().shape(), [2, 3, 1]);
        let p = r.grid().positions();
        assert!((p[0][0] - 0.9).abs() < 1e-12);
        assert!((p[0][1] - 1.9).abs() < 1e-12);
        assert!((p[5][0] - 1.1).abs() < 1e-12);
        assert!((p[5][1] - 2.1).abs() < 1e-12);
        assert!(p.iter().all(|q| q[2] == 3.0));
        let cx: f64 = p.iter().map(|q| q[0]).sum::<f64>() / 6.0;
        assert!((cx - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bad_wavenumber_rejected() {
        for k0 in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let r = ReflectorArray::new([0.0; 3], 0.1, 0.1, k0, checker());
            assert!(matches!(r, Err(GeometryError::InvalidWavenumber { .. })), "{k0}");
        }
    }

    #[test]
    fn bad_pitch_rejected() {
        for (dx, dy) in [(-0.1, 0.1), (0.1, f64::NAN), (0.0, 0.1), (0.1, f64::INFINITY)] {
            let r = ReflectorArray::new([0.0; 3], dx, dy, 1.0, checker());
            assert!(matches!(r, Err(GeometryError::InvalidPitch { .. })), "({dx}, {dy})");
        }
        let single = Pattern::uniform(1, 1, true).unwrap();
        assert!(ReflectorArray::builder(single, 1.0).build().is_ok());
    }

    #[test]
    fn on_cells_scale_and_off_cells_shift_phase() {
        let k0 = 2.0;
        let mut r = ReflectorArray::builder(checker(), k0)
            .pitch(0.01, 0.01)
            .amplitude(0.5)
            .phase(0.25)
            .build()
            .unwrap();
        let s = c(1.0, 2.0);
        let out = r.update_state(vec![s; 4]).unwrap().to_vec();
        let shift = Complex64::new(0.0, 0.5).exp();
        assert!((out[0] - s * 0.5).norm() < 1e-12);
        assert!((out[1] - s * shift).norm() < 1e-12);
        assert!((out[2] - s * shift).norm() < 1e-12);
        assert!((out[3] - s * 0.5).norm() < 1e-12);
    }

    #[test]
    fn receive_overwrites_previous_state() {
        let mut r = ReflectorArray::new([0.0; 3], 0.1, 0.1, 1.0, Pattern::uniform(1, 1, true).unwrap())
            .unwrap();
        r.receive(Incident::Scalar(vec![c(5.0, 0.0)])).unwrap();
        r.receive(Incident::Scalar(vec![c(1.0, 0.0)])).unwrap();
        assert_eq!(r.received(), &[c(1.0, 0.0)]);
        assert!((r.output()[0] - c(DEFAULT_AMPLITUDE, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn vector_incident_rejected() {
        let mut r = ReflectorArray::new([0.0; 3], 0.1, 0.1, 1.0, Pattern::uniform(1, 1, true).unwrap())
            .unwrap();
        assert_eq!(
            r.receive(Incident::Vector(vec![[c(1.0, 0.0); 3]])),
            Err(PropagationError::UnsupportedIncident { expected: "scalar" })
        );
    }

    #[test]
    fn wrong_length_rejected() {
        let mut r = ReflectorArray::new([0.0; 3], 0.1, 0.1, 1.0, checker()).unwrap();
        assert!(matches!(
            r.update_state(vec![c(1.0, 0.0)]),
            Err(PropagationError::ShapeMismatch { expected: 4, actual: 1 })
        ));
    }

    #[test]
    fn set_pattern_recomputes_output() {
        let mut r = ReflectorArray::new([0.0; 3], 0.1, 0.1, 1.0, Pattern::uniform(2, 2, true).unwrap())
            .unwrap();
        r.update_state(vec![c(1.0, 0.0); 4]).unwrap();
        r.set_pattern(Pattern::uniform(2, 2, false).unwrap()).unwrap();
        let shift = Complex64::new(0.0, PI).exp();
        assert!(r.output().iter().all(|o| (o - shift).norm() < 1e-12));
        assert!(r.set_pattern(Pattern::uniform(1, 4, true).unwrap()).is_err());
    }

    #[test]
    fn clear_zeroes_received_and_output() {
        let mut r = ReflectorArray::new([0.0; 3], 0.1, 0.1, 1.0, checker()).unwrap();
        r.update_state(vec![c(1.0, 1.0); 4]).unwrap();
        r.clear();
        assert!(r.received().iter().all(|s| *s == c(0.0, 0.0)));
        assert!(r.output().iter().all(|s| *s == c(0.0, 0.0)));
    }
}
