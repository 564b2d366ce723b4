//! Binary reflector patterns and a seeded stripe generator.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ricochet_core::GeometryError;
use std::ops::Index;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// A `rows × cols` on/off pattern, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    bits: Vec<bool>,
}

impl Pattern {
    /// Pattern from row-major bits.
    pub fn new(rows: usize, cols: usize, bits: Vec<bool>) -> Result<Self, GeometryError> {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::InvalidPattern {
                reason: format!("shape {rows}x{cols} has no cells"),
            });
        }
        if bits.len() != rows * cols {
            return Err(GeometryError::InvalidPattern {
                reason: format!(
                    "shape {rows}x{cols} needs {} bits, got {}",
                    rows * cols,
                    bits.len()
                ),
            });
        }
        Ok(Self { rows, cols, bits })
    }

    /// Pattern from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GeometryError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(r) = rows.iter().position(|row| row.len() != cols) {
            return Err(GeometryError::InvalidPattern {
                reason: format!("row {r} has {} cells, expected {cols}", rows[r].len()),
            });
        }
        Self::new(rows.len(), cols, rows.concat())
    }

    /// Every cell set to `on`.
    pub fn uniform(rows: usize, cols: usize, on: bool) -> Result<Self, GeometryError> {
        Self::new(rows, cols, vec![on; rows * cols])
    }

    /// Column stripes: column `c` is `columns[c]` on every row.
    pub fn striped(rows: usize, columns: &[bool]) -> Result<Self, GeometryError> {
        let bits = (0..rows).flat_map(|_| columns.iter().copied()).collect();
        Self::new(rows, columns.len(), bits)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; a pattern has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.bits[row * self.cols + col])
        } else {
            None
        }
    }

    /// Bit at a flat row-major cell index.
    pub fn is_on(&self, cell: usize) -> bool {
        self.bits.get(cell).copied().unwrap_or(false)
    }

    /// Row-major bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

/// A batch of random column-striped patterns.
///
/// Each column is switched on or off as a whole, so the generated
/// surfaces steer in one plane only. Reproducible for a given seed.
#[derive(Clone, Debug)]
pub struct PatternGenerator {
    patterns: Vec<Pattern>,
}

impl PatternGenerator {
    /// Generate `count` patterns of shape `rows × cols` from `seed`.
    pub fn new(rows: usize, cols: usize, count: usize, seed: u64) -> Result<Self, GeometryError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let patterns = (0..count)
            .map(|_| {
                let columns: Vec<bool> = (0..cols).map(|_| rng.next_u32() & 1 == 1).collect();
                Pattern::striped(rows, &columns)
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    /// Generate with [`DEFAULT_SEED`].
    pub fn with_default_seed(rows: usize, cols: usize, count: usize) -> Result<Self, GeometryError> {
        Self::new(rows, cols, count, DEFAULT_SEED)
    }

    /// Pattern `i`, if generated.
    pub fn get(&self, i: usize) -> Option<&Pattern> {
        self.patterns.get(i)
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns were generated.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate the patterns in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl Index<usize> for PatternGenerator {
    type Output = Pattern;

    fn index(&self, i: usize) -> &Pattern {
        &self.patterns[i]
    }
}

impl<'a> IntoIterator for &'a PatternGenerator {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ragged_rows_rejected() {
        let err = Pattern::from_rows(&[vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidPattern { .. }));
    }

    #[test]
    fn empty_pattern_rejected() {
        assert!(Pattern::new(0, 3, vec![]).is_err());
        assert!(Pattern::from_rows(&[]).is_err());
    }

    #[test]
    fn from_rows_is_row_major() {
        let p = Pattern::from_rows(&[vec![true, false, false], vec![false, false, true]]).unwrap();
        assert_eq!(p.get(0, 0), Some(true));
        assert_eq!(p.get(1, 2), Some(true));
        assert_eq!(p.get(1, 0), Some(false));
        assert_eq!(p.get(2, 0), None);
        assert!(p.is_on(5));
        assert!(!p.is_on(6));
    }

    #[test]
    fn same_seed_same_patterns() {
        let a = PatternGenerator::new(4, 10, 5, 7).unwrap();
        let b = PatternGenerator::new(4, 10, 5, 7).unwrap();
        assert_eq!(a.len(), 5);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = PatternGenerator::new(1, 64, 1, 1).unwrap();
        let b = PatternGenerator::new(1, 64, 1, 2).unwrap();
        assert_ne!(a[0], b[0]);
    }

    proptest! {
        #[test]
        fn generated_patterns_are_column_stripes(
            rows in 1usize..6,
            cols in 1usize..12,
            count in 0usize..4,
            seed in any::<u64>(),
        ) {
            let generator = PatternGenerator::new(rows, cols, count, seed).unwrap();
            prop_assert_eq!(generator.len(), count);
            for p in &generator {
                prop_assert_eq!(p.rows(), rows);
                prop_assert_eq!(p.cols(), cols);
                for c in 0..cols {
                    for r in 1..rows {
                        prop_assert_eq!(p.get(r, c), p.get(0, c));
                    }
                }
            }
        }
    }
}
