use serde::{Deserialize, Serialize};

use super::material::MaterialCategory;

/// Tolerance for the "fractions sum to 1.0" check, as a fraction (1%).
pub const SUM_TOLERANCE: f64 = 0.01;

/// Waste composition: the fraction of the total stream that each material
/// category represents. Fractions are expected to sum to 1.0 within a 1%
/// tolerance; the check is advisory, nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub organics: f64,
    pub paper: f64,
    pub plastics: f64,
    pub metals: f64,
    pub glass: f64,
}

impl Composition {
    pub fn fraction(&self, category: MaterialCategory) -> f64 {
        match category {
            MaterialCategory::Organics => self.organics,
            MaterialCategory::Paper => self.paper,
            MaterialCategory::Plastics => self.plastics,
            MaterialCategory::Metals => self.metals,
            MaterialCategory::Glass => self.glass,
        }
    }

    pub fn set_fraction(&mut self, category: MaterialCategory, value: f64) {
        match category {
            MaterialCategory::Organics => self.organics = value,
            MaterialCategory::Paper => self.paper = value,
            MaterialCategory::Plastics => self.plastics = value,
            MaterialCategory::Metals => self.metals = value,
            MaterialCategory::Glass => self.glass = value,
        }
    }

    pub fn sum(&self) -> f64 {
        MaterialCategory::ALL
            .iter()
            .map(|c| self.fraction(*c))
            .sum()
    }

    /// True iff the fractions sum to 1.0 within [`SUM_TOLERANCE`].
    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() < SUM_TOLERANCE
    }

    /// Rescales every fraction so the result sums to 1.0.
    ///
    /// A zero-sum composition is returned unchanged; dividing by zero would
    /// turn a degenerate but harmless input into NaN everywhere.
    pub fn normalized(&self) -> Composition {
        let sum = self.sum();
        if sum == 0.0 {
            return *self;
        }
        let mut out = *self;
        for category in MaterialCategory::ALL {
            out.set_fraction(category, self.fraction(category) / sum);
        }
        out
    }
}
