use std::fmt::Display;

use serde::Serialize;

use crate::error::{Result, TrackError};

pub const EPS: f64 = 1e-12;

/// Unit direction in three dimensions. Normalized on construction.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Vector {
    coords: [f64; 3],
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Result<Vector> {
        let length = x.hypot(y).hypot(z);
        if length == 0. || !length.is_finite() {
            return Err(TrackError::ZeroLength(length));
        }
        Ok(Vector {
            coords: [x / length, y / length, z / length],
        })
    }

    /// Wraps components already known to have unit length.
    pub(crate) const fn unit(coords: [f64; 3]) -> Vector {
        Vector { coords }
    }

    pub fn from_components(components: &[f64]) -> Result<Vector> {
        match components {
            [x, y, z] => Self::new(*x, *y, *z),
            _ => Err(TrackError::Dimension {
                found: components.len(),
            }),
        }
    }

    /// Magnitude of the stored components; 1.0 for every constructed vector.
    pub fn length(&self) -> f64 {
        let [x, y, z] = self.coords;
        x.hypot(y).hypot(z)
    }

    pub fn components(&self) -> [f64; 3] {
        self.coords
    }

    pub fn dot_product(&self, other: &Vector) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Dot product against raw components, which need not be normalized.
    pub fn dot_components(&self, other: &[f64]) -> Result<f64> {
        if other.len() != self.coords.len() {
            return Err(TrackError::DimensionMismatch {
                expected: self.coords.len(),
                found: other.len(),
            });
        }
        Ok(self.coords.iter().zip(other).map(|(a, b)| a * b).sum())
    }

    pub fn is_orthogonal(&self, other: &Vector) -> bool {
        self.is_orthogonal_eps(other, EPS)
    }

    pub fn is_orthogonal_eps(&self, other: &Vector, eps: f64) -> bool {
        self.dot_product(other).abs() <= eps
    }

    pub fn equals_eps(&self, other: &Vector, eps: f64) -> bool {
        let distance = self
            .coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt();
        distance <= eps
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.equals_eps(other, EPS)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = TrackError;
    fn try_from(value: &[f64]) -> Result<Self> {
        Self::from_components(value)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.coords[0], self.coords[1], self.coords[2]
        )
    }
}
