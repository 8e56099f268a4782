use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackError},
    vector::Vector,
};

/// Selects one of a basis' own vectors as a rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Primary = 0,
    Secondary = 1,
    Tertiary = 2,
}

impl FromStr for Axis {
    type Err = TrackError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "x" | "ox" => Ok(Axis::Primary),
            "secondary" | "y" | "oy" => Ok(Axis::Secondary),
            "tertiary" | "z" | "oz" => Ok(Axis::Tertiary),
            _ => Err(TrackError::InvalidAxis(s.to_string())),
        }
    }
}

/// Ordered triple of unit vectors. Rows of [`Basis::matrix`] are the axes in
/// inertial coordinates.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Basis {
    axes: [Vector; 3],
}

impl Basis {
    pub fn new(primary: Vector, secondary: Vector, tertiary: Vector) -> Basis {
        Basis {
            axes: [primary, secondary, tertiary],
        }
    }

    pub fn cartesian() -> Basis {
        Basis::new(
            Vector::unit([1., 0., 0.]),
            Vector::unit([0., 1., 0.]),
            Vector::unit([0., 0., 1.]),
        )
    }

    fn from_matrix(rows: [[f64; 3]; 3]) -> Result<Basis> {
        Ok(Basis::new(
            Vector::from_components(&rows[0])?,
            Vector::from_components(&rows[1])?,
            Vector::from_components(&rows[2])?,
        ))
    }

    pub fn axis(&self, axis: Axis) -> &Vector {
        &self.axes[axis as usize]
    }

    pub fn axes(&self) -> &[Vector; 3] {
        &self.axes
    }

    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.axes.map(|v| v.components())
    }

    /// True when all three axes are pairwise orthogonal.
    pub fn is_cartesian(&self) -> bool {
        let [v1, v2, v3] = &self.axes;
        v1.is_orthogonal(v2) && v2.is_orthogonal(v3) && v3.is_orthogonal(v1)
    }

    /// Rotates every axis about one of this basis' own axes.
    pub fn rotate(&self, angle: f64, axis: Axis) -> Result<Basis> {
        self.rotate_about(angle, self.axis(axis))
    }

    /// Rotates every axis by `angle` degrees about `axis` (Rodrigues).
    pub fn rotate_about(&self, angle: f64, axis: &Vector) -> Result<Basis> {
        let rotation = rodrigues(angle.to_radians(), axis);
        let rotated = self.matrix().map(|row| {
            [
                rotation[0][0] * row[0] + rotation[0][1] * row[1] + rotation[0][2] * row[2],
                rotation[1][0] * row[0] + rotation[1][1] * row[1] + rotation[1][2] * row[2],
                rotation[2][0] * row[0] + rotation[2][1] * row[1] + rotation[2][2] * row[2],
            ]
        });
        Basis::from_matrix(rotated)
    }

    /// Maps coordinates expressed in this frame to inertial coordinates
    /// (multiplication by the transposed matrix).
    pub fn to_inertial(&self, point: [f64; 3]) -> [f64; 3] {
        let m = self.matrix();
        let mut out = [0.; 3];
        for (i, value) in out.iter_mut().enumerate() {
            *value = m[0][i] * point[0] + m[1][i] * point[1] + m[2][i] * point[2];
        }
        out
    }

    /// Projects inertial coordinates onto the axes of this frame.
    pub fn to_frame(&self, point: &[f64]) -> Result<[f64; 3]> {
        Ok([
            self.axes[0].dot_components(point)?,
            self.axes[1].dot_components(point)?,
            self.axes[2].dot_components(point)?,
        ])
    }
}

fn rodrigues(theta: f64, axis: &Vector) -> [[f64; 3]; 3] {
    let [x, y, z] = axis.components();
    let (s, c) = theta.sin_cos();
    let k = 1. - c;
    [
        [c + k * x * x, k * x * y - s * z, k * x * z + s * y],
        [k * y * x + s * z, c + k * y * y, k * y * z - s * x],
        [k * z * x - s * y, k * z * y + s * x, c + k * z * z],
    ]
}

impl PartialEq for Basis {
    fn eq(&self, other: &Self) -> bool {
        self.axes.iter().zip(other.axes.iter()).all(|(a, b)| a == b)
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.axes[0], self.axes[1], self.axes[2])
    }
}
