use std::f64::consts::PI;

use log::trace;
use serde::Serialize;

use crate::{
    basis::{Axis, Basis},
    error::{Result, TrackError},
    types::Eci,
};

const KEPLER_EPS: f64 = 1e-12;
// contraction is about e per step, e = 0.999 near periapsis needs ~7000
const KEPLER_MAX_ITERATIONS: usize = 10_000;

/// Keplerian ellipse oriented in the inertial frame. Angles are in degrees,
/// lengths in meters.
#[derive(Clone, Debug, Serialize)]
pub struct Orbit {
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    periapsis: f64,
    semi_major: f64,
    semi_minor: f64,
    basis: Basis,
}

impl Orbit {
    pub fn new(
        eccentricity: f64,
        inclination: f64,
        raan: f64,
        periapsis: f64,
        semi_major: f64,
    ) -> Result<Orbit> {
        if !(0. ..1.).contains(&eccentricity) {
            return Err(TrackError::Eccentricity(eccentricity));
        }
        if !(semi_major > 0. && semi_major.is_finite()) {
            return Err(TrackError::SemiMajor(semi_major));
        }
        let basis = Self::orbit_basis(inclination, raan, periapsis)?;
        Ok(Orbit {
            eccentricity,
            inclination,
            raan,
            periapsis,
            semi_major,
            semi_minor: (1. - eccentricity.powf(2.)).sqrt() * semi_major,
            basis,
        })
    }

    /// Perifocal frame: RAAN about the polar axis, inclination about the
    /// reference x axis, then periapsis about the rotated polar axis.
    fn orbit_basis(inclination: f64, raan: f64, periapsis: f64) -> Result<Basis> {
        let reference = Basis::cartesian();
        reference
            .rotate(raan, Axis::Tertiary)?
            .rotate_about(inclination, reference.axis(Axis::Primary))?
            .rotate(periapsis, Axis::Tertiary)
    }

    /// Solves E = M + e*sin(E) by fixed-point iteration.
    pub fn solve_kepler(&self, mean_anomaly: f64) -> Result<f64> {
        let mut current = mean_anomaly;
        for iteration in 1..=KEPLER_MAX_ITERATIONS {
            let next = self.eccentricity * current.sin() + mean_anomaly;
            if (next - current).abs() < KEPLER_EPS {
                trace!("kepler converged in {iteration} iterations for M = {mean_anomaly}");
                return Ok(next);
            }
            current = next;
        }
        Err(TrackError::Convergence {
            mean_anomaly,
            iterations: KEPLER_MAX_ITERATIONS,
        })
    }

    /// Inertial position for a mean anomaly in radians.
    pub fn get_coords(&self, mean_anomaly: f64) -> Result<Eci> {
        let eccentric_anomaly = self.solve_kepler(mean_anomaly)?;
        Ok(self.point_at(eccentric_anomaly))
    }

    /// `size` points of the ellipse, evenly spaced in true anomaly over [0, 2pi).
    pub fn get_trace(&self, size: usize) -> Vec<Eci> {
        let e = self.eccentricity;
        (0..size)
            .map(|i| {
                let true_anomaly = 2. * PI * i as f64 / size as f64;
                let half = true_anomaly / 2.;
                let eccentric_anomaly =
                    2. * ((1. - e).sqrt() * half.sin()).atan2((1. + e).sqrt() * half.cos());
                self.point_at(eccentric_anomaly)
            })
            .collect()
    }

    fn point_at(&self, eccentric_anomaly: f64) -> Eci {
        let perifocal = [
            eccentric_anomaly.cos() * self.semi_major,
            eccentric_anomaly.sin() * self.semi_minor,
            0.,
        ];
        Eci::from(self.basis.to_inertial(perifocal))
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }
    pub fn inclination(&self) -> f64 {
        self.inclination
    }
    pub fn raan(&self) -> f64 {
        self.raan
    }
    pub fn periapsis(&self) -> f64 {
        self.periapsis
    }
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }
    pub fn basis(&self) -> &Basis {
        &self.basis
    }
}
