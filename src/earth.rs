use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::{
    basis::{Axis, Basis},
    error::Result,
    helpers::{modulus, timestamp_seconds},
    types::{A, B, EARTH_ROTATION_RATE, Eci, F},
};

/// 1984-01-06T00:00:00 UTC, the orientation reference of the rotating frame.
pub const EARTH_EPOCH_TIMESTAMP: i64 = 442_195_200;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct EarthParams {
    pub semi_major: f64,
    pub semi_minor: f64,
    pub flattening: f64,
    pub rotation_rate: f64, //rad/s
}
pub const WGS84: EarthParams = EarthParams {
    semi_major: A,
    semi_minor: B,
    flattening: F,
    rotation_rate: EARTH_ROTATION_RATE,
};

/// Reference ellipsoid rotating about its polar axis.
#[derive(Clone, Debug, Serialize)]
pub struct Earth {
    params: EarthParams,
    elapsed: f64, //seconds since EARTH_EPOCH_TIMESTAMP
    basis: Basis,
}

impl Earth {
    pub fn new() -> Earth {
        Earth {
            params: WGS84,
            elapsed: 0.,
            basis: Basis::cartesian(),
        }
    }

    pub fn at(time: &DateTime<Utc>) -> Result<Earth> {
        let mut earth = Earth::new();
        earth.move_to(timestamp_seconds(time) - EARTH_EPOCH_TIMESTAMP as f64)?;
        Ok(earth)
    }

    pub fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(EARTH_EPOCH_TIMESTAMP, 0).unwrap()
    }

    /// Orients the ellipsoid `elapsed` seconds after the epoch.
    pub fn move_to(&mut self, elapsed: f64) -> Result<()> {
        let angle = modulus((self.params.rotation_rate * elapsed).to_degrees(), 360.);
        self.basis = Basis::cartesian().rotate(angle, Axis::Tertiary)?;
        self.elapsed = elapsed;
        debug!("earth: t = {elapsed} s, sidereal rotation {angle:.6} deg");
        Ok(())
    }

    pub fn move_by(&mut self, delta: f64) -> Result<()> {
        self.move_to(self.elapsed + delta)
    }

    /// Inertial coordinates of a surface point, angles in degrees.
    pub fn get_surface_point_coords(&self, longitude: f64, latitude: f64) -> Eci {
        let phi = longitude.to_radians();
        let theta = latitude.to_radians();
        let local = [
            self.params.semi_major * phi.cos() * theta.cos(),
            self.params.semi_major * phi.sin() * theta.cos(),
            self.params.semi_minor * theta.sin(),
        ];
        Eci::from(self.basis.to_inertial(local))
    }

    pub fn rotation_angle(&self) -> f64 {
        modulus((self.params.rotation_rate * self.elapsed).to_degrees(), 360.)
    }
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
    pub fn basis(&self) -> &Basis {
        &self.basis
    }
    pub fn params(&self) -> &EarthParams {
        &self.params
    }
}

impl Default for Earth {
    fn default() -> Self {
        Earth::new()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::helpers::assert_almost_eq;
    use chrono::{Duration, TimeZone};

    fn assert_eci(actual: Eci, expected: [f64; 3]) {
        assert_almost_eq(actual.x, expected[0], 1e-6);
        assert_almost_eq(actual.y, expected[1], 1e-6);
        assert_almost_eq(actual.z, expected[2], 1e-6);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(
            Earth::epoch(),
            Utc.with_ymd_and_hms(1984, 1, 6, 0, 0, 0).unwrap()
        );
    }
    #[test]
    fn test_at_keeps_sub_millisecond_time() {
        let time = Earth::epoch() + Duration::microseconds(1_000_400);
        let earth = Earth::at(&time).unwrap();
        assert_almost_eq(earth.elapsed(), 1.0004, 1e-6);
        let mut moved = Earth::new();
        moved.move_to(1.0004).unwrap();
        assert_almost_eq(earth.rotation_angle(), moved.rotation_angle(), 1e-9);
    }
    #[test]
    fn test_get_surface_point_coords() {
        let earth = Earth::at(&Utc.with_ymd_and_hms(1984, 1, 6, 0, 0, 0).unwrap()).unwrap();
        assert_eq!(earth.elapsed(), 0.);
        assert_eci(earth.get_surface_point_coords(0., 0.), [A, 0., 0.]);
        assert_eci(earth.get_surface_point_coords(0., 90.), [0., 0., B]);
        assert_eci(earth.get_surface_point_coords(0., -90.), [0., 0., -B]);
        assert_eci(earth.get_surface_point_coords(180., 0.), [-A, 0., 0.]);
    }
    #[test]
    fn test_quarter_turn() {
        let mut earth = Earth::new();
        earth.move_to(PI / 2. / EARTH_ROTATION_RATE).unwrap();
        assert_almost_eq(earth.rotation_angle(), 90., 1e-9);
        assert_eci(earth.get_surface_point_coords(0., 0.), [0., A, 0.]);
        assert_eci(earth.get_surface_point_coords(90., 0.), [-A, 0., 0.]);
        assert_eci(earth.get_surface_point_coords(0., 90.), [0., 0., B]);
    }
    #[test]
    fn test_move_to_is_absolute() {
        let mut earth = Earth::new();
        earth.move_to(5000.).unwrap();
        let first = earth.get_surface_point_coords(12., 48.);
        earth.move_to(5000.).unwrap();
        assert_eq!(earth.get_surface_point_coords(12., 48.), first);
    }
    #[test]
    fn test_move_by_accumulates() {
        let mut stepped = Earth::new();
        for _ in 0..60 {
            stepped.move_by(60.).unwrap();
        }
        let mut direct = Earth::new();
        direct.move_to(3600.).unwrap();
        assert_almost_eq(stepped.elapsed(), 3600., 1e-9);
        assert!(
            stepped
                .get_surface_point_coords(30., 10.)
                .distance(&direct.get_surface_point_coords(30., 10.))
                < 1e-6
        );
    }
    #[test]
    fn test_surface_point_stays_on_ellipsoid() {
        let earth = Earth::at(&Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap()).unwrap();
        for (longitude, latitude) in [(4.3876, 51.9861), (-93., 45.), (151.2, -33.9)] {
            let point = earth.get_surface_point_coords(longitude, latitude);
            let local = earth.basis().to_frame(&point.to_array()).unwrap();
            let on_ellipsoid = (local[0].powf(2.) + local[1].powf(2.)) / A.powf(2.)
                + local[2].powf(2.) / B.powf(2.);
            assert_almost_eq(on_ellipsoid, 1., 1e-9);
            assert_almost_eq(point.z, B * latitude.to_radians().sin(), 1e-6);
        }
    }
}
