use std::f64::consts::PI;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::{
    elements::ElementRecord,
    error::{Result, TrackError},
    helpers::{timestamp_seconds, wrap_anomaly},
    orbit::Orbit,
    types::{A, Eci, SECONDS_PER_DAY},
};

const EPOCH_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Mean anomaly (radians, in (-pi, pi]) together with the position it maps to.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AnomalyState {
    pub anomaly: f64,
    pub coords: Eci,
}
impl AnomalyState {
    pub fn at(orbit: &Orbit, anomaly: f64) -> Result<AnomalyState> {
        let anomaly = wrap_anomaly(anomaly);
        Ok(AnomalyState {
            anomaly,
            coords: orbit.get_coords(anomaly)?,
        })
    }
    /// State after `delta` seconds at `mean_motion` rad/s.
    pub fn advanced(&self, orbit: &Orbit, mean_motion: f64, delta: f64) -> Result<AnomalyState> {
        Self::at(orbit, self.anomaly + mean_motion * delta)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Satellite {
    name: String,
    catalog_id: u64,
    epoch: NaiveDateTime, //Epoch of the element set, UTC
    mean_motion: f64,     //rad/s
    epoch_anomaly: f64,
    state: AnomalyState,
    orbit: Orbit,
}
impl Satellite {
    pub fn new(record: &ElementRecord, semi_major: f64) -> Result<Satellite> {
        let epoch = NaiveDateTime::parse_from_str(&record.epoch, EPOCH_FORMAT).map_err(|source| {
            TrackError::Epoch {
                epoch: record.epoch.clone(),
                source,
            }
        })?;
        let orbit = Orbit::new(
            record.eccentricity,
            record.inclination,
            record.raan,
            record.periapsis,
            semi_major,
        )?;
        let epoch_anomaly = record.mean_anomaly.to_radians();
        let state = AnomalyState::at(&orbit, epoch_anomaly)?;
        Ok(Satellite {
            name: record.name.clone(),
            catalog_id: record.catalog_id,
            epoch,
            mean_motion: 2. * PI * record.mean_motion / SECONDS_PER_DAY,
            epoch_anomaly,
            state,
            orbit,
        })
    }

    pub fn from_elements(elem: &sgp4::Elements, semi_major: f64) -> Result<Satellite> {
        Self::new(&ElementRecord::from(elem), semi_major)
    }

    /// Advances the mean anomaly by `delta` seconds.
    pub fn move_by(&mut self, delta: f64) -> Result<()> {
        self.state = self.state.advanced(&self.orbit, self.mean_motion, delta)?;
        Ok(())
    }

    /// Places the satellite at `time` (unix seconds), counted from its own epoch.
    pub fn synchronize(&mut self, time: f64) -> Result<()> {
        let elapsed = time - self.epoch_timestamp();
        self.state = AnomalyState::at(&self.orbit, self.epoch_anomaly + self.mean_motion * elapsed)?;
        Ok(())
    }

    pub fn synchronize_at(&mut self, time: &DateTime<Utc>) -> Result<()> {
        self.synchronize(timestamp_seconds(time))
    }

    pub fn seconds_since_epoch(&self, other: &DateTime<Utc>) -> f64 {
        timestamp_seconds(other) - self.epoch_timestamp()
    }
    pub fn epoch_timestamp(&self) -> f64 {
        timestamp_seconds(&self.epoch.and_utc())
    }
    pub fn get_epoch(&self) -> DateTime<Utc> {
        self.epoch.and_utc()
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn get_catalog_id(&self) -> u64 {
        self.catalog_id
    }
    pub fn get_anomaly(&self) -> f64 {
        self.state.anomaly
    }
    pub fn get_coords(&self) -> Eci {
        self.state.coords
    }
    pub fn get_state(&self) -> AnomalyState {
        self.state
    }
    pub fn get_orbit(&self) -> &Orbit {
        &self.orbit
    }
    pub fn get_mean_motion(&self) -> f64 {
        self.mean_motion
    }
    pub fn get_orbital_period(&self) -> f64 {
        2. * PI / self.mean_motion
    }
    ///Altitude above the equatorial radius in km.
    pub fn get_height(&self) -> f64 {
        (self.state.coords.norm() - A) / 1e3
    }
    pub fn get_trace(&self, size: usize) -> Vec<Eci> {
        self.orbit.get_trace(size)
    }
}
