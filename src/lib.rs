use chrono::DateTime;
use chrono::Utc;
use helpers::timestamp_seconds;
use log::debug;
pub use basis::{Axis, Basis};
pub use config::{SystemConfig, TrackerConfig};
pub use earth::{EARTH_EPOCH_TIMESTAMP, Earth, EarthParams, WGS84};
pub use elements::ElementRecord;
pub use error::{Result, TrackError};
pub use orbit::Orbit;
pub use satellite::{AnomalyState, Satellite};
pub use satellite_system::SatelliteSystem;
pub use types::Eci;
pub use vector::Vector;
mod basis;
mod config;
mod earth;
mod elements;
mod error;
mod helpers;
mod orbit;
mod satellite;
mod satellite_system;
mod types;
mod vector;

/// Every enabled satellite system plus the Earth, driven by one clock.
#[derive(Clone, Debug)]
pub struct Tracker {
    systems: Vec<SatelliteSystem>,
    earth: Earth,
}

impl Tracker {
    pub fn new(systems: Vec<SatelliteSystem>) -> Tracker {
        Tracker {
            systems,
            earth: Earth::new(),
        }
    }

    /// Builds the enabled systems; `loader` supplies the almanac records of each.
    pub fn from_config<F>(config: &TrackerConfig, mut loader: F) -> Result<Tracker>
    where
        F: FnMut(&SystemConfig) -> Vec<ElementRecord>,
    {
        let systems = config
            .enabled()
            .map(|system| {
                let records = loader(system);
                SatelliteSystem::new(&system.name, system.semi_major, &records)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("tracker: {} satellite systems enabled", systems.len());
        Ok(Tracker::new(systems))
    }

    /// Brings every system and the Earth to `time` (unix seconds).
    pub fn synchronize(&mut self, time: f64) -> Result<()> {
        for system in &mut self.systems {
            system.synchronize(time)?;
        }
        self.earth.move_to(time - EARTH_EPOCH_TIMESTAMP as f64)
    }

    pub fn synchronize_at(&mut self, time: &DateTime<Utc>) -> Result<()> {
        self.synchronize(timestamp_seconds(time))
    }

    pub fn move_by(&mut self, delta: f64) -> Result<()> {
        for system in &mut self.systems {
            system.move_by(delta)?;
        }
        self.earth.move_by(delta)
    }

    pub fn get_systems(&self) -> &[SatelliteSystem] {
        &self.systems
    }
    /// Looks a system up by its configured or display name.
    pub fn get_system(&self, name: &str) -> Option<&SatelliteSystem> {
        self.systems
            .iter()
            .find(|s| s.get_name() == name || s.get_display_name() == name)
    }
    pub fn get_earth(&self) -> &Earth {
        &self.earth
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Earth, ElementRecord, Satellite, Tracker, TrackerConfig, helpers::assert_almost_eq,
    };
    use chrono::{TimeZone, Utc};

    fn record(name: &str, epoch: &str, anomaly: f64) -> ElementRecord {
        ElementRecord {
            name: name.to_string(),
            epoch: epoch.to_string(),
            mean_motion: 2.,
            eccentricity: 0.01,
            inclination: 55.,
            raan: 120.,
            periapsis: 10.,
            mean_anomaly: anomaly,
            catalog_id: 1,
        }
    }

    fn tracker() -> Tracker {
        let config: TrackerConfig = serde_json::from_str(
            r#"{"SATELLITE_SYSTEM": [
                {"NAME": "Navigation.GPS", "SEMI-MAJOR": 26560000},
                {"NAME": "Navigation.Galileo", "SEMI-MAJOR": 29600000},
                {"NAME": "Navigation.BeiDou", "SEMI-MAJOR": 27900000, "ENABLED": false}
            ]}"#,
        )
        .unwrap();
        Tracker::from_config(&config, |system| match system.name.as_str() {
            "Navigation.GPS" => vec![
                record("G01", "2026-10-17T00:00:00.000000", 0.),
                record("G02", "2026-10-16T12:30:00.500000", 180.),
            ],
            _ => vec![record("E01", "2026-10-15T06:00:00", 90.)],
        })
        .unwrap()
    }

    #[test]
    fn test_from_config() {
        let tracker = tracker();
        assert_eq!(tracker.get_systems().len(), 2);
        let gps = tracker.get_system("GPS").unwrap();
        assert_eq!(gps.get_satellite_names(), vec!["G01", "G02"]);
        assert_eq!(
            tracker.get_system("Navigation.Galileo").unwrap().get_semi_major(),
            29_600_000.
        );
        assert!(tracker.get_system("BeiDou").is_none());
    }
    #[test]
    fn test_synchronize_all() {
        let mut tracker = tracker();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        tracker.synchronize_at(&now).unwrap();
        // one day after the epoch at two revolutions per day the anomaly is back at zero
        let g01: &Satellite = tracker.get_system("GPS").unwrap().get_satellite("G01").unwrap();
        assert_almost_eq(g01.get_anomaly(), 0., 1e-9);
        let expected = (now - Earth::epoch()).num_seconds() as f64;
        assert_almost_eq(tracker.get_earth().elapsed(), expected, 1e-3);

        let before: Vec<f64> = tracker.get_systems()[0]
            .get_satellites()
            .iter()
            .map(|s| s.get_anomaly())
            .collect();
        tracker.synchronize_at(&now).unwrap();
        let after: Vec<f64> = tracker.get_systems()[0]
            .get_satellites()
            .iter()
            .map(|s| s.get_anomaly())
            .collect();
        assert_eq!(before, after);
    }
    #[test]
    fn test_move_all() {
        let mut tracker = tracker();
        tracker.synchronize(1_792_000_000.).unwrap();
        let earth_before = tracker.get_earth().elapsed();
        tracker.move_by(30.).unwrap();
        assert_almost_eq(tracker.get_earth().elapsed(), earth_before + 30., 1e-6);
        for system in tracker.get_systems() {
            for satellite in system.get_satellites() {
                let height = satellite.get_height();
                assert!(height > 19_000. && height < 24_000.);
            }
        }
    }
}
