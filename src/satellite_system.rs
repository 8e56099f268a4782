use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;

use crate::{
    elements::ElementRecord, error::Result, helpers::timestamp_seconds, satellite::Satellite,
};

/// Satellites from one almanac source sharing a semi-major axis.
#[derive(Clone, Debug, Serialize)]
pub struct SatelliteSystem {
    name: String,
    semi_major: f64,
    satellites: Vec<Satellite>,
}

impl SatelliteSystem {
    pub fn new<'a, I>(name: &str, semi_major: f64, records: I) -> Result<SatelliteSystem>
    where
        I: IntoIterator<Item = &'a ElementRecord>,
    {
        let satellites = records
            .into_iter()
            .map(|record| {
                Satellite::new(record, semi_major).inspect_err(|err| {
                    warn!("{name}: rejecting {} ({}): {err}", record.name, record.catalog_id)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("{name}: built {} satellites, a = {semi_major} m", satellites.len());
        Ok(SatelliteSystem {
            name: name.to_string(),
            semi_major,
            satellites,
        })
    }

    pub fn from_elements(
        name: &str,
        semi_major: f64,
        elements: &[sgp4::Elements],
    ) -> Result<SatelliteSystem> {
        let records: Vec<ElementRecord> = elements.iter().map(ElementRecord::from).collect();
        Self::new(name, semi_major, &records)
    }

    /// Catches every satellite up from its own epoch to `time` (unix seconds).
    pub fn synchronize(&mut self, time: f64) -> Result<()> {
        debug!("{}: synchronizing {} satellites to t = {time}", self.name, self.satellites.len());
        for satellite in &mut self.satellites {
            satellite.synchronize(time)?;
        }
        Ok(())
    }

    pub fn synchronize_at(&mut self, time: &DateTime<Utc>) -> Result<()> {
        self.synchronize(timestamp_seconds(time))
    }

    /// Advances every satellite by the same `delta` seconds.
    pub fn move_by(&mut self, delta: f64) -> Result<()> {
        for satellite in &mut self.satellites {
            satellite.move_by(delta)?;
        }
        Ok(())
    }

    pub fn get_satellite_names(&self) -> Vec<&str> {
        self.satellites.iter().map(|s| s.get_name()).collect()
    }
    pub fn get_name(&self) -> &str {
        &self.name
    }
    ///Configured names look like `Group.GPS`; the part after the first dot is shown.
    pub fn get_display_name(&self) -> &str {
        match self.name.split_once('.') {
            Some((_, display)) => display,
            None => &self.name,
        }
    }
    pub fn get_semi_major(&self) -> f64 {
        self.semi_major
    }
    pub fn get_satellites(&self) -> &[Satellite] {
        &self.satellites
    }
    pub fn get_satellite(&self, name: &str) -> Option<&Satellite> {
        self.satellites.iter().find(|s| s.get_name() == name)
    }
    pub fn len(&self) -> usize {
        self.satellites.len()
    }
    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}
