use serde::{Deserialize, Serialize};

/// Satellite-system section of the tracker configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SystemConfig {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "SEMI-MAJOR")]
    pub semi_major: f64,
    ///Almanac source, only used by the download layer
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "ENABLED", default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TrackerConfig {
    #[serde(rename = "SATELLITE_SYSTEM", default)]
    pub satellite_systems: Vec<SystemConfig>,
}

impl TrackerConfig {
    pub fn enabled(&self) -> impl Iterator<Item = &SystemConfig> {
        self.satellite_systems.iter().filter(|system| system.enabled)
    }
}
