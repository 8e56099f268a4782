use serde::{Deserialize, Serialize};

/// One almanac entry, keyed like the CelesTrak OMM JSON format.
/// Angles are in degrees, mean motion in revolutions per day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ElementRecord {
    #[serde(rename = "OBJECT_NAME")]
    pub name: String,
    ///ISO-8601 without offset, e.g. 2022-06-19T00:00:00.000000
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "MEAN_MOTION")]
    pub mean_motion: f64,
    #[serde(rename = "ECCENTRICITY")]
    pub eccentricity: f64,
    #[serde(rename = "INCLINATION")]
    pub inclination: f64,
    #[serde(rename = "RA_OF_ASC_NODE")]
    pub raan: f64,
    #[serde(rename = "ARG_OF_PERICENTER")]
    pub periapsis: f64,
    #[serde(rename = "MEAN_ANOMALY")]
    pub mean_anomaly: f64,
    #[serde(rename = "NORAD_CAT_ID")]
    pub catalog_id: u64,
}

impl From<&sgp4::Elements> for ElementRecord {
    fn from(elem: &sgp4::Elements) -> Self {
        ElementRecord {
            name: elem.object_name.clone().unwrap_or_default(),
            epoch: elem.datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            mean_motion: elem.mean_motion,
            eccentricity: elem.eccentricity,
            inclination: elem.inclination,
            raan: elem.right_ascension,
            periapsis: elem.argument_of_perigee,
            mean_anomaly: elem.mean_anomaly,
            catalog_id: elem.norad_id,
        }
    }
}
