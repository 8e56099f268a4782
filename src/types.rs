use serde::{Deserialize, Serialize};

pub const F: f64 = 1. / 298.257223563;
pub const A: f64 = 6378137.; //meters
pub const B: f64 = A * (1. - F);
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5; //rad/s
pub const SECONDS_PER_DAY: f64 = 86400.;

/// Inertial-frame position in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eci {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Eci {
    pub fn new(x: f64, y: f64, z: f64) -> Eci {
        Eci { x, y, z }
    }
    pub fn norm(&self) -> f64 {
        (self.x.powf(2.) + self.y.powf(2.) + self.z.powf(2.)).sqrt()
    }
    pub fn distance(&self, other: &Eci) -> f64 {
        ((self.x - other.x).powf(2.) + (self.y - other.y).powf(2.) + (self.z - other.z).powf(2.))
            .sqrt()
    }
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
impl From<[f64; 3]> for Eci {
    fn from(value: [f64; 3]) -> Self {
        Eci {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}
