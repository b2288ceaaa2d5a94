use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A single body landmark in normalized image coordinates.
/// x and y are in the [0, 1] frame of the source image; z is relative depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkCoordinate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Key body landmarks extracted from one photograph for bra fitting.
///
/// The set is all-or-nothing: extraction either yields all six points or
/// nothing for that photograph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedLandmarks {
    pub shoulder_left: LandmarkCoordinate,
    pub shoulder_right: LandmarkCoordinate,
    pub mid_bust: LandmarkCoordinate,
    pub under_bust: LandmarkCoordinate,
    pub hip_left: LandmarkCoordinate,
    pub hip_right: LandmarkCoordinate,
}

/// midpoint returns the componentwise midpoint between two landmarks.
pub fn midpoint(a: &LandmarkCoordinate, b: &LandmarkCoordinate) -> LandmarkCoordinate {
    LandmarkCoordinate {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
        z: (a.z + b.z) / 2.0,
    }
}

/// interpolate_torso returns a point between the shoulder and hip midpoints.
/// fraction 0.0 sits at the shoulder midpoint, 1.0 at the hip midpoint.
pub fn interpolate_torso(
    shoulder_mid: &LandmarkCoordinate,
    hip_mid: &LandmarkCoordinate,
    fraction: f32,
) -> LandmarkCoordinate {
    LandmarkCoordinate {
        x: shoulder_mid.x + fraction * (hip_mid.x - shoulder_mid.x),
        y: shoulder_mid.y + fraction * (hip_mid.y - shoulder_mid.y),
        z: shoulder_mid.z + fraction * (hip_mid.z - shoulder_mid.z),
    }
}

/// distance returns the Euclidean 3-D distance between two landmarks.
pub fn distance(a: &LandmarkCoordinate, b: &LandmarkCoordinate) -> f32 {
    nalgebra::distance(
        &Point3::new(a.x, a.y, a.z),
        &Point3::new(b.x, b.y, b.z),
    )
}
