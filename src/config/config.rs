use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandmarkExtractionConfig {
    pub mid_bust_ratio: f32,
    pub under_bust_ratio: f32,
}

impl LandmarkExtractionConfig {
    pub fn new() -> Self {
        LandmarkExtractionConfig {
            // Torso fractions, 0.0 at the shoulder midpoint, 1.0 at the hip
            // midpoint. Derivation: avg shoulder-to-hip torso length ~53cm;
            // sternal notch to nipple (postpartum/ptotic) ~23.5cm -> 0.44;
            // nipple to inframammary fold ~7.5cm, ~31cm total -> 0.53.
            mid_bust_ratio: 0.44,
            under_bust_ratio: 0.53,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeEstimationConfig {
    pub breast_width_ratio: f32,
    pub height_diameter_scale: f32,
    pub projection_ratio: f32,
    pub hemi_ellipsoid_coeff: f32,
    pub volume_scale: f32,
}

impl VolumeEstimationConfig {
    pub fn new() -> Self {
        VolumeEstimationConfig {
            // Single-breast width as a fraction of bi-acromial shoulder
            // width, ~13cm / ~37cm.
            breast_width_ratio: 0.35,
            // Mid-bust to under-bust span is a radius; double for diameter.
            height_diameter_scale: 2.0,
            // Breast projection is roughly 60% of the total side profile
            // depth.
            projection_ratio: 0.60,
            // V = pi/3 * R_w * R_h * P, ~0.52 over full diameters.
            hemi_ellipsoid_coeff: 0.52,
            // Calibrates normalized-coordinate units to the size chart range.
            volume_scale: 2200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthCurveConfig {
    pub engorgement_weeks: u32,
    pub engorgement_factor: f32,
}

impl GrowthCurveConfig {
    pub fn new() -> Self {
        GrowthCurveConfig {
            engorgement_weeks: 6,
            engorgement_factor: 1.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeChartConfig {
    pub brackets: Vec<(f32, String)>,
    pub fallback_size: String,
}

impl SizeChartConfig {
    pub fn new() -> Self {
        // Inclusive upper-bound thresholds, calibrated to the 2.0 - 15.0
        // range the hemi-ellipsoid geometry produces. The label ordering is
        // intentionally non-monotonic by cup size; it tracks observed volume
        // ranges, not a clean size progression.
        let brackets = vec![
            (2.5, "32A"),
            (3.5, "32B"),
            (4.5, "34B"),
            (5.5, "32C"),
            (6.5, "34C"),
            (7.5, "36B"),
            (8.5, "32D"),
            (9.5, "34D"),
            (10.5, "36C"),
            (11.5, "38B"),
            (12.5, "34DD"),
            (13.5, "36D"),
            (14.5, "38C"),
            (16.0, "40C"),
            (18.0, "36DD"),
            (20.0, "38D"),
            (f32::INFINITY, "Size Check Required"),
        ];

        SizeChartConfig {
            brackets: brackets
                .into_iter()
                .map(|(threshold, size)| (threshold, size.to_string()))
                .collect(),
            fallback_size: "Size Check Required".to_string(),
        }
    }
}
