use crate::config::config::VolumeEstimationConfig;
use crate::utils::coordinate::{distance, ExtractedLandmarks};

/// Hemi-ellipsoid breast volume estimator.
/// Ref: breast volumetric analysis (Qiao et al.), V = pi/3 * R_w * R_h * P.
#[derive(Debug, Clone)]
pub struct VolumeEstimator {
    pub breast_width_ratio: f32,
    pub height_diameter_scale: f32,
    pub projection_ratio: f32,
    pub hemi_ellipsoid_coeff: f32,
    pub volume_scale: f32,
}

impl VolumeEstimator {
    /// new initializes new instance of the volume estimator module.
    pub fn new(config: VolumeEstimationConfig) -> Self {
        VolumeEstimator {
            breast_width_ratio: config.breast_width_ratio,
            height_diameter_scale: config.height_diameter_scale,
            projection_ratio: config.projection_ratio,
            hemi_ellipsoid_coeff: config.hemi_ellipsoid_coeff,
            volume_scale: config.volume_scale,
        }
    }

    /// estimate combines the front and side landmark sets into one volume
    /// scalar. Total over any two landmark sets; a degenerate pose with
    /// coincident points yields 0.0 rather than an error.
    ///
    /// # Arguments
    /// * `front_landmarks` - landmarks extracted from the front photograph
    /// * `side_landmarks` - landmarks extracted from the side photograph
    ///
    /// # Returns
    /// * `f32` - non-negative volume estimate
    pub fn estimate(
        &self,
        front_landmarks: &ExtractedLandmarks,
        side_landmarks: &ExtractedLandmarks,
    ) -> f32 {
        // Breast width from the front shoulder span.
        let frame_width = distance(
            &front_landmarks.shoulder_left,
            &front_landmarks.shoulder_right,
        );
        let breast_width = frame_width * self.breast_width_ratio;

        // Breast height from the side mid-bust to under-bust span, doubled
        // from radius to diameter.
        let radius_height = distance(&side_landmarks.mid_bust, &side_landmarks.under_bust);
        let breast_height = radius_height * self.height_diameter_scale;

        // Only one lateral image is available, so the side-view shoulder
        // distance stands in as the total profile depth; scaled down to
        // isolate breast tissue.
        let side_depth_raw = distance(
            &side_landmarks.shoulder_left,
            &side_landmarks.shoulder_right,
        );
        let breast_projection = side_depth_raw * self.projection_ratio;

        let volume_unscaled =
            self.hemi_ellipsoid_coeff * breast_width * breast_height * breast_projection;

        volume_unscaled * self.volume_scale
    }
}
