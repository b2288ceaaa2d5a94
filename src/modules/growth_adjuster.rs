use crate::config::config::GrowthCurveConfig;

#[derive(Debug, Clone)]
pub struct GrowthAdjuster {
    pub engorgement_weeks: u32,
    pub engorgement_factor: f32,
}

impl GrowthAdjuster {
    /// new initializes new instance of the growth adjuster module.
    pub fn new(config: GrowthCurveConfig) -> Self {
        GrowthAdjuster {
            engorgement_weeks: config.engorgement_weeks,
            engorgement_factor: config.engorgement_factor,
        }
    }

    /// adjust rescales a volume estimate for early postpartum engorgement.
    /// Strictly before week 6 the volume grows by 15% to account for milk
    /// regulation; from week 6 on it is returned unchanged. Week 0 means
    /// pregnant or not yet given birth and receives the adjustment.
    ///
    /// # Arguments
    /// * `volume_estimate` - raw volume from the estimator
    /// * `weeks_postpartum` - weeks since birth, 0 meaning not yet given birth
    ///
    /// # Returns
    /// * `f32` - adjusted volume
    pub fn adjust(&self, volume_estimate: f32, weeks_postpartum: u32) -> f32 {
        if weeks_postpartum < self.engorgement_weeks {
            return volume_estimate * self.engorgement_factor;
        }
        volume_estimate
    }
}
