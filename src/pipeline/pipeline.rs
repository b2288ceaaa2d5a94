use anyhow::Error;
use serde::{Deserialize, Serialize};
use crate::config::config::{
    GrowthCurveConfig, LandmarkExtractionConfig, SizeChartConfig, VolumeEstimationConfig,
};
use crate::modules::growth_adjuster::GrowthAdjuster;
use crate::modules::landmark_extractor::LandmarkExtractor;
use crate::modules::size_mapper::SizeMapper;
use crate::modules::volume_estimator::VolumeEstimator;
use crate::utils::pose::PoseDetectionOutput;

/// Result of one bra fit computation.
///
/// `landmarks_detected` is authoritative: when it is false the numeric
/// fields are 0.0 and the size label is empty, and the caller must prompt
/// for a retake instead of showing a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BraFitResult {
    pub volume_estimate: f32,
    pub volume_adjusted: f32,
    pub recommended_size: String,
    pub landmarks_detected: bool,
}

impl BraFitResult {
    fn not_detected() -> Self {
        BraFitResult {
            volume_estimate: 0.0,
            volume_adjusted: 0.0,
            recommended_size: String::new(),
            landmarks_detected: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BraFitPipeline {
    landmark_extractor: LandmarkExtractor,
    volume_estimator: VolumeEstimator,
    growth_adjuster: GrowthAdjuster,
    size_mapper: SizeMapper,
}

impl BraFitPipeline {
    /// new initializes new instance of the pipeline from its stage modules.
    pub fn new(
        landmark_extractor: LandmarkExtractor,
        volume_estimator: VolumeEstimator,
        growth_adjuster: GrowthAdjuster,
        size_mapper: SizeMapper,
    ) -> Self {
        BraFitPipeline {
            landmark_extractor,
            volume_estimator,
            growth_adjuster,
            size_mapper,
        }
    }

    /// with_default_calibration builds the pipeline from the stock
    /// calibration configs.
    ///
    /// # Returns
    /// * `Result<BraFitPipeline, Error>`
    pub fn with_default_calibration() -> Result<Self, Error> {
        Ok(BraFitPipeline::new(
            LandmarkExtractor::new(LandmarkExtractionConfig::new()),
            VolumeEstimator::new(VolumeEstimationConfig::new()),
            GrowthAdjuster::new(GrowthCurveConfig::new()),
            SizeMapper::new(SizeChartConfig::new())?,
        ))
    }

    /// compute_fit runs the full pipeline for one front/side photograph
    /// pair: extract landmarks from both detector outputs, estimate volume,
    /// apply the postpartum growth curve, and map to a size label.
    ///
    /// Detection failure in either photograph is a normal outcome, not an
    /// error; it yields a result with `landmarks_detected` set to false and
    /// no partial computation.
    ///
    /// # Arguments
    /// * `front_output` - pose-detection result for the front photograph
    /// * `side_output` - pose-detection result for the side photograph
    /// * `weeks_postpartum` - weeks since birth, 0 meaning not yet given birth
    ///
    /// # Returns
    /// * `BraFitResult`
    pub fn compute_fit(
        &self,
        front_output: &PoseDetectionOutput,
        side_output: &PoseDetectionOutput,
        weeks_postpartum: u32,
    ) -> BraFitResult {
        let front_landmarks = self.landmark_extractor.extract(front_output);
        let side_landmarks = self.landmark_extractor.extract(side_output);

        let (front_landmarks, side_landmarks) = match (front_landmarks, side_landmarks) {
            (Some(front), Some(side)) => (front, side),
            _ => return BraFitResult::not_detected(),
        };

        let volume_estimate = self
            .volume_estimator
            .estimate(&front_landmarks, &side_landmarks);
        let volume_adjusted = self.growth_adjuster.adjust(volume_estimate, weeks_postpartum);
        let recommended_size = self.size_mapper.map(volume_adjusted);

        BraFitResult {
            volume_estimate,
            volume_adjusted,
            recommended_size,
            landmarks_detected: true,
        }
    }
}
