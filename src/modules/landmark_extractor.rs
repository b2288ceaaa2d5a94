use crate::config::config::LandmarkExtractionConfig;
use crate::utils::coordinate::{interpolate_torso, midpoint, ExtractedLandmarks, LandmarkCoordinate};
use crate::utils::pose::{PoseDetectionOutput, PoseLandmark};

// Pose landmark indices in the 33-point body landmark scheme.
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

#[derive(Debug, Clone)]
pub struct LandmarkExtractor {
    pub mid_bust_ratio: f32,
    pub under_bust_ratio: f32,
}

impl LandmarkExtractor {
    /// new initializes new instance of the landmark extractor module.
    pub fn new(config: LandmarkExtractionConfig) -> Self {
        LandmarkExtractor {
            mid_bust_ratio: config.mid_bust_ratio,
            under_bust_ratio: config.under_bust_ratio,
        }
    }

    fn landmark_at(landmarks: &[PoseLandmark], index: usize) -> Option<LandmarkCoordinate> {
        landmarks.get(index).map(PoseLandmark::to_coordinate)
    }

    /// extract converts one detector output into the six bra-fitting
    /// landmarks: both shoulders, both hips, and the derived mid-bust and
    /// under-bust points interpolated down the torso.
    ///
    /// Extraction is all-or-nothing per photograph: if the detector found no
    /// pose or any required point is out of range, the whole set is absent.
    ///
    /// # Arguments
    /// * `output` - one pose-detection result, either historical shape
    ///
    /// # Returns
    /// * `Option<ExtractedLandmarks>`
    pub fn extract(&self, output: &PoseDetectionOutput) -> Option<ExtractedLandmarks> {
        let landmarks = output.landmark_list()?;

        let shoulder_left = Self::landmark_at(landmarks, LEFT_SHOULDER)?;
        let shoulder_right = Self::landmark_at(landmarks, RIGHT_SHOULDER)?;
        let hip_left = Self::landmark_at(landmarks, LEFT_HIP)?;
        let hip_right = Self::landmark_at(landmarks, RIGHT_HIP)?;

        let shoulder_mid = midpoint(&shoulder_left, &shoulder_right);
        let hip_mid = midpoint(&hip_left, &hip_right);

        let mid_bust = interpolate_torso(&shoulder_mid, &hip_mid, self.mid_bust_ratio);
        let under_bust = interpolate_torso(&shoulder_mid, &hip_mid, self.under_bust_ratio);

        Some(ExtractedLandmarks {
            shoulder_left,
            shoulder_right,
            mid_bust,
            under_bust,
            hip_left,
            hip_right,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::config::LandmarkExtractionConfig;
    use crate::modules::landmark_extractor::{LandmarkExtractor, RIGHT_HIP};
    use crate::utils::pose::{PoseDetectionOutput, PoseLandmark, PoseLandmarks};

    fn detector_output(points: usize) -> PoseDetectionOutput {
        let pose: Vec<PoseLandmark> = (0..points)
            .map(|i| PoseLandmark {
                x: i as f32 * 0.01,
                y: i as f32 * 0.02,
                z: Some(i as f32 * 0.001),
            })
            .collect();
        PoseDetectionOutput {
            pose_landmarks: Some(PoseLandmarks::PoseList(vec![pose])),
        }
    }

    #[test]
    fn test_extract_full_pose() {
        let extractor = LandmarkExtractor::new(LandmarkExtractionConfig::new());
        let extracted = extractor.extract(&detector_output(33)).unwrap();

        assert!((extracted.shoulder_left.x - 0.11).abs() < 1e-6);
        assert!((extracted.shoulder_right.x - 0.12).abs() < 1e-6);
        assert!((extracted.hip_left.x - 0.23).abs() < 1e-6);
        assert!((extracted.hip_right.x - 0.24).abs() < 1e-6);

        // Derived points sit on the shoulder-to-hip line.
        let shoulder_mid_y = (extracted.shoulder_left.y + extracted.shoulder_right.y) / 2.0;
        let hip_mid_y = (extracted.hip_left.y + extracted.hip_right.y) / 2.0;
        let expected_mid_bust_y = shoulder_mid_y + 0.44 * (hip_mid_y - shoulder_mid_y);
        let expected_under_bust_y = shoulder_mid_y + 0.53 * (hip_mid_y - shoulder_mid_y);
        assert!((extracted.mid_bust.y - expected_mid_bust_y).abs() < 1e-6);
        assert!((extracted.under_bust.y - expected_under_bust_y).abs() < 1e-6);
    }

    #[test]
    fn test_extract_missing_required_point_is_absent() {
        let extractor = LandmarkExtractor::new(LandmarkExtractionConfig::new());

        // Sequence ends before the right hip index; no partial sets.
        assert!(extractor.extract(&detector_output(RIGHT_HIP)).is_none());
        assert!(extractor.extract(&detector_output(0)).is_none());
    }

    #[test]
    fn test_extract_no_pose_is_absent() {
        let extractor = LandmarkExtractor::new(LandmarkExtractionConfig::new());
        let empty = PoseDetectionOutput { pose_landmarks: None };
        assert!(extractor.extract(&empty).is_none());
    }

    #[test]
    fn test_extract_shape_equivalence() {
        let extractor = LandmarkExtractor::new(LandmarkExtractionConfig::new());

        let tasks_shape = detector_output(33);
        let pose = match tasks_shape.pose_landmarks.as_ref().unwrap() {
            PoseLandmarks::PoseList(poses) => poses[0].to_owned(),
            PoseLandmarks::Legacy(_) => unreachable!(),
        };
        let legacy_shape = PoseDetectionOutput {
            pose_landmarks: Some(PoseLandmarks::Legacy(
                crate::utils::pose::LegacyLandmarkList { landmark: pose },
            )),
        };

        let from_tasks = extractor.extract(&tasks_shape).unwrap();
        let from_legacy = extractor.extract(&legacy_shape).unwrap();
        assert_eq!(from_tasks.shoulder_left, from_legacy.shoulder_left);
        assert_eq!(from_tasks.mid_bust, from_legacy.mid_bust);
        assert_eq!(from_tasks.under_bust, from_legacy.under_bust);
        assert_eq!(from_tasks.hip_right, from_legacy.hip_right);
    }
}
