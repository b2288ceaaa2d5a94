use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::utils::coordinate::LandmarkCoordinate;

/// A raw point reported by the pose detector. x and y are required;
/// z is optional and treated as 0.0 when the detector omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseLandmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: Option<f32>,
}

impl PoseLandmark {
    pub fn to_coordinate(&self) -> LandmarkCoordinate {
        LandmarkCoordinate {
            x: self.x,
            y: self.y,
            z: self.z.unwrap_or(0.0),
        }
    }
}

/// Landmark container used by the legacy detector output, which wraps a
/// single pose behind a `landmark` accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyLandmarkList {
    pub landmark: Vec<PoseLandmark>,
}

/// The two historical shapes a detector reports its poses in. The tasks-style
/// shape is a list of poses, each a point sequence; the legacy shape is one
/// pose behind a `landmark` accessor. Callers never branch on the variant;
/// `PoseDetectionOutput::landmark_list` normalizes both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoseLandmarks {
    PoseList(Vec<Vec<PoseLandmark>>),
    Legacy(LegacyLandmarkList),
}

/// One pose-detection result for one photograph, as handed over by the
/// external detector. `pose_landmarks` is absent when nothing was detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseDetectionOutput {
    #[serde(default)]
    pub pose_landmarks: Option<PoseLandmarks>,
}

impl PoseDetectionOutput {
    /// landmark_list normalizes both output shapes to a single point
    /// sequence, the first detected pose.
    ///
    /// # Returns
    /// * `Option<&[PoseLandmark]>` - None when the detector found no pose
    pub fn landmark_list(&self) -> Option<&[PoseLandmark]> {
        match self.pose_landmarks.as_ref()? {
            PoseLandmarks::PoseList(poses) => {
                poses.first().map(|pose| pose.as_slice())
            }
            PoseLandmarks::Legacy(single) => {
                if single.landmark.is_empty() {
                    None
                } else {
                    Some(single.landmark.as_slice())
                }
            }
        }
    }

    /// from_json_value parses a detector payload. A malformed payload is
    /// treated the same as "no pose found", never as an error.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.to_owned()).ok()
    }

    /// from_json_str parses a detector payload from its JSON text form.
    pub fn from_json_str(payload: &str) -> Option<Self> {
        serde_json::from_str(payload).ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::pose::{PoseDetectionOutput, PoseLandmark, PoseLandmarks};

    #[test]
    fn test_landmark_list_pose_list_shape() {
        let output = PoseDetectionOutput {
            pose_landmarks: Some(PoseLandmarks::PoseList(vec![vec![
                PoseLandmark { x: 0.1, y: 0.2, z: Some(0.3) },
                PoseLandmark { x: 0.4, y: 0.5, z: None },
            ]])),
        };

        let landmarks = output.landmark_list().unwrap();
        assert_eq!(landmarks.len(), 2);
        assert_eq!(landmarks[1].to_coordinate().z, 0.0);
    }

    #[test]
    fn test_landmark_list_no_pose() {
        let empty = PoseDetectionOutput { pose_landmarks: None };
        assert!(empty.landmark_list().is_none());

        let no_poses = PoseDetectionOutput {
            pose_landmarks: Some(PoseLandmarks::PoseList(vec![])),
        };
        assert!(no_poses.landmark_list().is_none());
    }

    #[test]
    fn test_from_json_both_shapes_match() {
        let tasks_payload = r#"{"pose_landmarks":[[{"x":0.5,"y":0.4,"z":0.1},{"x":0.6,"y":0.4}]]}"#;
        let legacy_payload = r#"{"pose_landmarks":{"landmark":[{"x":0.5,"y":0.4,"z":0.1},{"x":0.6,"y":0.4}]}}"#;

        let tasks = PoseDetectionOutput::from_json_str(tasks_payload).unwrap();
        let legacy = PoseDetectionOutput::from_json_str(legacy_payload).unwrap();

        let tasks_points: Vec<_> = tasks
            .landmark_list()
            .unwrap()
            .iter()
            .map(PoseLandmark::to_coordinate)
            .collect();
        let legacy_points: Vec<_> = legacy
            .landmark_list()
            .unwrap()
            .iter()
            .map(PoseLandmark::to_coordinate)
            .collect();
        assert_eq!(tasks_points, legacy_points);
    }

    #[test]
    fn test_from_json_malformed_is_absent() {
        assert!(PoseDetectionOutput::from_json_str("not json").is_none());
        assert!(PoseDetectionOutput::from_json_str(r#"{"pose_landmarks":42}"#).is_none());

        // A point missing the required y field fails the whole parse.
        let missing_y = r#"{"pose_landmarks":[[{"x":0.5}]]}"#;
        assert!(PoseDetectionOutput::from_json_str(missing_y).is_none());
    }
}
