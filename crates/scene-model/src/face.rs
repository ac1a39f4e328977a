//! Face geometry and per-face attributes.
//!
//! All coordinates are pixel units in the coordinate space of the frame the
//! analysis was computed on. Face identity is purely positional — no
//! persistent face ID exists across frames.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A face bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    /// Left edge (pixels).
    pub left: f64,
    /// Top edge (pixels).
    pub top: f64,
    /// Width (pixels).
    pub width: f64,
    /// Height (pixels).
    pub height: f64,
}

impl FaceBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Horizontal center of the box, the sort key used for left-to-right
    /// positional matching.
    pub fn horizontal_center(&self) -> f64 {
        self.left + 0.5 * self.width
    }
}

/// The eight eye landmark points returned by the remote face analyzer.
///
/// Present or absent as a set: a face either carries all eight points or
/// none of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeLandmarks {
    pub eye_left_top: Point,
    pub eye_left_bottom: Point,
    pub eye_left_inner: Point,
    pub eye_left_outer: Point,
    pub eye_right_top: Point,
    pub eye_right_bottom: Point,
    pub eye_right_inner: Point,
    pub eye_right_outer: Point,
}

/// Attributes the remote analyzer computes per face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceAttributes {
    /// Head yaw in degrees. Zero means facing the camera straight on.
    pub head_yaw: f64,

    /// Smile confidence in `[0.0, 1.0]`.
    pub smile_score: f64,

    /// Eye landmarks, when the analyzer was asked for them.
    pub landmarks: Option<EyeLandmarks>,
}

/// A detected face: bounding box plus optional attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Bounding box geometry.
    pub rect: FaceBox,

    /// Attributes, absent for analysis modes that return geometry only.
    pub attributes: Option<FaceAttributes>,
}

impl Face {
    /// A face with geometry only, as produced by the emotion and celebrity
    /// endpoints.
    pub fn from_rect(rect: FaceBox) -> Self {
        Self {
            rect,
            attributes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_center() {
        let rect = FaceBox::new(100.0, 50.0, 20.0, 30.0);
        assert!((rect.horizontal_center() - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_face_roundtrip() {
        let face = Face {
            rect: FaceBox::new(10.0, 20.0, 30.0, 40.0),
            attributes: Some(FaceAttributes {
                head_yaw: -12.5,
                smile_score: 0.8,
                landmarks: None,
            }),
        };
        let json = serde_json::to_string(&face).unwrap();
        let parsed: Face = serde_json::from_str(&json).unwrap();
        assert_eq!(face, parsed);
    }
}
