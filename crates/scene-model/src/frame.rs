//! Camera frames.

use std::sync::Arc;

use crate::face::FaceBox;

/// An opaque encoded image plus its pixel dimensions.
///
/// The gating pipeline never inspects pixels; the bytes exist only to be
/// forwarded to the remote analyzer. `Arc`-backed so frames clone cheaply
/// across the capture and analysis paths.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameImage {
    data: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl FrameImage {
    pub fn new(data: impl Into<Arc<[u8]>>, width: u32, height: u32) -> Self {
        Self {
            data: data.into(),
            width,
            height,
        }
    }

    /// The encoded image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// One frame delivered by the camera grabber.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The image payload.
    pub image: FrameImage,

    /// Face boxes from the local (fast, current-frame) detector, when the
    /// operating mode runs one.
    pub local_faces: Option<Vec<FaceBox>>,

    /// Monotonically increasing frame index assigned by the grabber.
    pub index: u64,
}

impl Frame {
    /// A frame with no local detections.
    pub fn new(image: FrameImage, index: u64) -> Self {
        Self {
            image,
            local_faces: None,
            index,
        }
    }

    /// Attach local detector output to this frame.
    pub fn with_local_faces(mut self, faces: Vec<FaceBox>) -> Self {
        self.local_faces = Some(faces);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_image_is_cheap_to_clone() {
        let image = FrameImage::new(vec![0u8; 64], 8, 8);
        let copy = image.clone();
        assert_eq!(image.data().as_ptr(), copy.data().as_ptr());
    }

    #[test]
    fn test_with_local_faces() {
        let frame = Frame::new(FrameImage::new(vec![], 0, 0), 5)
            .with_local_faces(vec![FaceBox::new(1.0, 2.0, 3.0, 4.0)]);
        assert_eq!(frame.index, 5);
        assert_eq!(frame.local_faces.as_ref().map(Vec::len), Some(1));
    }
}
