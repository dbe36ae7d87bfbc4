//! Tracking state of augmented-reality images.

/// Whether an image is currently being tracked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TrackingState {
    Tracking,
    /// Tracking was lost but may resume.
    Paused,
    /// Tracking has ended and will not resume.
    Stopped,
}

/// How the pose of a tracked image is being obtained.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TrackingMethod {
    NotTracking,
    /// Located in the current camera frame.
    FullTracking,
    /// Not visible; the pose is the last one observed.
    LastKnownPose,
}

/// An image reported by an AR session.
pub trait TrackedImage {
    fn tracking_state(&self) -> TrackingState;
    fn tracking_method(&self) -> TrackingMethod;

    /// True when the image is tracked and located in the current frame.
    fn is_fully_tracked(&self) -> bool {
        self.tracking_state() == TrackingState::Tracking
            && self.tracking_method() == TrackingMethod::FullTracking
    }
}

/// A snapshot of an image's tracking fields.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ImageTrackingStatus {
    pub state: TrackingState,
    pub method: TrackingMethod,
}

impl ImageTrackingStatus {
    pub fn new(state: TrackingState, method: TrackingMethod) -> Self {
        Self { state, method }
    }

    /// Captures the current fields of `image`.
    pub fn of<T: TrackedImage + ?Sized>(image: &T) -> Self {
        Self::new(image.tracking_state(), image.tracking_method())
    }
}

impl TrackedImage for ImageTrackingStatus {
    fn tracking_state(&self) -> TrackingState {
        self.state
    }

    fn tracking_method(&self) -> TrackingMethod {
        self.method
    }
}
