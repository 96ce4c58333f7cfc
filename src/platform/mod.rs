//! Platform abstraction layer
//!
//! Everything the core polls from the outside world:
//! - Hand signal (camera tracker adapter, scripted input)

pub mod hand;

pub use hand::{
    CaptureError, HandLandmarks, HandOrientation, HandSignalSource, HandTracker,
    ScriptedHandSource, ScriptedTracker, TrackedHandSource,
};
