//! Hand signal sources
//!
//! The simulation only ever sees `Option<Point>`: a wrist position already in
//! game-screen coordinates, or nothing. Camera capture and landmark detection
//! sit behind [`HandTracker`]; any failure there becomes "no hand this tick".

use std::collections::VecDeque;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::settings::Settings;

/// Landmark index of the wrist in a 21-point hand skeleton
pub const WRIST: usize = 0;

/// Number of landmarks a full hand detection carries
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Anything that can be polled once per tick for a control point
pub trait HandSignalSource {
    /// Non-blocking; `None` when there is no frame or no hand this tick
    fn poll(&mut self) -> Option<Point>;
}

/// Why a tracker produced no hand this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// The camera returned no frame
    CaptureUnavailable,
    /// A frame was read but no hand was found in it
    NoHandDetected,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::CaptureUnavailable => write!(f, "no camera frame available"),
            CaptureError::NoHandDetected => write!(f, "no hand detected in frame"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// One detected hand, landmarks normalized to `[0, 1]` in camera space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub points: Vec<Vec2>,
}

impl HandLandmarks {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn wrist(&self) -> Option<Vec2> {
        self.points.get(WRIST).copied()
    }
}

/// Raw camera + pose model, treated as a black box
pub trait HandTracker {
    fn detect(&mut self) -> Result<HandLandmarks, CaptureError>;
}

/// How camera x maps to screen x.
///
/// A front-facing camera sees the player mirrored. Whether the mapping needs
/// to flip depends on whether the capture pipeline already mirrors the image,
/// so it is a setting rather than a fixed flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandOrientation {
    /// `x = width - nx * width`: moving the physical hand to the camera's
    /// left moves the player right
    #[default]
    Mirrored,
    /// `x = nx * width`
    Direct,
}

impl HandOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandOrientation::Mirrored => "mirrored",
            HandOrientation::Direct => "direct",
        }
    }

    /// Map a normalized landmark into screen space
    pub fn map(&self, normalized: Vec2, screen_width: f32, screen_height: f32) -> Point {
        let x = normalized.x * screen_width;
        let x = match self {
            HandOrientation::Mirrored => screen_width - x,
            HandOrientation::Direct => x,
        };
        Point::new(x, normalized.y * screen_height)
    }
}

/// Adapts a [`HandTracker`] into a [`HandSignalSource`]
pub struct TrackedHandSource<T: HandTracker> {
    tracker: T,
    orientation: HandOrientation,
    screen_size: Vec2,
}

impl<T: HandTracker> TrackedHandSource<T> {
    pub fn new(
        tracker: T,
        orientation: HandOrientation,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        Self {
            tracker,
            orientation,
            screen_size: Vec2::new(screen_width, screen_height),
        }
    }

    /// Orientation and screen size taken from the loaded settings
    pub fn from_settings(tracker: T, settings: &Settings) -> Self {
        Self::new(
            tracker,
            settings.orientation,
            settings.tuning.screen_width,
            settings.tuning.screen_height,
        )
    }
}

impl<T: HandTracker> HandSignalSource for TrackedHandSource<T> {
    fn poll(&mut self) -> Option<Point> {
        match self.tracker.detect() {
            Ok(hand) => {
                let wrist = hand.wrist()?;
                Some(self.orientation.map(wrist, self.screen_size.x, self.screen_size.y))
            }
            Err(e) => {
                log::trace!("No hand signal: {}", e);
                None
            }
        }
    }
}

/// Replays a fixed sequence of signals, one per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedHandSource {
    script: VecDeque<Option<Point>>,
}

impl ScriptedHandSource {
    pub fn new(script: impl IntoIterator<Item = Option<Point>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl HandSignalSource for ScriptedHandSource {
    /// `None` once the script runs out
    fn poll(&mut self) -> Option<Point> {
        self.script.pop_front().flatten()
    }
}

/// A tracker that endlessly replays a detection script
#[derive(Debug, Clone)]
pub struct ScriptedTracker {
    frames: Vec<Result<HandLandmarks, CaptureError>>,
    cursor: usize,
}

impl ScriptedTracker {
    pub fn new(frames: Vec<Result<HandLandmarks, CaptureError>>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// A wrist sweeping across the camera, `hold` frames in each zone.
    ///
    /// Every seventh frame finds no hand, like a flaky detector.
    pub fn sweep(hold: usize) -> Self {
        let frames = [0.1f32, 0.5, 0.9, 0.5]
            .into_iter()
            .flat_map(|nx| {
                (0..hold).map(move |i| {
                    if i % 7 == 3 {
                        Err(CaptureError::NoHandDetected)
                    } else {
                        Ok(HandLandmarks::new(vec![Vec2::new(nx, 0.5); HAND_LANDMARK_COUNT]))
                    }
                })
            })
            .collect();
        Self::new(frames)
    }
}

impl HandTracker for ScriptedTracker {
    fn detect(&mut self) -> Result<HandLandmarks, CaptureError> {
        if self.frames.is_empty() {
            return Err(CaptureError::CaptureUnavailable);
        }
        let frame = self.frames[self.cursor % self.frames.len()].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();
        frame
    }
}
