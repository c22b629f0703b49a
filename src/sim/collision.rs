//! Stick landing detection
//!
//! Once the stick lies flat its tip is a single point on the ground line;
//! landing means that point is strictly inside a platform.

use super::state::{Platform, Stick};
use crate::consts::STICK_DOWN_DEGREES;

/// Result of a landing check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickHit {
    /// The platform the tip rests on, if any
    pub platform: Option<Platform>,
    /// Tip inside the centered perfect zone
    pub perfect: bool,
}

impl StickHit {
    pub fn miss() -> Self {
        Self {
            platform: None,
            perfect: false,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.platform.is_some()
    }
}

/// Find the platform the stick connects to
///
/// Platforms are scanned in increasing `x`; the first one whose open span
/// contains the tip wins. Landing exactly on an edge is a miss.
///
/// # Panics
///
/// If the stick is not lying flat at exactly 90 degrees. The tip position
/// only means something in that orientation, so any other rotation is a bug
/// in the caller.
pub fn resolve_hit(stick: &Stick, platforms: &[Platform], perfect_area: f32) -> StickHit {
    assert!(
        stick.is_down(),
        "stick is at {}°, landing needs it at {}°",
        stick.rotation,
        STICK_DOWN_DEGREES
    );

    let far_x = stick.far_x();
    let Some(platform) = platforms.iter().find(|p| p.contains(far_x)) else {
        return StickHit::miss();
    };

    let half = perfect_area / 2.0;
    let center = platform.center();
    let perfect = center - half < far_x && far_x < center + half;

    StickHit {
        platform: Some(*platform),
        perfect,
    }
}
