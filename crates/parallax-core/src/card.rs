//! Per-card simulation state and the visual record produced from it each frame.
//!
//! Cards are plain numeric records owned by the [`Simulation`](crate::Simulation);
//! the web frontend only ever sees [`CardVisual`] values.

use crate::constants::*;
use glam::DVec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// x in viewport pixels, y in virtual-space pixels, z in depth units.
    pub position: DVec3,
    /// Rotation angles in degrees around x, y and z.
    pub rotation: DVec3,
    /// Constant per-frame drift.
    pub velocity: DVec3,
    pub rot_speed: f64,
    pub image: String,
    /// Number of candidate positions sampled before this card was committed.
    pub placement_attempts: u32,
}

/// What the frontend applies to a card element for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardVisual {
    pub translate: DVec3,
    pub rot_y: f64,
    pub opacity: f64,
}

/// Transform used once when a card element is created. Unlike the per-frame
/// visual it carries all three rotations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialVisual {
    pub translate: DVec3,
    pub rotation: DVec3,
}

impl Card {
    /// Advance position and rotation by one frame.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
        // rotation.x / rotation.z are tracked but never reach the per-frame
        // transform, and the y gain is zero.
        self.rotation += DVec3::from(ROTATION_GAIN) * self.rot_speed;
    }

    pub fn initial_visual(&self) -> InitialVisual {
        InitialVisual {
            translate: self.position,
            rotation: self.rotation,
        }
    }

    pub fn opacity(&self) -> f64 {
        depth_opacity(self.position.z)
    }
}

/// Depth fade: 1 at z = 0, never below `1 - MAX_DEPTH_FADE`.
#[inline]
pub fn depth_opacity(z: f64) -> f64 {
    1.0 - (z.abs() / OPACITY_DEPTH_DIVISOR).min(MAX_DEPTH_FADE)
}

/// Vertical position after the scroll parallax offset.
#[inline]
pub fn render_y(y: f64, scroll_y: f64) -> f64 {
    y - scroll_y * SCROLL_PARALLAX
}
