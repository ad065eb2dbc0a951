// Pure CSS formatting for card elements; kept free of web-sys so host tests can include it.
use parallax_core::{CardVisual, InitialVisual};

/// Per-frame transform: translation plus rotation around the vertical axis only.
#[inline]
pub fn frame_transform(v: &CardVisual) -> String {
    format!(
        "translate3d({}px, {}px, {}px) rotateY({}deg)",
        v.translate.x, v.translate.y, v.translate.z, v.rot_y
    )
}

/// Creation-time transform with all three rotations.
#[inline]
pub fn initial_transform(v: &InitialVisual) -> String {
    format!(
        "translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
        v.translate.x, v.translate.y, v.translate.z, v.rotation.x, v.rotation.y, v.rotation.z
    )
}

#[inline]
pub fn opacity_value(opacity: f64) -> String {
    format!("{opacity}")
}

#[inline]
pub fn card_alt(index: usize) -> String {
    format!("Floating Card {}", index + 1)
}
