// Placement and motion tuning constants shared by the simulation and the web frontend.

// Placement
pub const MIN_CARD_DISTANCE: f64 = 150.0; // minimum (x, y) spacing between initial positions
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50; // candidate samples before committing regardless
pub const MAX_CARD_COUNT: usize = 500; // placement is quadratic and runs on the UI thread
pub const DEPTH_RANGE: f64 = 500.0; // z is sampled in [-DEPTH_RANGE / 2, DEPTH_RANGE / 2]

// Velocity scaling relative to `max_speed`
pub const Y_SPEED_FACTOR: f64 = 0.02;
pub const Z_SPEED_FACTOR: f64 = 0.01;

// Per-frame rotation gain applied to `rot_speed` for each axis (x, y, z)
pub const ROTATION_GAIN: [f64; 3] = [35.0, 0.0, 10.0];

// Initial rotation spans in degrees (x, y, z); y stays flat
pub const INITIAL_ROTATION_SPAN: [f64; 3] = [360.0, 0.0, 360.0];

// Rendering
pub const SCROLL_PARALLAX: f64 = 0.08; // fraction of damped scroll applied to render y
pub const OPACITY_DEPTH_DIVISOR: f64 = 1000.0;
pub const MAX_DEPTH_FADE: f64 = 0.3; // cards never drop below 1 - MAX_DEPTH_FADE

// Resize
pub const RESIZE_MARGIN: f64 = 300.0; // x is clamped to [-margin, width + margin]

// Default configuration
pub const DEFAULT_CARD_COUNT: usize = 15;
pub const DEFAULT_MAX_SPEED: f64 = 0.5;
pub const DEFAULT_ROTATION_SPEED: f64 = 0.05;
pub const DEFAULT_SPACE_SCALE: f64 = 5.0;
pub const DEFAULT_SCROLL_SMOOTHNESS: f64 = 0.08;

pub const DEFAULT_IMAGES: [&str; 13] = [
    "assets/cards/card1.GIF",
    "assets/cards/card2.PNG",
    "assets/cards/card3.PNG",
    "assets/cards/card4.PNG",
    "assets/cards/card5.GIF",
    "assets/cards/card6.PNG",
    "assets/cards/card7.PNG",
    "assets/cards/card8.PNG",
    "assets/cards/card9.PNG",
    "assets/cards/card10.PNG",
    "assets/cards/card11.PNG",
    "assets/cards/card12.PNG",
    "assets/cards/card13.GIF",
];
