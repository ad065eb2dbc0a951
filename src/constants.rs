// DOM hooks and frame-loop tuning for the web frontend

// Element the cards are appended to
pub const CONTAINER_ID: &str = "cardContainer";
// Optional JSON config override read from the container
pub const CONFIG_ATTRIBUTE: &str = "data-config";
pub const CARD_CLASS: &str = "floating-card";

// Frames between debug-level loop statistics (~10s at 60 Hz)
pub const STATS_EVERY_FRAMES: u64 = 600;
