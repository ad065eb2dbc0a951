pub mod card;
pub mod config;
pub mod constants;
pub mod placement;
pub mod scroll;
pub mod simulation;

pub use card::*;
pub use config::*;
pub use constants::*;
pub use placement::*;
pub use scroll::*;
pub use simulation::*;
