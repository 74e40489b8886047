pub mod collision;
pub mod input;
pub mod movement;
pub mod round;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use round::*;
pub use scoring::*;
