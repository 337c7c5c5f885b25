pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod field;
pub mod particle;
pub mod pool;
pub mod surface;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use driver::*;
pub use field::*;
pub use particle::*;
pub use pool::*;
pub use surface::*;
