#[macro_use]
pub mod macros;

pub mod cost;
pub mod emission;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;
mod zero;

pub use self::zero::Zero;
