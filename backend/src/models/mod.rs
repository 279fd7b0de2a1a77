pub mod appointment;
pub mod dataset;
pub mod filter;

pub use appointment::*;
pub use dataset::*;
pub use filter::*;
