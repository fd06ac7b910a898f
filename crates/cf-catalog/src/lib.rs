pub mod catalog;
pub mod criteria;
pub mod sample;
pub mod vehicle;

pub use catalog::*;
pub use criteria::*;
pub use vehicle::*;
