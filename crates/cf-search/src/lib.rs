//! Structured search over a vehicle catalog.
//!
//! Two pure stages: [`normalize`] turns raw form text into
//! [`StructuredCriteria`](cf_catalog::StructuredCriteria), and [`filter`]
//! applies criteria of any origin to the catalog with a stable linear scan.

pub mod filter;
pub mod normalize;

pub use filter::{filter, matches};
pub use normalize::normalize;
