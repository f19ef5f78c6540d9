pub mod aggregate;

pub use aggregate::{CardAction, Equipment, Facility};
