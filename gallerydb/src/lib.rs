#[macro_use]
extern crate snafu;

pub mod data;
mod err;
mod stats;
mod store;

#[cfg(test)]
mod tests;

pub use err::*;
pub use stats::*;
pub use store::*;
