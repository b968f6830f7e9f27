mod search;
mod store;

pub use search::*;
pub use store::*;
