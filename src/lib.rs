pub mod error;
pub mod graphs;
pub mod ladder;
pub mod logging;
pub mod queue;
pub mod search;
pub mod utility;

pub use error::{Error, Result};
