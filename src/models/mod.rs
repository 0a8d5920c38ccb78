pub mod tier;
pub mod presentation;
pub mod error;

pub use tier::*;
pub use presentation::*;
pub use error::*;
