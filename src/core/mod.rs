pub mod dial_pad;
pub mod dictionary;
pub mod generator;
pub mod parser;
pub mod service;
pub mod summary;

pub use crate::domain::model::{VanityRecord, VanityResult, MAX_CANDIDATES};
pub use crate::domain::ports::{LookupStore, WordOracle};
pub use crate::utils::error::Result;
