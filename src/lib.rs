pub mod config;
pub mod model;
pub mod query;

pub use model::{typing_model, CostModel, SpecialRomanjiTable, TypingModel, TypingModelError, INFINITY};
pub use query::{query_costs, CostReport};
