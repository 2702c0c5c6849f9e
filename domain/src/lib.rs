pub mod clauses;
pub mod models;
pub mod providers;
