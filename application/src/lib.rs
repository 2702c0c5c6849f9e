pub mod answer;
pub mod context;
pub mod service;
