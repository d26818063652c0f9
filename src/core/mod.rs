pub mod calendar;
pub mod filter;
pub mod parser;
pub mod sort;
pub mod sources;
pub mod stats;
pub mod view;
