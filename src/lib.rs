pub mod cli;
pub mod compare;
pub mod formatters;
pub mod logging;
pub mod sizes;
pub mod traversal;
pub mod types;
