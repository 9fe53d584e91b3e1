pub mod config;
pub mod csv_comparator;
pub mod csv_inspector;
pub mod csv_joiner;
pub mod csv_manager;
pub mod csv_table;
pub mod csv_transformer;
pub mod error;
pub mod user_interaction;
