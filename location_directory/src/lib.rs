mod config;
pub mod contracts;
pub mod data_transfer;
