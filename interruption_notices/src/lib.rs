mod config;
pub mod contracts;
pub mod data_transfer;
mod fetch_latest;
mod filter;
