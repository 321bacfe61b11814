pub mod dataset;
pub mod derive;
pub mod error;
pub mod filter;
pub mod output;
pub mod reports;
pub mod session;
