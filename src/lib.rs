pub mod calculator;
pub mod config;
pub mod error;
pub mod locale;
pub mod output;
pub mod parser;
pub mod session;
