pub mod config;
pub mod doctors;
pub mod hospitals;
pub mod run;
