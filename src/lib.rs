pub mod actions;
pub mod app;
pub mod core;
pub mod git;
pub mod history;
pub mod scanner;
pub mod status;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
