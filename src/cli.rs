pub mod command;
pub mod run;

pub use run::{Session, run_app};
