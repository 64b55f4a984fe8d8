pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logger;
pub mod pages;
pub mod prelude;
pub mod routes;
pub mod store;
pub mod validation;
