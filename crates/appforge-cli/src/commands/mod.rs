pub mod account;
pub mod generate;
pub mod project;
