pub mod catalog;
pub mod recommendations;
