#[allow(non_snake_case)]
pub mod NetworkModel;
#[allow(non_snake_case)]
pub mod Table2Model;
#[allow(non_snake_case)]
pub mod TableParsers;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod converter_config;
pub mod errors;
