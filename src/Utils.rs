/// reading the metabolite and reaction tables row by row
pub mod load_from_file;
/// terminal and file logging with simplelog
pub mod logging;
