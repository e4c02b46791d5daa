/// Document re-emit command.
pub mod fmt;
/// Document summary command.
pub mod info;
/// Filtered parse command.
pub mod parse;
/// Value tree printer.
pub mod print;
/// Shared command helpers.
pub mod util;
