pub mod parser;
pub mod roster;
