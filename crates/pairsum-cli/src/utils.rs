pub mod parser;
pub mod progress;
