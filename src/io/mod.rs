/// Command-line parsing and run orchestration
pub mod cli;
/// Solver constants and display defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Spinner shown while diagrams are suppressed
pub mod progress;
/// Box-drawing diagrams of board state
pub mod render;
/// Solution sinks for the console and for counting
pub mod sink;
