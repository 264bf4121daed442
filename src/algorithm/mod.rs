/// Backtracking search over board and piece pool
pub mod search;
/// Complete tilings and the sink trait that receives them
pub mod solution;
