pub mod eliminate_epsilon;
pub mod eliminate_left_recursion;
pub mod eliminate_unit_production;
pub mod grammar;
pub mod left_factor;
pub mod parse;
pub mod pretty_print;
pub use grammar::{Grammar, Production, Symbol};

pub const EPSILON: &str = "ε";
pub const EPSILON_ALIAS: &str = "ϵ";
