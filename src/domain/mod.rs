mod cell;
mod grid;
mod rules;
mod tessellation;
mod neighborhood;
mod algorithm;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, all_rules, default_rule};
pub use tessellation::Tessellation;
pub use neighborhood::Neighborhood;
pub use algorithm::Algorithm;
