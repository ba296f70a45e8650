// Navigation components

pub mod search_input;
pub mod side_nav;

pub use search_input::*;
pub use side_nav::*;
