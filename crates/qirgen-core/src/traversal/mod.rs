pub mod visitor;
pub mod walker;

pub use visitor::Visitor;
pub use walker::*;
