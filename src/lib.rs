pub mod derivative;
pub mod error;
pub mod expr;
mod io;
mod macros;
mod prune;
pub mod visit;

pub use derivative::differentiate;
pub use error::Error;
pub use expr::{BinaryOp, Expr, MaybeExpr, Node, add, div, mul, pow, sub};
pub use visit::{Postvisitor, postvisit};
