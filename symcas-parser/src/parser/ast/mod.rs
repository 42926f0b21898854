//! The expression tree produced by the parser, along with its canonical order.

pub mod consts;
pub mod expr;
pub mod iter;
pub mod kind;
pub mod order;

pub use consts::NamedConstant;
pub use expr::Expr;
pub use kind::{BracketKind, ExpressionType, TrigKind};
