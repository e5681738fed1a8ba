use std::fmt::Debug;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A number node holds a value that is not a number (NaN), or a symbol
    /// node holds a name that is not a valid identifier. Detected at
    /// construction, never deferred.
    TypeMismatch,
    /// Expression contains no nodes.
    EmptyExpr,
    /// Nodes are not in a valid topological order. Every operand must appear
    /// before the node that uses it.
    WrongNodeOrder,
    /// No derivative rule is registered for this kind of node. Carries the
    /// name of the unhandled variant.
    UnsupportedOperationKind(&'static str),
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            TypeMismatch => write!(f, "TypeMismatch"),
            EmptyExpr => write!(f, "EmptyExpr"),
            WrongNodeOrder => write!(f, "WrongNodeOrder"),
            UnsupportedOperationKind(kind) => f
                .debug_tuple("UnsupportedOperationKind")
                .field(kind)
                .finish(),
        }
    }
}
