use crate::error::Error;

/// Represents an operation with two operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

use BinaryOp::*;

impl BinaryOp {
    /// The text placed between the two operands when rendering infix.
    pub fn symbol(&self) -> &'static str {
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
        }
    }

    /// Precedence rank of the operator. An operand is parenthesized during
    /// rendering iff its precedence is strictly lower than its parent's.
    pub fn precedence(&self) -> u8 {
        match self {
            Add | Sub => 1,
            Mul | Div => 2,
            Pow => 3,
        }
    }
}

/// Represents a node in an expression. Operator nodes refer to their operands
/// by index into the same buffer, always in left to right order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Symbol(String),
    Binary(BinaryOp, usize, usize),
}

use Node::*;

impl Node {
    /// Precedence rank used when deciding whether this node must be
    /// parenthesized inside a parent operator. Leaves report the maximum rank
    /// and are never parenthesized.
    pub fn precedence(&self) -> u8 {
        match self {
            Number(_) | Symbol(_) => u8::MAX,
            Binary(op, ..) => op.precedence(),
        }
    }
}

pub(crate) fn is_topological_order(nodes: &[Node]) -> bool {
    nodes.iter().enumerate().all(|(i, node)| match node {
        Number(_) | Symbol(_) => true,
        Binary(_, lhs, rhs) => *lhs < i && *rhs < i,
    })
}

fn valid_symbol_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// An arithmetic expression stored as a flat arena of nodes.
///
/// A node's identity is its index in the arena. Every node appears after its
/// operands, so the last node is the root and the buffer is free of cycles.
/// Two parents may share an operand index, making the expression a DAG;
/// structurally equal nodes at different indices stay distinct entities.
/// Once constructed, an expression is immutable.
#[derive(Clone, PartialEq)]
pub struct Expr {
    nodes: Vec<Node>,
}

pub type MaybeExpr = Result<Expr, Error>;

impl Expr {
    /// Create an expression holding the constant `value`. NaN is not a
    /// number and is rejected with `TypeMismatch`.
    pub fn number(value: f64) -> MaybeExpr {
        if value.is_nan() {
            Err(Error::TypeMismatch)
        } else {
            Ok(Expr {
                nodes: vec![Number(value)],
            })
        }
    }

    /// Create an expression holding the free variable `name`. Names that are
    /// not identifier shaped are rejected with `TypeMismatch`.
    pub fn symbol(name: &str) -> MaybeExpr {
        if valid_symbol_name(name) {
            Ok(Expr {
                nodes: vec![Symbol(name.to_string())],
            })
        } else {
            Err(Error::TypeMismatch)
        }
    }

    /// Build an expression directly from a node buffer. The buffer is checked
    /// and the first problem found is returned as an error. This is the entry
    /// point for algorithms that assemble nodes by hand, including ones that
    /// share an operand index between two parents.
    pub fn from_nodes(nodes: Vec<Node>) -> MaybeExpr {
        Expr { nodes }.validated()
    }

    /// The number of nodes in this expression.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Index of the root node. The root is always the last node.
    pub fn root_index(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Get a reference to the root of the expression.
    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index()]
    }

    /// Get a reference to the node at `index`.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Reference to the nodes of this expression.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Drop the expression and hand the node buffer to the caller. Algorithms
    /// that rearrange nodes take the buffer, do their surgery, and construct a
    /// new expression via `from_nodes`, which re-checks the invariants.
    pub fn take(self) -> Vec<Node> {
        self.nodes
    }

    /// Check the node buffer and return the expression if no problems were
    /// found, or the first error encountered.
    fn validated(self) -> MaybeExpr {
        if self.nodes.is_empty() {
            return Err(Error::EmptyExpr);
        }
        if self.nodes.iter().any(|node| match node {
            Number(value) => f64::is_nan(*value),
            Symbol(name) => !valid_symbol_name(name),
            Binary(..) => false,
        }) {
            return Err(Error::TypeMismatch);
        }
        /* Operands must appear before the nodes that use them. This is what
         * algorithms walking the buffer in index order rely on, and it also
         * ensures there are no cycles. */
        if !is_topological_order(&self.nodes) {
            return Err(Error::WrongNodeOrder);
        }
        Ok(self)
    }

    fn binary_op(mut self, other: Expr, op: BinaryOp) -> Expr {
        let offset = self.push_nodes(&other);
        let lhs = offset - 1;
        let rhs = self.nodes.len() - 1;
        self.nodes.push(Binary(op, lhs, rhs));
        self
    }

    fn push_nodes(&mut self, other: &Expr) -> usize {
        let offset = self.nodes.len();
        self.nodes.reserve(other.nodes.len() + 1);
        self.nodes.extend(other.nodes.iter().map(|node| match node {
            Number(value) => Number(*value),
            Symbol(name) => Symbol(name.clone()),
            Binary(op, lhs, rhs) => Binary(*op, *lhs + offset, *rhs + offset),
        }));
        offset
    }

    /// Raise this expression to `exponent`. A raw numeric exponent is
    /// promoted to a number node.
    pub fn pow(self, exponent: impl Into<Expr>) -> Expr {
        self.binary_op(exponent.into(), Pow)
    }
}

macro_rules! binary_func {
    ($name:ident, $op:ident) => {
        pub fn $name(lhs: MaybeExpr, rhs: MaybeExpr) -> MaybeExpr {
            Ok(lhs?.binary_op(rhs?, $op))
        }
    };
}

binary_func!(add, Add);
binary_func!(sub, Sub);
binary_func!(mul, Mul);
binary_func!(div, Div);
binary_func!(pow, Pow);

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr {
            nodes: vec![Number(value)],
        }
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr {
            nodes: vec![Number(value as f64)],
        }
    }
}

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl core::ops::$trait<Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                self.binary_op(rhs, $op)
            }
        }

        impl core::ops::$trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                self.binary_op(Expr::from(rhs), $op)
            }
        }

        impl core::ops::$trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::from(self).binary_op(rhs, $op)
            }
        }
    };
}

binary_operator!(Add, add, Add);
binary_operator!(Sub, sub, Sub);
binary_operator!(Mul, mul, Mul);
binary_operator!(Div, div, Div);
