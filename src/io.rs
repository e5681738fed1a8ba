use crate::expr::{Expr, Node, Node::*};

impl std::fmt::Display for Expr {
    /// Render the expression in infix notation. An operand is wrapped in
    /// parentheses iff its precedence is strictly lower than its parent's.
    /// Operands of equal precedence are left bare, so non-associative chains
    /// like `a - (b - c)` print the same as `(a - b) - c`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", to_infix(self.root(), self.nodes()))
    }
}

/// Produce the infix notation for the subtree hanging off of `node`.
fn to_infix(node: &Node, nodes: &[Node]) -> String {
    match node {
        Number(value) => value.to_string(),
        Symbol(name) => name.clone(),
        Binary(op, lhs, rhs) => {
            let lx = operand(&nodes[*lhs], nodes, op.precedence());
            let rx = operand(&nodes[*rhs], nodes, op.precedence());
            format!("{} {} {}", lx, op.symbol(), rx)
        }
    }
}

fn operand(node: &Node, nodes: &[Node], parent: u8) -> String {
    let text = to_infix(node, nodes);
    if node.precedence() < parent {
        format!("({text})")
    } else {
        text
    }
}

impl std::fmt::Debug for Expr {
    /// Print the variant name and operand sequence of every node recursively,
    /// e.g. `Add(Mul(Number(2.0), Symbol("x")), Number(3.0))`. Unambiguous,
    /// but not guaranteed to be re-parseable.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_node(f, self.root_index(), self.nodes())
    }
}

fn write_node(
    f: &mut std::fmt::Formatter<'_>,
    index: usize,
    nodes: &[Node],
) -> std::fmt::Result {
    match &nodes[index] {
        Number(value) => write!(f, "Number({value:?})"),
        Symbol(name) => write!(f, "Symbol({name:?})"),
        Binary(op, lhs, rhs) => {
            write!(f, "{op:?}(")?;
            write_node(f, *lhs, nodes)?;
            write!(f, ", ")?;
            write_node(f, *rhs, nodes)?;
            write!(f, ")")
        }
    }
}
