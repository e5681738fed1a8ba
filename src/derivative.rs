use crate::{
    expr::{BinaryOp::*, Expr, MaybeExpr, Node, Node::*},
    prune::Pruner,
};

/// Compute the symbolic derivative of `expr` with respect to the variable
/// `var`. See [`Expr::differentiate`].
pub fn differentiate(expr: MaybeExpr, var: &str) -> MaybeExpr {
    expr?.differentiate(var)
}

/// Append `node` to `dst` and return its index in the combined buffer that
/// `dst` will be appended to at `offset`.
fn push_node(node: Node, dst: &mut Vec<Node>, offset: usize) -> usize {
    dst.push(node);
    dst.len() - 1 + offset
}

impl Expr {
    /// Compute the symbolic derivative of this expression with respect to the
    /// variable `var`.
    ///
    /// The derivative of every node is built bottom-up in one pass over the
    /// arena, reusing the indices of the original nodes as operands, then
    /// nodes the derivative root does not depend on are pruned away. The
    /// output is exactly what the differentiation rules produce. No
    /// simplification is performed, so `x * x` differentiates to
    /// `1 * x + x * 1`. Powers are differentiated as if the exponent were
    /// constant with respect to `var`.
    ///
    /// Node kinds without a differentiation rule report
    /// [`Error::UnsupportedOperationKind`](crate::error::Error), naming the
    /// unhandled kind.
    pub fn differentiate(&self, var: &str) -> MaybeExpr {
        let mut nodes = self.nodes().to_vec();
        let offset = nodes.len();
        // derivmap[i] is the index of the derivative of node i in the
        // combined buffer.
        let mut derivmap = vec![0usize; offset];
        let mut derivs: Vec<Node> = Vec::new();
        for ni in 0..offset {
            let deriv = match &nodes[ni] {
                Number(_) => Number(0.),
                Symbol(name) => {
                    if name.as_str() == var {
                        Number(1.)
                    } else {
                        Number(0.)
                    }
                }
                Binary(Add, lhs, rhs) => {
                    Binary(Add, derivmap[*lhs], derivmap[*rhs])
                }
                Binary(Sub, lhs, rhs) => {
                    Binary(Sub, derivmap[*lhs], derivmap[*rhs])
                }
                Binary(Mul, lhs, rhs) => {
                    // Product rule: l' * r + l * r'.
                    let lr = push_node(
                        Binary(Mul, derivmap[*lhs], *rhs),
                        &mut derivs,
                        offset,
                    );
                    let rl = push_node(
                        Binary(Mul, *lhs, derivmap[*rhs]),
                        &mut derivs,
                        offset,
                    );
                    Binary(Add, lr, rl)
                }
                Binary(Div, lhs, rhs) => {
                    // Quotient rule: (r * l' - l * r') / r ^ 2.
                    let numl = push_node(
                        Binary(Mul, *rhs, derivmap[*lhs]),
                        &mut derivs,
                        offset,
                    );
                    let numr = push_node(
                        Binary(Mul, *lhs, derivmap[*rhs]),
                        &mut derivs,
                        offset,
                    );
                    let num =
                        push_node(Binary(Sub, numl, numr), &mut derivs, offset);
                    let two = push_node(Number(2.), &mut derivs, offset);
                    let den =
                        push_node(Binary(Pow, *rhs, two), &mut derivs, offset);
                    Binary(Div, num, den)
                }
                Binary(Pow, lhs, rhs) => {
                    // Exponent treated as constant: e * b ^ (e - 1).
                    let one = push_node(Number(1.), &mut derivs, offset);
                    let em1 =
                        push_node(Binary(Sub, *rhs, one), &mut derivs, offset);
                    let power =
                        push_node(Binary(Pow, *lhs, em1), &mut derivs, offset);
                    Binary(Mul, *rhs, power)
                }
            };
            derivmap[ni] = push_node(deriv, &mut derivs, offset);
        }
        nodes.extend(derivs);
        debug_assert_eq!(nodes.len() - 1, derivmap[offset - 1]);
        Pruner::new().run(&mut nodes);
        Expr::from_nodes(nodes)
    }
}
