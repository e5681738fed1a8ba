use crate::expr::{Expr, Node, Node::*};

/// Folds an expression bottom-up, feeding every node and the results of its
/// operands through a caller supplied combining function.
///
/// Doing a non-recursive postorder traversal requires allocations. Those
/// buffers are owned by this instance, so reusing the same visitor across
/// many folds with the same result type is recommended.
pub struct Postvisitor<T> {
    stack: Vec<usize>,
    results: Vec<Option<T>>,
}

impl<T> Postvisitor<T> {
    pub fn new() -> Postvisitor<T> {
        Postvisitor {
            stack: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Fold `expr` bottom-up and return the result computed for the root.
    ///
    /// `f` is invoked with a node and the already computed results of its
    /// operands in left to right order, once per distinct node index that the
    /// root depends on. A node shared by several parents is computed the
    /// first time it is reached and the stored result is reused afterwards,
    /// which keeps the fold linear over DAG shaped expressions.
    ///
    /// An error returned by `f` aborts the traversal and propagates to the
    /// caller unmodified. The visitor keeps no state between calls beyond
    /// reusing its cleared buffers.
    pub fn run<E, F>(&mut self, expr: &Expr, mut f: F) -> Result<T, E>
    where
        F: FnMut(&Node, &[&T]) -> Result<T, E>,
    {
        self.stack.clear();
        self.stack.reserve(expr.len());
        self.results.clear();
        self.results.resize_with(expr.len(), || None);
        let root = expr.root_index();
        self.stack.push(root);
        while let Some(index) = self.stack.pop() {
            if self.results[index].is_some() {
                // Already computed through another parent.
                continue;
            }
            let node = expr.node(index);
            let result = match node {
                Number(_) | Symbol(_) => Some(f(node, &[])?),
                Binary(_, lhs, rhs) => {
                    match (&self.results[*lhs], &self.results[*rhs]) {
                        (Some(left), Some(right)) => Some(f(node, &[left, right])?),
                        (left, right) => {
                            // Revisit this node after its operands are done.
                            self.stack.push(index);
                            if right.is_none() {
                                self.stack.push(*rhs);
                            }
                            if left.is_none() {
                                self.stack.push(*lhs);
                            }
                            None
                        }
                    }
                }
            };
            if let Some(value) = result {
                if index == root {
                    return Ok(value);
                }
                self.results[index] = Some(value);
            }
        }
        // The root is pushed first and only popped for good once all of its
        // operands have results, so a validated expression cannot get here.
        unreachable!("postorder traversal ended without computing the root")
    }
}

impl<T> Default for Postvisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold `expr` bottom-up with a one-off visitor. See [`Postvisitor::run`].
pub fn postvisit<T, E, F>(expr: &Expr, f: F) -> Result<T, E>
where
    F: FnMut(&Node, &[&T]) -> Result<T, E>,
{
    Postvisitor::new().run(expr, f)
}
