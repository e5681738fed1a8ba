use crate::expr::{Node, Node::*};

/// Removes nodes that the root does not depend on.
///
/// Pruning is pure reachability compaction. It never rewrites the expression
/// the root represents, it only drops unused slots and remaps operand
/// indices. The buffers used for pruning are owned by this instance, so
/// reusing the same pruner avoids repeated allocations.
pub(crate) struct Pruner {
    keep: Vec<bool>,
    index_map: Vec<usize>,
    pruned: Vec<Node>,
}

impl Pruner {
    pub fn new() -> Pruner {
        Pruner {
            keep: Vec::new(),
            index_map: Vec::new(),
            pruned: Vec::new(),
        }
    }

    /// Drop every node the last node does not depend on, remapping the
    /// operand indices of the survivors. The relative order of surviving
    /// nodes is unchanged, so a topologically ordered input stays
    /// topologically ordered. Expects `nodes` to be in topological order.
    pub fn run(&mut self, nodes: &mut Vec<Node>) {
        if nodes.is_empty() {
            return;
        }
        self.keep.clear();
        self.keep.resize(nodes.len(), false);
        self.keep[nodes.len() - 1] = true;
        // Operands precede their users, so one reverse sweep marks the whole
        // dependency closure of the root.
        for index in (0..nodes.len()).rev() {
            if !self.keep[index] {
                continue;
            }
            if let Binary(_, lhs, rhs) = &nodes[index] {
                self.keep[*lhs] = true;
                self.keep[*rhs] = true;
            }
        }
        self.index_map.clear();
        self.index_map.resize(nodes.len(), 0);
        let mut next = 0usize;
        for (index, keep) in self.keep.iter().enumerate() {
            self.index_map[index] = next;
            if *keep {
                next += 1;
            }
        }
        self.pruned.clear();
        self.pruned.reserve(next);
        for (index, node) in nodes.drain(..).enumerate() {
            if !self.keep[index] {
                continue;
            }
            self.pruned.push(match node {
                Number(_) | Symbol(_) => node,
                Binary(op, lhs, rhs) => {
                    Binary(op, self.index_map[lhs], self.index_map[rhs])
                }
            });
        }
        std::mem::swap(&mut self.pruned, nodes);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::BinaryOp::*;

    #[test]
    fn t_prune_unused_nodes() {
        let mut pruner = Pruner::new();
        let mut nodes = vec![
            Symbol("x".to_string()),  // 0
            Number(42.),              // 1 - unused
            Number(2.),               // 2
            Binary(Pow, 0, 2),        // 3
            Binary(Mul, 0, 0),        // 4 - unused
            Binary(Add, 3, 0),        // 5 - root
        ];
        pruner.run(&mut nodes);
        assert_eq!(
            nodes,
            vec![
                Symbol("x".to_string()),
                Number(2.),
                Binary(Pow, 0, 1),
                Binary(Add, 2, 0),
            ]
        );
    }

    #[test]
    fn t_prune_keeps_shared_operands_once() {
        let mut pruner = Pruner::new();
        let mut nodes = vec![
            Symbol("x".to_string()),  // 0
            Number(1.),               // 1 - unused
            Binary(Mul, 0, 0),        // 2
            Binary(Add, 2, 2),        // 3 - root
        ];
        pruner.run(&mut nodes);
        assert_eq!(
            nodes,
            vec![
                Symbol("x".to_string()),
                Binary(Mul, 0, 0),
                Binary(Add, 1, 1),
            ]
        );
    }

    #[test]
    fn t_prune_nothing_to_do() {
        let mut pruner = Pruner::new();
        let mut nodes = vec![
            Symbol("x".to_string()),
            Symbol("y".to_string()),
            Binary(Sub, 0, 1),
        ];
        let expected = nodes.clone();
        pruner.run(&mut nodes);
        assert_eq!(nodes, expected);
    }
}
