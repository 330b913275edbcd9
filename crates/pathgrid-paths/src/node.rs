use std::hash::{Hash, Hasher};

use pathgrid_core::Pos;

/// A node discovered during one search.
///
/// Nodes live in a per-call arena; `parent` is the arena index of the node
/// this one was reached from, `None` for the root.
#[derive(Copy, Clone, Debug)]
pub struct SearchNode {
    pub pos: Pos,
    pub parent: Option<usize>,
    pub g: i32,
    pub h: i32,
    pub f: i32,
}

impl SearchNode {
    /// The seed node: zero cost, zero estimate, no parent.
    pub fn root(pos: Pos) -> Self {
        Self {
            pos,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }

    pub fn child(pos: Pos, parent: usize, g: i32, h: i32) -> Self {
        Self {
            pos,
            parent: Some(parent),
            g,
            h,
            f: g + h,
        }
    }
}

// Identity is the position alone; cost and parent do not take part.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

/// Insertion-ordered open list of arena indices.
///
/// Selection is a linear scan for the smallest `f`; among equal values the
/// entry inserted earliest wins. A binary heap does not preserve that
/// order, which is why this is a plain `Vec`.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    entries: Vec<usize>,
}

impl Frontier {
    pub(crate) fn push(&mut self, idx: usize) {
        self.entries.push(idx);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return the leftmost entry with the smallest `f`.
    pub(crate) fn pop_min(&mut self, nodes: &[SearchNode]) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (slot, &idx) in self.entries.iter().enumerate() {
            let f = nodes[idx].f;
            if best.is_none_or(|(_, bf)| f < bf) {
                best = Some((slot, f));
            }
        }
        let (slot, _) = best?;
        Some(self.entries.remove(slot))
    }
}
