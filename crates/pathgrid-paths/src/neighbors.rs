use pathgrid_core::Pos;

/// The eight `(Δrow, Δcol)` step offsets, in expansion order.
///
/// Cardinal steps come first (left, right, up, down), then diagonals. The
/// order decides which of several equal-priority nodes enters the frontier
/// first, and so which route wins a tie.
pub const OFFSETS: [Pos; 8] = [
    Pos::new(0, -1),
    Pos::new(0, 1),
    Pos::new(-1, 0),
    Pos::new(1, 0),
    Pos::new(-1, -1),
    Pos::new(-1, 1),
    Pos::new(1, -1),
    Pos::new(1, 1),
];

/// Cached neighbor computation helper.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-connected neighbors of `p` in [`OFFSETS`] order,
    /// keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        for d in OFFSETS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
