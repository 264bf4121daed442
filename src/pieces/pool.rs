//! Pool of pieces not yet placed on the board
//!
//! The pool is a singly linked list threaded through an index arena: slot 0
//! is a sentinel head and slot `i + 1` holds catalog piece `i`. A piece is
//! withdrawn by pointing its predecessor past it and restored by pointing
//! the predecessor back at it. The withdrawn piece keeps its own link, so
//! restoration is O(1) and iteration order never changes.

/// A node a piece can be linked after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// The sentinel in front of the first unused piece
    Head,
    /// The node holding catalog piece `index`
    Piece(usize),
}

impl Link {
    const fn slot(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Piece(index) => index + 1,
        }
    }
}

/// Unused pieces in stable order with O(1) withdraw and restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiecePool {
    /// Successor of each slot as a catalog index; `None` ends the chain
    next: Vec<Option<usize>>,
}

impl PiecePool {
    /// Create a pool holding catalog pieces `0..count` in order
    pub fn new(count: usize) -> Self {
        let mut next: Vec<Option<usize>> = (0..count).map(Some).collect();
        next.push(None);
        Self { next }
    }

    /// First piece still unused, if any
    pub fn first_unused(&self) -> Option<usize> {
        self.next_after(Link::Head)
    }

    /// Piece currently linked after `link`
    pub fn next_after(&self, link: Link) -> Option<usize> {
        self.next.get(link.slot()).copied().flatten()
    }

    /// Test if every piece has been placed
    pub fn is_empty(&self) -> bool {
        self.first_unused().is_none()
    }

    /// Unlink the piece following `predecessor` and return it
    ///
    /// The caller must [`restore`](Self::restore) it with the same
    /// predecessor before withdrawing anything else at this level.
    pub fn withdraw(&mut self, predecessor: Link) -> Option<usize> {
        let piece = self.next_after(predecessor)?;
        let successor = self.next_after(Link::Piece(piece));
        if let Some(slot) = self.next.get_mut(predecessor.slot()) {
            *slot = successor;
        }
        Some(piece)
    }

    /// Relink `piece` directly after `predecessor`
    ///
    /// Returns the link to continue iterating from, which is the restored
    /// piece itself: the next withdraw moves on to the following entry.
    pub fn restore(&mut self, predecessor: Link, piece: usize) -> Link {
        if let Some(slot) = self.next.get_mut(predecessor.slot()) {
            *slot = Some(piece);
        }
        Link::Piece(piece)
    }

    /// Unused pieces in chain order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.first_unused(), |&piece| {
            self.next_after(Link::Piece(piece))
        })
    }

    /// Number of unused pieces
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}
