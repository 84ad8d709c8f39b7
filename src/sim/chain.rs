//! Carried-item chain threaded through the grid
//!
//! The chain owns no storage. Every link is a `Tile::ChainLink` cell and the
//! pointers between links are coordinates stored in those cells:
//!
//! ```text
//!   tail --link--> ... --link--> head    (actor stands next to head)
//! ```
//!
//! Pointers run from the oldest link toward the newest, so dropping the tail
//! only needs the pointer stored at the tail. The head's own pointer is stale
//! and is rewritten the next time a link is pushed.

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Grid, Tile};

/// Length and end points of the chain. The links themselves live in [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Chain {
    len: usize,
    /// Newest link (nearest the actor)
    head: Option<Coord>,
    /// Oldest link (next to be dropped)
    tail: Option<Coord>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<Coord> {
        self.head
    }

    pub fn tail(&self) -> Option<Coord> {
        self.tail
    }

    /// True iff `at` currently holds a chain link
    pub fn is_occupied(&self, grid: &Grid, at: Coord) -> bool {
        grid.get(at).is_chain_link()
    }

    /// Add a new head link at `at` (which must be empty)
    pub fn push_head(&mut self, grid: &mut Grid, at: Coord) {
        debug_assert!(
            grid.get(at).is_empty(),
            "push_head onto occupied cell {:?}: {:?}",
            at,
            grid.get(at)
        );

        match self.head {
            None => {
                debug_assert_eq!(self.len, 0, "chain has no head but len {}", self.len);
                grid.set(at, Tile::ChainLink { link: None });
                self.tail = Some(at);
            }
            Some(old_head) => {
                grid.set(at, Tile::ChainLink { link: Some(old_head) });
                // Old head now points forward to the new head
                grid.set(old_head, Tile::ChainLink { link: Some(at) });
            }
        }

        self.head = Some(at);
        self.len += 1;
    }

    /// Remove the tail link, returning the freed cell. `None` if the chain is empty.
    pub fn drop_tail(&mut self, grid: &mut Grid) -> Option<Coord> {
        let tail = self.tail?;

        let next = match grid.get(tail) {
            Tile::ChainLink { link } => link,
            other => panic!(
                "chain tail {:?} is not a link (found {:?}, len {})",
                tail, other, self.len
            ),
        };
        grid.set(tail, Tile::Empty);
        self.len -= 1;

        if self.len == 0 {
            self.head = None;
            self.tail = None;
        } else {
            let next = next.unwrap_or_else(|| {
                panic!(
                    "chain tail {:?} has no link but {} links remain",
                    tail, self.len
                )
            });
            self.tail = Some(next);
        }

        Some(tail)
    }

    /// Link coordinates from tail to head
    pub fn links(&self, grid: &Grid) -> Vec<Coord> {
        let mut links = Vec::with_capacity(self.len);
        let mut cursor = self.tail;

        while links.len() < self.len {
            let at = cursor.unwrap_or_else(|| {
                panic!(
                    "chain broken after {} of {} links (tail {:?}, head {:?})",
                    links.len(),
                    self.len,
                    self.tail,
                    self.head
                )
            });
            match grid.get(at) {
                Tile::ChainLink { link } => {
                    links.push(at);
                    cursor = link;
                }
                other => panic!(
                    "chain walk reached non-link {:?} at {:?} after {} links",
                    other,
                    at,
                    links.len()
                ),
            }
        }

        links
    }

    /// Check the full chain invariant against `grid`, panicking with context on violation
    pub fn verify(&self, grid: &Grid) {
        assert_eq!(
            self.head.is_some(),
            self.len > 0,
            "chain head {:?} inconsistent with len {}",
            self.head,
            self.len
        );
        assert_eq!(
            self.tail.is_some(),
            self.len > 0,
            "chain tail {:?} inconsistent with len {}",
            self.tail,
            self.len
        );

        let links = self.links(grid);
        assert_eq!(
            links.last().copied(),
            self.head,
            "walking {} links from tail {:?} did not end at head",
            self.len,
            self.tail
        );

        let on_grid = grid.count(|t| t.is_chain_link());
        assert_eq!(
            on_grid, self.len,
            "grid holds {} link cells but chain len is {}",
            on_grid, self.len
        );
    }
}
