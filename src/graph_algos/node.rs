use num_traits::Zero;

use crate::grid::Cell;


/// Search state of one grid cell during a single run
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode<C> {
    pub cell: Cell,
    pub g: C, // best known cost from start
    pub h: C, // heuristic estimate to the goal set
    pub f: C, // priority = g + h
    /// Node id of the predecessor - the visible parent for Lazy Theta*
    /// None only for the start node
    pub parent: Option<usize>,
    /// Outgoing edges relaxed
    pub closed: bool,
}

impl<C> SearchNode<C>
where
    C: Zero + Copy,
{
    /// The start node, root of the parent tree
    pub fn root(cell: Cell, h: C) -> Self {
        Self::new(cell, C::zero(), h, None)
    }

    pub fn new(cell: Cell, g: C, h: C, parent: Option<usize>) -> Self {
        Self {
            cell,
            g,
            h,
            f: g + h,
            parent,
            closed: false,
        }
    }

    /// Record a cheaper way in through `parent`
    pub fn relax(&mut self, g: C, parent: usize) {
        self.g = g;
        self.f = g + self.h;
        self.parent = Some(parent);
    }
}
