//! Binary search tree of collected clues
//!
//! Nodes live in an arena and link to their children by index. The tree
//! only grows: no removal, no rebalancing. Ordering is plain byte-wise
//! string comparison and equal texts are stored once.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{ConstructionStep, Result, alloc_text, reserve_slot};
use crate::suspect::SuspectTable;

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Sorted set of clue texts
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    nodes: Vec<ClueNode>,
    root: Option<usize>,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue, returning `true` if it was not already present
    pub fn insert(&mut self, clue: &str) -> Result<bool> {
        let (root, added) = self.insert_at(self.root, clue)?;
        self.root = Some(root);
        if added {
            debug!(clue, total = self.len(), "clue recorded");
        }
        Ok(added)
    }

    /// Recursive insert below `node`; returns the (possibly new) subtree
    /// root to reattach in the parent
    fn insert_at(&mut self, node: Option<usize>, clue: &str) -> Result<(usize, bool)> {
        let Some(idx) = node else {
            return Ok((self.alloc_node(clue)?, true));
        };

        match clue.cmp(self.nodes[idx].text.as_str()) {
            Ordering::Less => {
                let left = self.nodes[idx].left;
                let (child, added) = self.insert_at(left, clue)?;
                self.nodes[idx].left = Some(child);
                Ok((idx, added))
            }
            Ordering::Greater => {
                let right = self.nodes[idx].right;
                let (child, added) = self.insert_at(right, clue)?;
                self.nodes[idx].right = Some(child);
                Ok((idx, added))
            }
            Ordering::Equal => Ok((idx, false)),
        }
    }

    fn alloc_node(&mut self, clue: &str) -> Result<usize> {
        let text = alloc_text(clue, ConstructionStep::ClueNode)?;
        reserve_slot(&mut self.nodes, ConstructionStep::ClueNode)?;
        self.nodes.push(ClueNode {
            text,
            left: None,
            right: None,
        });
        Ok(self.nodes.len() - 1)
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut node = self.root;
        while let Some(idx) = node {
            let current = &self.nodes[idx];
            node = match clue.cmp(current.text.as_str()) {
                Ordering::Less => current.left,
                Ordering::Greater => current.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in ascending order
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Number of clues whose suspect in `table` is exactly `suspect`
    pub fn count_matching_suspect(&self, table: &SuspectTable, suspect: &str) -> usize {
        self.count_at(self.root, table, suspect)
    }

    fn count_at(&self, node: Option<usize>, table: &SuspectTable, suspect: &str) -> usize {
        let Some(idx) = node else {
            return 0;
        };
        let current = &self.nodes[idx];
        let here = usize::from(table.find(&current.text) == Some(suspect));
        here + self.count_at(current.left, table, suspect)
            + self.count_at(current.right, table, suspect)
    }

    /// Longest root-to-leaf path, in nodes
    pub fn depth(&self) -> usize {
        self.depth_at(self.root)
    }

    fn depth_at(&self, node: Option<usize>) -> usize {
        match node {
            None => 0,
            Some(idx) => {
                let current = &self.nodes[idx];
                1 + self.depth_at(current.left).max(self.depth_at(current.right))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy left-root-right walk over a [`ClueIndex`]
pub struct InOrder<'a> {
    index: &'a ClueIndex,
    stack: Vec<usize>,
    next: Option<usize>,
}

impl<'a> InOrder<'a> {
    fn new(index: &'a ClueIndex) -> Self {
        Self {
            index,
            stack: Vec::new(),
            next: index.root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let index: &'a ClueIndex = self.index;
        let nodes = &index.nodes;
        while let Some(idx) = self.next {
            self.stack.push(idx);
            self.next = nodes[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &nodes[idx];
        self.next = node.right;
        Some(node.text.as_str())
    }
}
