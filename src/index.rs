//! Prefix index over book titles.
//!
//! Nodes live in a single arena and refer to their children by position,
//! so the tree never needs manual lifetime management. Node 0 is the root
//! and stands for the empty prefix.

use std::collections::BTreeMap;

use crate::models::{book::fold, Title};

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<char, usize>,
    /// A title ends at this node
    terminal: bool,
}

/// Case-insensitive prefix index over titles
#[derive(Debug)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Register a title. Inserting the same title twice is a no-op.
    pub fn insert(&mut self, title: &Title) {
        let mut node = ROOT;
        for c in title.as_str().chars() {
            node = match self.nodes[node].children.get(&c).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// All titles starting with `prefix`, compared case-insensitively.
    ///
    /// Results come back in lexicographic order; an empty prefix lists every title.
    pub fn search(&self, prefix: &str) -> Vec<Title> {
        let prefix = fold(prefix);
        let Some(start) = self.walk(&prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut stack = vec![(start, prefix)];
        while let Some((node, current)) = stack.pop() {
            let node = &self.nodes[node];
            if node.terminal {
                results.push(Title::from_folded(current.clone()));
            }
            // Reverse so the smallest child is popped first
            for (&c, &child) in node.children.iter().rev() {
                let mut next = current.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
        results
    }

    pub fn is_empty(&self) -> bool {
        !self.nodes.iter().any(|n| n.terminal)
    }

    fn walk(&self, folded: &str) -> Option<usize> {
        folded
            .chars()
            .try_fold(ROOT, |node, c| self.nodes[node].children.get(&c).copied())
    }
}
