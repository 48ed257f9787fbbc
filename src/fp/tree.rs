use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct FpNode {
    /// `None` only for the sentinel root.
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
}

#[derive(Debug, Clone)]
pub struct FpTree {
    pub nodes: Vec<FpNode>,
    /// Per-item chain of node indices, in insertion order. This is the
    /// same-item link list: it visits every occurrence of an item without
    /// rescanning the tree.
    pub header_table: HashMap<usize, Vec<usize>>,
    pub root_index: usize,
}

impl FpNode {
    fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    fn new_item(item: usize, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

impl Default for FpTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FpTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FpNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// Inserts a frequency-ordered item path, adding `count` occurrences to
    /// every node along it. New nodes are appended to their item's header
    /// chain.
    pub fn insert_path(&mut self, items: &[usize], count: usize) {
        let mut current_index = self.root_index;

        for &item in items {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FpNode::new_item(item, count, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.header_table.entry(item).or_default().push(new_index);
                current_index = new_index;
            }
        }
    }

    /// Total occurrence count of `item`, summed over its header chain.
    pub fn item_support(&self, item: usize) -> usize {
        self.header_table.get(&item).map_or(0, |nodes| {
            nodes.iter().map(|&idx| self.nodes[idx].count).sum()
        })
    }

    /// The conditional pattern base of `item`: for every node holding it,
    /// the root-first path of ancestor items paired with that node's count.
    /// Nodes hanging directly off the root contribute nothing.
    pub fn prefix_paths(&self, item: usize) -> Vec<(Vec<usize>, usize)> {
        self.header_table.get(&item).map_or(Vec::new(), |nodes| {
            nodes
                .iter()
                .filter_map(|&idx| {
                    let mut path = Vec::new();
                    let mut current = self.nodes[idx].parent;

                    while let Some(i) = current {
                        if let Some(ancestor) = self.nodes[i].item {
                            path.push(ancestor);
                        }
                        current = self.nodes[i].parent;
                    }

                    path.reverse();
                    (!path.is_empty()).then_some((path, self.nodes[idx].count))
                })
                .collect()
        })
    }
}
