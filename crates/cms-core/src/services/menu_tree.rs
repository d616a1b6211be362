//! Flat-to-tree menu builder

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::domain::MenuItem;

/// Menu item with its ordered children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    #[serde(flatten)]
    pub item: MenuItem,
    pub depth: usize,
    pub children: Vec<MenuNode>,
}

/// Builds the navigation tree from a flat list.
///
/// Siblings are ordered by `order`, ties keep their input position. Items
/// whose parent is missing are dropped with their whole subtree, and so are
/// items on a parent cycle since no root reaches them.
pub fn build_tree(items: &[MenuItem]) -> Vec<MenuNode> {
    let known: HashSet<Uuid> = items.iter().map(|item| item.id).collect();

    let mut roots: Vec<&MenuItem> = Vec::new();
    let mut children: HashMap<Uuid, Vec<&MenuItem>> = HashMap::new();

    for item in items {
        match item.parent_id {
            None => roots.push(item),
            Some(parent_id) if known.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(item)
            }
            Some(parent_id) => {
                tracing::debug!(id = %item.id, %parent_id, "Dropping orphaned menu item");
            }
        }
    }

    let mut visited = HashSet::new();
    attach(roots, &children, 0, &mut visited)
}

fn attach(
    mut level: Vec<&MenuItem>,
    children: &HashMap<Uuid, Vec<&MenuItem>>,
    depth: usize,
    visited: &mut HashSet<Uuid>,
) -> Vec<MenuNode> {
    // sort_by_key is stable
    level.sort_by_key(|item| item.order);

    let mut nodes = Vec::with_capacity(level.len());
    for item in level {
        if !visited.insert(item.id) {
            continue;
        }
        let kids = children.get(&item.id).cloned().unwrap_or_default();
        nodes.push(MenuNode {
            item: item.clone(),
            depth,
            children: attach(kids, children, depth + 1, visited),
        });
    }
    nodes
}

/// Pre-order walk of the tree back into a flat list.
pub fn flatten(tree: &[MenuNode]) -> Vec<MenuItem> {
    let mut out = Vec::new();
    for node in tree {
        out.push(node.item.clone());
        out.extend(flatten(&node.children));
    }
    out
}
