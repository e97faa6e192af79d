//! Pure category-tree utilities: no I/O, deterministic, input never mutated.
//!
//! Categories are stored flat with a nullable self-reference; everything
//! navigational is derived per request from one "all active rows" fetch
//! instead of one query per tree level.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::entities::category::Model as Category;

/// Sibling ordering: `sort_order` first, display name as tie-break.
fn sibling_order(a: &Category, b: &Category) -> Ordering {
    a.sort_order
        .cmp(&b.sort_order)
        .then_with(|| a.name.cmp(&b.name))
}

/// Active children of `parent_id`, ordered. Inactive rows are skipped even
/// if present in the input list.
pub fn children_of(categories: &[Category], parent_id: i32) -> Vec<Category> {
    let mut children: Vec<Category> = categories
        .iter()
        .filter(|c| c.is_active && c.parent_id == Some(parent_id))
        .cloned()
        .collect();
    children.sort_by(sibling_order);
    children
}

/// Active root categories (`parent_id == None`), ordered.
pub fn root_categories(categories: &[Category]) -> Vec<Category> {
    let mut roots: Vec<Category> = categories
        .iter()
        .filter(|c| c.is_active && c.parent_id.is_none())
        .cloned()
        .collect();
    roots.sort_by(sibling_order);
    roots
}

/// A parent category together with its ordered children, for sidebars that
/// render a flat list of non-root categories as parent-labelled groups.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChildGroup {
    pub parent: Category,
    pub children: Vec<Category>,
}

/// Groups non-root categories under their parent. Categories whose parent
/// is not present in the supplied set are dropped from the grouping.
pub fn group_children_by_parent(categories: &[Category]) -> BTreeMap<i32, ChildGroup> {
    let parents: HashMap<i32, &Category> = categories
        .iter()
        .filter(|c| c.is_active)
        .map(|c| (c.id, c))
        .collect();

    let mut groups: BTreeMap<i32, ChildGroup> = BTreeMap::new();
    for category in categories.iter().filter(|c| c.is_active) {
        let Some(parent_id) = category.parent_id else {
            continue;
        };
        let Some(parent) = parents.get(&parent_id) else {
            debug!(
                category_id = category.id,
                parent_id, "dropping category from grouping: parent not in supplied set"
            );
            continue;
        };
        groups
            .entry(parent_id)
            .or_insert_with(|| ChildGroup {
                parent: (*parent).clone(),
                children: Vec::new(),
            })
            .children
            .push(category.clone());
    }

    for group in groups.values_mut() {
        group.children.sort_by(sibling_order);
    }
    groups
}

/// Per-request index over the active category forest: id -> node and
/// parent id -> ordered child ids. Built once from the flat row list.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_id: HashMap<i32, Category>,
    children: HashMap<i32, Vec<i32>>,
    roots: Vec<i32>,
}

impl CategoryIndex {
    /// Builds the index, filtering out inactive rows.
    pub fn build(rows: Vec<Category>) -> Self {
        let mut active: Vec<Category> = rows.into_iter().filter(|c| c.is_active).collect();
        active.sort_by(sibling_order);

        let mut index = Self::default();
        for category in &active {
            match category.parent_id {
                Some(parent_id) => index
                    .children
                    .entry(parent_id)
                    .or_default()
                    .push(category.id),
                None => index.roots.push(category.id),
            }
        }
        index.by_id = active.into_iter().map(|c| (c.id, c)).collect();
        index
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&Category> {
        self.by_id.get(&id)
    }

    /// Ordered active roots.
    pub fn roots(&self) -> Vec<&Category> {
        self.roots.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// Ordered active children of `parent_id`.
    pub fn children(&self, parent_id: i32) -> Vec<&Category> {
        self.children
            .get(&parent_id)
            .map(|ids| ids.iter().filter_map(|id| self.get(*id)).collect())
            .unwrap_or_default()
    }

    /// Root category with the given slug, exact match.
    pub fn root_by_slug(&self, slug: &str) -> Option<&Category> {
        self.roots().into_iter().find(|c| c.slug == slug)
    }

    /// Direct child of `parent_id` with the given slug, exact match.
    pub fn child_by_slug(&self, parent_id: i32, slug: &str) -> Option<&Category> {
        self.children(parent_id).into_iter().find(|c| c.slug == slug)
    }

    /// Every active category carrying `slug`, anywhere in the forest,
    /// sorted by id so callers get a deterministic order.
    pub fn all_by_slug(&self, slug: &str) -> Vec<&Category> {
        let mut matches: Vec<&Category> =
            self.by_id.values().filter(|c| c.slug == slug).collect();
        matches.sort_by_key(|c| c.id);
        matches
    }

    /// Every active descendant below `id`; traversal order is unspecified,
    /// callers regroup or re-sort as needed.
    pub fn descendants_of(&self, id: i32) -> Vec<Category> {
        let mut out = Vec::new();
        let mut queue: Vec<i32> = vec![id];
        let mut seen: HashSet<i32> = HashSet::new();
        while let Some(current) = queue.pop() {
            for child in self.children(current) {
                // seen-guard: a cyclic parent chain must not hang the walk
                if seen.insert(child.id) {
                    out.push(child.clone());
                    queue.push(child.id);
                }
            }
        }
        out
    }
}
