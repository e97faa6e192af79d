//! Two-segment slug path resolution over an arbitrary-depth category tree.
//!
//! Public routes carry exactly two slugs (`/categories/{category}/{sub}`)
//! while the tree can nest deeper. Resolution first tries the literal
//! interpretation (root + direct child), then falls back to searching the
//! whole active forest and computing the canonical root-to-node path for a
//! redirect.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::tree::CategoryIndex;
use crate::entities::category::Model as Category;

/// Which path segment failed to resolve; echoed in 404 diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathSegment {
    Category,
    Subcategory,
}

/// Terminal state of one resolution. Store failures are not represented
/// here; they surface as `ServiceError::StoreUnavailable` before the
/// index is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path matched a root and one of its direct children. The child
    /// may have further children of its own; they are exposed for sidebar
    /// navigation so callers need not know the tree depth.
    Resolved {
        category: Category,
        parent: Category,
        children: Vec<Category>,
    },
    /// The URL is stale relative to the canonical tree shape. Advisory:
    /// the caller issues the actual HTTP redirect.
    Redirect { canonical_path: String },
    NotFound { segment: PathSegment },
}

/// Resolves a two-segment path against the active category index.
///
/// Matching is case-sensitive and exact. A direct child match always wins
/// over a global fallback match, even when an unrelated branch carries the
/// same slug.
pub fn resolve_path(
    index: &CategoryIndex,
    category_slug: &str,
    subcategory_slug: &str,
) -> Resolution {
    // Step 1: root lookup. A miss here short-circuits before any fallback.
    let Some(root) = index.root_by_slug(category_slug) else {
        debug!(category_slug, "root category not found");
        return Resolution::NotFound {
            segment: PathSegment::Category,
        };
    };

    // Step 2: direct child of that root.
    if let Some(child) = index.child_by_slug(root.id, subcategory_slug) {
        return Resolution::Resolved {
            category: child.clone(),
            parent: root.clone(),
            children: index.children(child.id).into_iter().cloned().collect(),
        };
    }

    // Step 3: global fallback across the entire active forest.
    let candidates = index.all_by_slug(subcategory_slug);
    let Some(found) = candidates.first() else {
        debug!(subcategory_slug, "subcategory not found anywhere");
        return Resolution::NotFound {
            segment: PathSegment::Subcategory,
        };
    };
    if candidates.len() > 1 {
        // Slugs are only sibling-unique; tie-break is lowest id.
        warn!(
            slug = subcategory_slug,
            matches = candidates.len(),
            chosen_id = found.id,
            "ambiguous slug in fallback search"
        );
    }

    match canonical_path(index, found) {
        Some(path) => Resolution::Redirect {
            canonical_path: path,
        },
        None => Resolution::NotFound {
            segment: PathSegment::Subcategory,
        },
    }
}

/// Walks `parent_id` upward to the true root of `node`'s branch and
/// returns the canonical `/{root}/.../{node}` path. Returns `None` when
/// the chain is broken: a parent is missing or inactive, or the walk
/// revisits a node (a cycle, which the data layer does not rule out).
fn canonical_path(index: &CategoryIndex, node: &Category) -> Option<String> {
    let mut chain = vec![node];
    let mut visited: HashSet<i32> = HashSet::from([node.id]);

    let mut current = node;
    while let Some(parent_id) = current.parent_id {
        if !visited.insert(parent_id) {
            warn!(
                category_id = node.id,
                parent_id, "cycle detected while walking category ancestors"
            );
            return None;
        }
        let parent = index.get(parent_id)?;
        chain.push(parent);
        current = parent;
    }

    let mut path = String::new();
    for category in chain.iter().rev() {
        path.push('/');
        path.push_str(&category.slug);
    }
    Some(path)
}
