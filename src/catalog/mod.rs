/// Catalog traversal core: tree indexing and slug-path resolution.
pub mod resolver;
pub mod tree;

pub use resolver::{resolve_path, PathSegment, Resolution};
pub use tree::{children_of, group_children_by_parent, root_categories, CategoryIndex, ChildGroup};
