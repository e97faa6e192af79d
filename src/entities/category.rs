use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category row. `parent_id = None` marks a root (main) category; the
/// parent references form a forest of arbitrary depth. Slugs are only
/// unique among siblings, never globally.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub slug: String,
    pub parent_id: Option<i32>,
    pub sort_order: i32,
    /// Soft-delete flag; inactive rows are invisible to every catalog read.
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,

    #[sea_orm(has_many = "Entity")]
    Children,

    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parent.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, ModelTrait, QueryTrait};

    fn root() -> Model {
        Model {
            id: 1,
            name: "Hair Care".into(),
            slug: "hair-care".into(),
            parent_id: None,
            sort_order: 0,
            is_active: true,
            meta_title: None,
            meta_description: None,
        }
    }

    #[test]
    fn is_root_follows_parent_id() {
        let mut category = root();
        assert!(category.is_root());
        category.parent_id = Some(1);
        assert!(!category.is_root());
    }

    // The self-referential relation must stay navigable: has_many on the
    // own entity requires the Related<Entity> impl through Parent.
    #[test]
    fn self_relation_is_navigable() {
        let sql = root()
            .find_related(Entity)
            .build(DatabaseBackend::Sqlite)
            .to_string();
        assert!(sql.contains("categories"));
    }
}
