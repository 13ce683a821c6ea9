//! Navigation menu items. Unrelated to the booking core: a flat table
//! of rows with an optional parent id, assembled into a tree by
//! indexing on parent id. No row holds a reference to another, so there
//! are no cycles or dangling pointers to guard against.

use std::collections::{HashMap, HashSet};

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Serialize;

use crate::entities::menu_item;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct MenuNode {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub children: Vec<MenuNode>,
}

pub async fn create_menu_item(
    db: &DatabaseConnection,
    name: String,
    url: String,
    parent_id: Option<i32>,
) -> AppResult<menu_item::Model> {
    if let Some(pid) = parent_id {
        menu_item::Entity::find_by_id(pid)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Parent menu item not found".to_string()))?;
    }

    let new_item = menu_item::ActiveModel {
        name: Set(name),
        url: Set(url),
        parent_id: Set(parent_id),
        ..Default::default()
    };

    Ok(new_item.insert(db).await?)
}

/// The whole menu as a forest of nested nodes. Items whose parent row
/// no longer exists are surfaced as roots rather than dropped.
pub async fn menu_tree(db: &DatabaseConnection) -> AppResult<Vec<MenuNode>> {
    let items = menu_item::Entity::find()
        .order_by_asc(menu_item::Column::Id)
        .all(db)
        .await?;

    let ids: HashSet<i32> = items.iter().map(|i| i.id).collect();

    let mut by_parent: HashMap<Option<i32>, Vec<menu_item::Model>> = HashMap::new();
    for item in items {
        let key = match item.parent_id {
            Some(pid) if ids.contains(&pid) => Some(pid),
            _ => None,
        };
        by_parent.entry(key).or_default().push(item);
    }

    Ok(attach(&mut by_parent, None))
}

fn attach(
    by_parent: &mut HashMap<Option<i32>, Vec<menu_item::Model>>,
    parent: Option<i32>,
) -> Vec<MenuNode> {
    by_parent
        .remove(&parent)
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let children = attach(by_parent, Some(item.id));
            MenuNode {
                id: item.id,
                name: item.name,
                url: item.url,
                children,
            }
        })
        .collect()
}
