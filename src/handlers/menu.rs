use axum::{extract::State, Json};
use serde::Deserialize;

use crate::entities::menu_item;
use crate::error::AppResult;
use crate::services::menu::{self, MenuNode};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub url: String,
    pub parent_id: Option<i32>,
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> AppResult<Json<menu_item::Model>> {
    let item =
        menu::create_menu_item(&state.db, payload.name, payload.url, payload.parent_id).await?;
    Ok(Json(item))
}

pub async fn menu_tree(State(state): State<AppState>) -> AppResult<Json<Vec<MenuNode>>> {
    let tree = menu::menu_tree(&state.db).await?;
    Ok(Json(tree))
}
