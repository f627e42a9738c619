//! Route definitions for user CRUD, mounted at `/api/users`.
//!
//! ```text
//! POST   /            -> create_user
//! GET    /            -> get_user_by_email (?email=)
//! GET    /all         -> list_all_users
//! GET    /{user_id}   -> get_user_by_id
//! PUT    /{user_id}   -> update_user
//! DELETE /{user_id}   -> delete_user
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user).get(users::get_user_by_email))
        .route("/all", get(users::list_all_users))
        .route(
            "/{user_id}",
            get(users::get_user_by_id)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
