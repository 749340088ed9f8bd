use axum::Json;
use serde::Serialize;

use crate::middleware::auth::AuthUser;

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

fn board(message: &'static str, auth_user: AuthUser) -> Json<ContentResponse> {
    Json(ContentResponse {
        message,
        user_id: Some(auth_user.user_id),
    })
}

pub async fn all_access() -> Json<ContentResponse> {
    Json(ContentResponse {
        message: "Contenu public.",
        user_id: None,
    })
}

pub async fn user_board(auth_user: AuthUser) -> Json<ContentResponse> {
    board("Contenu utilisateur.", auth_user)
}

pub async fn student_board(auth_user: AuthUser) -> Json<ContentResponse> {
    board("Contenu etudiant.", auth_user)
}

pub async fn professor_board(auth_user: AuthUser) -> Json<ContentResponse> {
    board("Contenu professeur.", auth_user)
}

pub async fn staff_board(auth_user: AuthUser) -> Json<ContentResponse> {
    board("Contenu professeur ou admin.", auth_user)
}

pub async fn admin_board(auth_user: AuthUser) -> Json<ContentResponse> {
    board("Contenu admin.", auth_user)
}
