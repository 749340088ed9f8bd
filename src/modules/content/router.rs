use axum::{Router, middleware, routing::get};

use crate::middleware::auth::verify_token;
use crate::middleware::role::{is_admin, is_professor, is_professor_or_admin, is_student};
use crate::state::AppState;

use super::controller::{
    admin_board, all_access, professor_board, staff_board, student_board, user_board,
};

pub fn init_content_router(state: AppState) -> Router<AppState> {
    let token_gate = || middleware::from_fn_with_state(state.clone(), verify_token);

    Router::new()
        .route("/all", get(all_access))
        .route("/user", get(user_board).route_layer(token_gate()))
        .route(
            "/student",
            get(student_board)
                .route_layer(middleware::from_fn_with_state(state.clone(), is_student))
                .route_layer(token_gate()),
        )
        .route(
            "/professor",
            get(professor_board)
                .route_layer(middleware::from_fn_with_state(state.clone(), is_professor))
                .route_layer(token_gate()),
        )
        .route(
            "/staff",
            get(staff_board)
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    is_professor_or_admin,
                ))
                .route_layer(token_gate()),
        )
        .route(
            "/admin",
            get(admin_board)
                .route_layer(middleware::from_fn_with_state(state.clone(), is_admin))
                .route_layer(token_gate()),
        )
}
