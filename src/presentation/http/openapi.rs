// src/presentation/http/openapi.rs
use crate::application::dto::{UserDto, UserPage};
use crate::presentation::http::controllers::users::{CreateUserRequest, FilterBody, UpdateBody};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::search_users,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
    ),
    components(schemas(
        UserDto,
        UserPage,
        CreateUserRequest,
        FilterBody,
        UpdateBody,
        StatusResponse
    )),
    tags(
        (name = "Users", description = "User directory operations."),
        (name = "System", description = "Service status.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
