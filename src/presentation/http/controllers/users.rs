// src/presentation/http/controllers/users.rs
use std::collections::BTreeMap;

use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::{UserDto, UserPage},
    queries::users::{GetUserQuery, SearchUsersQuery},
};
use crate::domain::user::FieldValue;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    pub offset: i64,
    pub limit: i64,
}

/// Filter body: field name → list of accepted scalar values.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct FilterBody(pub BTreeMap<String, Vec<FieldValue>>);

/// Update body: field name → new scalar value.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct UpdateBody(pub BTreeMap<String, FieldValue>);

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, enriched when the lookups succeeded.", body = UserDto),
        (status = 400, description = "Blank name or surname.")
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = CreateUserCommand {
        name: payload.name,
        surname: payload.surname,
        patronymic: payload.patronymic,
    };

    state
        .services
        .user_commands
        .create(command)
        .await
        .into_http()
        .map(|user| (StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/search",
    params(PageParams),
    request_body = FilterBody,
    responses(
        (status = 200, description = "Users inside the pagination window matching every filter group.", body = UserPage),
        (status = 400, description = "Invalid pagination or unknown filter field.")
    ),
    tag = "Users"
)]
pub async fn search_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
    Json(FilterBody(filter)): Json<FilterBody>,
) -> HttpResult<Json<UserPage>> {
    let query = SearchUsersQuery {
        offset: params.offset,
        limit: params.limit,
        filter,
    };

    state
        .services
        .user_queries
        .search(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user with the given id.", body = UserDto),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_by_id(GetUserQuery { user_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateBody,
    responses(
        (status = 200, description = "The updated user.", body = UserDto),
        (status = 400, description = "Empty update, forbidden id field, or unknown field."),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(UpdateBody(changes)): Json<UpdateBody>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserCommand {
        user_id: id,
        changes,
    };

    state
        .services
        .user_commands
        .update(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 204, description = "Deleted, or already absent.")),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete(DeleteUserCommand { user_id: id })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
