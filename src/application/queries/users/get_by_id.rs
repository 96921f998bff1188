use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct GetUserQuery {
    pub user_id: i64,
}

impl UserQueryService {
    pub async fn get_by_id(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.user_id)?;

        self.user_repo
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("user {id} does not exist")))
    }
}
