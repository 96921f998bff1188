// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    specifications::{FilterSpec, UpdateSpec},
    value_objects::UserId,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the users inside the `[offset, offset + limit)` window of the
    /// id-ordered record set that satisfy the filter. The window applies
    /// before the filter; the result keeps ascending id order.
    async fn get_filtered(
        &self,
        filter: &FilterSpec,
        offset: i64,
        limit: i64,
    ) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Applies the update to the record with the given id. Zero affected
    /// rows is a silent no-op; callers wanting an existence guarantee check
    /// with `exists` first.
    async fn update(&self, id: UserId, updates: &UpdateSpec) -> DomainResult<()>;

    /// Physical delete. Idempotent; deleting an absent id is not an error.
    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn exists(&self, id: UserId) -> DomainResult<bool>;
}
