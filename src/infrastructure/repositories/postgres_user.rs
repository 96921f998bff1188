// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use super::user_queries::{select_window, update_by_id, USER_SELECT_COLUMNS};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    FilterSpec, NewUser, PersonName, UpdateSpec, User, UserId, UserRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    surname: String,
    patronymic: Option<String>,
    age: i32,
    gender: String,
    nationality: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: PersonName::new(row.name)?,
            surname: PersonName::new(row.surname)?,
            patronymic: row.patronymic,
            age: row.age,
            gender: row.gender,
            nationality: row.nationality,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_filtered(
        &self,
        filter: &FilterSpec,
        offset: i64,
        limit: i64,
    ) -> DomainResult<Vec<User>> {
        let mut builder = select_window(offset, limit, filter);
        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        // Lookup by id through the generic filtered path, over the maximal
        // window since the window applies before the filter.
        let filter = FilterSpec::by_id(id);
        let matches = self.get_filtered(&filter, 0, i64::MAX).await?;
        Ok(matches.into_iter().next())
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            surname,
            patronymic,
            age,
            gender,
            nationality,
        } = new_user;

        let insert_sql = format!(
            "INSERT INTO users (name, surname, patronymic, age, gender, nationality) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {USER_SELECT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&insert_sql)
            .bind(name.as_str())
            .bind(surname.as_str())
            .bind(patronymic.as_deref())
            .bind(age)
            .bind(gender.as_str())
            .bind(nationality.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, id: UserId, updates: &UpdateSpec) -> DomainResult<()> {
        let mut builder = update_by_id(id, updates);
        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn exists(&self, id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
