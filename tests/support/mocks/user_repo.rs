// tests/support/mocks/user_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use roster_core::domain::errors::DomainResult;
use roster_core::domain::user::{
    FieldValue, FilterSpec, NewUser, PersonName, UpdateSpec, User, UserId, UserRepository,
};

/// In-memory stand-in for the Postgres repository, implementing the same
/// window-before-filter and AND-of-ORs semantics as the SQL builders.
pub struct InMemoryUserRepo {
    inner: Mutex<BTreeMap<i64, User>>,
    next_id: Mutex<i64>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(0),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let max_id = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0);
        Self {
            inner: Mutex::new(users.into_iter().map(|u| (i64::from(u.id), u)).collect()),
            next_id: Mutex::new(max_id),
        }
    }

    pub fn snapshot(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

fn group_matches(user: &User, field: &str, values: &[FieldValue]) -> bool {
    values.iter().any(|value| match (field, value) {
        ("id", FieldValue::Int(v)) => i64::from(user.id) == *v,
        ("name", FieldValue::Text(v)) => user.name.as_str() == v,
        ("surname", FieldValue::Text(v)) => user.surname.as_str() == v,
        ("patronymic", FieldValue::Text(v)) => user.patronymic.as_deref() == Some(v.as_str()),
        ("age", FieldValue::Int(v)) => i64::from(user.age) == *v,
        ("gender", FieldValue::Text(v)) => user.gender == *v,
        ("nationality", FieldValue::Text(v)) => user.nationality == *v,
        _ => false,
    })
}

fn apply_change(user: &mut User, field: &str, value: &FieldValue) {
    match (field, value) {
        ("name", FieldValue::Text(v)) => user.name = PersonName::new(v.clone()).unwrap(),
        ("surname", FieldValue::Text(v)) => user.surname = PersonName::new(v.clone()).unwrap(),
        ("patronymic", FieldValue::Text(v)) => user.patronymic = Some(v.clone()),
        ("age", FieldValue::Int(v)) => user.age = *v as i32,
        ("gender", FieldValue::Text(v)) => user.gender = v.clone(),
        ("nationality", FieldValue::Text(v)) => user.nationality = v.clone(),
        _ => {}
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn get_filtered(
        &self,
        filter: &FilterSpec,
        offset: i64,
        limit: i64,
    ) -> DomainResult<Vec<User>> {
        let map = self.inner.lock().unwrap();
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        // Window the id-ordered set first, then filter, like the SQL does.
        Ok(map
            .values()
            .skip(offset)
            .take(limit)
            .filter(|user| {
                filter
                    .groups()
                    .all(|(field, values)| group_matches(user, field, values))
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let matches = self
            .get_filtered(&FilterSpec::by_id(id), 0, i64::MAX)
            .await?;
        Ok(matches.into_iter().next())
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let user = User {
            id: UserId::new(*next_id).unwrap(),
            name: new_user.name,
            surname: new_user.surname,
            patronymic: new_user.patronymic,
            age: new_user.age,
            gender: new_user.gender,
            nationality: new_user.nationality,
        };
        self.inner.lock().unwrap().insert(*next_id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, updates: &UpdateSpec) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        // Zero matched rows is a silent no-op, as in the SQL path.
        if let Some(user) = map.get_mut(&i64::from(id)) {
            for (field, value) in updates.changes() {
                apply_change(user, field, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.inner.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }

    async fn exists(&self, id: UserId) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().contains_key(&i64::from(id)))
    }
}
