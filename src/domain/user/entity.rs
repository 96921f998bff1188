// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PersonName, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    pub surname: PersonName,
    pub patronymic: Option<String>,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

/// A user about to be persisted. The demographic fields stay at their zero
/// values until the enrichment pipeline fills them in.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: PersonName,
    pub surname: PersonName,
    pub patronymic: Option<String>,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

impl NewUser {
    pub fn new(name: PersonName, surname: PersonName, patronymic: Option<String>) -> Self {
        Self {
            name,
            surname,
            patronymic,
            age: 0,
            gender: String::new(),
            nationality: String::new(),
        }
    }
}
