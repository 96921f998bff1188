// tests/support/builders.rs
use roster_core::domain::user::{PersonName, User, UserId};

pub fn user(id: i64, name: &str, surname: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: PersonName::new(name).unwrap(),
        surname: PersonName::new(surname).unwrap(),
        patronymic: None,
        age: 0,
        gender: String::new(),
        nationality: String::new(),
    }
}
