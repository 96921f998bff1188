use crate::domain::errors::DomainError;

const CNT_USER_NAME_BLANK: &str = "users_name_not_blank_chk";
const CNT_USER_SURNAME_BLANK: &str = "users_surname_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_NAME_BLANK => DomainError::Validation("name cannot be empty".into()),
                    CNT_USER_SURNAME_BLANK => {
                        DomainError::Validation("surname cannot be empty".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
