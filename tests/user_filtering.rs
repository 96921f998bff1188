mod support;

use std::collections::BTreeMap;
use std::sync::Arc;

use roster_core::application::error::ApplicationError;
use roster_core::application::queries::users::{GetUserQuery, SearchUsersQuery, UserQueryService};
use roster_core::domain::errors::DomainError;
use roster_core::domain::user::{FieldValue, UserRepository};
use support::builders;
use support::mocks::InMemoryUserRepo;

fn seeded_service() -> UserQueryService {
    let repo = Arc::new(InMemoryUserRepo::with_users(vec![
        builders::user(1, "Artem", "Filin"),
        builders::user(2, "Dmitry", "Okunev"),
        builders::user(3, "Igor", "Filin"),
    ]));
    UserQueryService::new(repo as Arc<dyn UserRepository>)
}

fn text_values(values: &[&str]) -> Vec<FieldValue> {
    values
        .iter()
        .map(|v| FieldValue::Text((*v).to_string()))
        .collect()
}

#[tokio::test]
async fn matches_are_or_within_a_field_and_and_across_fields() {
    let service = seeded_service();

    let mut filter = BTreeMap::new();
    filter.insert("name".to_string(), text_values(&["Artem", "Dmitry"]));
    filter.insert("surname".to_string(), text_values(&["Filin", "Okunev"]));

    let page = service
        .search(SearchUsersQuery {
            offset: 0,
            limit: 10,
            filter,
        })
        .await
        .unwrap();

    // Igor Filin matches the surname group but not the name group.
    let ids: Vec<i64> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn empty_filter_returns_the_ordered_window() {
    let service = seeded_service();

    let page = service
        .search(SearchUsersQuery {
            offset: 1,
            limit: 2,
            filter: BTreeMap::new(),
        })
        .await
        .unwrap();

    let ids: Vec<i64> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(page.offset, 1);
    assert_eq!(page.limit, 2);
}

#[tokio::test]
async fn window_applies_before_the_filter() {
    let service = seeded_service();

    let mut filter = BTreeMap::new();
    filter.insert("name".to_string(), text_values(&["Artem"]));

    // Artem is the first row, so a window starting at offset 1 excludes him
    // even though the filter would match.
    let page = service
        .search(SearchUsersQuery {
            offset: 1,
            limit: 10,
            filter,
        })
        .await
        .unwrap();

    assert!(page.items.is_empty());
}

#[tokio::test]
async fn empty_keys_and_empty_value_lists_are_ignored() {
    let service = seeded_service();

    let mut filter = BTreeMap::new();
    filter.insert("".to_string(), text_values(&["whatever"]));
    filter.insert("name".to_string(), vec![]);

    let page = service
        .search(SearchUsersQuery {
            offset: 0,
            limit: 10,
            filter,
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 3);
}

#[tokio::test]
async fn unknown_filter_field_is_rejected() {
    let service = seeded_service();

    let mut filter = BTreeMap::new();
    filter.insert("role".to_string(), text_values(&["admin"]));

    let err = service
        .search(SearchUsersQuery {
            offset: 0,
            limit: 10,
            filter,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn filtering_by_integer_fields_works() {
    let service = seeded_service();

    let mut filter = BTreeMap::new();
    filter.insert(
        "id".to_string(),
        vec![FieldValue::Int(1), FieldValue::Int(3)],
    );

    let page = service
        .search(SearchUsersQuery {
            offset: 0,
            limit: 10,
            filter,
        })
        .await
        .unwrap();

    let ids: Vec<i64> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn negative_offset_is_rejected() {
    let service = seeded_service();

    let err = service
        .search(SearchUsersQuery {
            offset: -1,
            limit: 10,
            filter: BTreeMap::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn zero_limit_is_rejected() {
    let service = seeded_service();

    let err = service
        .search(SearchUsersQuery {
            offset: 0,
            limit: 0,
            filter: BTreeMap::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn get_by_id_reports_not_found_for_absent_users() {
    let service = seeded_service();

    let found = service.get_by_id(GetUserQuery { user_id: 2 }).await.unwrap();
    assert_eq!(found.name, "Dmitry");

    let err = service
        .get_by_id(GetUserQuery { user_id: 99 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
