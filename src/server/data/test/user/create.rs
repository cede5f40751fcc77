use super::*;

/// Tests creating a user with every field supplied.
///
/// Verifies that the repository inserts the user and returns it with a generated id
/// and the stored values.
///
/// Expected: Ok with user persisted
#[tokio::test]
async fn creates_user_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "luke@rebellion.org".to_string(),
            password: "x-wing".to_string(),
            first_name: Some("Luke".to_string()),
            last_name: Some("Skywalker".to_string()),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "luke@rebellion.org");
    assert_eq!(user.first_name.as_deref(), Some("Luke"));

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().password, "x-wing");

    Ok(())
}

/// Tests creating a user without optional names.
///
/// Verifies that first and last name are stored as NULL when omitted.
///
/// Expected: Ok with name fields None
#[tokio::test]
async fn creates_user_without_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "leia@alderaan.gov".to_string(),
            password: "hope".to_string(),
            first_name: None,
            last_name: None,
        })
        .await?;

    assert!(user.first_name.is_none());
    assert!(user.last_name.is_none());

    Ok(())
}

/// Tests that consecutive creates receive distinct ids.
///
/// Expected: Ok with increasing ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            email: "han@falcon.com".to_string(),
            password: "kessel".to_string(),
            first_name: None,
            last_name: None,
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            email: "chewie@falcon.com".to_string(),
            password: "rrraugh".to_string(),
            first_name: None,
            last_name: None,
        })
        .await?;

    assert!(second.id > first.id);

    Ok(())
}
