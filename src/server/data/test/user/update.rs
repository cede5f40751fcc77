use super::*;

/// Tests updating a single field of a user.
///
/// Verifies that only the supplied field changes and the others keep their values.
///
/// Expected: Ok(Some) with email changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .first_name("Anakin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateUserParam {
                email: Some("vader@empire.gov".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.email, "vader@empire.gov");
    assert_eq!(updated.first_name.as_deref(), Some("Anakin"));
    assert_eq!(updated.password, created.password);

    let db_user = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_user.email, "vader@empire.gov");

    Ok(())
}

/// Tests applying an empty patch.
///
/// Expected: Ok(Some) with the user unchanged
#[tokio::test]
async fn empty_patch_leaves_user_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(created.id, UpdateUserParam::default())
        .await?
        .unwrap();

    assert_eq!(result.email, created.email);
    assert_eq!(result.first_name, created.first_name);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(
            42,
            UpdateUserParam {
                email: Some("nobody@nowhere".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests clearing the first name of a user.
///
/// Expected: Ok(Some) with first_name None and the email kept
#[tokio::test]
async fn clears_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .first_name("Ben")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            created.id,
            UpdateUserParam {
                first_name: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, None);
    assert_eq!(updated.email, created.email);

    Ok(())
}
