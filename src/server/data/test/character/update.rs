use super::*;

/// Tests renaming a character.
///
/// Expected: Ok(Some) with new name and description kept
#[tokio::test]
async fn renames_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Ben Kenobi")
        .description("Hermit")
        .build()
        .await?;

    let updated = CharacterRepository::new(db)
        .update(
            created.id,
            UpdateCharacterParam {
                name: Some("Obi-Wan Kenobi".to_string()),
                description: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Obi-Wan Kenobi");
    assert_eq!(updated.description.as_deref(), Some("Hermit"));

    Ok(())
}

/// Tests updating a character that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CharacterRepository::new(db)
        .update(1, UpdateCharacterParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
