use super::*;

/// Tests creating a character.
///
/// Verifies that the character is inserted and can be read back by id.
///
/// Expected: Ok with character persisted
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParam {
            name: "Yoda".to_string(),
            description: Some("Jedi Master".to_string()),
        })
        .await?;

    assert_eq!(character.name, "Yoda");

    let db_character = entity::prelude::Character::find_by_id(character.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_character.description.as_deref(), Some("Jedi Master"));

    let found = repo.find_by_id(character.id).await?;
    assert_eq!(found, Some(character));

    Ok(())
}
