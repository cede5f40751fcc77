use super::*;

/// Tests listing characters.
///
/// Expected: Ok with characters ordered by id
#[tokio::test]
async fn returns_characters_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_character(db).await?;
    let second = factory::create_character(db).await?;

    let characters = CharacterRepository::new(db).get_all().await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
