use super::*;

/// Tests counting favorites that reference a character.
///
/// Expected: Ok with count matching the number of favorites created
#[tokio::test]
async fn counts_favorites_referencing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _) =
        factory::helpers::create_character_favorite_with_dependencies(db).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(
        repo.count_referencing(Column::CharacterId, character.id)
            .await?,
        2
    );
    assert_eq!(repo.count_referencing(Column::UserId, user.id).await?, 2);
    assert_eq!(repo.count_referencing(Column::PlanetId, 1).await?, 0);

    Ok(())
}
