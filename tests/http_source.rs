use std::sync::Arc;

use larder::{
    FavoriteSnapshot, FavoriteStore, HttpSource, LarderError, MemoryStore, Recipe, RemoteSource,
    Resolver,
};

fn source_for(server: &mockito::Server) -> HttpSource {
    HttpSource::with_base_url(server.url()).unwrap()
}

#[tokio::test]
async fn test_list_categories() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/categories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "categories": [
                    {"name": "Pasta", "thumbnail": "https://example.com/pasta.jpg", "description": "Noodles"},
                    {"name": "Dessert"}
                ]
            }"#,
        )
        .create();

    let categories = source_for(&server).list_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Pasta");
    // Omitted fields default to empty rather than failing the payload.
    assert_eq!(categories[1].thumbnail, "");
}

#[tokio::test]
async fn test_list_by_category_sends_query_and_parses_summaries() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .match_query(mockito::Matcher::UrlEncoded(
            "category".into(),
            "Pasta".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "recipes": [
                    {"id": "1", "title": "Carbonara", "thumbnail": "https://example.com/c.jpg"},
                    {"id": "2", "title": "Arrabiata"}
                ]
            }"#,
        )
        .create();

    let summaries = source_for(&server)
        .list_by_category("Pasta")
        .await
        .unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].title, "Arrabiata");
    mock.assert();
}

#[tokio::test]
async fn test_list_by_category_null_list_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": null}"#)
        .create();

    let err = source_for(&server)
        .list_by_category("Nope")
        .await
        .unwrap_err();
    assert!(matches!(err, LarderError::EmptyResult));
}

#[tokio::test]
async fn test_lookup_by_id_returns_raw_record() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/52772")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "recipes": [{
                    "id": "52772",
                    "title": "Teriyaki Chicken Casserole",
                    "instructions": "Preheat oven to 350F.",
                    "thumbnail": "https://example.com/teriyaki.jpg",
                    "ingredient1": "soy sauce",
                    "measure1": "3/4 cup",
                    "ingredient2": "water",
                    "measure2": "1/2 cup",
                    "ingredient3": null,
                    "measure3": null
                }]
            }"#,
        )
        .create();

    let record = source_for(&server).lookup_by_id("52772").await.unwrap();
    let recipe = record.decode();
    assert_eq!(recipe.title, "Teriyaki Chicken Casserole");
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].name, "soy sauce");
}

#[tokio::test]
async fn test_lookup_by_id_null_list_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/99999")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": null}"#)
        .create();

    let err = source_for(&server).lookup_by_id("99999").await.unwrap_err();
    assert!(matches!(err, LarderError::NotFound(_)));
}

#[tokio::test]
async fn test_http_404_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/1")
        .with_status(404)
        .create();

    let err = source_for(&server).lookup_by_id("1").await.unwrap_err();
    assert!(matches!(err, LarderError::NotFound(_)));
}

#[tokio::test]
async fn test_http_500_maps_to_status() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/categories")
        .with_status(500)
        .create();

    let err = source_for(&server).list_categories().await.unwrap_err();
    assert!(matches!(err, LarderError::Status(500)));
}

#[tokio::test]
async fn test_unparseable_body_maps_to_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/categories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .create();

    let err = source_for(&server).list_categories().await.unwrap_err();
    assert!(matches!(err, LarderError::Malformed(_)));
}

#[tokio::test]
async fn test_favorited_recipe_resolves_without_any_request() {
    let mut server = mockito::Server::new_async().await;
    // The server would fail every lookup; a stored snapshot must shield it.
    let mock = server
        .mock("GET", "/recipes/42")
        .with_status(500)
        .expect(0)
        .create();

    let store = Arc::new(MemoryStore::new());
    store
        .save(FavoriteSnapshot::new(Recipe {
            id: "42".to_string(),
            title: "Stored Stew".to_string(),
            instructions: "Reheat gently.".to_string(),
            thumbnail: String::new(),
            ingredients: Vec::new(),
        }))
        .await
        .unwrap();

    let resolver = Resolver::new(Arc::new(source_for(&server)), store);
    let resolved = resolver.fetch_recipe("42").await.unwrap();

    assert!(resolved.is_favorite);
    assert_eq!(resolved.recipe.title, "Stored Stew");
    mock.assert();
}
