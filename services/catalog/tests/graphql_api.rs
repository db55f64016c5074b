//! End-to-end tests of the GraphQL schema over the in-process store

use async_graphql::{Request, Variables};
use catalog::{
    graphql::{CatalogSchema, build_schema},
    jwt::{JwtConfig, JwtService},
    models::MovieFilter,
    state::AppState,
};
use serde_json::{Value, json};

const MOVIE_FIELDS: &str = "id name genre rate year imgSrc trailerId description directorId";
const DIRECTOR_FIELDS: &str = "id name age imgSrc born bornPlace career genres height imdbSrc moviesCount moviesYears";

fn setup() -> (CatalogSchema, AppState) {
    let jwt_service = JwtService::new(JwtConfig::new("test-secret")).unwrap();
    let state = AppState::in_memory(jwt_service);
    (build_schema(state.clone()), state)
}

/// Run a request and return the serialized response (`data` and `errors`)
async fn run(schema: &CatalogSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    serde_json::to_value(schema.execute(request).await).unwrap()
}

/// Run a request that must succeed and return its data
async fn data(schema: &CatalogSchema, query: &str, variables: Value) -> Value {
    let response = run(schema, query, variables).await;
    assert!(
        response.get("errors").is_none(),
        "unexpected errors: {}",
        response["errors"]
    );
    response["data"].clone()
}

fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
}

fn movie_vars(name: &str, director_id: Option<&str>) -> Value {
    json!({
        "name": name,
        "genre": "Sci-Fi",
        "rate": 8.8,
        "year": 2010,
        "imgSrc": format!("https://img.example/{name}.jpg"),
        "trailerId": "YoHD9XEInc0",
        "description": "A thief who steals corporate secrets",
        "directorId": director_id,
    })
}

async fn add_movie(schema: &CatalogSchema, name: &str, director_id: Option<&str>) -> Value {
    let query = format!(
        r#"mutation($name: String!, $genre: String!, $rate: Float!, $year: Int!, $imgSrc: String!,
                    $trailerId: String!, $description: String!, $directorId: String) {{
            addMovie(name: $name, genre: $genre, rate: $rate, year: $year, imgSrc: $imgSrc,
                     trailerId: $trailerId, description: $description, directorId: $directorId) {{
                {MOVIE_FIELDS}
            }}
        }}"#
    );
    data(schema, &query, movie_vars(name, director_id)).await["addMovie"].clone()
}

async fn add_director(schema: &CatalogSchema, name: &str) -> Value {
    let query = format!(
        r#"mutation($name: String!) {{
            addDirector(name: $name, age: 54, imgSrc: "https://img.example/nolan.jpg",
                        born: "30 July 1970", bornPlace: "London", career: "Director, writer",
                        genres: "Sci-Fi, Thriller", height: 1.81, imdbSrc: "https://imdb.example/nm0634240",
                        moviesCount: 12, moviesYears: "1998-2023") {{
                {DIRECTOR_FIELDS}
            }}
        }}"#
    );
    data(schema, &query, json!({ "name": name })).await["addDirector"].clone()
}

#[tokio::test]
async fn add_movie_assigns_id_and_keeps_fields() {
    let (schema, _) = setup();

    let first = add_movie(&schema, "Inception", Some("any-director")).await;
    let second = add_movie(&schema, "Tenet", None).await;

    assert!(!first["id"].as_str().unwrap().is_empty());
    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["name"], "Inception");
    assert_eq!(first["genre"], "Sci-Fi");
    assert_eq!(first["rate"], 8.8);
    assert_eq!(first["year"], 2010);
    assert_eq!(first["imgSrc"], "https://img.example/Inception.jpg");
    assert_eq!(first["trailerId"], "YoHD9XEInc0");
    assert_eq!(first["description"], "A thief who steals corporate secrets");
    assert_eq!(first["directorId"], "any-director");
    assert_eq!(second["directorId"], Value::Null);
}

#[tokio::test]
async fn add_director_assigns_id_and_keeps_fields() {
    let (schema, _) = setup();

    let director = add_director(&schema, "Christopher Nolan").await;

    assert!(!director["id"].as_str().unwrap().is_empty());
    assert_eq!(director["name"], "Christopher Nolan");
    assert_eq!(director["age"], 54);
    assert_eq!(director["born"], "30 July 1970");
    assert_eq!(director["bornPlace"], "London");
    assert_eq!(director["height"], 1.81);
    assert_eq!(director["moviesCount"], 12);
    assert_eq!(director["moviesYears"], "1998-2023");

    let query = format!("query($id: ID) {{ director(id: $id) {{ {DIRECTOR_FIELDS} }} }}");
    let fetched = data(&schema, &query, json!({ "id": director["id"] })).await;
    assert_eq!(fetched["director"], director);
}

#[tokio::test]
async fn add_movie_without_required_field_is_rejected_before_the_store() {
    let (schema, state) = setup();

    let response = run(
        &schema,
        r#"mutation {
            addMovie(name: "Inception", genre: "Sci-Fi", year: 2010, imgSrc: "x",
                     trailerId: "t", description: "d") { id }
        }"#,
        json!({}),
    )
    .await;

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(response["data"], Value::Null);
    let stored = state
        .movie_repository
        .list(&MovieFilter::default())
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn add_director_with_mistyped_field_is_rejected_before_the_store() {
    let (schema, state) = setup();

    let response = run(
        &schema,
        r#"mutation { addDirector(name: "Nolan", age: "fifty", imgSrc: "x") { id } }"#,
        json!({}),
    )
    .await;

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert!(state.director_repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn movie_lookup_round_trips_and_unknown_ids_are_null() {
    let (schema, _) = setup();
    let query = format!("query($id: ID) {{ movie(id: $id) {{ {MOVIE_FIELDS} }} }}");

    let missing = data(
        &schema,
        &query,
        json!({ "id": "00000000-0000-4000-8000-000000000000" }),
    )
    .await;
    assert_eq!(missing["movie"], Value::Null);

    let malformed = data(&schema, &query, json!({ "id": "not-an-id" })).await;
    assert_eq!(malformed["movie"], Value::Null);

    let created = add_movie(&schema, "Memento", None).await;
    let fetched = data(&schema, &query, json!({ "id": created["id"] })).await;
    assert_eq!(fetched["movie"], created);
}

#[tokio::test]
async fn update_director_changes_only_declared_fields() {
    let (schema, _) = setup();
    let director = add_director(&schema, "Chris Nolan").await;

    let query = format!(
        r#"mutation($id: ID) {{
            updateDirector(id: $id, name: "Christopher Nolan", age: 55, imgSrc: "https://img.example/new.jpg") {{
                {DIRECTOR_FIELDS}
            }}
        }}"#
    );
    let updated = data(&schema, &query, json!({ "id": director["id"] })).await["updateDirector"]
        .clone();

    assert_eq!(updated["id"], director["id"]);
    assert_eq!(updated["name"], "Christopher Nolan");
    assert_eq!(updated["age"], 55);
    assert_eq!(updated["imgSrc"], "https://img.example/new.jpg");
    for field in [
        "born",
        "bornPlace",
        "career",
        "genres",
        "height",
        "imdbSrc",
        "moviesCount",
        "moviesYears",
    ] {
        assert_eq!(updated[field], director[field], "{field} changed");
    }
}

#[tokio::test]
async fn update_movie_keeps_description_trailer_and_director() {
    let (schema, _) = setup();
    let movie = add_movie(&schema, "Interstellar", Some("nolan")).await;

    let query = format!(
        r#"mutation($id: ID) {{
            updateMovie(id: $id, name: "Interstellar (IMAX)", genre: "Adventure", rate: 8.7,
                        year: 2014, imgSrc: "https://img.example/imax.jpg") {{
                {MOVIE_FIELDS}
            }}
        }}"#
    );
    let updated =
        data(&schema, &query, json!({ "id": movie["id"] })).await["updateMovie"].clone();

    assert_eq!(updated["name"], "Interstellar (IMAX)");
    assert_eq!(updated["genre"], "Adventure");
    assert_eq!(updated["year"], 2014);
    assert_eq!(updated["trailerId"], movie["trailerId"]);
    assert_eq!(updated["description"], movie["description"]);
    assert_eq!(updated["directorId"], "nolan");
}

#[tokio::test]
async fn update_movie_moves_to_a_new_director() {
    let (schema, _) = setup();
    let director = add_director(&schema, "Denis Villeneuve").await;
    let movie = add_movie(&schema, "Dune", Some("old-director")).await;

    let updated = data(
        &schema,
        r#"mutation($id: ID, $directorId: String) {
            updateMovie(id: $id, name: "Dune", genre: "Sci-Fi", rate: 8.0, year: 2021,
                        imgSrc: "https://img.example/dune.jpg", directorId: $directorId) {
                directorId
                director { id name }
            }
        }"#,
        json!({ "id": movie["id"], "directorId": director["id"] }),
    )
    .await["updateMovie"]
        .clone();

    assert_eq!(updated["directorId"], director["id"]);
    assert_eq!(updated["director"]["id"], director["id"]);
    assert_eq!(updated["director"]["name"], "Denis Villeneuve");
}

#[tokio::test]
async fn update_movie_with_null_director_clears_the_reference() {
    let (schema, _) = setup();
    let movie = add_movie(&schema, "Memento", Some("old")).await;

    let updated = data(
        &schema,
        r#"mutation($id: ID) {
            updateMovie(id: $id, name: "Memento", genre: "Thriller", rate: 8.4, year: 2000,
                        imgSrc: "https://img.example/memento.jpg", directorId: null) {
                directorId
                director { id }
            }
        }"#,
        json!({ "id": movie["id"] }),
    )
    .await["updateMovie"]
        .clone();

    assert_eq!(updated["directorId"], Value::Null);
    assert_eq!(updated["director"], Value::Null);

    let fetched = data(
        &schema,
        "query($id: ID) { movie(id: $id) { directorId } }",
        json!({ "id": movie["id"] }),
    )
    .await;
    assert_eq!(fetched["movie"]["directorId"], Value::Null);
}

#[tokio::test]
async fn update_and_delete_of_unknown_ids_return_null() {
    let (schema, _) = setup();
    let id = "00000000-0000-4000-8000-000000000000";

    let response = data(
        &schema,
        r#"mutation($id: ID) {
            updateDirector(id: $id, name: "x", age: 1, imgSrc: "x") { id }
            updateMovie(id: $id, name: "x", genre: "x", rate: 1.0, year: 1, imgSrc: "x") { id }
            deleteDirector(id: $id) { id }
            deleteMovie(id: $id) { id }
        }"#,
        json!({ "id": id }),
    )
    .await;

    assert_eq!(response["updateDirector"], Value::Null);
    assert_eq!(response["updateMovie"], Value::Null);
    assert_eq!(response["deleteDirector"], Value::Null);
    assert_eq!(response["deleteMovie"], Value::Null);
}

#[tokio::test]
async fn deleted_movie_is_no_longer_found() {
    let (schema, _) = setup();
    let movie = add_movie(&schema, "Dunkirk", None).await;

    let deleted = data(
        &schema,
        "mutation($id: ID) { deleteMovie(id: $id) { id name } }",
        json!({ "id": movie["id"] }),
    )
    .await;
    assert_eq!(deleted["deleteMovie"]["id"], movie["id"]);
    assert_eq!(deleted["deleteMovie"]["name"], "Dunkirk");

    let fetched = data(
        &schema,
        "query($id: ID) { movie(id: $id) { id } }",
        json!({ "id": movie["id"] }),
    )
    .await;
    assert_eq!(fetched["movie"], Value::Null);
}

#[tokio::test]
async fn movies_are_paginated_in_store_order() {
    let (schema, _) = setup();
    for i in 0..10 {
        add_movie(&schema, &format!("Movie {i}"), None).await;
    }

    let page = data(&schema, "{ movies(offset: 2, limit: 3) { name } }", json!({})).await;
    assert_eq!(
        page["movies"],
        json!([{ "name": "Movie 2" }, { "name": "Movie 3" }, { "name": "Movie 4" }])
    );

    let first = data(&schema, "{ movies(limit: 2) { name } }", json!({})).await;
    assert_eq!(
        first["movies"],
        json!([{ "name": "Movie 0" }, { "name": "Movie 1" }])
    );

    let all = data(&schema, "{ movies { name } }", json!({})).await;
    assert_eq!(all["movies"].as_array().unwrap().len(), 10);

    let tail = data(&schema, "{ movies(offset: 8, limit: 5) { name } }", json!({})).await;
    assert_eq!(tail["movies"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn negative_pagination_is_a_validation_error() {
    let (schema, _) = setup();

    let response = run(&schema, "{ movies(offset: -1, limit: 3) { name } }", json!({})).await;
    assert_eq!(error_code(&response), "VALIDATION_ERROR");
}

#[tokio::test]
async fn directors_lists_every_director() {
    let (schema, _) = setup();
    add_director(&schema, "Denis Villeneuve").await;
    add_director(&schema, "Greta Gerwig").await;

    let response = data(&schema, "{ directors { name } }", json!({})).await;
    assert_eq!(
        response["directors"],
        json!([{ "name": "Denis Villeneuve" }, { "name": "Greta Gerwig" }])
    );
}

#[tokio::test]
async fn movie_director_relation_resolves_and_tolerates_dangling_ids() {
    let (schema, _) = setup();
    let director = add_director(&schema, "Christopher Nolan").await;
    let director_id = director["id"].as_str().unwrap();
    let movie = add_movie(&schema, "The Prestige", Some(director_id)).await;
    let orphan = add_movie(&schema, "Orphan", Some("5f0c1e2d3b4a596877665544")).await;

    let query = format!(
        "query($id: ID) {{ movie(id: $id) {{ name director {{ {DIRECTOR_FIELDS} }} }} }}"
    );
    let resolved = data(&schema, &query, json!({ "id": movie["id"] })).await;
    assert_eq!(resolved["movie"]["director"], director);

    let dangling = data(&schema, &query, json!({ "id": orphan["id"] })).await;
    assert_eq!(dangling["movie"]["name"], "Orphan");
    assert_eq!(dangling["movie"]["director"], Value::Null);

    data(
        &schema,
        "mutation($id: ID) { deleteDirector(id: $id) { id } }",
        json!({ "id": director_id }),
    )
    .await;
    let after_delete = data(&schema, &query, json!({ "id": movie["id"] })).await;
    assert_eq!(after_delete["movie"]["name"], "The Prestige");
    assert_eq!(after_delete["movie"]["director"], Value::Null);
}

#[tokio::test]
async fn director_movies_relation_lists_referencing_movies() {
    let (schema, _) = setup();
    let director = add_director(&schema, "Christopher Nolan").await;
    let director_id = director["id"].as_str().unwrap();
    add_movie(&schema, "Insomnia", Some(director_id)).await;
    add_movie(&schema, "Arrival", Some("someone-else")).await;
    add_movie(&schema, "Oppenheimer", Some(director_id)).await;

    let response = data(
        &schema,
        "query($id: ID) { director(id: $id) { movies { name } } }",
        json!({ "id": director_id }),
    )
    .await;
    assert_eq!(
        response["director"]["movies"],
        json!([{ "name": "Insomnia" }, { "name": "Oppenheimer" }])
    );
}

const SIGN_UP: &str = r#"mutation($email: String!, $password: String!) {
    signUp(email: $email, password: $password) { id email password isAdmin token }
}"#;

const LOGIN: &str = r#"mutation($email: String!, $password: String!) {
    login(email: $email, password: $password) { id email isAdmin token }
}"#;

#[tokio::test]
async fn sign_up_returns_admin_user_without_hash() {
    let (schema, _) = setup();

    let response = data(
        &schema,
        SIGN_UP,
        json!({ "email": "ann@example.com", "password": "hunter2" }),
    )
    .await;
    let user = &response["signUp"];

    assert!(!user["id"].as_str().unwrap().is_empty());
    assert_eq!(user["email"], "ann@example.com");
    assert_eq!(user["isAdmin"], true);
    assert_eq!(user["password"], "******");
    assert_eq!(user["token"], Value::Null);
}

#[tokio::test]
async fn duplicate_sign_up_fails_and_keeps_the_first_password() {
    let (schema, _) = setup();
    let credentials = json!({ "email": "ann@example.com", "password": "hunter2" });
    data(&schema, SIGN_UP, credentials.clone()).await;

    let second = run(
        &schema,
        SIGN_UP,
        json!({ "email": "ann@example.com", "password": "other" }),
    )
    .await;
    assert_eq!(error_code(&second), "DUPLICATE_EMAIL");

    let login = data(&schema, LOGIN, credentials).await;
    assert_eq!(login["login"]["email"], "ann@example.com");
}

#[tokio::test]
async fn login_issues_a_one_hour_bearer_credential() {
    let (schema, state) = setup();
    let credentials = json!({ "email": "ann@example.com", "password": "hunter2" });
    let signed_up = data(&schema, SIGN_UP, credentials.clone()).await;

    let response = data(&schema, LOGIN, credentials).await;
    let login = &response["login"];
    assert_eq!(login["isAdmin"], true);
    assert_eq!(login["id"], signed_up["signUp"]["id"]);

    let token = login["token"].as_str().unwrap();
    assert!(token.starts_with("Bearer "));

    let claims = state
        .auth_service
        .jwt_service()
        .validate_token(token)
        .unwrap();
    assert_eq!(claims.email, "ann@example.com");
    assert_eq!(Value::from(claims.id), login["id"]);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn login_failures_are_distinct() {
    let (schema, _) = setup();
    data(
        &schema,
        SIGN_UP,
        json!({ "email": "ann@example.com", "password": "hunter2" }),
    )
    .await;

    let wrong_password = run(
        &schema,
        LOGIN,
        json!({ "email": "ann@example.com", "password": "hunter3" }),
    )
    .await;
    assert_eq!(error_code(&wrong_password), "INVALID_CREDENTIALS");

    let unknown = run(
        &schema,
        LOGIN,
        json!({ "email": "bob@example.com", "password": "hunter2" }),
    )
    .await;
    assert_eq!(error_code(&unknown), "USER_NOT_FOUND");
}
