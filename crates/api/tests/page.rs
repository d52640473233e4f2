//! Integration tests for the server-rendered HTML page and its form posts.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, build_app_without_schema, build_test_app, get, post_empty, post_form};
use promptbase_core::prompt::ListQuery;
use promptbase_db::models::prompt::CreatePrompt;
use promptbase_db::repositories::PromptRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn index_renders_empty_state(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>Promptbase</h1>"));
    assert!(html.contains("No prompts found."));
}

#[sqlx::test(migrations = false)]
async fn form_create_redirects_and_lists(pool: PgPool) {
    let app = build_test_app(pool.clone()).await;
    let response = post_form(
        app,
        "/prompts",
        "title=Trip&prompt=Describe+your+last+trip.&genre=Non-fiction&activity=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let rows = PromptRepo::list(&pool, &ListQuery::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].activity, None);

    let html = body_text(get(build_app_without_schema(pool), "/").await).await;
    assert!(html.contains("Trip - Non-fiction (Not Favorite)"));
}

#[sqlx::test(migrations = false)]
async fn form_toggle_and_delete(pool: PgPool) {
    build_test_app(pool.clone()).await;
    let id = PromptRepo::insert(
        &pool,
        &promptbase_db::models::prompt::CreatePrompt {
            title: "Trip".to_string(),
            prompt: "Describe your last trip.".to_string(),
            genre: "Non-fiction".to_string(),
            activity: Some("Travel".to_string()),
        },
    )
    .await
    .unwrap();

    let response = post_empty(
        build_app_without_schema(pool.clone()),
        &format!("/prompts/{id}/favorite"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(PromptRepo::find_by_id(&pool, id).await.unwrap().unwrap().is_favorite);

    let response = post_empty(
        build_app_without_schema(pool.clone()),
        &format!("/prompts/{id}/delete"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(PromptRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
async fn index_rejects_unknown_sort(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/?sort=updated_at").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

async fn insert_trip(pool: &PgPool) -> i64 {
    PromptRepo::insert(
        pool,
        &CreatePrompt {
            title: "Trip".to_string(),
            prompt: "Describe your last trip.".to_string(),
            genre: "Non-fiction".to_string(),
            activity: Some("Travel".to_string()),
        },
    )
    .await
    .unwrap()
}

fn is_html(response: &axum::http::Response<axum::body::Body>) -> bool {
    response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html")
}

#[sqlx::test(migrations = false)]
async fn edit_page_is_prefilled(pool: PgPool) {
    build_test_app(pool.clone()).await;
    let id = insert_trip(&pool).await;

    let response = get(build_app_without_schema(pool), &format!("/prompts/{id}/edit")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(&format!("action=\"/prompts/{id}\"")));
    assert!(html.contains("value=\"Trip\""));
    assert!(html.contains(">Describe your last trip.</textarea>"));
    assert!(html.contains("value=\"Travel\""));
}

#[sqlx::test(migrations = false)]
async fn edit_page_for_missing_prompt_is_html_404(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/prompts/9999/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(is_html(&response));
    assert!(body_text(response).await.contains("Prompt with id 9999 not found"));
}

#[sqlx::test(migrations = false)]
async fn form_update_overwrites_fields_and_redirects(pool: PgPool) {
    build_test_app(pool.clone()).await;
    let id = insert_trip(&pool).await;

    let response = post_form(
        build_app_without_schema(pool.clone()),
        &format!("/prompts/{id}"),
        "title=Road+trip&prompt=Describe+the+drive.&genre=Memoir&activity=&is_favorite=true",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let row = PromptRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.title, "Road trip");
    assert_eq!(row.prompt, "Describe the drive.");
    assert_eq!(row.genre, "Memoir");
    assert_eq!(row.activity, None);
    assert!(row.is_favorite);
    assert!(row.updated_at >= row.created_at);
}

#[sqlx::test(migrations = false)]
async fn form_update_without_checkbox_clears_favorite(pool: PgPool) {
    build_test_app(pool.clone()).await;
    let id = insert_trip(&pool).await;
    PromptRepo::toggle_favorite(&pool, id).await.unwrap();

    let response = post_form(
        build_app_without_schema(pool.clone()),
        &format!("/prompts/{id}"),
        "title=Trip&prompt=Describe+your+last+trip.&genre=Non-fiction&activity=Travel",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let row = PromptRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(!row.is_favorite);
    assert_eq!(row.activity.as_deref(), Some("Travel"));
}

#[sqlx::test(migrations = false)]
async fn form_create_with_blank_title_renders_html_error(pool: PgPool) {
    let app = build_test_app(pool.clone()).await;
    let response = post_form(
        app,
        "/prompts",
        "title=+++&prompt=Describe+your+last+trip.&genre=Non-fiction",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(is_html(&response));

    let html = body_text(response).await;
    assert!(html.contains("title must not be empty"));
    assert!(html.contains("href=\"/\""));
    assert_eq!(PromptRepo::count(&pool).await.unwrap(), 0);
}
