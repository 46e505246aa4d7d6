//! End-to-end tests for the post list view against a mock WordPress site.

mod common;

use std::time::Duration;

use common::{categories_json, mount_categories, mount_posts_page, post_json, posts_page, POSTS_PATH};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wp_post_viewer::components::{PostListPage, Render};
use wp_post_viewer::config::Config;
use wp_post_viewer::view::{PostListView, ViewStatus};
use wp_post_viewer::wp::WpClient;

fn view_for(server: &MockServer) -> PostListView<WpClient> {
    let config = Config::with_base_url(&server.uri());
    let client = WpClient::new(&config).expect("Failed to build client");
    PostListView::with_per_page(client, config.posts_per_page)
}

#[tokio::test]
async fn test_each_page_holds_at_most_ten_posts() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    mount_posts_page(&server, 1, 3, posts_page(1, 10)).await;
    mount_posts_page(&server, 2, 3, posts_page(11, 10)).await;
    mount_posts_page(&server, 3, 3, posts_page(21, 5)).await;

    let mut view = view_for(&server);
    for page in 1..=3 {
        view.load_page(page).await;
        let state = view.state();
        assert_eq!(state.current_page, page);
        assert_eq!(state.total_pages, 3);
        assert!(state.posts.len() <= 10);
        assert!(!state.loading);
    }
    assert_eq!(view.state().posts.len(), 5);
}

#[tokio::test]
async fn test_records_join_categories_and_format_dates() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    mount_posts_page(
        &server,
        1,
        1,
        json!([
            post_json(1, "Hello &amp; <em>World</em>", &[1, 2, 99], Some("https://blog.example.com/1.jpg")),
            post_json(2, "No categories", &[], None),
        ]),
    )
    .await;

    let mut view = view_for(&server);
    view.mount(1).await;

    let records = view.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Hello & World");
    assert_eq!(records[0].categories, "News, Tech");
    assert_eq!(records[0].published, "March 5, 2024");
    assert_eq!(records[0].image_url.as_deref(), Some("https://blog.example.com/1.jpg"));
    assert_eq!(records[1].categories, "Uncategorized");
    assert_eq!(records[1].image_url, None);

    let html = PostListPage::new(view.state()).render().into_string();
    assert_eq!(html.matches("<img").count(), 1);
    assert!(html.contains(r#"<button type="button" data-page="1" disabled>Prev</button>"#));
    assert!(html.contains(r#"<button type="button" data-page="1" disabled>Next</button>"#));
}

#[tokio::test]
async fn test_pagination_walks_forward_and_back() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    mount_posts_page(&server, 1, 2, posts_page(1, 10)).await;
    mount_posts_page(&server, 2, 2, posts_page(11, 3)).await;

    let mut view = view_for(&server);
    view.mount(1).await;
    assert!(!view.state().can_go_prev());
    assert!(view.state().can_go_next());

    assert!(view.handle_next().await);
    assert_eq!(view.state().current_page, 2);
    assert_eq!(view.state().posts[0].id, 11);
    assert!(!view.state().can_go_next());
    assert!(!view.handle_next().await);

    assert!(view.handle_prev().await);
    assert_eq!(view.state().current_page, 1);
    assert_eq!(view.state().posts[0].id, 1);
}

#[tokio::test]
async fn test_server_error_keeps_previous_posts() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    mount_posts_page(&server, 1, 2, posts_page(1, 10)).await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut view = view_for(&server);
    view.mount(1).await;
    let before = view.state().posts.clone();

    assert!(view.handle_next().await);

    let state = view.state();
    assert_eq!(state.status(), ViewStatus::Ready { empty: false });
    assert!(!state.loading);
    assert_eq!(state.posts, before);
    assert!(state.last_error.is_some());
}

#[tokio::test]
async fn test_server_error_on_first_load_is_empty() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut view = view_for(&server);
    view.mount(1).await;

    assert_eq!(view.state().status(), ViewStatus::Ready { empty: true });
    let html = PostListPage::new(view.state()).render().into_string();
    assert!(html.contains("No posts found."));
    assert!(html.contains("Could not load posts."));
}

#[tokio::test]
async fn test_timeout_on_first_load_is_empty_with_error() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(posts_page(1, 2))
                .insert_header("X-WP-TotalPages", "1")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = Config::with_base_url(&server.uri());
    config.http_timeout = Duration::from_millis(300);
    let client = WpClient::new(&config).expect("Failed to build client");
    let mut view = PostListView::with_per_page(client, config.posts_per_page);
    view.mount(1).await;

    let state = view.state();
    assert_eq!(state.status(), ViewStatus::Ready { empty: true });
    assert!(!state.loading);
    assert!(state.last_error.is_some());
}

#[tokio::test]
async fn test_out_of_range_page_falls_back_to_page_one() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "rest_post_invalid_page_number",
            "message": "The page number requested is larger than the number of pages available.",
            "data": { "status": 400 }
        })))
        .mount(&server)
        .await;

    let mut view = view_for(&server);
    view.mount(99).await;

    let state = view.state();
    assert!(state.last_error.is_some());
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 1);
    let html = PostListPage::new(state).render().into_string();
    assert!(html.contains("<span>Page 1 of 1</span>"));
}

#[tokio::test]
async fn test_categories_failure_fails_the_cycle() {
    let server = MockServer::start().await;
    mount_posts_page(&server, 1, 1, posts_page(1, 2)).await;
    Mock::given(method("GET"))
        .and(path(common::CATEGORIES_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut view = view_for(&server);
    view.mount(1).await;

    assert!(view.state().posts.is_empty());
    assert!(!view.state().loading);
    assert!(view
        .state()
        .last_error
        .as_deref()
        .is_some_and(|e| e.contains("503")));
}

#[tokio::test]
async fn test_reload_recovers_after_failure() {
    let server = MockServer::start().await;
    mount_categories(&server, categories_json()).await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_posts_page(&server, 1, 1, posts_page(1, 4)).await;

    let mut view = view_for(&server);
    view.mount(1).await;
    assert!(view.state().last_error.is_some());

    view.reload().await;
    assert!(view.state().last_error.is_none());
    assert_eq!(view.state().posts.len(), 4);
}

#[tokio::test]
async fn test_empty_site_has_one_page() {
    let server = MockServer::start().await;
    mount_categories(&server, json!([])).await;
    mount_posts_page(&server, 1, 0, json!([])).await;

    let mut view = view_for(&server);
    view.mount(1).await;

    let state = view.state();
    assert_eq!(state.status(), ViewStatus::Ready { empty: true });
    assert_eq!(state.total_pages, 1);
    assert!(state.last_error.is_none());
}
