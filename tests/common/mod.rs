//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
pub const CATEGORIES_PATH: &str = "/wp-json/wp/v2/categories";

/// A post as returned with `_embed`, optionally with a featured image.
pub fn post_json(id: u64, title: &str, categories: &[u64], image: Option<&str>) -> Value {
    let mut post = json!({
        "id": id,
        "date": "2024-03-05T00:00:00",
        "date_gmt": "2024-03-05T00:00:00",
        "slug": format!("post-{id}"),
        "status": "publish",
        "link": format!("https://blog.example.com/post-{id}/"),
        "title": { "rendered": title },
        "categories": categories,
        "_embedded": {
            "author": [{ "id": 1, "name": "admin" }]
        }
    });
    if let Some(url) = image {
        post["_embedded"]["wp:featuredmedia"] = json!([{ "id": 500 + id, "source_url": url }]);
    }
    post
}

pub fn posts_page(first_id: u64, count: u64) -> Value {
    Value::Array(
        (first_id..first_id + count)
            .map(|id| post_json(id, &format!("Post {id}"), &[1, 2, 99], None))
            .collect(),
    )
}

pub fn categories_json() -> Value {
    json!([
        { "id": 1, "name": "News", "slug": "news", "count": 3 },
        { "id": 2, "name": "Tech", "slug": "tech", "count": 1 }
    ])
}

/// Posts page `page` answering with `body` and `X-WP-TotalPages: total_pages`.
pub async fn mount_posts_page(server: &MockServer, page: u32, total_pages: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .insert_header("X-WP-TotalPages", total_pages.to_string().as_str()),
        )
        .mount(server)
        .await;
}

pub async fn mount_categories(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(CATEGORIES_PATH))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .insert_header("X-WP-TotalPages", "1"),
        )
        .mount(server)
        .await;
}
