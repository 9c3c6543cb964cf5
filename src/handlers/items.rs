use std::collections::HashMap;
use std::fmt::Display;

use actix_web::{web, HttpResponse, Result};
use maud::{html, DOCTYPE};
use serde::Serialize;

use crate::models::{Catalog, Item};
use crate::pagination::{PageSet, Paginator};

#[derive(Debug, Serialize)]
struct ItemsResponse<'a> {
    pagination: &'a PageSet,
    items: &'a [Item],
}

fn paginate<'a>(
    paginator: &Paginator,
    catalog: &'a Catalog,
    query: &HashMap<String, String>,
) -> (PageSet, &'a [Item]) {
    let mut set = paginator.from_params(query);
    let items = catalog.list(set.limit, set.offset);
    set.set_total(catalog.count());

    (set, items)
}

pub async fn api_items(
    paginator: web::Data<Paginator>,
    catalog: web::Data<Catalog>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse> {
    let (set, items) = paginate(&paginator, &catalog, &query);

    log::debug!(
        "Serving {} items (page {}, per_page {})",
        items.len(),
        set.page,
        set.per_page
    );

    Ok(HttpResponse::Ok().json(ItemsResponse {
        pagination: &set,
        items,
    }))
}

pub async fn list_items(
    paginator: web::Data<Paginator>,
    catalog: web::Data<Catalog>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse> {
    let (set, items) = paginate(&paginator, &catalog, &query);
    let uri_template = page_uri(&set, "%d");

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Items - Pagestrip" }
            }
            body {
                h1 { "Items" }
                p { "Showing " (items.len()) " of " (set.total) " items" }

                @if items.is_empty() {
                    p class="empty" { "No items on this page" }
                } @else {
                    ul class="items" {
                        @for item in items {
                            li { (item.name) }
                        }
                    }
                }

                nav class="pg" {
                    @if let Some(prev) = set.prev_page() {
                        a class="pg-prev" href=(page_uri(&set, prev)) { "Previous" } " "
                    }
                    (set.links(&uri_template))
                    @if let Some(next) = set.next_page() {
                        a class="pg-next" href=(page_uri(&set, next)) { "Next" }
                    }
                }
            }
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string()))
}

fn per_page_query(set: &PageSet) -> String {
    let options = set.options();

    if set.is_all() {
        format!("{}={}", options.per_page_param, options.all_param_value)
    } else {
        format!("{}={}", options.per_page_param, set.per_page)
    }
}

/// Link to `page` that keeps the current page size. Passing `"%d"` yields the
/// template used for the page strip.
fn page_uri(set: &PageSet, page: impl Display) -> String {
    format!(
        "/items?{}={page}&{}",
        set.options().page_param,
        per_page_query(set)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::pagination::Options;

    fn app_data() -> (web::Data<Paginator>, web::Data<Catalog>) {
        let paginator = Paginator::new(Options {
            allow_all: true,
            ..Options::default()
        });

        (web::Data::new(paginator), web::Data::new(Catalog::generate(95)))
    }

    #[actix_web::test]
    async fn test_api_items() {
        let (paginator, catalog) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(paginator)
                .app_data(catalog)
                .route("/api/items", web::get().to(api_items)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/items?page=3&per_page=20")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["pagination"],
            serde_json::json!({ "page": 3, "per_page": 20, "total_pages": 5, "total": 95 })
        );
        assert_eq!(body["items"].as_array().map(Vec::len), Some(20));
        assert_eq!(body["items"][0]["id"], 41);
    }

    #[actix_web::test]
    async fn test_api_items_all() {
        let (paginator, catalog) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(paginator)
                .app_data(catalog)
                .route("/api/items", web::get().to(api_items)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/items?per_page=all")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["pagination"]["per_page"], 0);
        assert_eq!(body["pagination"]["total_pages"], 0);
        assert_eq!(body["items"].as_array().map(Vec::len), Some(95));
    }

    #[actix_web::test]
    async fn test_api_items_bad_input() {
        let (paginator, catalog) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(paginator)
                .app_data(catalog)
                .route("/api/items", web::get().to(api_items)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/items?page=oops&per_page=-")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["pagination"]["page"], 1);
        assert_eq!(body["pagination"]["per_page"], 10);
    }

    #[actix_web::test]
    async fn test_list_items_renders_strip() {
        let (paginator, catalog) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(paginator)
                .app_data(catalog)
                .route("/items", web::get().to(list_items)),
        )
        .await;

        let req = test::TestRequest::get().uri("/items?page=2").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Item 11"));
        assert!(!html.contains("Item 21<"));
        assert!(html.contains(
            r#"<a class="pg-page pg-selected" href="/items?page=2&per_page=10">2</a>"#
        ));
        assert!(html.contains(r#"<a class="pg-next" href="/items?page=3&amp;per_page=10">"#));
    }

    #[actix_web::test]
    async fn test_list_items_custom_page_param() {
        let paginator = Paginator::new(Options {
            page_param: "p".to_string(),
            ..Options::default()
        });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(paginator))
                .app_data(web::Data::new(Catalog::generate(95)))
                .route("/items", web::get().to(list_items)),
        )
        .await;

        let req = test::TestRequest::get().uri("/items?p=2").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Item 11"));
        assert!(html.contains(r#"<a class="pg-prev" href="/items?p=1&amp;per_page=10">"#));
        assert!(html.contains(r#"<a class="pg-next" href="/items?p=3&amp;per_page=10">"#));
        assert!(html.contains(r#"<a class="pg-page" href="/items?p=3&per_page=10">3</a>"#));
        assert!(!html.contains("page=3"));
    }

    #[actix_web::test]
    async fn test_list_items_past_the_end() {
        let (paginator, catalog) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(paginator)
                .app_data(catalog)
                .route("/items", web::get().to(list_items)),
        )
        .await;

        let req = test::TestRequest::get().uri("/items?page=40").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}
