//! End-to-end tests for the CMS client against a mock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ui::core::api::{ApiClient, ApiError};
use ui::core::content::{HeroDocument, TeamService};
use ui::core::store::Lang;

#[tokio::test]
async fn fetch_unwraps_the_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/herobanner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 1,
                "documentId": "hero-1",
                "slides": [
                    {
                        "id": 10,
                        "title": "Welcome",
                        "description": "Counsel you can build on",
                        "backgroundType": "image",
                        "buttonText": "Read more",
                        "buttonLink": "https://maydan.example",
                        "backgroundImage": {
                            "id": 20,
                            "documentId": "m-20",
                            "name": "bg.jpg",
                            "alternativeText": "Office",
                            "mime": "image/jpeg",
                            "url": "/uploads/bg.jpg"
                        }
                    }
                ]
            },
            "meta": {}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let hero: HeroDocument = client.fetch("/herobanner", None).await.expect("hero decodes");

    assert_eq!(hero.document_id, "hero-1");
    assert_eq!(hero.slides.len(), 1);
    assert_eq!(hero.slides[0].title, "Welcome");
}

#[tokio::test]
async fn the_active_locale_travels_as_accept_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/herobanner"))
        .and(header("Accept-Language", "ar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 1, "documentId": "hero-ar", "slides": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let hero: HeroDocument = client
        .fetch("/herobanner", Some(Lang::Ar))
        .await
        .expect("localized fetch succeeds");
    assert_eq!(hero.document_id, "hero-ar");
}

#[tokio::test]
async fn fetch_list_keeps_pagination_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/team-services"))
        .and(query_param("pagination[page]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 3, "documentId": "t3", "Title": "Arbitration" },
                { "id": 4, "documentId": "t4", "Title": "Estates" }
            ],
            "meta": {
                "pagination": { "page": 2, "pageSize": 2, "pageCount": 5, "total": 9 }
            }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let page = client
        .fetch_list::<TeamService>("/team-services?pagination[page]=2", None)
        .await
        .expect("listing decodes");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].title, "Arbitration");
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.page_count, 5);
    assert_eq!(page.pagination.total, 9);
}

#[tokio::test]
async fn post_sends_the_payload_and_unwraps_the_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/newsletter-subscriptions"))
        .and(body_json(json!({ "data": { "email": "reader@maydan.example" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 77, "email": "reader@maydan.example" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let created: serde_json::Value = client
        .post(
            "/newsletter-subscriptions",
            &json!({ "data": { "email": "reader@maydan.example" } }),
            None,
        )
        .await
        .expect("subscription accepted");
    assert_eq!(created["id"], 77);
}

#[tokio::test]
async fn cms_error_envelopes_surface_their_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/herobanner"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": { "status": 404, "name": "NotFoundError", "message": "Not Found" }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let result = client.fetch::<HeroDocument>("/herobanner", None).await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 404,
            message: "Not Found".to_owned()
        })
    );
}

#[tokio::test]
async fn html_error_pages_fall_back_to_the_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/herobanner"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<!DOCTYPE html><html><body>proxy error</body></html>"),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let result = client.fetch::<HeroDocument>("/herobanner", None).await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 502,
            message: "Bad Gateway".to_owned()
        })
    );
}

#[tokio::test]
async fn malformed_success_bodies_are_decode_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/herobanner"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let result = client.fetch::<HeroDocument>("/herobanner", None).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
