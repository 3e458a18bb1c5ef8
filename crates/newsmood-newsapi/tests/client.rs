//! Integration tests for `NewsApiClient` using wiremock HTTP mocks.

use newsmood_core::{ArticleFetcher, FetchError, QueryParameters, SortOrder};
use newsmood_newsapi::{NewsApiClient, NewsApiError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NewsApiClient {
    NewsApiClient::with_base_url("test-key", 30, base_url, "newsmood-test/0.1")
        .expect("client construction should not fail")
}

fn params(keyword: &str, limit: u32) -> QueryParameters {
    QueryParameters::new(keyword, limit, SortOrder::Relevancy).expect("valid params")
}

fn article(title: Option<&str>, source: &str, url: &str) -> serde_json::Value {
    serde_json::json!({
        "source": { "id": null, "name": source },
        "author": "Staff",
        "title": title,
        "description": "body",
        "url": url,
        "publishedAt": "2025-01-15T10:00:00Z"
    })
}

#[tokio::test]
async fn fetch_articles_sends_expected_query_and_parses_page() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "totalResults": 3,
        "articles": [
            article(Some("Markets rally on strong earnings"), "Reuters", "https://example.com/1"),
            article(Some("Factory shuts down amid layoffs"), "AP", "https://example.com/2"),
            article(Some("Central bank holds rates steady"), "BBC", "https://example.com/3")
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(header("X-Api-Key", "test-key"))
        .and(query_param("q", "global economy"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("pageSize", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = QueryParameters::new("global economy", 3, SortOrder::PublishedAt).unwrap();
    let articles = client
        .fetch_articles(&query)
        .await
        .expect("should parse articles");

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].title.as_deref(), Some("Markets rally on strong earnings"));
    assert_eq!(articles[0].source_name, "Reuters");
    assert_eq!(articles[1].url, "https://example.com/2");
    assert_eq!(articles[2].source_name, "BBC");
}

#[tokio::test]
async fn fetch_articles_truncates_to_limit() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "totalResults": 3,
        "articles": [
            article(Some("one"), "A", "https://example.com/1"),
            article(Some("two"), "B", "https://example.com/2"),
            article(Some("three"), "C", "https://example.com/3")
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client.fetch_articles(&params("economy", 2)).await.unwrap();

    let titles: Vec<_> = articles.iter().filter_map(|a| a.title.as_deref()).collect();
    assert_eq!(titles, ["one", "two"]);
}

#[tokio::test]
async fn fetch_articles_keeps_untitled_entries_for_the_pipeline() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "totalResults": 1,
        "articles": [ article(None, "Blog", "https://example.com/untitled") ]
    });

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client.fetch_articles(&params("economy", 5)).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert!(articles[0].title.is_none());
}

#[tokio::test]
async fn null_source_keeps_the_rest_of_the_page() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": null,
                "title": "Markets rally on strong earnings",
                "url": "https://example.com/1"
            },
            article(Some("Factory shuts down amid layoffs"), "AP", "https://example.com/2")
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .fetch_articles(&params("economy", 5))
        .await
        .expect("a null source must not fail the page");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].source_name, newsmood_newsapi::normalize::UNKNOWN_SOURCE);
    assert_eq!(articles[0].headline(), Some("Markets rally on strong earnings"));
    assert_eq!(articles[1].source_name, "AP");
}

#[tokio::test]
async fn empty_page_is_ok_not_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ok", "totalResults": 0, "articles": [] });

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .fetch_articles(&params("zzzz-nothing", 10))
        .await
        .expect("empty page is not an error");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_fetch_unauthorized() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "code": "apiKeyInvalid",
        "message": "Your API key is invalid or incorrect."
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_articles(&params("economy", 5)).await.unwrap_err();

    assert!(
        matches!(err, FetchError::Unauthorized(ref m) if m.contains("invalid")),
        "expected Unauthorized, got: {err:?}"
    );
}

#[tokio::test]
async fn rate_limit_maps_to_fetch_rate_limited_without_retry() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "code": "rateLimited",
        "message": "You have made too many requests recently."
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_articles(&params("economy", 5)).await.unwrap_err();

    assert!(
        matches!(err, FetchError::RateLimited(_)),
        "expected RateLimited, got: {err:?}"
    );
}

#[tokio::test]
async fn error_envelope_with_200_returns_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "code": "parameterInvalid",
        "message": "You've included a parameter in your request which is currently not supported."
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.everything(&params("economy", 5)).await.unwrap_err();

    assert!(
        matches!(err, NewsApiError::ApiError { ref code, .. } if code == "parameterInvalid"),
        "expected ApiError(parameterInvalid), got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_without_envelope_uses_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_articles(&params("economy", 5)).await.unwrap_err();

    assert!(
        matches!(err, FetchError::Provider { ref code, .. } if code == "503"),
        "expected Provider(503), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_maps_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_articles(&params("economy", 5)).await.unwrap_err();

    assert!(
        matches!(err, FetchError::InvalidResponse(_)),
        "expected InvalidResponse, got: {err:?}"
    );
}
