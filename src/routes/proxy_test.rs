use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::time::timeout;

use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://scm:8080/scm/api/rest", "groups.json", None), "http://scm:8080/scm/api/rest/groups.json");
    assert_eq!(upstream_url("http://scm/", "/groups/dev.json", Some("_dc=1")), "http://scm/groups/dev.json?_dc=1");
    assert_eq!(upstream_url("http://scm", "a", Some("")), "http://scm/a");
}

// =============================================================================
// filter_headers
// =============================================================================

#[test]
fn filter_headers_keeps_only_allowed_names() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(COOKIE, HeaderValue::from_static("JSESSIONID=abc"));
    headers.insert("authorization", HeaderValue::from_static("secret"));
    headers.insert("host", HeaderValue::from_static("console.local"));

    let out = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(COOKIE).unwrap(), "JSESSIONID=abc");
    assert!(out.get("authorization").is_none());
    assert!(out.get("host").is_none());
}

#[test]
fn filter_headers_keeps_repeated_set_cookie() {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
    let out = filter_headers(&headers, &FORWARDED_RESPONSE_HEADERS);
    assert_eq!(out.get_all(SET_COOKIE).iter().count(), 2);
}

#[test]
fn proxy_error_maps_to_bad_gateway() {
    let response = ProxyError::Upstream("connection refused".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// End-to-end forwarding
// =============================================================================

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

async fn fake_upstream_echo(method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: Bytes) -> Response {
    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or("").to_owned();
    let leaked_auth = headers.contains_key("authorization");
    (
        StatusCode::CREATED,
        [(SET_COOKIE, "JSESSIONID=next"), (HeaderName::from_static("x-internal"), "1")],
        Json(serde_json::json!({
            "method": method.as_str(),
            "query": query,
            "cookie": cookie,
            "leaked_auth": leaked_auth,
            "body": String::from_utf8_lossy(&body),
        })),
    )
        .into_response()
}

#[tokio::test]
async fn forwards_method_query_body_and_allowed_headers() {
    let upstream = serve(Router::new().route("/scm/api/rest/groups.json", axum::routing::any(fake_upstream_echo))).await;
    let console = serve(proxy_routes("/scm/api/rest", &format!("{upstream}/scm/api/rest"))).await;

    let response = timeout(
        Duration::from_secs(5),
        reqwest::Client::new()
            .post(format!("{console}/scm/api/rest/groups.json?_dc=7"))
            .header(COOKIE, "JSESSIONID=abc")
            .header("authorization", "Basic xyz")
            .body("name=dev")
            .send(),
    )
    .await
    .expect("proxy request timed out")
    .expect("proxy request failed");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(SET_COOKIE).unwrap(), "JSESSIONID=next");
    assert!(response.headers().get("x-internal").is_none());

    let echoed: serde_json::Value = serde_json::from_slice(&response.bytes().await.unwrap()).unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["query"], "_dc=7");
    assert_eq!(echoed["cookie"], "JSESSIONID=abc");
    assert_eq!(echoed["leaked_auth"], false);
    assert_eq!(echoed["body"], "name=dev");
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let upstream = serve(Router::new().route("/auth.json", get(|| async { StatusCode::UNAUTHORIZED }))).await;
    let console = serve(proxy_routes("/rest", &upstream)).await;

    let response = reqwest::get(format!("{console}/rest/auth.json")).await.expect("proxy request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let console = serve(proxy_routes("/rest", &dead)).await;

    let response = reqwest::get(format!("{console}/rest/auth.json")).await.expect("proxy request failed");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
