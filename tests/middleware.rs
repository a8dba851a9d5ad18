//! In-process tests of the cookie parser behind an axum router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};

use cookie_parser::cookie::sign;
use cookie_parser::{cookie_parser_middleware, CookieParser, Cookies, HttpServer, SignedCookies};

mod common;

#[tokio::test]
async fn test_defaults_to_empty_mappings() {
    let router = HttpServer::new(common::config_with_secrets(&["keyboard cat"])).router();

    let (status, body) = common::get_json(router.clone(), "/", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "cookies": {} }));

    let (_, body) = common::get_json(router, "/signed", None).await;
    assert_eq!(body, json!({ "cookies": {} }));
}

#[tokio::test]
async fn test_populates_plain_cookies() {
    let router = HttpServer::new(Default::default()).router();

    let (_, body) = common::get_json(router.clone(), "/", Some("foo=bar; bar=baz")).await;
    assert_eq!(body, json!({ "cookies": { "foo": "bar", "bar": "baz" } }));

    let (_, body) = common::get_json(router, "/signed", Some("foo=bar; bar=baz")).await;
    assert_eq!(body, json!({ "cookies": {} }));
}

#[tokio::test]
async fn test_inflates_json_cookies() {
    let router = HttpServer::new(Default::default()).router();

    let (_, body) = common::get_json(router.clone(), "/", Some(r#"moo=j:{"foo":"bar"}"#)).await;
    assert_eq!(body, json!({ "cookies": { "moo": { "foo": "bar" } } }));

    let (_, body) = common::get_json(router, "/", Some(r#"moo=j:{"foo":"#)).await;
    assert_eq!(body, json!({ "cookies": { "moo": r#"j:{"foo":"# } }));
}

#[tokio::test]
async fn test_signed_cookies() {
    let router = HttpServer::new(common::config_with_secrets(&["puppies!"])).router();
    let header = format!("pup=s:{}", sign("labrador.retriever", "puppies!"));

    let (_, body) = common::get_json(router.clone(), "/signed", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": { "pup": "labrador.retriever" } }));

    let (_, body) = common::get_json(router, "/", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": {} }));
}

#[tokio::test]
async fn test_tampered_signed_cookie_is_false() {
    let router = HttpServer::new(common::config_with_secrets(&["puppies!"])).router();
    let header = format!("pup=s:{}; foo=bar", sign("labrador", "puppies!")).replace("labrador", "poodle");

    let (_, body) = common::get_json(router.clone(), "/signed", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": { "pup": false } }));

    let (_, body) = common::get_json(router, "/", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": { "foo": "bar" } }));
}

#[tokio::test]
async fn test_rotated_secret_verifies() {
    let router = HttpServer::new(common::config_with_secrets(&["newest", "oldest"])).router();
    let header = format!("session=s:{}", sign("abc", "oldest"));

    let (_, body) = common::get_json(router, "/signed", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": { "session": "abc" } }));
}

#[tokio::test]
async fn test_without_secrets_signed_values_stay_plain() {
    let router = HttpServer::new(Default::default()).router();
    let value = format!("s:{}", sign("labrador", "puppies!"));
    let header = format!("pup={}", value);

    let (_, body) = common::get_json(router.clone(), "/", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": { "pup": value } }));

    let (_, body) = common::get_json(router, "/signed", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": {} }));
}

#[tokio::test]
async fn test_extractor_rejects_without_middleware() {
    async fn handler(cookies: Cookies) -> Json<Value> {
        Json(json!({ "cookies": cookies }))
    }
    let router = Router::new().route("/", get(handler));

    let (status, _) = common::get_json(router, "/", Some("foo=bar")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR.as_u16());
}

#[tokio::test]
async fn test_function_middleware() {
    async fn handler(cookies: Cookies, signed: SignedCookies) -> Json<Value> {
        Json(json!({ "cookies": cookies, "signed": signed }))
    }
    let parser = CookieParser::new("keyboard cat");
    let router = Router::new()
        .route("/", get(handler))
        .layer(middleware::from_fn_with_state(parser, cookie_parser_middleware));

    let header = format!("a=1; b=s:{}", sign("two", "keyboard cat"));
    let (_, body) = common::get_json(router, "/", Some(&header)).await;
    assert_eq!(body, json!({ "cookies": { "a": "1" }, "signed": { "b": "two" } }));
}

#[tokio::test]
async fn test_existing_cookies_are_left_alone() {
    async fn handler(cookies: Cookies) -> Json<Value> {
        Json(json!({ "cookies": cookies }))
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let preset = move |mut req: Request, next: Next| {
        let counter = counter.clone();
        async move {
            req.extensions_mut().insert(Cookies::default());
            let res: Response = next.run(req).await;
            counter.fetch_add(1, Ordering::SeqCst);
            res
        }
    };

    // Layers run outside-in: `preset` runs before the parser.
    let router = Router::new()
        .route("/", get(handler))
        .layer(cookie_parser::CookieParserLayer::new(CookieParser::unsigned()))
        .layer(middleware::from_fn(preset));

    let (_, body) = common::get_json(router, "/", Some("foo=bar")).await;
    assert_eq!(body, json!({ "cookies": {} }));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
