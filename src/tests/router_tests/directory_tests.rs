use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_with_headers, test_app};
use astra::Body;
use http::{Method, Request};

#[test]
fn directory_page_renders_everything() {
    let app = test_app();
    let resp = get(&app, "/");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("Accept-CH").unwrap(),
        "Sec-CH-Viewport-Width"
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<h1>Discovery Dino</h1>"));
    assert!(body.contains("5 of 5 products"));
    for heading in ["Ledgerly", "StackPilot", "PawChart", "DeskFlow", "Forgeline"] {
        assert!(body.contains(heading), "missing {heading}");
    }
    assert!(!body.contains(r#"role="dialog""#));
}

#[test]
fn rating_filter_keeps_matching_buckets() {
    let app = test_app();
    let body = body_string(get(&app, "/?rating=4"));

    assert!(body.contains("2 of 5 products"));
    assert!(body.contains("Ledgerly"));
    assert!(body.contains("PawChart"));
    assert!(!body.contains("StackPilot"));
    assert!(!body.contains("Forgeline"));
}

#[test]
fn category_filter_is_single_select() {
    let app = test_app();
    let body = body_string(get(&app, "/?category=Office"));

    assert!(body.contains("2 of 5 products"));
    assert!(body.contains("Ledgerly"));
    assert!(body.contains("DeskFlow"));
    assert!(!body.contains("PawChart"));
}

#[test]
fn rating_and_category_combine() {
    let app = test_app();
    let body = body_string(get(&app, "/?rating=4&category=ERP"));

    assert!(body.contains("1 of 5 products"));
    assert!(body.contains("Ledgerly"));
    assert!(!body.contains("Forgeline"));
}

#[test]
fn empty_result_says_so() {
    let app = test_app();
    let body = body_string(get(&app, "/?rating=1"));

    assert!(body.contains("0 of 5 products"));
    assert!(body.contains("No products match these filters."));
}

#[test]
fn open_query_shows_overlay() {
    let app = test_app();
    let body = body_string(get(&app, "/?open=0"));

    assert!(body.contains(r#"role="dialog""#));
    assert!(body.contains("★★★★½ (4.5)"));
    assert!(body.contains(r#"<ul class="similar-products"></ul>"#));
    assert!(body.contains("sales@ledgerly.example.com"));
}

#[test]
fn overlay_for_unknown_index_is_skipped() {
    let app = test_app();
    let resp = get(&app, "/?open=99");

    assert_eq!(resp.status(), 200);
    assert!(!body_string(resp).contains(r#"role="dialog""#));
}

#[test]
fn viewport_hint_768_is_mobile() {
    let app = test_app();
    let body = body_string(get_with_headers(
        &app,
        "/",
        &[("Sec-CH-Viewport-Width", "768")],
    ));

    assert!(body.contains("Show Filter"));
    assert!(!body.contains("filter-panel"));
}

#[test]
fn viewport_hint_769_is_desktop() {
    let app = test_app();
    let body = body_string(get_with_headers(&app, "/", &[("Viewport-Width", "769")]));

    assert!(body.contains("filter-panel"));
    assert!(!body.contains("filter-toggle"));
}

#[test]
fn vw_param_overrides_hint_header() {
    let app = test_app();
    let body = body_string(get_with_headers(
        &app,
        "/?vw=500",
        &[("Sec-CH-Viewport-Width", "1400")],
    ));

    assert!(body.contains("Show Filter"));
}

#[test]
fn unknown_width_measures_on_load() {
    let app = test_app();
    let body = body_string(get(&app, "/"));
    assert!(body.contains(r#"hx-trigger="load, resize from:window throttle:200ms""#));

    let body = body_string(get(&app, "/?vw=1024"));
    assert!(body.contains(r#"hx-trigger="resize from:window throttle:200ms""#));
}

#[test]
fn directory_fragment_refetches_without_width() {
    let app = test_app();
    let resp = get(&app, "/directory?vw=500&rating=3");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.starts_with(r#"<main id="directory""#));
    assert!(body.contains(r#"hx-get="/directory?rating=3""#));
    assert!(!body.contains("<h1>Discovery Dino</h1>"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn post_is_not_routed() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
}
