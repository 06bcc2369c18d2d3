use crate::tests::utils::{body_string, get, test_app};

#[test]
fn serves_stylesheet() {
    let app = test_app();
    let resp = get(&app, "/static/main.css");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".card-grid"));
}

#[test]
fn serves_logo() {
    let app = test_app();
    let resp = get(&app, "/static/logo.svg");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "image/svg+xml");
    assert!(body_string(resp).starts_with("<svg"));
}
