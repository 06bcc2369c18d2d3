use crate::tests::utils::{body_string, get, test_app};
use serde_json::Value;

fn get_json(uri: &str) -> Value {
    let app = test_app();
    let resp = get(&app, uri);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn empty_selection_returns_whole_catalog() {
    let json = get_json("/api/listings");

    assert_eq!(json["total"], 5);
    assert_eq!(json["selection"]["selectedRatings"], serde_json::json!([]));
    assert_eq!(json["selection"]["selectedCategory"], Value::Null);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
}

#[test]
fn selection_is_echoed_with_matching_items() {
    let json = get_json("/api/listings?rating=5&rating=3&category=ERP");

    assert_eq!(json["selection"]["selectedRatings"], serde_json::json!([3, 5]));
    assert_eq!(json["selection"]["selectedCategory"], "ERP");
    assert_eq!(json["total"], 1);

    let item = &json["items"][0];
    assert_eq!(item["heading"], "Forgeline");
    assert_eq!(item["photoUrl"], "https://images.example.com/forgeline.png");
    assert_eq!(item["category"], serde_json::json!(["ERP", "IT Software"]));
}
