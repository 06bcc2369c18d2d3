use crate::catalog::Catalog;
use crate::domain::listing::ListingItem;
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub fn listing(heading: &str, rating: f64, categories: &[&str]) -> ListingItem {
    ListingItem {
        heading: heading.to_string(),
        photo_url: format!("https://images.example.com/{}.png", heading.to_lowercase()),
        description: format!("{heading} helps teams get work done."),
        rating,
        similar_products: vec![],
        contact_mail: format!("sales@{}.example.com", heading.to_lowercase()),
        website: format!("https://{}.example.com", heading.to_lowercase()),
        category: categories.iter().map(|c| c.to_string()).collect(),
        additional_info: String::new(),
    }
}

/// Five listings spread over the directory categories.
pub fn test_app() -> AppState {
    AppState {
        catalog: Catalog::new(vec![
            listing("Ledgerly", 4.5, &["ERP", "Office"]),
            listing("StackPilot", 3.7, &["IT Software", "Information Technology"]),
            listing("PawChart", 4.0, &["Veterinary"]),
            listing("DeskFlow", 2.5, &["Office"]),
            listing("Forgeline", 5.0, &["ERP", "IT Software"]),
        ]),
    }
}

pub fn get(app: &AppState, uri: &str) -> Response {
    get_with_headers(app, uri, &[])
}

pub fn get_with_headers(app: &AppState, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, app).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
