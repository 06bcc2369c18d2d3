use crate::domain::viewport::VIEWPORT_HINT;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        // Ask browsers to send the viewport width with the next request.
        .header("Accept-CH", VIEWPORT_HINT)
        .header("Vary", VIEWPORT_HINT)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
