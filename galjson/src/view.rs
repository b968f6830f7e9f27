use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::{header, HeaderValue, StatusCode};
use serde::Serialize;

use crate::cors;

/// Builds a JSON response with the headers every API response
/// carries:
///
/// - `Content-Type: application/json; charset=UTF-8`
/// - `Vary: Origin`, appended rather than set so that any other
///   Vary contribution survives - caches must keep separate copies
///   of the response per Origin because of the conditional CORS
///   headers below
/// - when the request's Origin looks like a subdomain of its Host,
///   `Access-Control-Allow-Origin` echoing that Origin plus
///   `Access-Control-Allow-Credentials: true`, so a web front end
///   served from a subdomain can make credentialed requests here
pub fn json_response<T>(req: &HttpRequest, status: StatusCode, body: &T) -> HttpResponse
    where T: Serialize
{
    let body = serde_json::to_string(body).unwrap();

    let mut response = HttpResponse::build(status)
        .content_type("application/json; charset=UTF-8")
        .body(body);

    response.headers_mut().append(
        header::VARY,
        HeaderValue::from_static("Origin"));

    let origin = req.headers().get(header::ORIGIN).and_then(|v| v.to_str().ok());
    let host = req.headers().get(header::HOST).and_then(|v| v.to_str().ok());

    if let (Some(origin), Some(host)) = (origin, host)
    {
        if cors::origin_is_related(origin, host)
        {
            if let Ok(value) = HeaderValue::from_str(origin)
            {
                let headers = response.headers_mut();

                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"));
            }
        }
    }

    response
}
