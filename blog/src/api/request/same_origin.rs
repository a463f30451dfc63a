use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::{ORIGIN, REFERER};
use actix_web::{FromRequest, HttpRequest};

use crate::errors::BlogError;

/// Rejects form submissions coming from another site.
///
/// The host named by `Origin` (or `Referer` when `Origin` is absent) must match the
/// request's own host. Requests without either header are let through.
pub struct SameOrigin;

impl FromRequest for SameOrigin {
    type Error = BlogError;
    type Future = Ready<Result<SameOrigin, BlogError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(verify_same_origin(req).map(|_| SameOrigin))
    }
}

fn verify_same_origin(req: &HttpRequest) -> Result<(), BlogError> {
    let headers = req.headers();
    let source = match headers.get(ORIGIN).or_else(|| headers.get(REFERER)) {
        Some(source) => source,
        None => return Ok(()),
    };

    let host = req.connection_info().host().to_string();
    let same_origin = source
        .to_str()
        .ok()
        .and_then(scheme_and_authority)
        .is_some_and(|(scheme, authority)| {
            without_default_port(scheme, authority).eq_ignore_ascii_case(without_default_port(scheme, &host))
        });

    if same_origin {
        Ok(())
    } else {
        Err(BlogError::Forbidden("Cross-origin form submission rejected"))
    }
}

/// Scheme and `host[:port]` of an absolute URL. `None` for opaque origins such as `null`.
fn scheme_and_authority(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once("://")?;
    let authority = rest.split(&['/', '?', '#'][..]).next()?;

    if authority.is_empty() {
        None
    } else {
        Some((scheme, authority))
    }
}

/// `blog.example:80` and `blog.example` name the same http origin.
fn without_default_port<'a>(scheme: &str, authority: &'a str) -> &'a str {
    let default_port = if scheme.eq_ignore_ascii_case("http") {
        ":80"
    } else if scheme.eq_ignore_ascii_case("https") {
        ":443"
    } else {
        return authority;
    };

    authority.strip_suffix(default_port).unwrap_or(authority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HOST;
    use actix_web::test::TestRequest;

    fn request(headers: &[(actix_web::http::header::HeaderName, &str)]) -> HttpRequest {
        let mut req = TestRequest::post().uri("/new").insert_header((HOST, "blog.example:3000"));

        for (name, value) in headers {
            req = req.insert_header((name.clone(), *value));
        }

        req.to_http_request()
    }

    #[test]
    fn extracts_authority() {
        assert_eq!(
            scheme_and_authority("https://blog.example:3000/new?x=1"),
            Some(("https", "blog.example:3000"))
        );
        assert_eq!(scheme_and_authority("http://blog.example"), Some(("http", "blog.example")));
        assert_eq!(scheme_and_authority("null"), None);
        assert_eq!(scheme_and_authority("http:///path"), None);
    }

    #[test]
    fn default_ports_compare_equal() {
        let with_port = TestRequest::post()
            .uri("/new")
            .insert_header((HOST, "blog.example:80"))
            .insert_header((ORIGIN, "http://blog.example"))
            .to_http_request();
        let with_tls_port = TestRequest::post()
            .uri("/new")
            .insert_header((HOST, "blog.example"))
            .insert_header((ORIGIN, "https://blog.example:443"))
            .to_http_request();

        assert!(verify_same_origin(&with_port).is_ok());
        assert!(verify_same_origin(&with_tls_port).is_ok());
    }

    #[test]
    fn non_default_port_still_differs() {
        let req = TestRequest::post()
            .uri("/new")
            .insert_header((HOST, "blog.example"))
            .insert_header((ORIGIN, "http://blog.example:443"))
            .to_http_request();

        assert!(matches!(verify_same_origin(&req), Err(BlogError::Forbidden(_))));
    }

    #[test]
    fn accepts_requests_without_origin_headers() {
        assert!(verify_same_origin(&request(&[])).is_ok());
    }

    #[test]
    fn accepts_matching_origin() {
        let req = request(&[(ORIGIN, "http://blog.example:3000")]);

        assert!(verify_same_origin(&req).is_ok());
    }

    #[test]
    fn falls_back_to_referer() {
        let ok = request(&[(REFERER, "http://blog.example:3000/edit/1")]);
        let bad = request(&[(REFERER, "http://evil.example/form")]);

        assert!(verify_same_origin(&ok).is_ok());
        assert!(matches!(verify_same_origin(&bad), Err(BlogError::Forbidden(_))));
    }

    #[test]
    fn rejects_foreign_and_opaque_origins() {
        let foreign = request(&[(ORIGIN, "https://evil.example")]);
        let opaque = request(&[(ORIGIN, "null")]);

        assert!(matches!(verify_same_origin(&foreign), Err(BlogError::Forbidden(_))));
        assert!(matches!(verify_same_origin(&opaque), Err(BlogError::Forbidden(_))));
    }
}
