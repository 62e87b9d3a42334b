//!
//! Reconstruction of the exact byte string that was signed
//!

use crate::Error;
use http::{header, uri::Authority, Request};
use std::fmt::Write;

/// Construct the signing string of a request over `headers`, in order
///
/// `(request-target)` expands to the lowercased method plus the exact
/// path-and-query; `host` resolves the `Host` header with the URI authority
/// as fallback; everything else is a verbatim header lookup, with absent
/// headers contributing an empty value. A coverage mismatch therefore shows
/// up as a failed signature, not as an error here.
pub fn construct<B>(req: &Request<B>, headers: &[&str]) -> Result<String, Error> {
    let mut signature_string = String::new();

    for name in headers {
        match *name {
            name @ "(request-target)" => {
                let method = req.method().as_str().to_lowercase();
                let path_and_query = req
                    .uri()
                    .path_and_query()
                    .map_or_else(|| req.uri().path(), |path_and_query| path_and_query.as_str());

                let _ = writeln!(signature_string, "{name}: {method} {path_and_query}");
            }
            name @ "host" => {
                let value = match req.headers().get(header::HOST) {
                    Some(value) => value.to_str()?,
                    None => req.uri().authority().map_or("", Authority::as_str),
                };

                let _ = writeln!(signature_string, "{name}: {value}");
            }
            name => {
                let value = req
                    .headers()
                    .get(name)
                    .map(|value| value.to_str())
                    .transpose()?
                    .unwrap_or_default();

                let _ = writeln!(signature_string, "{name}: {value}");
            }
        }
    }

    // Remove the last new-line
    signature_string.pop();

    Ok(signature_string)
}

#[cfg(test)]
mod test {
    use http::{Method, Request, Uri};

    const SIGNED_HEADERS: &[&str] = &["(request-target)", "host", "date"];
    const BASIC_SIGNATURE_STRING: &str = "(request-target): get /foo?param=value&pet=dog\nhost: example.com\ndate: Sun, 05 Jan 2014 21:31:40 GMT";

    fn request(method: Method) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(Uri::from_static("/foo?param=value&pet=dog"))
            .header("Host", "example.com")
            .header("Date", "Sun, 05 Jan 2014 21:31:40 GMT")
            .header("Content-Type", "application/json")
            .body(())
            .unwrap()
    }

    #[test]
    fn basic_signature_string() {
        let signature_string = super::construct(&request(Method::GET), SIGNED_HEADERS).unwrap();
        assert_eq!(signature_string, BASIC_SIGNATURE_STRING);
    }

    #[test]
    fn method_is_lowercased() {
        let signature_string =
            super::construct(&request(Method::POST), &["(request-target)"]).unwrap();
        assert_eq!(
            signature_string,
            "(request-target): post /foo?param=value&pet=dog"
        );
    }

    #[test]
    fn absent_headers_contribute_an_empty_value() {
        let signature_string = super::construct(&request(Method::GET), &["date", "digest"]).unwrap();
        assert_eq!(
            signature_string,
            "date: Sun, 05 Jan 2014 21:31:40 GMT\ndigest: "
        );
    }

    #[test]
    fn header_lookup_is_case_insensitive_names_verbatim() {
        let signature_string = super::construct(&request(Method::GET), &["Content-Type"]).unwrap();
        assert_eq!(signature_string, "Content-Type: application/json");
    }

    #[test]
    fn empty_header_list_builds_an_empty_string() {
        let signature_string = super::construct(&request(Method::GET), &[]).unwrap();
        assert_eq!(signature_string, "");
    }
}
