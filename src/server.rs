//! HTTP delivery shell
//!
//! Thin glue over the document writer: one route serves an HTML page that
//! references the rendered image, the `/svg/` route streams the document
//! itself. Requests are handled synchronously, one at a time, matching the
//! writer's one-sink-per-render model.

use thiserror::Error;
use tiny_http::{Header, Response, Server};

use crate::document::{write_document, DocStyle};
use crate::shape::Path;

const SVG_ROUTE: &str = "/svg/";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

/// Serve `paths` on `addr` until the process is stopped.
pub fn serve(addr: &str, paths: &[Path], style: &DocStyle) -> Result<(), ServeError> {
    let server = Server::http(addr).map_err(|e| ServeError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })?;
    eprintln!("listening on http://{addr}");

    for request in server.incoming_requests() {
        let (status, content_type, body) = respond_to(request.url(), paths, style);
        let header = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
            .expect("static content type header");
        let response = Response::from_data(body)
            .with_status_code(status)
            .with_header(header);
        if let Err(e) = request.respond(response) {
            eprintln!("failed to send response: {e}");
        }
    }
    Ok(())
}

/// Map a request URL to a response triple of status, content type, body.
fn respond_to(url: &str, paths: &[Path], style: &DocStyle) -> (u16, &'static str, Vec<u8>) {
    if url.starts_with(SVG_ROUTE) {
        let mut body = Vec::new();
        return match write_document(&mut body, paths, style) {
            Ok(()) => (200, "image/svg+xml", body),
            Err(e) => (500, "text/plain", format!("render failed: {e}\n").into_bytes()),
        };
    }

    let name = url.trim_start_matches('/');
    let page = format!(
        "<html>\n<img src=\"{SVG_ROUTE}{name}.svg\" alt=\"rendered document\">\n</html>\n"
    );
    (200, "text/html", page.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn svg_route_streams_the_document() {
        let paths = vec![Path::example()];
        let (status, content_type, body) = respond_to("/svg/demo.svg", &paths, &DocStyle::default());
        assert_eq!(status, 200);
        assert_eq!(content_type, "image/svg+xml");
        let body = String::from_utf8(body).unwrap();
        assert!(body.starts_with("<svg "));
        assert!(body.contains("M10 10 L10 90 L90 10 Z"));
    }

    #[test]
    fn other_routes_serve_an_html_page_referencing_the_image() {
        let (status, content_type, body) = respond_to("/demo", &[], &DocStyle::default());
        assert_eq!(status, 200);
        assert_eq!(content_type, "text/html");
        let body = String::from_utf8(body).unwrap();
        assert!(body.contains("<img src=\"/svg/demo.svg\""));
    }
}
