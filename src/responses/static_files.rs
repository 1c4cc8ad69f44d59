// responses/static_files.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Serve `rel_path` from under `root`. Anything that would escape the root
/// (absolute paths, `..`) is treated as missing.
pub fn static_file_response(root: &Path, rel_path: &str) -> ResultResp {
    let path = resolve(root, rel_path).ok_or(ServerError::NotFound)?;

    if !path.is_file() {
        return Err(ServerError::NotFound);
    }

    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn resolve(root: &Path, rel_path: &str) -> Option<PathBuf> {
    let rel = Path::new(rel_path.trim_start_matches('/'));
    if rel.as_os_str().is_empty() {
        return None;
    }

    let mut out = root.to_path_buf();
    for part in rel.components() {
        match part {
            Component::Normal(seg) => out.push(seg),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(out)
}

pub fn content_type(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("ico") => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        Some("txt") => mime::TEXT_PLAIN_UTF_8,
        Some("woff2") => mime::FONT_WOFF2,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
