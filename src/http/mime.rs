//! Media type handling for the two stored file kinds.

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

/// Maps a declared `Content-Type` to the extension files are stored under.
///
/// Comparison is exact: parameters such as `; charset=utf-8` or a different
/// case make the type unsupported, signalled by an empty string.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        TEXT_PLAIN => ".txt",
        APPLICATION_JSON => ".json",
        _ => "",
    }
}

/// Media type served for a request path, chosen by its suffix.
pub fn content_type_for_path(path: &str) -> Option<&'static str> {
    if path.ends_with(".txt") {
        Some(TEXT_PLAIN)
    } else if path.ends_with(".json") {
        Some(APPLICATION_JSON)
    } else {
        None
    }
}
