use stash::http::mime::{APPLICATION_JSON, TEXT_PLAIN, content_type_for_path, extension_for};

#[test]
fn test_extension_for_supported_types() {
    assert_eq!(extension_for(TEXT_PLAIN), ".txt");
    assert_eq!(extension_for(APPLICATION_JSON), ".json");
}

#[test]
fn test_extension_for_is_exact_match() {
    assert_eq!(extension_for("text/html"), "");
    assert_eq!(extension_for("application/json; charset=utf-8"), "");
    assert_eq!(extension_for("TEXT/PLAIN"), "");
    assert_eq!(extension_for("text/plain "), "");
}

#[test]
fn test_content_type_for_path_by_suffix() {
    assert_eq!(content_type_for_path("/notes/a.txt"), Some(TEXT_PLAIN));
    assert_eq!(content_type_for_path("/x.json"), Some(APPLICATION_JSON));
    assert_eq!(content_type_for_path("/a.txt.json"), Some(APPLICATION_JSON));
}

#[test]
fn test_content_type_for_path_unknown_suffix() {
    assert_eq!(content_type_for_path("/page.html"), None);
    assert_eq!(content_type_for_path("/notes/a"), None);
    assert_eq!(content_type_for_path("/a.TXT"), None);
    assert_eq!(content_type_for_path("/a.txt?x=1"), None);
}

#[test]
fn test_extension_round_trips_through_path() {
    for ct in [TEXT_PLAIN, APPLICATION_JSON] {
        let path = format!("/stored{}", extension_for(ct));
        assert_eq!(content_type_for_path(&path), Some(ct));
    }
}
