use crate::common::{load_fixture, try_load};
use antisync_markup::{LoadError, SeriesRef};
use serde_json::{json, Value};

#[test]
fn test_minimal() {
    let entry = load_fixture("dev", "minimal.txt");
    assert!(entry.is_published());
    assert!(entry.is_new());
    assert_eq!(entry.content(), "Hello, world");
    assert_eq!(entry.to_map().get("id"), None);
    assert_eq!(entry.summary(), None);
}

#[test]
fn test_draft() {
    let entry = load_fixture("dev", "draft.txt");
    assert!(!entry.is_published());
    assert_eq!(entry.public_id(), None);
}

#[test]
fn test_published() {
    let entry = load_fixture("prod", "published.txt");
    assert!(!entry.is_new());
    assert_eq!(entry.public_id(), Some(333_444));
    assert_eq!(entry.to_map()["id"], json!(333_444));
}

#[test]
fn test_title() {
    let entry = load_fixture("prod", "titled.txt");
    assert_eq!(entry.title(), Some("All about stuff"));

    let minimal = load_fixture("dev", "minimal.txt");
    assert_eq!(minimal.content(), entry.content());
    assert_ne!(minimal.signature(), entry.signature());
}

#[test]
fn test_redirect() {
    let prod = load_fixture("prod", "redirect.txt");
    assert_eq!(prod.redirect_url(), Some("http://example.com/whatever"));
    assert_eq!(prod.content(), "Hello, world");

    let map = prod.to_map();
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["id", "signature", "url"]);

    let prod_normal = load_fixture("prod", "titled.txt");
    assert_ne!(prod_normal.signature(), prod.signature());
}

#[test]
fn test_no_redirect_for_other_target() {
    let entry = load_fixture("dev", "redirect.txt");
    assert_eq!(entry.redirect_url(), None);
    assert_eq!(entry.content(), "Hello, world");
    assert_eq!(entry.title(), Some("All about stuff"));

    let entry_normal = load_fixture("dev", "titled.txt");
    assert_eq!(entry_normal.signature(), entry.signature());
}

#[test]
fn test_series() {
    let series = vec![SeriesRef {
        name: "foobar".to_string(),
        index: 123,
    }];

    let entry = load_fixture("dev", "series.txt");
    assert_eq!(entry.series(), series.as_slice());
    assert_eq!(
        entry.to_map()["series"],
        json!([{"series": "foobar", "index": 123}])
    );

    let minimal = load_fixture("dev", "minimal.txt");
    assert!(minimal.series().is_empty());
    assert_ne!(minimal.signature(), entry.signature());
}

#[test]
fn test_symlink() {
    let entry = load_fixture("dev", "symlink.txt");
    assert_eq!(entry.symlink(), Some("foobar"));
    assert_eq!(entry.to_map()["symlink"], json!("foobar"));

    let minimal = load_fixture("dev", "minimal.txt");
    assert_eq!(minimal.symlink(), None);
    assert_ne!(minimal.signature(), entry.signature());
}

#[test]
fn test_metalink() {
    let entry = load_fixture("dev", "metalink.txt");
    assert_eq!(entry.metalink(), Some("foobar"));
    assert_eq!(entry.to_map()["metalink"], json!("foobar"));

    let minimal = load_fixture("dev", "minimal.txt");
    assert_eq!(minimal.metalink(), None);
    assert_ne!(minimal.signature(), entry.signature());
}

#[test]
fn test_tags() {
    let entry = load_fixture("dev", "tagged.txt");
    assert_eq!(entry.tags(), &["some", "tags"]);
    assert_eq!(entry.to_map()["tags"], json!(["some", "tags"]));

    let minimal = load_fixture("dev", "minimal.txt");
    assert_eq!(minimal.content(), entry.content());
    assert!(!minimal.to_map().contains_key("tags"));
    assert_ne!(minimal.signature(), entry.signature());
}

#[test]
fn test_summary() {
    let entry = load_fixture("dev", "summary.txt");
    assert_eq!(entry.summary(), Some("Some summary.\n"));
    assert_eq!(
        entry.to_map()["summary"],
        Value::String("Some summary.\n".into())
    );

    let minimal = load_fixture("dev", "minimal.txt");
    assert_eq!(minimal.content(), entry.content());
    assert_ne!(minimal.signature(), entry.signature());
}

#[test]
fn test_insert_summary_matches_inline_text() {
    let inline = load_fixture("dev", "inline-summary.txt");
    let insert = load_fixture("dev", "insert-summary.txt");
    assert_eq!(inline.content(), insert.content());
    assert_eq!(inline.summary(), insert.summary());
    assert_eq!(inline.to_map(), insert.to_map());
    assert_eq!(insert.content(), "Some summary.\nHello, world");
}

#[test]
fn test_no_content() {
    let err = try_load("dev", "contentless.txt").unwrap_err();
    match err {
        LoadError::Parse { error, .. } => {
            assert_eq!(error.message(), "No content");
            assert_eq!(error.line(), 4);
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_duplicate_meta_reports_second_occurrence() {
    let err = try_load("dev", "broken-meta.txt").unwrap_err();
    assert_eq!(err.to_string(), "Multiple '~ metalink' at line 4");
}
