//! Integration tests: batch fetch behavior against a local HTTP server, and
//! the full HAR-to-files pipeline.

mod common;

use std::collections::HashMap;

use jsgrab_core::config::JsgrabConfig;
use jsgrab_core::error::DownloadError;
use jsgrab_core::fetch::{Fetcher, Outcome};
use jsgrab_core::har::HarSource;
use jsgrab_core::pipeline::run_pipeline;
use jsgrab_core::urlset::JsUrlSet;
use tempfile::tempdir;

use common::js_server::{start, Route};

fn urls(items: &[String]) -> JsUrlSet {
    items.iter().cloned().collect()
}

#[test]
fn failed_url_does_not_abort_the_batch() {
    let mut routes = HashMap::new();
    routes.insert("/a.js".to_string(), Route::ok("application/javascript", b"alert(1);"));
    routes.insert("/missing.js".to_string(), Route::status(404));
    let base = start(routes);

    let dir = tempdir().unwrap();
    let set = urls(&[
        format!("{base}/a.js"),
        format!("{base}/missing.js"),
        "http://127.0.0.1:1/refused.js".to_string(),
    ]);

    let results = Fetcher::new(dir.path(), &JsgrabConfig::default()).fetch_all(&set);
    assert_eq!(results.len(), 3);

    for result in &results {
        match (&result.outcome, result.url.as_str()) {
            (Outcome::Saved { filename, bytes }, url) if url.ends_with("/a.js") => {
                assert_eq!(filename, "a.js");
                assert_eq!(*bytes, 9);
            }
            (Outcome::Failed(DownloadError::Http(code)), url) if url.ends_with("/missing.js") => {
                assert_eq!(*code, 404);
            }
            (Outcome::Failed(DownloadError::Transport(_)), url) if url.ends_with("/refused.js") => {}
            (outcome, url) => panic!("unexpected outcome for {url}: {outcome:?}"),
        }
    }

    assert_eq!(
        std::fs::read(dir.path().join("a.js")).unwrap(),
        b"alert(1);"
    );
    assert!(!dir.path().join("missing.js").exists());
}

#[test]
fn filename_collision_last_write_wins() {
    let mut routes = HashMap::new();
    routes.insert("/x/lib.js".to_string(), Route::ok("application/javascript", b"one"));
    routes.insert("/y/lib.js".to_string(), Route::ok("application/javascript", b"two"));
    let base = start(routes);

    let dir = tempdir().unwrap();
    let set = urls(&[format!("{base}/x/lib.js"), format!("{base}/y/lib.js")]);

    let results = Fetcher::new(dir.path(), &JsgrabConfig::default()).fetch_all(&set);
    assert!(results.iter().all(|r| r.is_saved()));

    // Lexicographic set order processes /x before /y; the later overwrites.
    assert_eq!(std::fs::read(dir.path().join("lib.js")).unwrap(), b"two");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn root_url_saves_under_host_derived_name() {
    let mut routes = HashMap::new();
    routes.insert("/".to_string(), Route::ok("application/javascript", b"root"));
    let base = start(routes);

    let dir = tempdir().unwrap();
    let set = urls(&[format!("{base}/")]);

    let results = Fetcher::new(dir.path(), &JsgrabConfig::default()).fetch_all(&set);
    assert!(results[0].is_saved());
    // Host 127.0.0.1 sanitizes to a digit-leading stem, so the js_ prefix
    // applies.
    assert_eq!(
        std::fs::read(dir.path().join("js_127_0_0_1.js")).unwrap(),
        b"root"
    );
}

#[test]
fn har_pipeline_end_to_end() {
    let html = br#"<html><head><script src="/assets/app.js"></script></head></html>"#;
    let mut routes = HashMap::new();
    routes.insert("/".to_string(), Route::ok("text/html", html));
    routes.insert(
        "/assets/app.js".to_string(),
        Route::ok("application/javascript", b"console.log('app');"),
    );
    routes.insert(
        "/vendor/lib.js".to_string(),
        Route::ok("application/javascript", b"console.log('lib');"),
    );
    let base = start(routes);

    let har = format!(
        r#"{{ "log": {{ "entries": [
            {{ "request": {{ "url": "{base}/" }},
              "response": {{ "status": 200,
                "headers": [ {{ "name": "Content-Type", "value": "text/html" }} ],
                "content": {{ "text": "{html}" }} }} }},
            {{ "request": {{ "url": "{base}/vendor/lib.js" }} }}
        ] }} }}"#,
        base = base,
        html = r#"<html><head><script src='/assets/app.js'></script></head></html>"#,
    );

    let dir = tempdir().unwrap();
    let har_path = dir.path().join("capture.har");
    std::fs::write(&har_path, har).unwrap();

    let out = tempdir().unwrap();
    let source = HarSource::load(&har_path, None).unwrap();
    let report = run_pipeline(&source, out.path(), &JsgrabConfig::default()).unwrap();

    assert_eq!(report.urls_found, 2);
    assert_eq!(report.saved, 2);
    assert_eq!(report.failed, 0);

    let list = std::fs::read_to_string(&report.list_path).unwrap();
    assert_eq!(
        list,
        format!("{base}/assets/app.js\n{base}/vendor/lib.js\n")
    );

    assert_eq!(
        std::fs::read(out.path().join("app.js")).unwrap(),
        b"console.log('app');"
    );
    assert_eq!(
        std::fs::read(out.path().join("lib.js")).unwrap(),
        b"console.log('lib');"
    );
}
