//! The picture-of-the-day record is optional: whatever the service does,
//! the caller ends up with either a renderable record or `None`.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use solar_atlas_core::apod::{self, MediaKind};

/// Minimal one-shot HTTP stub; returns the base URL to aim the client at.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

const IMAGE_RECORD: &str = r#"{
    "media_type": "image",
    "url": "https://apod.example/today.jpg",
    "title": "A Test Nebula",
    "date": "2026-08-07",
    "explanation": "A nebula, for testing."
}"#;

#[test]
fn successful_image_record_is_kept() {
    let base = serve_once("200 OK", IMAGE_RECORD);
    let apod = apod::supplementary(apod::fetch(&base, "DEMO_KEY"))
        .expect("a well-formed image record survives");
    assert_eq!(apod.kind(), Some(MediaKind::Image));
    assert_eq!(apod.title, "A Test Nebula");
    assert_eq!(apod.date, "2026-08-07");
}

#[test]
fn video_record_is_kept() {
    let base = serve_once(
        "200 OK",
        r#"{"media_type":"video","url":"https://apod.example/v","title":"T","date":"2026-08-07"}"#,
    );
    let apod = apod::supplementary(apod::fetch(&base, "DEMO_KEY")).expect("video records render");
    assert_eq!(apod.kind(), Some(MediaKind::Video));
    assert_eq!(apod.explanation, "", "explanation may be absent");
}

#[test]
fn server_error_collapses_to_absent() {
    let base = serve_once("500 Internal Server Error", "{}");
    let result = apod::fetch(&base, "DEMO_KEY");
    assert!(result.is_err(), "non-success status is a fetch error");
    assert!(
        apod::supplementary(result).is_none(),
        "...but the view-level state is just 'no supplementary content'"
    );
}

#[test]
fn unreachable_service_collapses_to_absent() {
    // nothing listens here; the connection is refused immediately
    assert!(apod::supplementary(apod::fetch("http://127.0.0.1:9", "DEMO_KEY")).is_none());
}

#[test]
fn malformed_json_collapses_to_absent() {
    let base = serve_once("200 OK", "not json at all");
    assert!(apod::supplementary(apod::fetch(&base, "DEMO_KEY")).is_none());
}

#[test]
fn unsupported_media_kind_collapses_to_absent() {
    let base = serve_once(
        "200 OK",
        r#"{"media_type":"audio","url":"u","title":"t","date":"d"}"#,
    );
    assert!(apod::supplementary(apod::fetch(&base, "DEMO_KEY")).is_none());
}
