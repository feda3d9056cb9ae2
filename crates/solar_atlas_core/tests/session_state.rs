use std::fs;
use std::path::PathBuf;

use solar_atlas_core::session::{self, Session};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("solar_atlas_test_{}_{name}", std::process::id()))
}

#[test]
fn missing_file_yields_defaults() {
    let session = session::load(&scratch_path("missing/never_written.json"));
    assert_eq!(session.planet, "Earth");
    assert_eq!(session.theme, "dark");
    assert_eq!(session.language, "en");
    assert_eq!(session.view, "form");
}

#[test]
fn corrupt_file_yields_defaults() {
    let path = scratch_path("corrupt.json");
    fs::write(&path, "{ this is not json").expect("write scratch file");
    assert_eq!(session::load(&path), Session::default());
    let _ = fs::remove_file(&path);
}

#[test]
fn save_then_load_round_trips() {
    let path = scratch_path("roundtrip/nested/session.json");
    let session = Session {
        planet: "Saturn".to_string(),
        theme: "light".to_string(),
        language: "it".to_string(),
        view: "gallery".to_string(),
    };

    session::save(&path, &session).expect("save creates parent dirs and writes");
    assert_eq!(session::load(&path), session);

    let _ = fs::remove_file(&path);
}

#[test]
fn partial_file_fills_in_defaults() {
    // older session files may predate the view field
    let path = scratch_path("partial.json");
    fs::write(&path, r#"{"planet":"Mars","theme":"light"}"#).expect("write scratch file");

    let session = session::load(&path);
    assert_eq!(session.planet, "Mars");
    assert_eq!(session.theme, "light");
    assert_eq!(session.language, "en");
    assert_eq!(session.view, "form");

    let _ = fs::remove_file(&path);
}
