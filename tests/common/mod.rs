//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

fn chapter(book: u32, chapter: u32, texts: &[&str]) -> Value {
    let verses: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let verse = i as u32 + 1;
            json!({
                "id": format!("{}{:03}{:03}", book, chapter, verse),
                "bv": text,
                "book": book,
                "chapter": chapter.to_string(),
                "verse": verse.to_string(),
            })
        })
        .collect();

    json!({ "chapter": chapter.to_string(), "verses": verses })
}

/// Two books: Genesis (5 + 3 verses) and Exodus (2 verses), plus keys outside
/// the typed model
pub fn sample_bible() -> Value {
    json!({
        "version": "KJV",
        "books": [
            { "index": 1, "name": "Genesis", "testament": "OT" },
            { "index": 2, "name": "Exodus", "testament": "OT" }
        ],
        "bible": [
            {
                "bookname": "Genesis",
                "chapters": [
                    chapter(1, 1, &[
                        "In the beginning",
                        "the earth was without form",
                        "Let there be light",
                        "God saw the light, that it was good",
                        "the evening and the morning were the first day",
                    ]),
                    chapter(1, 2, &[
                        "Thus the heavens and the earth were finished",
                        "he rested on the seventh day",
                        "God blessed the seventh day",
                    ]),
                ]
            },
            {
                "bookname": "Exodus",
                "chapters": [
                    chapter(2, 1, &[
                        "these are the names",
                        "showing mercy unto thousands of them that love me",
                    ]),
                ]
            }
        ]
    })
}

/// A bible whose only book has no chapters
pub fn empty_bible() -> Value {
    json!({
        "books": [{ "index": 1, "name": "Empty" }],
        "bible": [{ "bookname": "Empty", "chapters": [] }]
    })
}

/// Writes `kjv.json`, `empty.json` and a malformed `broken.json` into `dir`
pub fn write_bibles(dir: &Path) {
    fs::write(dir.join("kjv.json"), sample_bible().to_string()).unwrap();
    fs::write(dir.join("empty.json"), empty_bible().to_string()).unwrap();
    fs::write(dir.join("broken.json"), "{ \"bible\": [").unwrap();
}

/// Writes both catalogs into `dir`
pub fn write_catalogs(dir: &Path) {
    fs::write(
        dir.join("versions.json"),
        json!([
            { "id": "kjv", "name": "King James Version", "language": "English", "language_id": 2, "abbreviation": "KJV" },
            { "id": "rv", "name": "Reina Valera", "language": "Spanish", "language_id": 3 }
        ])
        .to_string(),
    )
    .unwrap();
    fs::write(
        dir.join("languages.json"),
        json!([{ "id": 2, "language": "English" }, { "id": 3, "language": "Spanish" }])
            .to_string(),
    )
    .unwrap();
}

/// Temp directory holding bibles under `bibles/` and catalogs at the root
pub fn setup_data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let bibles = tmp.path().join("bibles");
    fs::create_dir(&bibles).unwrap();
    write_bibles(&bibles);
    write_catalogs(tmp.path());
    tmp
}
