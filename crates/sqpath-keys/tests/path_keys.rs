//! End-to-end tests over the public API
//!
//! Reference values were captured from known-good archive index entries.

use sqpath_keys::{PathKey, SqPathError, UploadBatch, category_id};

/// Known-good (path, category, folder, file) tuples from the archive.
const REFERENCE_VECTORS: &[(&str, u32, u32, u32)] = &[
    ("exd/root.exl", 0x0A_0000, 0xE39B7999, 0x51B57EBC),
    (
        "music/ffxiv/bgm_system_title.scd",
        0x0C_0000,
        0x0AF269D6,
        0xE3B71579,
    ),
    (
        "bg/ex1/01_rok_r2/twn/r2t1/level/planmap.lgb",
        0x02_0101,
        0x1586F33C,
        0x77C3D938,
    ),
    (
        "chara/equipment/e0000/texture/v01_c0101e0000_top_d.tex",
        0x04_0000,
        0x31A82E2A,
        0xE7763024,
    ),
    ("ui/uld/title_logo.uld", 0x06_0000, 0xA80C432B, 0xD62F30ED),
];

#[test]
fn reference_vectors() {
    for &(path, category, folder, file) in REFERENCE_VECTORS {
        let key = PathKey::compute(path).unwrap();
        assert_eq!(key.category_id, category, "category of {path}");
        assert_eq!(key.folder_hash, folder, "folder hash of {path}");
        assert_eq!(key.file_hash, file, "file hash of {path}");
    }
}

#[test]
fn upload_batch_end_to_end() {
    let payload = r#"{
        "Entries": [
            "exd/root.exl",
            "bg/ex2/03/fld/f1f3/level/planmap.lgb",
            "cut/ex1/sound/voicem/voiceman_01000.scd"
        ]
    }"#;

    let batch = UploadBatch::from_json(payload).unwrap();
    let keys = batch.keys().unwrap();

    assert_eq!(keys.len(), 3);
    assert_eq!(keys[0].category_id, 0x0A_0000);
    assert_eq!(keys[1].category_id, 0x02_0000 | (2 << 8) | 3);
    assert_eq!(keys[2].category_id, 0x03_0000 | (1 << 8));
}

#[test]
fn upload_batch_propagates_entry_errors() {
    let batch = UploadBatch::from_json(r#"{"Entries":["bg/exa/01/file.lgb"]}"#).unwrap();
    match batch.keys() {
        Err(SqPathError::MalformedPath { path, offset }) => {
            assert_eq!(path, "bg/exa/01/file.lgb");
            assert_eq!(offset, 5);
        }
        other => panic!("expected MalformedPath, got {other:?}"),
    }
}

#[test]
fn unknown_prefix_is_ambiguous_with_common() {
    // Both map to packed code 0; the archive format cannot tell them
    // apart and neither can we.
    assert_eq!(
        category_id("common/font/font1.tex").unwrap(),
        category_id("totally/unknown.dat").unwrap()
    );
}

#[test]
fn keys_are_stable_across_calls() {
    let first = PathKey::compute("sound/battle/se_battle.scd").unwrap();
    let second = PathKey::compute("sound/battle/se_battle.scd").unwrap();
    assert_eq!(first, second);
}
