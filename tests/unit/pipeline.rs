use super::*;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "osbforge_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn read_sources_keeps_path_order() {
    let dir = temp_dir("read_order");
    let paths: Vec<PathBuf> = (0..16)
        .map(|i| {
            let p = dir.join(format!("src{i}.json"));
            // Uneven sizes so reads finish in arbitrary order.
            std::fs::write(&p, format!("{i}:{}", "x".repeat((16 - i) * 4096))).unwrap();
            p
        })
        .collect();

    let texts = read_sources(&paths).unwrap();
    for (i, text) in texts.iter().enumerate() {
        assert!(text.starts_with(&format!("{i}:")));
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_source_is_reported() {
    let dir = temp_dir("read_missing");
    let ok = dir.join("ok.json");
    std::fs::write(&ok, "{}").unwrap();
    let missing = dir.join("missing.json");

    let err = read_sources(&[ok, missing.clone()]).unwrap_err();
    match err {
        OsbError::SourceRead { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn parse_errors_name_the_file() {
    let dir = temp_dir("parse_error");
    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();

    let err = merge_sources(&[bad]).unwrap_err();
    assert!(matches!(err, OsbError::Serde(_)));
    assert!(err.to_string().contains("bad.json"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sources_put_libraries_first() {
    let opts = CompileOpts::new("main.json")
        .library("lib/a.json")
        .library("lib/b.json")
        .line_ending(LineEnding::Lf);
    assert_eq!(
        opts.sources(),
        vec![
            PathBuf::from("lib/a.json"),
            PathBuf::from("lib/b.json"),
            PathBuf::from("main.json"),
        ]
    );
    assert_eq!(opts.events.line_ending, LineEnding::Lf);
}

#[test]
fn compile_counts_sprites_and_records() {
    let dir = temp_dir("compile_counts");
    let script = dir.join("main.json");
    std::fs::write(
        &script,
        r#"{ "sprites": [
            { "image": "a.png", "calls": [ { "fade_in": { "duration": 100 } } ] },
            { "image": "b.png" }
        ] }"#,
    )
    .unwrap();

    let out = compile(&CompileOpts::new(&script).line_ending(LineEnding::Lf)).unwrap();
    assert_eq!(out.sprites, 2);
    assert_eq!(out.records, 3);
    assert!(out.text.starts_with("[Events]\nSprite,0,0,\"a.png\",320,240\n_F,0,0,100,0,1\n"));
    let _ = std::fs::remove_dir_all(&dir);
}
