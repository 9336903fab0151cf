use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use vgsales_treemap::{parse_tree, render, RenderConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_svg_matches_fixture() {
    let body = fs::read_to_string("tests/fixtures/video-game-sales-sample.json").expect("read fixture");
    let tree = parse_tree(&body).expect("parse fixture");
    let scene = render(&tree, &RenderConfig::default());
    let digest = scene.fingerprint();

    let expected_path = golden_path("sample.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        fs::write(golden_path("sample.svg"), scene.to_svg()).expect("write golden svg");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    assert!(
        expected_path.exists(),
        "no golden at {:?}; run with UPDATE_GOLDENS=1 to create it",
        expected_path
    );

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
    if hex::decode(&digest).unwrap() != exp_bytes {
        let expected_svg = fs::read_to_string(golden_path("sample.svg")).unwrap_or_default();
        let actual_svg = scene.to_svg();
        let first_diff = expected_svg
            .lines()
            .zip(actual_svg.lines())
            .position(|(e, a)| e != a);
        panic!(
            "svg digest changed (first differing line: {:?}); rerun with UPDATE_GOLDENS=1 if intended",
            first_diff
        );
    }
}

#[test]
fn golden_svg_is_committed_alongside_digest() {
    let svg = fs::read_to_string(golden_path("sample.svg")).expect("read golden svg");
    let digest = fs::read_to_string(golden_path("sample.sha256")).expect("read golden digest");
    assert_eq!(svg.matches("<g transform=").count(), 31);
    assert!(svg.contains("<title>Wii → Wii Sports\n82.53M Sales</title>"));

    assert_eq!(hex::encode(Sha256::digest(svg.as_bytes())), digest.trim());
}
