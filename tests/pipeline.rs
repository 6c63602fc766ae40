//! End-to-end runs through the public API: generate, encode, decode, batch.

use identicon::batch::{self, BatchManifest};
use identicon::encoding::{self, EncoderBackend, PngBackend};
use identicon::{Generator, HashAlgorithm, Options, generate};
use std::fs;
use tempfile::TempDir;

#[test]
fn png_round_trip_reproduces_buffer() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("alice.png");
    let canvas = generate(&Options::new("alice").with_size(97).with_transparent(false)).unwrap();

    encoding::write_png(&PngBackend::new(), &canvas, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (97, 97));
    assert_eq!(decoded.as_raw().as_slice(), canvas.pixels());
}

#[test]
fn in_memory_encoding_matches_file_encoding() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bob.png");
    let canvas = generate(&Options::new("bob")).unwrap();
    let backend = PngBackend::new();

    encoding::write_png(&backend, &canvas, &path).unwrap();
    let bytes = encoding::encode_png(&backend, &canvas).unwrap();

    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn encoder_rejects_short_buffers() {
    let result = PngBackend::new().encode_rgba_to_vec(&[0; 12], 2, 2);
    assert!(result.is_err());
}

#[test]
fn many_sizes_give_exact_buffers() {
    for size in [5, 6, 7, 13, 64, 100, 255, 513] {
        let canvas = generate(&Options::new("sizes").with_size(size)).unwrap();
        assert_eq!(canvas.pixels().len(), (size * size * 4) as usize, "size {size}");
    }
}

#[test]
fn batch_writes_pngs_and_manifest() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("out");
    let entries = batch::parse_list("identicon\nidenticon\tpepper\n\nidenticon\n");
    let base = Options::default().with_hash_algorithm(HashAlgorithm::Md5);

    let manifest = batch::run_batch(
        &Generator::new(),
        &PngBackend::new(),
        &base,
        &entries,
        &out_dir,
        None,
    )
    .unwrap();

    let files: Vec<&str> = manifest.entries.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "ad2b41613c8702b5372bbdc9a8107040.png",
            "43d9476ceb16b7b59042be2cdff9a061.png"
        ]
    );
    for file in files {
        let decoded = image::open(out_dir.join(file)).unwrap();
        assert_eq!(decoded.width(), 64);
    }

    let written: BatchManifest =
        serde_json::from_str(&fs::read_to_string(batch::manifest_path(&out_dir)).unwrap())
            .unwrap();
    assert_eq!(written, manifest);
    assert_eq!(written.algorithm, HashAlgorithm::Md5);
}
