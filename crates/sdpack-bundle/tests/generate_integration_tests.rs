//! Integration tests for the discover -> validate -> generate pipeline.
//!
//! Each test builds a throwaway `iconpacks/` + `packs/` pair in a temp dir.

#![allow(non_snake_case)]

use sdpack_bundle::{BundleError, DESCRIPTOR_FILE, Generator, IconIndex, Rejection};
use sdpack_core::PackConfig;
use sdpack_logging::{LogLevel, MemorySink};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a config rooted in a temp dir.
fn config_in(temp_dir: &TempDir) -> PackConfig {
    PackConfig::default()
        .with_source_root(temp_dir.path().join("iconpacks"))
        .with_output_root(temp_dir.path().join("packs"))
}

/// Helper to write a file, creating its parent folders.
fn write_file(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Helper to create the pack used throughout the docs.
fn create_demo_pack(config: &PackConfig) {
    let pack = config.pack_dir("demo");
    write_file(
        &pack.join(DESCRIPTOR_FILE),
        br#"{"id": "demo", "manifest": {"Icon": "logo.png"}}"#,
    );
    write_file(&pack.join("logo.png"), b"logo bytes");
    write_file(&pack.join("icons/a.png"), b"a bytes");
    write_file(&pack.join("icons/sub/b.jpg"), b"b bytes");
    write_file(&pack.join("icons/readme.txt"), b"not an icon");
}

fn read_index(bundle_dir: &Path) -> IconIndex {
    IconIndex::from_slice(&fs::read(bundle_dir.join("icons.json")).unwrap()).unwrap()
}

fn index_paths(bundle_dir: &Path) -> HashSet<String> {
    read_index(bundle_dir).iter().map(|e| e.path.clone()).collect()
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Generation
// =============================================================================

mod generation {
    use super::*;

    #[test]
    fn generate___demo_pack___produces_expected_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);
        let sink = MemorySink::new();

        let summary = Generator::new(&config, &sink).generate("demo").unwrap();

        let bundle = temp_dir.path().join("packs/demo.sdIconPack");
        assert_eq!(summary.bundle_dir, bundle);
        assert_eq!(summary.icon_count, 2);
        assert_eq!(fs::read(bundle.join("icon.png")).unwrap(), b"logo bytes");
        assert_eq!(fs::read(bundle.join("icons/a.png")).unwrap(), b"a bytes");
        assert_eq!(fs::read(bundle.join("icons/sub/b.jpg")).unwrap(), b"b bytes");
        assert!(!bundle.join("icons/readme.txt").exists());
        assert_eq!(
            fs::read_to_string(bundle.join("manifest.json")).unwrap(),
            r#"{"Icon":"logo.png"}"#
        );
        assert_eq!(index_paths(&bundle), set(&["a.png", "sub/b.jpg"]));
    }

    #[test]
    fn generate___mixed_tree___indexes_exactly_the_icons() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let pack = config.pack_dir("mixed");
        write_file(
            &pack.join(DESCRIPTOR_FILE),
            br#"{"id": "mixed", "manifest": {"Icon": "none.png"}}"#,
        );
        let icons = [
            "top.png",
            "top.jpg",
            "set1/one.png",
            "set1/two.jpg",
            "set2/deep/er/three.png",
        ];
        for icon in icons {
            write_file(&pack.join("icons").join(icon), icon.as_bytes());
        }
        for other in ["notes.md", "set1/thumb.PNG", "set1/photo.jpeg", "set2/.DS_Store"] {
            write_file(&pack.join("icons").join(other), b"ignored");
        }
        let sink = MemorySink::new();

        let summary = Generator::new(&config, &sink).generate("mixed").unwrap();

        let bundle = config.bundle_dir("mixed");
        assert_eq!(summary.icon_count, icons.len());
        let index = read_index(&bundle);
        assert_eq!(index.len(), icons.len());
        for entry in &index {
            let copied = bundle.join("icons").join(&entry.path);
            assert_eq!(fs::read(&copied).unwrap(), entry.path.as_bytes());
        }
        assert_eq!(index_paths(&bundle), set(&icons));
        assert!(!bundle.join("icons/notes.md").exists());
        assert!(!bundle.join("icons/set1/thumb.PNG").exists());
        assert!(!bundle.join("icons/set1/photo.jpeg").exists());
    }

    #[test]
    fn generate___index_file___is_indented_with_four_spaces() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);

        Generator::new(&config, &MemorySink::new())
            .generate("demo")
            .unwrap();

        let text = fs::read_to_string(config.bundle_dir("demo").join("icons.json")).unwrap();
        assert!(text.starts_with("[\n    {\n        \"path\": "));
    }

    #[test]
    fn generate___missing_output_root___is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir).with_output_root(temp_dir.path().join("a/b/packs"));
        create_demo_pack(&config);

        let summary = Generator::new(&config, &MemorySink::new())
            .generate("demo")
            .unwrap();

        assert!(summary.bundle_dir.join("manifest.json").is_file());
    }

    #[test]
    fn generate___custom_extension___names_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let config = PackConfig {
            bundle_extension: "streamDeckIconPack".to_string(),
            ..config_in(&temp_dir)
        };
        create_demo_pack(&config);

        Generator::new(&config, &MemorySink::new())
            .generate("demo")
            .unwrap();

        assert!(temp_dir.path().join("packs/demo.streamDeckIconPack").is_dir());
    }
}

// =============================================================================
// Regeneration
// =============================================================================

mod regeneration {
    use super::*;

    #[test]
    fn generate___twice___is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);
        let sink = MemorySink::new();
        let generator = Generator::new(&config, &sink);
        let bundle = config.bundle_dir("demo");

        generator.generate("demo").unwrap();
        let first_manifest = fs::read(bundle.join("manifest.json")).unwrap();
        let first_index = index_paths(&bundle);

        let summary = generator.generate("demo").unwrap();

        assert!(summary.replaced_existing);
        assert_eq!(fs::read(bundle.join("manifest.json")).unwrap(), first_manifest);
        assert_eq!(index_paths(&bundle), first_index);
    }

    #[test]
    fn generate___stale_bundle___is_replaced_not_merged() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);
        let bundle = config.bundle_dir("demo");
        write_file(&bundle.join("icons/removed.png"), b"stale");
        write_file(&bundle.join("icons/old/gone.jpg"), b"stale");
        write_file(&bundle.join("extra.txt"), b"stale");

        Generator::new(&config, &MemorySink::new())
            .generate("demo")
            .unwrap();

        assert!(!bundle.join("icons/removed.png").exists());
        assert!(!bundle.join("icons/old").exists());
        assert!(!bundle.join("extra.txt").exists());
        assert_eq!(index_paths(&bundle), set(&["a.png", "sub/b.jpg"]));
    }

    #[test]
    fn generate___removed_source_icon___disappears_from_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);
        let generator_sink = MemorySink::new();
        let generator = Generator::new(&config, &generator_sink);
        generator.generate("demo").unwrap();

        fs::remove_file(config.pack_dir("demo").join("icons/a.png")).unwrap();
        generator.generate("demo").unwrap();

        let bundle = config.bundle_dir("demo");
        assert!(!bundle.join("icons/a.png").exists());
        assert_eq!(index_paths(&bundle), set(&["sub/b.jpg"]));
    }

    #[test]
    fn generate___one_pack___does_not_touch_another() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);
        let other = config.bundle_dir("other");
        write_file(&other.join("manifest.json"), b"{}");

        Generator::new(&config, &MemorySink::new())
            .generate("demo")
            .unwrap();

        assert_eq!(fs::read(other.join("manifest.json")).unwrap(), b"{}");
    }
}

// =============================================================================
// Validation failures
// =============================================================================

mod validation_failures {
    use super::*;

    #[test]
    fn generate___missing_descriptor___warns_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        write_file(&config.pack_dir("demo").join("icons/a.png"), b"a");
        let sink = MemorySink::new();

        let result = Generator::new(&config, &sink).generate("demo");

        assert!(matches!(
            result,
            Err(BundleError::InvalidPack {
                reason: Rejection::MissingDescriptor,
                ..
            })
        ));
        assert!(sink.contains(LogLevel::Warn, "No iconpack.json found"));
        assert!(!config.output_root.exists());
    }

    #[test]
    fn generate___invalid_json___writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        write_file(&config.pack_dir("demo").join(DESCRIPTOR_FILE), b"{\"id\": \"demo\"");
        let sink = MemorySink::new();

        let result = Generator::new(&config, &sink).generate("demo");

        assert!(result.is_err());
        assert!(sink.contains(LogLevel::Warn, "Invalid JSON"));
        assert!(!config.output_root.exists());
    }

    #[test]
    fn generate___missing_id___fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        write_file(
            &config.pack_dir("demo").join(DESCRIPTOR_FILE),
            br#"{"manifest": {"Icon": "logo.png"}}"#,
        );
        let sink = MemorySink::new();

        let result = Generator::new(&config, &sink).generate("demo");

        assert!(matches!(
            result,
            Err(BundleError::InvalidPack {
                reason: Rejection::MissingField("id"),
                ..
            })
        ));
    }
}

// =============================================================================
// Discovery
// =============================================================================

mod discovery {
    use super::*;

    #[test]
    fn list___fresh_workspace___creates_source_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);

        let packs = Generator::new(&config, &MemorySink::new()).list().unwrap();

        assert!(packs.is_empty());
        assert!(config.source_root.is_dir());
    }

    #[test]
    fn list___then_generate___round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        create_demo_pack(&config);
        write_file(&config.pack_dir("broken").join(DESCRIPTOR_FILE), b"[");
        let sink = MemorySink::new();
        let generator = Generator::new(&config, &sink);

        let packs = generator.list().unwrap();
        assert_eq!(packs, vec!["demo"]);

        for name in &packs {
            generator.generate(name).unwrap();
        }
        assert!(config.bundle_dir("demo").is_dir());
    }
}
