//! 整合測試 - 在暫存資料夾上驗證三個批次流程的公開 API

use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;
use watch_catalog_prep::component::catalog_generator::{
    CSV_HEADERS, build_catalog, write_catalog_file,
};
use watch_catalog_prep::component::code_renamer::{apply_renames, plan_renames};
use watch_catalog_prep::component::format_converter::convert_all;
use watch_catalog_prep::config::{Config, ConverterSettings, RenamerSettings, UserSettings};
use watch_catalog_prep::tools::scan_files_by_extension;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "not really an image").unwrap();
}

fn write_png(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(4, 3, Rgba([0, 128, 255, 100]))
        .save(path)
        .unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_rename_then_rerun_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Rolex");
    let folder = root.join("Date-just").join("36mm");
    for name in ["z.jpg", "a.JPEG", "m.jpg", "readme.txt"] {
        touch(&folder.join(name));
    }
    touch(&root.join("Sky Dweller").join("cover.jpg"));

    let settings = RenamerSettings {
        dry_run: false,
        ..RenamerSettings::default()
    };
    let plan = plan_renames(&root, &settings);
    assert_eq!(plan.operations.len(), 4);

    let summary = apply_renames(&plan.operations, &AtomicBool::new(false));
    assert_eq!(summary.renamed.len(), 4);
    assert!(summary.conflicts.is_empty());
    assert!(summary.failed.is_empty());

    assert_eq!(
        file_names(&folder),
        vec!["R-DJ-36-img1.JPEG", "R-DJ-36-img2.jpg", "R-DJ-36-img3.jpg", "readme.txt"]
    );
    assert_eq!(file_names(&root.join("Sky Dweller")), vec!["R-SD-img1.jpg"]);

    let second = plan_renames(&root, &settings);
    assert!(second.operations.is_empty());
}

#[test]
fn test_rename_plan_does_not_touch_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Omega");
    touch(&root.join("b.jpg"));
    touch(&root.join("a.jpg"));

    let plan = plan_renames(&root, &RenamerSettings::default());

    assert_eq!(plan.operations.len(), 2);
    assert_eq!(plan.operations[0].source_name(), "a.jpg");
    assert_eq!(plan.operations[0].target_name(), "O-img1.jpg");
    assert_eq!(file_names(&root), vec!["a.jpg", "b.jpg"]);
}

#[test]
fn test_catalog_from_folder_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for i in 1..=5 {
        touch(&root.join(format!("Rolex/Datejust/Blue Dial/img{i}.jpg")));
    }
    for i in 1..=2 {
        touch(&root.join(format!("Omega/Seamaster/Black/img{i}.jpg")));
    }

    let config = Config::with_settings(UserSettings::default()).unwrap();
    let report = build_catalog(root, &config, &AtomicBool::new(false)).unwrap();

    assert_eq!(report.products_processed, 1);
    assert_eq!(report.product_count(), 3);
    assert_eq!(report.rows.len(), 9);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].relative_path, "Omega/Seamaster/Black");
    assert_eq!(report.skipped[0].image_count, 2);

    let handles: Vec<&str> = report
        .rows
        .iter()
        .filter(|row| row.is_primary())
        .map(|row| row.handle.as_str())
        .collect();
    assert_eq!(handles, vec!["blue-dial-1", "blue-dial-2", "blue-dial-3"]);
    assert!(
        report
            .rows
            .iter()
            .filter(|row| row.is_primary())
            .all(|row| row.collection == "rolex-datejust")
    );

    let output = temp_dir.path().join("out.csv");
    write_catalog_file(&output, &report.rows).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, CSV_HEADERS);
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 9);
    assert!(records.iter().all(|record| record.len() == CSV_HEADERS.len()));
    assert_eq!(&records[0][0], "blue-dial-1");
    assert_eq!(&records[1][0], "");
}

#[test]
fn test_catalog_with_no_products_still_writes_header() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("watches");
    fs::create_dir_all(root.join("Empty")).unwrap();

    let config = Config::with_settings(UserSettings::default()).unwrap();
    let report = build_catalog(&root, &config, &AtomicBool::new(false)).unwrap();
    assert!(report.rows.is_empty());

    let output = temp_dir.path().join("out.csv");
    write_catalog_file(&output, &report.rows).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("Handle,Title,Body (HTML)"));
}

#[test]
fn test_catalog_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::with_settings(UserSettings::default()).unwrap();

    let result = build_catalog(
        &temp_dir.path().join("missing"),
        &config,
        &AtomicBool::new(false),
    );

    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_catalog_unreadable_root_is_an_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("watches");
    for i in 1..=3 {
        touch(&root.join(format!("Rolex/Datejust/Blue/img{i}.jpg")));
    }
    fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

    // root 不受權限限制，無法重現
    if fs::read_dir(&root).is_ok() {
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let config = Config::with_settings(UserSettings::default()).unwrap();
    let result = build_catalog(&root, &config, &AtomicBool::new(false));
    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(result.is_err());
}

#[test]
fn test_convert_continues_past_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_png(&root.join("a.png"));
    touch(&root.join("b.png"));
    fs::create_dir_all(root.join("nested")).unwrap();
    RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))
        .save(root.join("nested/c.bmp"))
        .unwrap();

    let settings = ConverterSettings::default();
    let files = scan_files_by_extension(root, &settings.source_extensions);
    assert_eq!(files.len(), 3);

    let summary = convert_all(&files, root, &settings, &AtomicBool::new(false));

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.attempted(), 3);
    assert_eq!(summary.failed[0].path, Path::new("b.png"));
    assert!(root.join("a.jpg").exists());
    assert!(root.join("nested/c.jpg").exists());
    assert!(root.join("a.png").exists());

    let converted = image::open(root.join("a.jpg")).unwrap();
    assert_eq!((converted.width(), converted.height()), (4, 3));
}

#[test]
fn test_convert_deletes_only_successful_originals() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_png(&root.join("good.png"));
    touch(&root.join("bad.png"));

    let settings = ConverterSettings {
        delete_originals: true,
        ..ConverterSettings::default()
    };
    let files = scan_files_by_extension(root, &settings.source_extensions);
    let summary = convert_all(&files, root, &settings, &AtomicBool::new(false));

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.originals_deleted, 1);
    assert!(summary.delete_failures.is_empty());
    assert_eq!(file_names(root), vec!["bad.png", "good.jpg"]);
}
