use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::tempdir;
use uniter::{core::ProjectCollector, error::Result, models::config::Settings};

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|d| d.and_hms_opt(14, 3, 9))
        .expect("valid timestamp")
}

fn separator() -> String {
    format!("# {}\n", "=".repeat(50))
}

#[test]
fn test_small_file_is_embedded_verbatim() -> Result<()> {
    let temp_dir = tempdir()?;
    let source = "class Service:\n    def start(self):\n        pass\n\n\ndef main():\n    Service().start()\n";
    fs::write(temp_dir.path().join("service.py"), source)?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    let code = collector.render_consolidated_code(&records, fixed_time());

    let expected_block = format!(
        "{sep}# FILE: service.py\n# SIZE: {size} bytes\n# FUNCTIONS: main, start\n# CLASSES: Service\n{sep}\n{source}\n\n",
        sep = separator(),
        size = source.len(),
        source = source
    );
    assert!(code.starts_with("\"\"\"\n=== CONSOLIDATED PROJECT CODE ===\nDate: 2024-05-17 14:03:09\nFiles: 1\n\"\"\"\n\n"));
    assert!(code.ends_with(&expected_block));

    Ok(())
}

#[test]
fn test_threshold_is_inclusive() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("exact.py"), "x = 1\n")?;
    fs::write(temp_dir.path().join("over.py"), "x = 12\n")?;

    let mut settings = Settings::for_path(temp_dir.path());
    settings.max_file_size = 6;
    let collector = ProjectCollector::new(settings);
    let records = collector.collect_files()?;
    let code = collector.render_consolidated_code(&records, fixed_time());

    assert!(code.contains("# FILE: exact.py\n# SIZE: 6 bytes\n"));
    assert!(code.contains("x = 1\n"));
    assert!(code.contains("# === over.py === [FILE TOO LARGE: 7 bytes]\n\n"));
    assert!(!code.contains("x = 12"));

    Ok(())
}

#[test]
fn test_broken_and_non_utf8_files() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("broken.py"), "def oops(:\n")?;
    fs::write(temp_dir.path().join("latin.py"), b"s = '\xff'\n")?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    let code = collector.render_consolidated_code(&records, fixed_time());

    // Unparseable sources are still embedded, without name lines
    assert!(code.contains("# FILE: broken.py\n# SIZE: 11 bytes\n# ===="));
    assert!(code.contains("def oops(:\n"));
    assert!(code.contains("# === latin.py === [READ ERROR: "));

    Ok(())
}

#[test]
fn test_file_removed_after_collection() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("gone.py"), "pass\n")?;
    fs::write(temp_dir.path().join("stays.py"), "pass\n")?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    fs::remove_file(temp_dir.path().join("gone.py"))?;

    let code = collector.render_consolidated_code(&records, fixed_time());

    assert!(code.contains("# === gone.py === [READ ERROR: "));
    assert!(code.contains("# FILE: stays.py\n"));

    Ok(())
}

#[test]
fn test_only_python_files_are_consolidated() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("app.py"), "pass\n")?;
    fs::write(temp_dir.path().join("README.md"), "# readme\n")?;
    fs::write(temp_dir.path().join("data.json"), "{}\n")?;

    let output = temp_dir.path().join("out").join("all.py");
    fs::create_dir(temp_dir.path().join("out"))?;

    let mut settings = Settings::for_path(temp_dir.path());
    settings.exclude_dirs.push("out".to_string());
    let code = ProjectCollector::new(settings).create_consolidated_code(&output)?;

    assert_eq!(fs::read_to_string(&output)?, code);
    assert!(code.contains("Files: 1\n"));
    assert!(!code.contains("README.md"));
    assert!(!code.contains("data.json"));

    Ok(())
}
