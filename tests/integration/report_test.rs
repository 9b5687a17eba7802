use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use uniter::{core::ProjectCollector, error::Result};

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|d| d.and_hms_opt(14, 3, 9))
        .expect("valid timestamp")
}

fn write_sources(root: &Path) -> Result<()> {
    fs::write(
        root.join("models.py"),
        r#""""Data models."""
import json
from dataclasses import dataclass, field


class User:
    """A registered user of the service, identified by email."""

    def __init__(self, email):
        self.email = email

    def to_json(self):
        return json.dumps({"email": self.email})


class Admin(User):
    pass
"#,
    )?;
    fs::write(
        root.join("util.py"),
        "import json\nimport os\n\n\ndef slugify(text, sep='-'):\n    \"\"\"Make a slug.\"\"\"\n    return sep.join(text.split())\n",
    )?;
    fs::write(root.join("broken.py"), "def oops(:\n")?;
    fs::write(root.join("notes.txt"), "todo\n")?;
    Ok(())
}

#[test]
fn test_summary_counts() -> Result<()> {
    let temp_dir = tempdir()?;
    write_sources(temp_dir.path())?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    let report = collector.render_summary_report(&records, fixed_time())?;

    assert!(report.starts_with("# Project Report\nGenerated: 2024-05-17 14:03:09\n\n"));
    assert!(report.contains("- Total files: 4\n"));
    assert!(report.contains("- Python files: 3\n"));
    // models.py has 18 lines, util.py 8, the broken file adds nothing
    assert!(report.contains("- Lines of code: 26\n"));
    assert!(report.contains("- Functions: 3\n"));
    assert!(report.contains("- Classes: 2\n"));
    assert!(report.contains("- Unique imports: 3\n"));

    Ok(())
}

#[test]
fn test_sections_are_sorted_and_formatted() -> Result<()> {
    let temp_dir = tempdir()?;
    write_sources(temp_dir.path())?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    let report = collector.render_summary_report(&records, fixed_time())?;

    assert!(report.contains(
        "## Classes\n\
         - **Admin** (models.py)\n\
         - **User** (models.py)\n  \
         - A registered user of the service, identified by email....\n  \
         - Methods: __init__, to_json\n\n"
    ));
    assert!(report.contains(
        "## Functions\n\
         - **__init__()** (models.py)\n  \
         - Arguments: self, email\n\
         - **slugify()** (util.py)\n  \
         - Make a slug....\n  \
         - Arguments: text, sep\n\
         - **to_json()** (models.py)\n  \
         - Arguments: self\n\n"
    ));
    assert!(report.ends_with(
        "## Imports\n\
         - dataclasses.dataclass, field\n\
         - json\n\
         - os\n\n"
    ));

    Ok(())
}

#[test]
fn test_empty_sections_are_omitted() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("constants.py"), "LIMIT = 10\n")?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    let report = collector.render_summary_report(&records, fixed_time())?;

    assert!(!report.contains("## Classes"));
    assert!(!report.contains("## Functions"));
    assert!(!report.contains("## Imports"));
    assert!(report.ends_with("└── constants.py\n```\n\n"));

    Ok(())
}

#[test]
fn test_only_first_twenty_functions_are_listed() -> Result<()> {
    let temp_dir = tempdir()?;
    let source: String = (0..30)
        .rev()
        .map(|i| format!("def fn_{:02}():\n    pass\n\n", i))
        .collect();
    fs::write(temp_dir.path().join("many.py"), source)?;

    let collector = ProjectCollector::for_path(temp_dir.path());
    let records = collector.collect_files()?;
    let report = collector.render_summary_report(&records, fixed_time())?;

    assert!(report.contains("- Functions: 30\n"));
    let listed: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("- **fn_"))
        .collect();
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[0], "- **fn_00()** (many.py)");
    assert_eq!(listed[19], "- **fn_19()** (many.py)");

    Ok(())
}

#[test]
fn test_report_file_is_overwritten() -> Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("project");
    fs::create_dir(&project)?;
    fs::write(project.join("a.py"), "")?;
    let output = temp_dir.path().join("project_summary.md");
    fs::write(&output, "stale content ".repeat(1000))?;

    let report = ProjectCollector::for_path(&project).generate_summary_report(&output)?;

    assert_eq!(fs::read_to_string(&output)?, report);
    assert!(report.contains("```\nproject/\n└── a.py\n```"));

    Ok(())
}
