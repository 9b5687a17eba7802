use std::fs;
use std::path::Path;
use tempfile::tempdir;
use uniter::{
    config::{load_config, CliArgs},
    core::ProjectCollector,
    error::Result,
    models::file_record::FileRecord,
};

fn create_project(root: &Path) -> Result<()> {
    let pkg = root.join("shop");
    fs::create_dir_all(pkg.join("tests"))?;
    fs::create_dir_all(root.join(".git"))?;
    fs::write(root.join(".git").join("HEAD"), "ref: refs/heads/main\n")?;

    fs::write(root.join("README.md"), "# Shop\n")?;
    fs::write(
        pkg.join("__init__.py"),
        "\"\"\"Shop package.\"\"\"\nfrom .cart import Cart\n",
    )?;
    fs::write(
        pkg.join("cart.py"),
        r#"from decimal import Decimal


class Cart:
    """Items waiting for checkout."""

    def __init__(self):
        self.items = []

    def add(self, sku, price=Decimal("0")):
        self.items.append((sku, price))

    def total(self):
        return sum(price for _, price in self.items)
"#,
    )?;
    fs::write(
        pkg.join("tests").join("test_cart.py"),
        "from shop.cart import Cart\n\n\ndef test_add():\n    cart = Cart()\n    cart.add('a')\n    assert cart.items\n",
    )?;
    Ok(())
}

fn strip_timestamps(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with("Generated: ") && !line.starts_with("Date: "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_full_pipeline_is_deterministic() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("shop_project");
    fs::create_dir(&root)?;
    create_project(&root)?;
    let out = temp_dir.path().join("out");
    fs::create_dir(&out)?;

    let collector = ProjectCollector::for_path(&root);

    let first_report = collector.generate_summary_report(&out.join("report1.md"))?;
    let second_report = collector.generate_summary_report(&out.join("report2.md"))?;
    assert_eq!(strip_timestamps(&first_report), strip_timestamps(&second_report));

    let first_code = collector.create_consolidated_code(&out.join("code1.py"))?;
    let second_code = collector.create_consolidated_code(&out.join("code2.py"))?;
    assert_eq!(strip_timestamps(&first_code), strip_timestamps(&second_code));

    Ok(())
}

#[test]
fn test_full_pipeline_contents() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("shop_project");
    fs::create_dir(&root)?;
    create_project(&root)?;
    let report_path = temp_dir.path().join("project_summary.md");

    let collector = ProjectCollector::for_path(&root);
    let report = collector.generate_summary_report(&report_path)?;

    assert!(report.contains("- Total files: 4\n"));
    assert!(report.contains("- Python files: 3\n"));
    assert!(report.contains("- Functions: 4\n"));
    assert!(report.contains("- Classes: 1\n"));
    assert!(report.contains(
        "```\nshop_project/\n├── README.md\n└── shop/\n    ├── __init__.py\n    ├── cart.py\n    └── tests/\n        └── test_cart.py\n```\n"
    ));
    assert!(report.contains("- **Cart** (shop/cart.py)\n  - Items waiting for checkout....\n  - Methods: __init__, add, total\n"));
    assert!(report.contains("- **add()** (shop/cart.py)\n  - Arguments: self, sku, price\n"));
    assert!(report.contains("- **test_add()** (shop/tests/test_cart.py)\n"));
    assert!(report.contains(
        "## Imports\n- cart.Cart\n- decimal.Decimal\n- shop.cart.Cart\n\n"
    ));

    Ok(())
}

#[test]
fn test_records_export_round_trips() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("shop_project");
    fs::create_dir(&root)?;
    create_project(&root)?;
    let json_path = temp_dir.path().join("records.json");

    let collector = ProjectCollector::for_path(&root);
    let records = collector.collect_files()?;
    collector.export_records(&records, &json_path)?;

    let parsed: Vec<FileRecord> = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    assert_eq!(parsed, records);

    Ok(())
}

#[test]
fn test_configuration_drives_the_pipeline() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("shop_project");
    fs::create_dir(&root)?;
    create_project(&root)?;

    let config_path = temp_dir.path().join("uniter.toml");
    fs::write(
        &config_path,
        "exclude_dirs = [\".git\", \"tests\"]\nextensions = [\".py\"]\nmax_file_size = 100\n",
    )?;

    let settings = load_config(CliArgs {
        path: Some(root.clone()),
        config: Some(config_path),
        ..Default::default()
    })?;
    let collector = ProjectCollector::new(settings);
    let records = collector.collect_files()?;

    let paths: Vec<String> = records.iter().map(|r| r.display_path()).collect();
    assert_eq!(paths, vec!["shop/__init__.py", "shop/cart.py"]);

    let code = collector.render_consolidated_code(&records, chrono::Local::now().naive_local());
    assert!(code.contains("# FILE: shop/__init__.py\n"));
    assert!(code.contains("# === shop/cart.py === [FILE TOO LARGE: "));

    Ok(())
}
