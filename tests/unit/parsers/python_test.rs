use uniter::{
    models::file_record::{Analysis, SourceAnalysis},
    parsers::PythonParser,
};

fn parse(source: &str) -> SourceAnalysis {
    let mut parser = PythonParser::new().expect("python grammar loads");
    match parser.analyze(source) {
        Analysis::Parsed(analysis) => analysis,
        Analysis::Failed { message } => panic!("unexpected parse failure: {}", message),
    }
}

fn function_names(analysis: &SourceAnalysis) -> Vec<&str> {
    analysis.functions.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_definitions_inside_compound_statements() {
    let source = r#"
import sys

if sys.platform == "win32":
    def open_file(path):
        pass
else:
    def open_file(path, mode="r"):
        pass

try:
    import ujson as json
except ImportError:
    import json
finally:
    def cleanup():
        pass

for _ in range(1):
    class Once:
        pass
"#;
    let analysis = parse(source);

    assert_eq!(function_names(&analysis), vec!["open_file", "open_file", "cleanup"]);
    assert_eq!(analysis.functions[1].args, vec!["path", "mode"]);
    assert_eq!(analysis.imports, vec!["sys", "ujson", "json"]);
    assert_eq!(analysis.classes[0].name, "Once");
}

#[test]
fn test_async_functions_are_skipped() {
    let source = "async def fetch(url):\n    pass\n\nclass Client:\n    async def get(self):\n        pass\n\n    def close(self):\n        pass\n";
    let analysis = parse(source);

    assert_eq!(function_names(&analysis), vec!["close"]);
    assert_eq!(analysis.classes[0].methods, vec!["close"]);
}

#[test]
fn test_decorated_definitions() {
    let source = "@dataclass\nclass Point:\n    x: int = 0\n\n    @property\n    def norm(self):\n        return abs(self.x)\n\n\n@cache\ndef compute(n):\n    return n\n";
    let analysis = parse(source);

    assert_eq!(analysis.classes[0].name, "Point");
    assert_eq!(analysis.classes[0].line, 2);
    assert_eq!(analysis.classes[0].methods, vec!["norm"]);

    let compute = analysis.functions.iter().find(|f| f.name == "compute").unwrap();
    assert_eq!(compute.line, 11);
    assert_eq!(compute.args, vec!["n"]);
}

#[test]
fn test_parameter_kinds() {
    let source = "def f(a, b: int, c: str = 'x', /, d=1, *, e, **kw):\n    pass\n\ndef g(self, *args, key=None):\n    pass\n\ndef h():\n    pass\n";
    let analysis = parse(source);

    assert_eq!(analysis.functions[0].args, vec!["d"]);
    assert_eq!(analysis.functions[1].args, vec!["self"]);
    assert!(analysis.functions[2].args.is_empty());
}

#[test]
fn test_docstring_variants() {
    let source = concat!(
        "def single():\n    'Single quoted.'\n\n",
        "def raw():\n    r\"\"\"Raw \\d+ pattern.\"\"\"\n\n",
        "def joined():\n    \"First \" \"second.\"\n\n",
        "def indented():\n    \"\"\"Summary.\n\n        Indented details.\n    \"\"\"\n\n",
        "def bytes_doc():\n    b\"not a docstring\"\n",
    );
    let analysis = parse(source);
    let docs: Vec<Option<&str>> = analysis
        .functions
        .iter()
        .map(|f| f.docstring.as_deref())
        .collect();

    assert_eq!(
        docs,
        vec![
            Some("Single quoted."),
            Some("Raw \\d+ pattern."),
            Some("First second."),
            Some("Summary.\n\nIndented details."),
            None,
        ]
    );
}

#[test]
fn test_error_tolerant_trees_are_failures() {
    let mut parser = PythonParser::new().expect("python grammar loads");

    for source in [
        "class Broken\n    pass\n",
        "x = (1, 2\n",
        "if x ==:\n    pass\n",
        "print \"hello\"\n",
        "exec \"x = 1\"\n",
        "if x:\n    a = 1\n  b = 2\n",
        "def f():\n        a = 1\n    b = 2\n",
        "  x = 1\n",
    ] {
        let analysis = parser.analyze(source);
        assert!(analysis.is_failed(), "expected failure for {:?}", source);
        assert!(analysis.functions().is_empty());
        assert_eq!(analysis.lines(), 0);
    }

    // The parser stays usable after a failure
    assert!(!parser.analyze("x = 1\n").is_failed());
}

#[test]
fn test_python2_statements_name_the_keyword() {
    let mut parser = PythonParser::new().expect("python grammar loads");

    let analysis = parser.analyze("import os\n\nprint \"hello\"\n");
    let message = analysis.error_message().expect("print statement is rejected");
    assert!(message.contains("'print'"), "{}", message);
    assert!(message.contains("line 3"), "{}", message);
    assert!(analysis.imports().is_empty());
}

#[test]
fn test_dedent_to_unknown_level_is_reported() {
    let mut parser = PythonParser::new().expect("python grammar loads");

    let analysis = parser.analyze("class A:\n    x = 1\n  y = 2\n");
    let message = analysis.error_message().expect("misaligned dedent is rejected");
    assert!(message.contains("line 3"), "{}", message);
}

#[test]
fn test_aligned_layouts_still_parse() {
    let source = r#"a = 1; b = 2
if a: b = 3
x = call(
        1,
    2,
)

def f():
    # comment
        # deeper comment
    if x:
        return 1
    else:
        return 2

print("ok")
"#;
    let analysis = parse(source);
    assert_eq!(function_names(&analysis), vec!["f"]);
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let analysis = parse("\u{feff}import os\n");
    assert_eq!(analysis.imports, vec!["os".to_string()]);
}
