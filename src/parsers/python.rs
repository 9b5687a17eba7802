//! Python structural analysis backed by tree-sitter

use super::docstring::{clean_docstring, decode_string_literal};
use crate::error::{Result, UniterError};
use crate::models::file_record::{count_lines, Analysis, ClassInfo, FunctionInfo, SourceAnalysis};
use std::collections::VecDeque;
use tree_sitter::{Node, Parser, Point};

/// Node kinds whose children are treated as belonging to the enclosing level
const TRANSPARENT_KINDS: &[&str] = &[
    "block",
    "decorated_definition",
    "else_clause",
    "finally_clause",
];

/// Extracts imports, functions, classes and docstrings from Python source
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a parser loaded with the Python grammar
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| UniterError::ParserInit {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Analyse one file's text.
    ///
    /// Syntax errors never surface as `Err`: they become `Analysis::Failed`
    /// carrying a message that points at the first broken location.
    pub fn analyze(&mut self, source: &str) -> Analysis {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let Some(tree) = self.parser.parse(source, None) else {
            return Analysis::failed("parser produced no syntax tree");
        };

        let root = tree.root_node();
        if root.has_error() {
            return Analysis::failed(describe_syntax_error(root));
        }
        if let Some(message) = rejected_construct(root) {
            return Analysis::failed(message);
        }

        let bytes = source.as_bytes();
        let mut analysis = SourceAnalysis {
            docstring: body_docstring(root, bytes),
            lines: count_lines(source),
            ..Default::default()
        };

        // Breadth-first, so outer definitions are listed before nested ones
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            match node.kind() {
                "import_statement" => analysis.imports.extend(plain_imports(node, bytes)),
                "import_from_statement" | "future_import_statement" => {
                    analysis.imports.extend(from_import(node, bytes));
                }
                "function_definition" if !is_async(node) => {
                    analysis.functions.push(function_info(node, bytes));
                }
                "class_definition" => analysis.classes.push(class_info(node, bytes)),
                _ => {}
            }
            push_children(node, &mut queue);
        }

        Analysis::Parsed(analysis)
    }
}

fn push_children<'t>(node: Node<'t>, queue: &mut VecDeque<Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if TRANSPARENT_KINDS.contains(&child.kind()) {
            push_children(child, queue);
        } else {
            queue.push_back(child);
        }
    }
}

fn text<'s>(node: Node, bytes: &'s [u8]) -> &'s str {
    node.utf8_text(bytes).unwrap_or_default()
}

/// Dotted names may legally contain whitespace around the dots
fn dotted(node: Node, bytes: &[u8]) -> String {
    text(node, bytes).split_whitespace().collect()
}

fn imported_name(node: Node, bytes: &[u8]) -> String {
    match node.kind() {
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|name| dotted(name, bytes))
            .unwrap_or_default(),
        _ => dotted(node, bytes),
    }
}

/// `import a, b.c as d` yields one identifier per module
fn plain_imports(node: Node, bytes: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    let names = node
        .children_by_field_name("name", &mut cursor)
        .map(|name| imported_name(name, bytes))
        .collect();
    names
}

/// `from X import A, B` yields the single identifier `"X.A, B"`.
/// Relative imports without a module name yield nothing.
fn from_import(node: Node, bytes: &[u8]) -> Option<String> {
    let module = if node.kind() == "future_import_statement" {
        "__future__".to_string()
    } else {
        let module_node = node.child_by_field_name("module_name")?;
        if module_node.kind() == "relative_import" {
            let mut cursor = module_node.walk();
            let name = module_node
                .named_children(&mut cursor)
                .find(|child| child.kind() == "dotted_name")?;
            dotted(name, bytes)
        } else {
            dotted(module_node, bytes)
        }
    };

    let mut cursor = node.walk();
    let mut names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .map(|name| imported_name(name, bytes))
        .collect();

    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "wildcard_import")
    {
        names.push("*".to_string());
    }

    Some(format!("{}.{}", module, names.join(", ")))
}

fn is_async(node: Node) -> bool {
    node.child(0).is_some_and(|first| first.kind() == "async")
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

fn function_info(node: Node, bytes: &[u8]) -> FunctionInfo {
    FunctionInfo {
        name: node
            .child_by_field_name("name")
            .map(|n| text(n, bytes).to_string())
            .unwrap_or_default(),
        args: node
            .child_by_field_name("parameters")
            .map(|params| positional_parameters(params, bytes))
            .unwrap_or_default(),
        docstring: node
            .child_by_field_name("body")
            .and_then(|body| body_docstring(body, bytes)),
        line: line_of(node),
    }
}

/// Names of positional-or-keyword parameters.
///
/// Anything before a `/` marker is positional-only and dropped; collection
/// stops at `*`, `*args` or `**kwargs`.
fn positional_parameters(params: Node, bytes: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = params.walk();

    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "identifier" => names.push(text(param, bytes).to_string()),
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param.child_by_field_name("name") {
                    names.push(text(name, bytes).to_string());
                }
            }
            "typed_parameter" => match param.named_child(0) {
                Some(inner) if inner.kind() == "identifier" => {
                    names.push(text(inner, bytes).to_string());
                }
                _ => break,
            },
            "positional_separator" => names.clear(),
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }

    names
}

fn class_info(node: Node, bytes: &[u8]) -> ClassInfo {
    let body = node.child_by_field_name("body");

    ClassInfo {
        name: node
            .child_by_field_name("name")
            .map(|n| text(n, bytes).to_string())
            .unwrap_or_default(),
        methods: body
            .map(|body| direct_methods(body, bytes))
            .unwrap_or_default(),
        docstring: body.and_then(|body| body_docstring(body, bytes)),
        line: line_of(node),
    }
}

/// Functions declared immediately in a class body, decorated ones included
fn direct_methods(body: Node, bytes: &[u8]) -> Vec<String> {
    let mut cursor = body.walk();
    let methods = body
        .named_children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "function_definition" => Some(child),
            "decorated_definition" => child.child_by_field_name("definition"),
            _ => None,
        })
        .filter(|def| def.kind() == "function_definition" && !is_async(*def))
        .filter_map(|def| def.child_by_field_name("name"))
        .map(|name| text(name, bytes).to_string())
        .collect();
    methods
}

/// Docstring of a module or block: its first statement, when that is a string literal
fn body_docstring(body: Node, bytes: &[u8]) -> Option<String> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;

    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }

    let mut expr = first.named_child(0)?;
    while expr.kind() == "parenthesized_expression" && expr.named_child_count() == 1 {
        expr = expr.named_child(0)?;
    }

    let raw = match expr.kind() {
        "string" => decode_string_literal(text(expr, bytes))?,
        "concatenated_string" => {
            let mut cursor = expr.walk();
            let parts: Option<Vec<String>> = expr
                .named_children(&mut cursor)
                .filter(|part| part.kind() == "string")
                .map(|part| decode_string_literal(text(part, bytes)))
                .collect();
            parts?.concat()
        }
        _ => return None,
    };

    Some(clean_docstring(&raw))
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// First construct the grammar accepts but the Python 3 compiler rejects
fn rejected_construct(node: Node) -> Option<String> {
    match node.kind() {
        "print_statement" => return Some(missing_parentheses("print", node)),
        "exec_statement" => return Some(missing_parentheses("exec", node)),
        "module" | "block" => {
            if let Some(message) = misaligned_statement(node) {
                return Some(message);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(rejected_construct)
}

fn missing_parentheses(keyword: &str, node: Node) -> String {
    format!(
        "invalid syntax: missing parentheses in call to '{}' at line {}",
        keyword,
        node.start_position().row + 1
    )
}

/// Statements opening a line must share one column; module level is column 0.
///
/// The grammar pops indentation levels without checking that the dedent
/// lands on an open one, so `if x:\n    a\n  b` parses cleanly.
fn misaligned_statement(node: Node) -> Option<String> {
    let mut expected = (node.kind() == "module").then_some(0);
    let mut previous_end: Option<Point> = None;

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.is_extra() {
            continue;
        }

        let start = child.start_position();
        // `a = 1; b = 2` puts two statements on one line
        let shares_line =
            previous_end.is_some_and(|end| end.row == start.row && end.column > 0);
        previous_end = Some(child.end_position());
        if shares_line {
            continue;
        }

        match expected {
            None => expected = Some(start.column),
            Some(column) if column != start.column => {
                let problem = if start.column > column {
                    "unexpected indent"
                } else {
                    "unindent does not match any outer indentation level"
                };
                return Some(format!("{} at line {}", problem, start.row + 1));
            }
            Some(_) => {}
        }
    }

    None
}

fn describe_syntax_error(root: Node) -> String {
    match first_error(root) {
        Some(node) if node.is_missing() => format!(
            "invalid syntax: missing '{}' at line {}, column {}",
            node.kind(),
            node.start_position().row + 1,
            node.start_position().column + 1
        ),
        Some(node) => format!(
            "invalid syntax at line {}, column {}",
            node.start_position().row + 1,
            node.start_position().column + 1
        ),
        None => "invalid syntax".to_string(),
    }
}
