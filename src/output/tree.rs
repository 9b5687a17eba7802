//! ASCII rendering of the directory tree

use crate::models::tree::{DirectoryTree, TreeNode};
use ansi_term::Colour::Blue;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render the tree as plain text, one entry per line.
///
/// Directories carry a trailing `/`. An empty tree renders as an empty string.
pub fn render_tree(tree: &DirectoryTree) -> String {
    render_tree_colored(tree, false)
}

/// Render the tree, painting directory names when `use_colors` is set
pub fn render_tree_colored(tree: &DirectoryTree, use_colors: bool) -> String {
    let mut output = String::new();
    render_level(tree, "", use_colors, &mut output);
    output
}

fn render_level(tree: &DirectoryTree, prefix: &str, use_colors: bool, output: &mut String) {
    let count = tree.len();

    for (i, (name, node)) in tree.entries().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        match node {
            TreeNode::File => {
                output.push_str(&format!("{}{}{}\n", prefix, connector, name));
            }
            TreeNode::Directory(children) => {
                let label = format!("{}/", name);
                let label = if use_colors {
                    Blue.bold().paint(label).to_string()
                } else {
                    label
                };
                output.push_str(&format!("{}{}{}\n", prefix, connector, label));

                let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
                render_level(children, &child_prefix, use_colors, output);
            }
        }
    }
}
