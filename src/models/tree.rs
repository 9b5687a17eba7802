//! Directory tree used for the project structure rendering

/// A node in the directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File,
    Directory(DirectoryTree),
}

/// Ordered mapping from entry name to node, kept in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    entries: Vec<(String, TreeNode)>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file, replacing any existing entry of the same name
    pub fn insert_file(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, node)) => *node = TreeNode::File,
            None => self.entries.push((name, TreeNode::File)),
        }
    }

    /// Get the subdirectory with the given name, creating it if missing
    pub fn directory_mut(&mut self, name: &str) -> &mut DirectoryTree {
        let index = match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => {
                if !matches!(self.entries[index].1, TreeNode::Directory(_)) {
                    self.entries[index].1 = TreeNode::Directory(DirectoryTree::new());
                }
                index
            }
            None => {
                self.entries
                    .push((name.to_string(), TreeNode::Directory(DirectoryTree::new())));
                self.entries.len() - 1
            }
        };

        match &mut self.entries[index].1 {
            TreeNode::Directory(tree) => tree,
            TreeNode::File => unreachable!("entry was just made a directory"),
        }
    }

    /// Walk (and create) the directories along `parts`
    pub fn directory_at<'a, I>(&mut self, parts: I) -> &mut DirectoryTree
    where
        I: IntoIterator<Item = &'a str>,
    {
        parts
            .into_iter()
            .fold(self, |level, part| level.directory_mut(part))
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of file entries in this tree and below
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                TreeNode::File => 1,
                TreeNode::Directory(tree) => tree.file_count(),
            })
            .sum()
    }
}
