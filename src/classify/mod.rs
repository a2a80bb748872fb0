// ui5-nwabap-deployer/src/classify/mod.rs
pub mod sniff;

use std::fmt;

/// A deployable file before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the resource root, `/`-separated.
    pub path: String,
    pub content: Vec<u8>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        SourceFile {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A deployable file annotated with its binary/text classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: String,
    content: Vec<u8>,
    is_binary: bool,
}

impl FileRecord {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn is_binary(&self) -> bool {
        self.is_binary
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_binary { "binary" } else { "text" };
        write!(f, "{} ({}, {} bytes)", self.path, kind, self.content.len())
    }
}

/// Annotates every file with `is_binary`. Content and order are kept as given.
pub fn classify(files: Vec<SourceFile>) -> Vec<FileRecord> {
    files.into_iter().map(classify_file).collect()
}

pub fn classify_file(file: SourceFile) -> FileRecord {
    let is_binary = sniff::is_binary(&file.content);
    FileRecord {
        path: file.path,
        content: file.content,
        is_binary,
    }
}
