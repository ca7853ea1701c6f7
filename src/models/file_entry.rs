use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: FileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }

    /// Name as printed in the tree: directories carry a trailing `/`.
    pub fn display_name(&self) -> String {
        match self.kind {
            FileKind::Dir => format!("{}/", self.name),
            FileKind::File => self.name.clone(),
        }
    }
}
