//! Depth-bounded tree rendering.
//!
//! Produces output of the form:
//!
//! ```text
//! ├── a.txt
//! ├── b.txt
//! └── sub/
//!     └── c.txt
//! ```
//!
//! Indentation and the last-sibling flag are carried in a [`RenderState`]
//! passed by value down each branch, so no branch ever observes a sibling's
//! prefix.

use crate::core::errors::Result;
use crate::services::fs::listing::list_dir_sorted;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_MAX_LEVEL: u32 = 3;

/// Box-drawing prefix marking an entry's position among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `├── `: more siblings follow.
    Tee,
    /// `└── `: last sibling.
    Corner,
}

impl Connector {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::Corner
        } else {
            Connector::Tee
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::Tee => "├── ",
            Connector::Corner => "└── ",
        }
    }

    /// Segment appended to the indent of this entry's children.
    pub fn child_indent(&self) -> &'static str {
        match self {
            Connector::Tee => "│   ",
            Connector::Corner => "    ",
        }
    }
}

/// Traversal context for one directory level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub indent: String,
    pub level: u32,
    pub max_level: u32,
}

impl RenderState {
    pub fn root(max_level: u32) -> Self {
        Self {
            indent: String::new(),
            level: 1,
            max_level,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.level > self.max_level
    }

    /// State for the children of an entry drawn with `connector`.
    pub fn descend(&self, connector: Connector) -> Self {
        Self {
            indent: format!("{}{}", self.indent, connector.child_indent()),
            level: self.level + 1,
            max_level: self.max_level,
        }
    }
}

/// Number of entries written by a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub directories: usize,
    pub files: usize,
}

impl RenderStats {
    pub fn total(&self) -> usize {
        self.directories + self.files
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer {
    max_level: u32,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL)
    }
}

impl TreeRenderer {
    pub fn new(max_level: u32) -> Self {
        Self { max_level }
    }

    /// Writes one line per entry under `root` into `sink`, depth first.
    ///
    /// Stops at the first directory that cannot be listed; lines already
    /// written stay in the sink.
    pub fn render<W: Write>(&self, root: &Path, sink: &mut W) -> Result<RenderStats> {
        let mut stats = RenderStats::default();
        render_level(root, RenderState::root(self.max_level), sink, &mut stats)?;
        tracing::debug!(
            root = %root.display(),
            directories = stats.directories,
            files = stats.files,
            "rendered tree"
        );
        Ok(stats)
    }

    pub fn render_to_string(&self, root: &Path) -> Result<String> {
        let mut buf = Vec::new();
        self.render(root, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn render_level<W: Write>(
    dir: &Path,
    state: RenderState,
    sink: &mut W,
    stats: &mut RenderStats,
) -> Result<()> {
    if state.is_exhausted() {
        return Ok(());
    }

    let entries = list_dir_sorted(dir)?;
    tracing::trace!(dir = %dir.display(), level = state.level, count = entries.len(), "listing");

    let last = entries.len().saturating_sub(1);
    for (index, entry) in entries.iter().enumerate() {
        let connector = Connector::for_position(index == last);
        writeln!(
            sink,
            "{}{}{}",
            state.indent,
            connector.as_str(),
            entry.display_name()
        )?;

        if entry.is_dir() {
            stats.directories += 1;
            render_level(&entry.path, state.descend(connector), sink, stats)?;
        } else {
            stats.files += 1;
        }
    }
    Ok(())
}

/// Header printed once before the tree.
pub fn banner(max_level: u32) -> String {
    format!("📁 Project directory structure (max depth {max_level})")
}
