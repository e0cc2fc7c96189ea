use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// How a path differs between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeKind {
    Created,
    Modified,
    Deleted,
    /// Never produced; kept so the set of kinds is closed
    Renamed,
}

impl ChangeKind {
    /// Single-letter code used by the short status format
    pub fn code(&self) -> &'static str {
        match self {
            ChangeKind::Created => "A",
            ChangeKind::Modified => "M",
            ChangeKind::Deleted => "D",
            ChangeKind::Renamed => "R",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ChangeKind::Created => "new file:   ",
            ChangeKind::Modified => "modified:   ",
            ChangeKind::Deleted => "deleted:    ",
            ChangeKind::Renamed => "renamed:    ",
        }
    }
}

/// Which side of the index a change sits on, for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeArea {
    /// Index vs. HEAD, ready to commit
    Staged,
    /// Working tree vs. index
    Unstaged,
}

/// A change rendered as a long-format status line label
#[derive(Debug, Clone, Copy)]
pub struct ChangeLabel {
    pub kind: ChangeKind,
    pub area: ChangeArea,
}

impl std::fmt::Display for ChangeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.area {
            ChangeArea::Staged => self.kind.label().green(),
            ChangeArea::Unstaged => self.kind.label().red(),
        };
        write!(f, "{:>width$}{}", "", label, width = LABEL_WIDTH)
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
