//! Navigation state types.

// =============================================================================
// PAGE ENUM
// =============================================================================

/// Page shown in the main content area.
///
/// This is the only vocabulary exchanged with the navigation/rendering layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    /// Import a new batch (default)
    #[default]
    Import,

    /// Past imports and edits
    History,

    /// Raw measurements with per-measure exclusion
    Raw,

    /// Report against the referential
    Report,

    /// Help
    Help,
}

impl Page {
    /// Get the display name for this page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Import => "Import",
            Self::History => "History",
            Self::Raw => "Raw data",
            Self::Report => "Report",
            Self::Help => "Help",
        }
    }

    /// Whether the page needs an imported model to be reachable.
    pub fn requires_model(&self) -> bool {
        matches!(self, Self::Raw | Self::Report)
    }

    /// Get all pages in navigation bar order.
    pub const fn all() -> &'static [Page] {
        &[
            Self::Import,
            Self::History,
            Self::Raw,
            Self::Report,
            Self::Help,
        ]
    }

    /// Parse a page name as typed by a user (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "import" => Some(Self::Import),
            "history" => Some(Self::History),
            "raw" | "data" => Some(Self::Raw),
            "report" => Some(Self::Report),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}
