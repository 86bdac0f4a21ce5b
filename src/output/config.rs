//! Output configuration types

/// How rendered text is marked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    /// Bare text, suitable for a terminal or a markdown file.
    #[default]
    Plain,
    /// Icons wrapped in toggleable spans and names HTML-escaped, for the panel.
    Html,
}

/// The renderer paired with the tree view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecondView {
    /// Flow-diagram edge list.
    #[default]
    Graph,
    /// Nested markdown outline.
    Outline,
}

impl SecondView {
    /// Label used on the panel's view switch.
    pub fn label(self) -> &'static str {
        match self {
            SecondView::Graph => "Graph",
            SecondView::Outline => "Outline",
        }
    }
}
