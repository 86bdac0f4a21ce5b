//! Presentation boundary
//!
//! Embeds the rendered views into an HTML panel and relays the panel's
//! save action to disk.
//!
//! - `template` - the panel page and its slots
//! - `message` - host messages and their handler
//! - `save` - writing `MindMap.md`
//! - `notify` - user-visible outcome reporting

mod message;
mod notify;
mod save;
mod template;

use std::path::Path;

use crate::output::{Markup, SecondView, escape_html, frame_root, render_tree_with, root_name};
use crate::tree::{DirectoryWalker, WalkError};

// Re-export public types and functions
pub use message::{HostMessage, MessageHandler};
pub use notify::{Level, Notification, print_notification};
pub use save::{MIND_MAP_FILE, SaveError, SaveTarget, save_mind_map};

/// Panel assembly settings.
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    pub second: SecondView,
}

/// An assembled panel.
#[derive(Debug, Clone)]
pub struct RenderedPanel {
    pub html: String,
    /// Plain text of the second view, what the save button sends.
    pub second_text: String,
}

/// Builds the panel page for one directory.
pub struct PanelAssembler {
    walker: DirectoryWalker,
    config: PanelConfig,
}

impl PanelAssembler {
    pub fn new(walker: DirectoryWalker, config: PanelConfig) -> Self {
        Self { walker, config }
    }

    pub fn assemble(&self, root: &Path) -> Result<RenderedPanel, WalkError> {
        let mut tree = frame_root(&root_name(root), Markup::Html);
        tree.push_str(&render_tree_with(&self.walker, root, 0, Markup::Html)?);

        let second_text = self.config.second.render(&self.walker, root)?;
        let html = template::fill(&tree, &escape_html(&second_text), self.config.second.label());

        Ok(RenderedPanel { html, second_text })
    }
}
