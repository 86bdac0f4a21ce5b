//! Dirmap - render a directory as an icon tree, a flow-diagram edge list, or a markdown outline

pub mod output;
pub mod panel;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{
    Documents, GraphRenderer, Markup, OutlineRenderer, SecondView, TreeRenderer, print_json,
    render_graph, render_outline, render_tree,
};
pub use panel::{
    HostMessage, MessageHandler, Notification, PanelAssembler, PanelConfig, SaveError, SaveTarget,
    print_notification,
};
pub use tree::{DirectoryWalker, Entry, Renderer, StatErrorPolicy, WalkError, WalkerConfig};
