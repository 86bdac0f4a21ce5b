//! HTML panel template
//!
//! The tree view goes into `--TREE--`, the second view into `--GRAPH--`.
//! `--VIEW--` is the second view's label on the switch button.

const TREE_SLOT: &str = "--TREE--";
const SECOND_SLOT: &str = "--GRAPH--";
const VIEW_SLOT: &str = "--VIEW--";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <style>
      .btn-ftg {
        position: relative;
        display: inline-block;
        padding: 0.25em 0.5em;
        margin-right: 0.25em;
        color: #fff;
        background: #3595fd;
        border-bottom: solid 2px #007dd2;
        border-radius: 4px;
        box-shadow: inset 0 2px 0 rgba(255, 255, 255, 0.2), 0 2px 2px rgba(0, 0, 0, 0.19);
        font-weight: bold;
        cursor: pointer;
        user-select: none;
      }
      .btn-ftg:active {
        border-bottom: solid 2px #3595fd;
        box-shadow: 0 0 2px rgba(0, 0, 0, 0.3);
      }
      .hidden {
        display: none;
      }
    </style>
  </head>
  <body>
    <div class="head">
      <div id="icon-switch" class="btn-ftg" onclick="switchIcons();">icon off</div>
      <div id="view-switch" class="btn-ftg" data-view="--VIEW--" onclick="toggleView();">Switch to --VIEW-- View</div>
      <div id="save-button" class="btn-ftg" onclick="saveMindMap();">Save MindMap.md</div>
    </div>
    <pre id="tree-panel" class="content-panel">--TREE--</pre>
    <pre id="graph-panel" class="content-panel hidden">--GRAPH--</pre>
    <script type="text/javascript">
      const host = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : null;

      function switchIcons() {
        const button = document.getElementById('icon-switch');
        const hide = button.textContent !== 'icon on';
        button.textContent = hide ? 'icon on' : 'icon off';
        document.querySelectorAll('.t-icon').forEach(icon => {
          icon.style.display = hide ? 'none' : 'inline';
        });
      }

      function toggleView() {
        const tree = document.getElementById('tree-panel');
        const second = document.getElementById('graph-panel');
        const button = document.getElementById('view-switch');
        const showSecond = !tree.classList.contains('hidden');
        tree.classList.toggle('hidden', showSecond);
        second.classList.toggle('hidden', !showSecond);
        button.textContent = showSecond ? 'Switch to Tree View' : 'Switch to ' + button.dataset.view + ' View';
      }

      function saveMindMap() {
        const text = document.getElementById('graph-panel').textContent;
        if (host) {
          host.postMessage({ command: 'saveMindMap', text: text });
          return;
        }
        const link = document.createElement('a');
        link.href = URL.createObjectURL(new Blob([text], { type: 'text/markdown' }));
        link.download = 'MindMap.md';
        link.click();
        URL.revokeObjectURL(link.href);
      }
    </script>
  </body>
</html>
"#;

/// Substitute the panel slots.
///
/// Slots are located in the template only, so rendered text that happens
/// to contain a slot marker is left alone.
pub fn fill(tree: &str, second: &str, view_label: &str) -> String {
    let mut output = String::with_capacity(TEMPLATE.len() + tree.len() + second.len());
    let mut rest = TEMPLATE;

    while let Some((at, slot)) = next_slot(rest) {
        output.push_str(&rest[..at]);
        output.push_str(match slot {
            TREE_SLOT => tree,
            SECOND_SLOT => second,
            _ => view_label,
        });
        rest = &rest[at + slot.len()..];
    }
    output.push_str(rest);
    output
}

fn next_slot(text: &str) -> Option<(usize, &'static str)> {
    [TREE_SLOT, SECOND_SLOT, VIEW_SLOT]
        .into_iter()
        .filter_map(|slot| text.find(slot).map(|at| (at, slot)))
        .min_by_key(|(at, _)| *at)
}
