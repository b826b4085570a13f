//! CSS templates for each managed block
//!
//! Asset URLs are trusted and emitted verbatim. Every block starts with its
//! exact marker token and ends with a newline.

use super::markers::Marker;
use crate::decoration::DecorationDescriptor;

const STICKER_STYLE: &str = "content:'';pointer-events:none;position:absolute;z-index:9001;\
width:100%;height:100%;background-position:100% 97%;background-repeat:no-repeat;opacity:1;";

/// Generate the token plus CSS rules for `marker`
pub fn build_block(marker: Marker, descriptor: &DecorationDescriptor) -> String {
    let body = match marker {
        Marker::Sticker => sticker_css(&descriptor.sticker_url),
        Marker::Wallpaper => wallpaper_css(
            &descriptor.wallpaper_url,
            &descriptor.background_url,
            &descriptor.anchoring,
        ),
        Marker::HideWatermark => hide_watermark_css(),
    };
    format!("{}\n{}", marker.token(), body)
}

fn sticker_css(sticker_url: &str) -> String {
    format!(
        r#"body > .monaco-workbench > .monaco-grid-view > .monaco-grid-branch-node > .monaco-split-view2 > .split-view-container::after,
body > .monaco-workbench > .monaco-grid-view > .monaco-grid-branch-node > .monaco-split-view2 > .monaco-scrollable-element > .split-view-container::after
{{background-image: url('{sticker_url}');{STICKER_STYLE}}}

/* keep notifications above the sticker */
.notifications-toasts {{
  z-index: 9002 !important;
}}

.notification-toast {{
  backdrop-filter: blur(2px) !important;
}}
"#
    )
}

fn wallpaper_css(wallpaper_url: &str, background_url: &str, anchoring: &str) -> String {
    format!(
        r#"[id="workbench.parts.editor"] .split-view-view .editor-container .editor-instance>.monaco-editor .overflow-guard>.monaco-scrollable-element>.monaco-editor-background{{background: none;}}

[id="workbench.parts.editor"] .split-view-view .editor-container .editor-instance>.monaco-editor .overflow-guard>.monaco-scrollable-element::before,
.overflow-guard,
.tab,
.settings-editor>.settings-body .settings-toc-container,
.tabs-container,
.monaco-pane-view,
.composite.title,
.editor-container,
button.getting-started-category,
div.header,
.content,
.monaco-select-box,
.pane-header,
.minimap-decorations-layer,
.xterm-cursor-layer,
.decorationsOverviewRuler,
.monaco-workbench .part.editor>.content .editor-group-container>.title .tabs-breadcrumbs .breadcrumbs-control,
.ref-tree,
.head,
.monaco-workbench .part.editor>.content .editor-group-container>.title .editor-actions,
.welcomePageFocusElement,
.terminal-outer-container
{{
  background-image: url('{wallpaper_url}') !important;
  background-position: {anchoring} !important;
  background-attachment: fixed !important;
  background-repeat: no-repeat !important;
  background-size: cover !important;
}}

.monaco-list.list_id_1 .monaco-list-rows,
.lines-content.monaco-editor-background,
.overflow-guard > .margin,
.overflow-guard > .margin > .margin-view-overlays,
.monaco-workbench .part.panel > .content .monaco-editor .monaco-editor-background,
[id="workbench.panel.repl"] *
{{
  background-color: transparent !important;
}}

.quick-input-widget {{
  backdrop-filter: blur(5px) !important;
}}

.monaco-breadcrumbs {{
  background-color: #00000000 !important;
}}

[id="workbench.view.explorer"] .monaco-list-rows,
[id="workbench.view.explorer"] .pane-header,
[id="workbench.view.explorer"] .monaco-pane-view,
[id="workbench.view.explorer"] .split-view-view,
[id="workbench.view.explorer"] .monaco-tl-twistie,
[id="workbench.view.explorer"] .monaco-icon-label-container,
.explorer-folders-view > .monaco-list > .monaco-scrollable-element > .monaco-list-rows,
.show-file-icons > .monaco-list > .monaco-scrollable-element > .monaco-list-rows,
.extensions-list > .monaco-list > .monaco-scrollable-element > .monaco-list-rows
{{
  background-color: #00000000 !important;
  background-image: none !important;
  border: none !important;
}}

.monaco-icon-label-container {{
  background: none !important;
}}

/* shown when every editor is closed */
.monaco-workbench .part.editor > .content {{
  background-image: url('{background_url}') !important;
  background-position: {anchoring};
  background-attachment: fixed;
  background-repeat: no-repeat;
  background-size: cover;
  content: '';
  z-index: 9001;
  width: 100%;
  height: 100%;
  opacity: 1;
}}
"#
    )
}

fn hide_watermark_css() -> String {
    r#".monaco-workbench .part.editor.has-watermark>.content.empty .editor-group-container>.editor-group-letterpress,
.monaco-workbench .part.editor>.content.empty>.watermark>.watermark-box
{
  display: none !important;
}
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> DecorationDescriptor {
        DecorationDescriptor {
            sticker_url: "https://cdn.example/sticker.png".to_string(),
            background_url: "file:///tmp/bg.png".to_string(),
            wallpaper_url: "file:///tmp/wall.png".to_string(),
            anchoring: "right".to_string(),
        }
    }

    #[test]
    fn test_blocks_start_with_token() {
        for marker in Marker::ALL {
            let block = build_block(marker, &descriptor());
            assert!(block.starts_with(&format!("{}\n", marker.token())));
            assert!(block.ends_with('\n'));
            assert_eq!(block.matches(marker.token()).count(), 1);
        }
    }

    #[test]
    fn test_sticker_block_uses_sticker_url() {
        let block = build_block(Marker::Sticker, &descriptor());
        assert!(block.contains("url('https://cdn.example/sticker.png')"));
        assert!(!block.contains("wall.png"));
    }

    #[test]
    fn test_wallpaper_block_uses_all_fields() {
        let block = build_block(Marker::Wallpaper, &descriptor());
        assert!(block.contains("url('file:///tmp/wall.png')"));
        assert!(block.contains("url('file:///tmp/bg.png')"));
        assert!(block.contains("background-position: right !important;"));
        assert!(!block.contains("sticker.png"));
    }

    #[test]
    fn test_hide_watermark_ignores_descriptor() {
        let a = build_block(Marker::HideWatermark, &descriptor());
        let b = build_block(Marker::HideWatermark, &DecorationDescriptor::default());
        assert_eq!(a, b);
        assert!(a.contains("display: none !important;"));
    }

    #[test]
    fn test_blocks_contain_no_foreign_tokens() {
        for marker in Marker::ALL {
            let block = build_block(marker, &descriptor());
            for other in marker.others() {
                assert!(!block.contains(other.token()));
            }
        }
    }
}
