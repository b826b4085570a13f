//! Removing managed blocks from stylesheet text
//!
//! All functions here are pure: they take the full current text and return
//! the full new text. Reading and writing the file is the caller's job.

use log::debug;

use super::markers::{locate, Marker};

/// Remove `target`'s block, keeping blocks of `others` and the foreign prefix
///
/// - No other marker anywhere: cut at the target token and trim trailing
///   whitespace. Text without the target is returned unchanged.
/// - Other markers present: splice out `[target, next other marker)` and join
///   the halves on a newline. If the target is the last block, keep only what
///   precedes it.
pub fn scrub(text: &str, target: Marker, others: &[Marker]) -> String {
    let target_index = locate(target, text);
    let other_indices: Vec<usize> = others.iter().filter_map(|m| locate(*m, text)).collect();

    if other_indices.is_empty() {
        return truncate_at(text, target_index);
    }

    let Some(start) = target_index else {
        return text.to_string();
    };

    let next = other_indices.into_iter().filter(|i| *i > start).min();
    debug!("scrubbing {} block at {}, next block at {:?}", target, start, next);

    match next {
        Some(end) => join_lines(&text[..start], &text[end..]),
        None => text[..start].to_string(),
    }
}

/// `scrub` against every other known marker
pub fn scrub_marker(text: &str, target: Marker) -> String {
    scrub(text, target, &target.others())
}

/// Remove every managed block, re-scanning the text after each removal
pub fn scrub_all(text: &str) -> String {
    Marker::ALL
        .into_iter()
        .fold(text.to_string(), |current, marker| {
            scrub_marker(&current, marker)
        })
}

/// Scrubbed base followed by a freshly built block, on its own line
pub fn compose(scrubbed: &str, block: &str) -> String {
    join_lines(scrubbed, block)
}

/// Concatenate, adding a newline only if `head` is non-empty and lacks one
fn join_lines(head: &str, tail: &str) -> String {
    if head.is_empty() || head.ends_with('\n') {
        format!("{}{}", head, tail)
    } else {
        format!("{}\n{}", head, tail)
    }
}

fn truncate_at(text: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => {
            debug!("truncating stylesheet at {}", i);
            text[..i].trim_end().to_string()
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::DecorationDescriptor;
    use crate::stylesheet::blocks::build_block;

    fn descriptor() -> DecorationDescriptor {
        DecorationDescriptor {
            sticker_url: "file:///s.png".to_string(),
            background_url: "file:///b.png".to_string(),
            wallpaper_url: "file:///w.png".to_string(),
            anchoring: "center".to_string(),
        }
    }

    fn install(text: &str, marker: Marker) -> String {
        compose(&scrub_marker(text, marker), &build_block(marker, &descriptor()))
    }

    #[test]
    fn test_no_markers_unchanged() {
        let text = "body{color:red}";
        for marker in Marker::ALL {
            assert_eq!(scrub(text, marker, &[]), text);
            assert_eq!(scrub_marker(text, marker), text);
        }
    }

    #[test]
    fn test_sole_marker_truncates_and_trims() {
        let text = "body{color:red}\n/* Stickers */\nrule{}";
        assert_eq!(scrub(text, Marker::Sticker, &[]), "body{color:red}");
    }

    #[test]
    fn test_target_last_keeps_other_block() {
        let text = "/* Background Image */\nwpRule{}\n/* Stickers */\nstRule{}";
        assert_eq!(
            scrub(text, Marker::Sticker, &[Marker::Wallpaper]),
            "/* Background Image */\nwpRule{}\n"
        );
    }

    #[test]
    fn test_target_first_splices_to_neighbor() {
        let text = "foreign{}\n/* Stickers */\nst{}\n/* Background Image */\nwp{}";
        assert_eq!(
            scrub(text, Marker::Sticker, &[Marker::Wallpaper]),
            "foreign{}\n/* Background Image */\nwp{}"
        );
    }

    #[test]
    fn test_target_between_picks_nearest_neighbor() {
        let text = "/* Background Image */wp{}/* Stickers */st{}/* Hide Watermark */hw{}";
        let result = scrub_marker(text, Marker::Sticker);
        assert_eq!(result, "/* Background Image */wp{}\n/* Hide Watermark */hw{}");
    }

    #[test]
    fn test_target_absent_with_others_unchanged() {
        let text = "a{}\n/* Background Image */\nwp{}";
        assert_eq!(scrub(text, Marker::Sticker, &[Marker::Wallpaper]), text);
    }

    #[test]
    fn test_scrub_all_leaves_trimmed_prefix() {
        let text = "foreign{}\n\n/* Background Image */wp{}\n/* Stickers */st{}\n/* Hide Watermark */hw{}";
        assert_eq!(scrub_all(text), "foreign{}");
    }

    #[test]
    fn test_scrub_all_order_independent_of_layout() {
        let a = "x{}\n/* Stickers */s{}/* Background Image */w{}";
        let b = "x{}\n/* Background Image */w{}/* Stickers */s{}";
        assert_eq!(scrub_all(a), "x{}");
        assert_eq!(scrub_all(b), "x{}");
    }

    #[test]
    fn test_reinstall_is_idempotent() {
        let once = install("body{}", Marker::Sticker);
        let twice = install(&once, Marker::Sticker);
        assert_eq!(twice.matches(Marker::Sticker.token()).count(), 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blocks_survive_each_other() {
        let foreign = "body{color:red}";
        let with_sticker = install(foreign, Marker::Sticker);
        let both = install(&with_sticker, Marker::Wallpaper);

        assert!(both.starts_with(foreign));
        assert_eq!(both.matches(Marker::Sticker.token()).count(), 1);
        assert_eq!(both.matches(Marker::Wallpaper.token()).count(), 1);

        let wallpaper_block = build_block(Marker::Wallpaper, &descriptor());
        let without_sticker = scrub_marker(&both, Marker::Sticker);
        assert!(without_sticker.starts_with(foreign));
        assert!(without_sticker.contains(wallpaper_block.trim_start()));
        assert!(!without_sticker.contains(Marker::Sticker.token()));

        let sticker_block = build_block(Marker::Sticker, &descriptor());
        let without_wallpaper = scrub_marker(&both, Marker::Wallpaper);
        assert!(without_wallpaper.starts_with(foreign));
        assert!(without_wallpaper.contains(sticker_block.trim_start()));
        assert!(!without_wallpaper.contains(Marker::Wallpaper.token()));
    }

    #[test]
    fn test_foreign_prefix_preserved() {
        let foreign = "/* user css */\n.a{b:c}";
        let mut text = foreign.to_string();
        for marker in [Marker::Wallpaper, Marker::HideWatermark, Marker::Sticker] {
            text = install(&text, marker);
            assert!(text.starts_with(foreign));
        }
        for marker in Marker::ALL {
            assert!(scrub_marker(&text, marker).starts_with(foreign));
        }
        assert_eq!(scrub_all(&text), foreign);
    }

    #[test]
    fn test_reinstall_next_to_other_block_is_idempotent() {
        let both = install(&install("body{}", Marker::Wallpaper), Marker::Sticker);
        let once = install(&both, Marker::Sticker);
        let twice = install(&once, Marker::Sticker);
        assert_eq!(both, once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_alternating_reinstalls_keep_length() {
        let mut text = install(&install("body{}", Marker::Wallpaper), Marker::Sticker);
        let len = text.len();
        for marker in [Marker::Wallpaper, Marker::Sticker, Marker::Wallpaper, Marker::Sticker] {
            text = install(&text, marker);
            assert_eq!(text.len(), len);
        }
        assert_eq!(text.matches(Marker::Sticker.token()).count(), 1);
        assert_eq!(text.matches(Marker::Wallpaper.token()).count(), 1);
    }

    #[test]
    fn test_compose_puts_block_on_own_line() {
        assert_eq!(compose("a", "b"), "a\nb");
        assert_eq!(compose("a\n", "b"), "a\nb");
        assert_eq!(compose("", "b"), "b");
    }
}
