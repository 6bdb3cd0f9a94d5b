//! Leptos FileDrop Utilities
//!
//! HTML5 file drop zones for Leptos.
//! Tracks drag-over state and hands dropped files to a callback.

use leptos::prelude::*;
use web_sys::{DragEvent, File};

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    pub is_over_read: ReadSignal<bool>,
    pub is_over_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (is_over_read, is_over_write) = signal(false);
    FileDropSignals {
        is_over_read,
        is_over_write,
    }
}

/// Clear the drag-over highlight
pub fn reset_drop(drop: &FileDropSignals) {
    drop.is_over_write.set(false);
}

/// Create dragover handler. Must prevent default for the drop event to fire.
pub fn make_on_dragover(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if !drop.is_over_read.get_untracked() {
            drop.is_over_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        drop.is_over_write.set(false);
    }
}

/// Create drop handler.
///
/// Files whose extension is not in `accept` are skipped; an empty `accept`
/// takes everything. `on_files` only runs when at least one file survives.
pub fn make_on_drop<F>(
    drop: FileDropSignals,
    accept: &'static [&'static str],
    on_files: F,
) -> impl Fn(DragEvent) + 'static
where
    F: Fn(Vec<File>) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        drop.is_over_write.set(false);

        let files: Vec<File> = files_from_event(&ev)
            .into_iter()
            .filter(|f| accepts(&f.name(), accept))
            .collect();
        if !files.is_empty() {
            on_files(files);
        }
    }
}

/// Pull every file out of a drop event's data transfer
pub fn files_from_event(ev: &DragEvent) -> Vec<File> {
    let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Extension filter, case-insensitive
pub fn accepts(file_name: &str, accept: &[&str]) -> bool {
    if accept.is_empty() {
        return true;
    }
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    accept.iter().any(|a| a.eq_ignore_ascii_case(ext))
}

/// CSS class for a zone: `base`, plus `drag-over` while hovered
pub fn zone_class(base: &str, is_over: bool) -> String {
    let mut c = String::from(base);
    if is_over {
        c.push_str(" drag-over");
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_matches_extension_case_insensitively() {
        let accept = &["png", "mp4"];
        assert!(accepts("cover.PNG", accept));
        assert!(accepts("clip.final.mp4", accept));
        assert!(!accepts("notes.txt", accept));
        assert!(!accepts("no_extension", accept));
    }

    #[test]
    fn test_empty_accept_list_takes_anything() {
        assert!(accepts("whatever.bin", &[]));
        assert!(accepts("no_extension", &[]));
    }

    #[test]
    fn test_zone_class() {
        assert_eq!(zone_class("drop-zone", false), "drop-zone");
        assert_eq!(zone_class("drop-zone", true), "drop-zone drag-over");
    }

    #[test]
    fn test_reset_drop_clears_highlight() {
        let drop = create_file_drop_signals();
        drop.is_over_write.set(true);
        reset_drop(&drop);
        assert!(!drop.is_over_read.get_untracked());
    }
}
