//! Modal Key Bindings

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Prev,
    Next,
    TogglePlay,
    SkipBack,
    SkipForward,
    VolumeUp,
    VolumeDown,
}

/// Confirm dialogs and the generic modal
pub fn dialog_key(key: &str) -> Option<ModalKey> {
    match key {
        "Escape" | "Esc" => Some(ModalKey::Close),
        _ => None,
    }
}

/// Paged image and sample viewers
pub fn viewer_key(key: &str) -> Option<ModalKey> {
    match key {
        "ArrowLeft" => Some(ModalKey::Prev),
        "ArrowRight" => Some(ModalKey::Next),
        _ => dialog_key(key),
    }
}

/// Audio sample player
pub fn audio_key(key: &str) -> Option<ModalKey> {
    match key {
        " " | "Spacebar" => Some(ModalKey::TogglePlay),
        "ArrowLeft" => Some(ModalKey::SkipBack),
        "ArrowRight" => Some(ModalKey::SkipForward),
        "ArrowUp" => Some(ModalKey::VolumeUp),
        "ArrowDown" => Some(ModalKey::VolumeDown),
        _ => dialog_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_bindings() {
        assert_eq!(viewer_key("Escape"), Some(ModalKey::Close));
        assert_eq!(viewer_key("ArrowLeft"), Some(ModalKey::Prev));
        assert_eq!(viewer_key("ArrowRight"), Some(ModalKey::Next));
        assert_eq!(viewer_key(" "), None);
    }

    #[test]
    fn test_audio_bindings() {
        assert_eq!(audio_key(" "), Some(ModalKey::TogglePlay));
        assert_eq!(audio_key("ArrowLeft"), Some(ModalKey::SkipBack));
        assert_eq!(audio_key("ArrowUp"), Some(ModalKey::VolumeUp));
        assert_eq!(audio_key("ArrowDown"), Some(ModalKey::VolumeDown));
        assert_eq!(audio_key("Escape"), Some(ModalKey::Close));
        assert_eq!(audio_key("a"), None);
    }

    #[test]
    fn test_dialog_bindings() {
        assert_eq!(dialog_key("Escape"), Some(ModalKey::Close));
        assert_eq!(dialog_key("ArrowLeft"), None);
    }
}
