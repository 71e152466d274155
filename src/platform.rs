//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for shortcut chords
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password reveal shortcut display
/// - macOS: "Cmd+P"
/// - Linux/Windows: "Ctrl+P"
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";
