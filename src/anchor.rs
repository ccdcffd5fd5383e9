//! Cross-reference label and include path derivation.

use crate::model::Source;

impl Source {
    pub fn new(path: &str) -> Self {
        Source {
            path: path.to_string(),
            anchor: anchor(path),
            include: include_path(path),
        }
    }
}

/// Build the `.. _<anchor>:` label for a header path.
///
/// The final extension is dropped, then path separators and underscores
/// become hyphens: "video/display_mode.hpp" → "video-display-mode".
pub fn anchor(path: &str) -> String {
    strip_extension(path).replace(['/', '\\', '_'], "-")
}

/// Path shown in the include notice, always with forward slashes.
pub fn include_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Remove the last extension of the file name, if any.
///
/// Leading dots of the file name do not start an extension, so ".clang"
/// stays intact while "a.b.hpp" becomes "a.b".
fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let name = &path[name_start..];
    let dots = name.len() - name.trim_start_matches('.').len();
    match name[dots..].rfind('.') {
        Some(i) => &path[..name_start + dots + i],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_from_plain_file() {
        assert_eq!(anchor("color.hpp"), "color");
    }

    #[test]
    fn anchor_replaces_separators_and_underscores() {
        assert_eq!(anchor("video/display_mode.hpp"), "video-display-mode");
        assert_eq!(anchor(r"gum\input\joystick.hpp"), "gum-input-joystick");
    }

    #[test]
    fn anchor_keeps_inner_dots() {
        assert_eq!(anchor("sdl++/core/init.h.in"), "sdl++-core-init.h");
    }

    #[test]
    fn anchor_without_extension() {
        assert_eq!(anchor("include/config"), "include-config");
        assert_eq!(anchor("dir.d/.hidden"), "dir.d-.hidden");
    }

    #[test]
    fn include_uses_forward_slashes() {
        assert_eq!(include_path(r"gum\video\window.hpp"), "gum/video/window.hpp");
        assert_eq!(include_path("gum/video.hpp"), "gum/video.hpp");
    }

    #[test]
    fn source_collects_all_forms() {
        let source = Source::new(r"sdlpp\video\surface.hpp");
        assert_eq!(source.path, r"sdlpp\video\surface.hpp");
        assert_eq!(source.anchor, "sdlpp-video-surface");
        assert_eq!(source.include, "sdlpp/video/surface.hpp");
    }
}
