use std::path::Path;

/// Buffer the figure is loaded into. Part of the external contract: users
/// and Emacs configuration refer to this name, so it must not change.
pub const DISPLAY_BUFFER: &str = "*matplotlib*";

/// Path as it appears inside the Lisp payload: forward slashes on every
/// platform, since Emacs accepts them on windows too.
pub fn normalize_display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Expression that loads the file at `path` into the display buffer and
/// brings it into view in another window. The sequence resets whatever
/// state the buffer is in: leave image mode if active, lift read-only,
/// replace the contents, re-enter image mode.
pub fn display_buffer_script(path: &Path) -> String {
    format!(
        r#"(with-current-buffer (get-buffer-create "{DISPLAY_BUFFER}")
  (when (eq major-mode 'image-mode)
    (image-mode-as-text))
  (read-only-mode -1)
  (erase-buffer)
  (insert-file-contents "{path}")
  (image-mode)
  (switch-to-buffer-other-window (current-buffer)))"#,
        path = normalize_display_path(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_become_forward_slashes() {
        let script = display_buffer_script(Path::new(r"C:\Temp\fig123.svg"));
        assert!(script.contains(r#"(insert-file-contents "C:/Temp/fig123.svg")"#));
        assert!(!script.contains('\\'));
    }

    #[test]
    fn script_targets_the_display_buffer() {
        let script = display_buffer_script(Path::new("/tmp/fig.svg"));
        assert!(script.contains(r#"(get-buffer-create "*matplotlib*")"#));
        assert!(script.contains("(image-mode)"));
        assert!(script.contains("(switch-to-buffer-other-window (current-buffer))"));
    }

    #[test]
    fn path_follows_insert_file_contents() {
        let script = display_buffer_script(Path::new("/tmp/fig.svg"));
        let idx = script.find("insert-file-contents").expect("insert form");
        assert!(script[idx..].contains("/tmp/fig.svg"));
    }
}
