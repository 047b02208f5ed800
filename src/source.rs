//! Source context around a trace frame.

use std::{fs, path::Path};

use crate::error::InspectError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based.
    pub number: usize,
    pub text: String,
    pub target: bool,
}

/// Read `path` and cut the window around `line` (1-based).
pub fn read_window(
    path: impl AsRef<Path>,
    line: usize,
    context_lines: usize,
) -> Result<Vec<SourceLine>, InspectError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InspectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    window(&text, line, context_lines).ok_or_else(|| InspectError::LineOutOfRange {
        path: path.to_path_buf(),
        line,
        len: text.lines().count(),
    })
}

/// Up to `context_lines / 2` lines on each side of `line` (1-based), clipped to `text`.
///
/// `None` if `line` is not a line of `text`.
pub fn window(text: &str, line: usize, context_lines: usize) -> Option<Vec<SourceLine>> {
    let lines: Vec<&str> = text.lines().collect();
    let target = line.checked_sub(1).filter(|&index| index < lines.len())?;
    let half = context_lines / 2;
    let first = target.saturating_sub(half);
    let last = (target + half).min(lines.len()).max(target + 1);

    Some(
        (first..last)
            .map(|index| SourceLine {
                number: index + 1,
                text: lines[index].trim_end().to_string(),
                target: index == target,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEXT: &str = "one\ntwo\nthree\nfour\nfive\nsix\n";

    fn numbers(window: &[SourceLine]) -> Vec<usize> {
        window.iter().map(|line| line.number).collect()
    }

    #[test]
    fn window_is_centered_on_target() {
        let window = window(TEXT, 3, 4).unwrap();
        assert_eq!(numbers(&window), [1, 2, 3, 4]);
        let target: Vec<_> = window.iter().filter(|line| line.target).collect();
        assert_eq!(target.len(), 1);
        assert_eq!(target[0].text, "three");
    }

    #[test]
    fn window_is_clipped_to_file() {
        assert_eq!(numbers(&window(TEXT, 1, 4).unwrap()), [1, 2]);
        assert_eq!(numbers(&window(TEXT, 6, 4).unwrap()), [4, 5, 6]);
        assert_eq!(numbers(&window(TEXT, 3, 100).unwrap()), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn zero_context_still_shows_target() {
        let window = window(TEXT, 5, 0).unwrap();
        assert_eq!(numbers(&window), [5]);
        assert!(window[0].target);
    }

    #[test]
    fn lines_outside_file_have_no_window() {
        assert_eq!(window(TEXT, 0, 4), None);
        assert_eq!(window(TEXT, 7, 4), None);
        assert_eq!(window("", 1, 4), None);
    }

    #[test]
    fn read_errors_are_reported() {
        let err = read_window("surely/not/here.rs", 1, 4).unwrap_err();
        assert!(matches!(err, InspectError::Read { .. }));

        let err = read_window(file!(), 1_000_000, 4).unwrap_err();
        assert!(matches!(err, InspectError::LineOutOfRange { line: 1_000_000, .. }));
    }

    #[test]
    fn reads_own_source() {
        let window = read_window(file!(), 1, 2).unwrap();
        assert_eq!(window[0].text, "//! Source context around a trace frame.");
    }
}
