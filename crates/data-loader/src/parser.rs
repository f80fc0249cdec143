//! Parsers for the precomputed startup artifacts.
//!
//! - movie_list.dat: movieId::title
//! - similarity.dat: one matrix row per line, values separated by commas
//!   and/or whitespace

use crate::error::{DataLoadError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;

/// Read a UTF-8 file and return its lines.
///
/// A missing file is reported as `FileNotFound` with the path, since that is
/// the usual startup mistake (wrong `--data-dir`).
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    Ok(content.lines().map(|s| s.to_string()).collect())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the movie_list.dat file
///
/// Format: movieId::title
///
/// Only the first `::` separates fields, so titles may contain `::`.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let file = file_label(path);
    let lines = read_lines(path)?;

    // Parse lines in parallel; collect keeps file order
    lines
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_movie_line(line.trim(), &file, idx + 1))
        .collect()
}

fn parse_movie_line(line: &str, file: &str, line_no: usize) -> Result<Movie> {
    let (movie_id, title) = line
        .split_once("::")
        .ok_or_else(|| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing '::' separator".to_string(),
        })?;

    let title = title.trim();
    if title.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing title".to_string(),
        });
    }

    Ok(Movie {
        id: movie_id.trim().parse().map_err(|e| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid movieId: {}", e),
        })?,
        title: title.to_string(),
    })
}

/// Parse the similarity.dat file into rows.
///
/// Rows are parsed in parallel; the returned order matches the file.
/// Shape checks (square, finite) happen in
/// [`SimilarityMatrix::from_rows`].
pub fn parse_similarity(path: &Path) -> Result<Vec<Vec<f32>>> {
    let file = file_label(path);
    let lines = read_lines(path)?;

    lines
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_similarity_row(line, &file, idx + 1))
        .collect()
}

fn parse_similarity_row(line: &str, file: &str, line_no: usize) -> Result<Vec<f32>> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f32>().map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Invalid similarity value '{}': {}", token, e),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movies_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie_list.dat");
        let lines: Vec<String> = (1..=500).map(|id| format!("{id}::Movie {id}")).collect();
        std::fs::write(&path, format!("{}\n\n", lines.join("\n\n"))).unwrap();

        let movies = parse_movies(&path).unwrap();

        assert_eq!(movies.len(), 500);
        assert!(movies.iter().zip(1..).all(|(m, id)| m.id == id && m.title == format!("Movie {id}")));
    }

    #[test]
    fn test_parse_movies_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie_list.dat");
        std::fs::write(&path, "1::Avatar\n\nbroken line\n").unwrap();

        match parse_movies(&path) {
            Err(DataLoadError::ParseError { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_movie_line() {
        let movie = parse_movie_line("19995::Avatar", "movie_list.dat", 1).unwrap();
        assert_eq!(movie.id, 19995);
        assert_eq!(movie.title, "Avatar");
    }

    #[test]
    fn test_parse_movie_line_keeps_separator_in_title() {
        let movie = parse_movie_line("1::Star Wars:: A New Hope", "movie_list.dat", 1).unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "Star Wars:: A New Hope");
    }

    #[test]
    fn test_parse_movie_line_errors() {
        let missing_sep = parse_movie_line("19995 Avatar", "movie_list.dat", 3);
        assert!(matches!(
            missing_sep,
            Err(DataLoadError::ParseError { line: 3, .. })
        ));

        let bad_id = parse_movie_line("abc::Avatar", "movie_list.dat", 4);
        assert!(matches!(bad_id, Err(DataLoadError::ParseError { line: 4, .. })));

        let no_title = parse_movie_line("42::   ", "movie_list.dat", 5);
        assert!(no_title.is_err());
    }

    #[test]
    fn test_parse_similarity_row_mixed_separators() {
        let row = parse_similarity_row("1.0, 0.25  0.5,0", "similarity.dat", 1).unwrap();
        assert_eq!(row, vec![1.0, 0.25, 0.5, 0.0]);
    }

    #[test]
    fn test_parse_similarity_row_rejects_garbage() {
        let err = parse_similarity_row("1.0,abc,0.5", "similarity.dat", 7).unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 7);
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
