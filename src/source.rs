// src/source.rs
//! Data source registry: the fixed list of endpoints the user can pick from.
//!
//! The source decides everything column-related downstream: which record
//! field is shown, the table header, the CSV header and the download name.

use std::fmt;

use crate::config::consts::{COMMENTS_URL, POSTS_URL};
use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    Posts,
    Comments,
}

pub static SOURCES: &[Source] = &[Source::Posts, Source::Comments];

impl Source {
    pub fn all() -> &'static [Source] {
        SOURCES
    }

    pub fn label(self) -> &'static str {
        match self {
            Source::Posts    => "Posts",
            Source::Comments => "Comments",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Source::Posts    => POSTS_URL,
            Source::Comments => COMMENTS_URL,
        }
    }

    /// Column-selector flag: 0 shows `title`, anything else shows `name`.
    pub fn column_index(self) -> usize {
        match self {
            Source::Posts    => 0,
            Source::Comments => 1,
        }
    }

    pub fn from_column_index(ix: usize) -> Self {
        if ix == 0 { Source::Posts } else { Source::Comments }
    }

    /// Header of the display column.
    pub fn column_header(self) -> &'static str {
        match self {
            Source::Posts    => "Title",
            Source::Comments => "Name",
        }
    }

    /// The record field this source displays and exports.
    pub fn display_field(self, record: &Record) -> &str {
        match self {
            Source::Posts    => record.title(),
            Source::Comments => record.name(),
        }
    }

    pub fn csv_file_name(self) -> &'static str {
        match self {
            Source::Posts    => "Posts.csv",
            Source::Comments => "Comments.csv",
        }
    }

    /// Case-insensitive lookup by label, for the CLI.
    pub fn parse(s: &str) -> Option<Self> {
        SOURCES.iter().copied().find(|src| src.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_dropdown() {
        let labels: Vec<_> = Source::all().iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Posts", "Comments"]);
    }

    #[test]
    fn column_flag_round_trips() {
        for &src in Source::all() {
            assert_eq!(Source::from_column_index(src.column_index()), src);
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Source::parse("posts"), Some(Source::Posts));
        assert_eq!(Source::parse(" COMMENTS "), Some(Source::Comments));
        assert_eq!(Source::parse("users"), None);
    }
}
