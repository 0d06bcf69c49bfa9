// src/csv.rs
use crate::{record::Record, source::Source};

/* ---------------- Writing ---------------- */

const SEP: char = ',';

/// Append `ID,<Column>` for the given source. No line terminator: lines are
/// joined with `\n`, the last one has none.
pub fn write_header(out: &mut String, source: Source) {
    out.push_str("ID");
    out.push(SEP);
    out.push_str(source.column_header());
}

/// Append one `\n`-prefixed data line. Fields go out verbatim: a comma,
/// quote or newline inside a title/name is NOT escaped and will shift
/// columns for whoever reads the file.
pub fn write_record(out: &mut String, record: &Record, source: Source) {
    out.push('\n');
    out.push_str(&record.id.to_string());
    out.push(SEP);
    out.push_str(source.display_field(record));
}

/// Serialize the whole collection for `source`.
pub fn to_csv_string(records: &[Record], source: Source) -> String {
    let mut out = String::with_capacity(16 + records.len() * 32);
    write_header(&mut out, source);
    for r in records {
        write_record(&mut out, r, source);
    }
    out
}

/* ---------------- Data URI ---------------- */

pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// ASCII characters a URI may carry as-is: unreserved marks plus the
/// reserved delimiters.
fn keep_in_uri(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ";,/?:@&=+$-_.!~*'()#".contains(ch)
}

/// Percent-encode a full URI, leaving its structure characters alone.
/// Non-ASCII goes out as percent-encoded UTF-8.
pub fn encode_uri(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut tmp = [0u8; 4];
    for ch in s.chars() {
        if keep_in_uri(ch) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut tmp)));
        }
    }
    out
}

/// The CSV as a single `data:` URI payload.
pub fn to_data_uri(records: &[Record], source: Source) -> String {
    let mut raw = s!(DATA_URI_PREFIX);
    raw.push_str(&to_csv_string(records, source));
    encode_uri(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_and_comments_literal_format() {
        let posts = vec![Record::post(1, "A"), Record::post(2, "B")];
        assert_eq!(to_csv_string(&posts, Source::Posts), "ID,Title\n1,A\n2,B");

        let comments = vec![Record::comment(5, "X")];
        assert_eq!(to_csv_string(&comments, Source::Comments), "ID,Name\n5,X");
    }

    #[test]
    fn empty_collection_is_header_only() {
        assert_eq!(to_csv_string(&[], Source::Comments), "ID,Name");
    }

    #[test]
    fn embedded_comma_is_not_escaped() {
        let recs = vec![Record::post(3, "a, \"b\"")];
        assert_eq!(to_csv_string(&recs, Source::Posts), "ID,Title\n3,a, \"b\"");
    }

    #[test]
    fn column_follows_source_not_record() {
        // A post under the Comments source has no name: empty cell.
        let recs = vec![Record::post(1, "T")];
        assert_eq!(to_csv_string(&recs, Source::Comments), "ID,Name\n1,");
    }

    #[test]
    fn record_lines_append_to_header() {
        let mut out = String::new();
        write_header(&mut out, Source::Posts);
        write_record(&mut out, &Record::post(7, "seven"), Source::Posts);
        assert_eq!(out, "ID,Title\n7,seven");
    }

    #[test]
    fn encode_uri_keeps_structure() {
        assert_eq!(encode_uri("ID,Title\n1,a b"), "ID,Title%0A1,a%20b");
        assert_eq!(encode_uri("data:text/csv;charset=utf-8,"), "data:text/csv;charset=utf-8,");
        assert_eq!(encode_uri("é%"), "%C3%A9%25");
    }

    #[test]
    fn data_uri_has_prefix() {
        let uri = to_data_uri(&[Record::comment(5, "X")], Source::Comments);
        assert_eq!(uri, "data:text/csv;charset=utf-8,ID,Name%0A5,X");
    }
}
