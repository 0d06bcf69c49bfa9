// src/record.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item of a fetched collection (a post or a comment).
///
/// Only `id` is required. `title` and `name` are the two display fields the
/// sources expose; everything else the endpoint sends is kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn post(id: u64, title: impl Into<String>) -> Self {
        Self { id, title: Some(title.into()), name: None, extra: Map::new() }
    }

    pub fn comment(id: u64, name: impl Into<String>) -> Self {
        Self { id, title: None, name: Some(name.into()), extra: Map::new() }
    }

    /// `title`, or "" when the record has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// `name`, or "" when the record has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Decode a response body: a JSON array of records.
pub fn parse_records(body: &str) -> serde_json::Result<Vec<Record>> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_posts_and_keeps_extra_fields() {
        let body = r#"[{"userId":1,"id":1,"title":"sunt aut","body":"quia et"}]"#;
        let recs = parse_records(body).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, 1);
        assert_eq!(recs[0].title(), "sunt aut");
        assert_eq!(recs[0].name(), "");
        assert_eq!(recs[0].extra.get("userId"), Some(&Value::from(1)));
    }

    #[test]
    fn decodes_comments() {
        let body = r#"[{"postId":1,"id":5,"name":"X","email":"a@b.c","body":"..."}]"#;
        let recs = parse_records(body).unwrap();
        assert_eq!(recs[0], {
            let mut r = Record::comment(5, "X");
            r.extra.insert(s!("postId"), Value::from(1));
            r.extra.insert(s!("email"), Value::from("a@b.c"));
            r.extra.insert(s!("body"), Value::from("..."));
            r
        });
    }

    #[test]
    fn rejects_non_array_and_missing_id() {
        assert!(parse_records(r#"{"id":1}"#).is_err());
        assert!(parse_records(r#"[{"title":"no id"}]"#).is_err());
    }
}
