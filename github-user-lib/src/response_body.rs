use crate::error::{DecodeError, JsonKind, ROOT_PATH};
use crate::object_model::User;
use crate::result::GitHubUserResult;
use log::debug;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    One(User),
    Many(Vec<User>),
}

impl Decoded {
    pub fn into_users(self) -> Vec<User> {
        match self {
            Self::One(user) => vec![user],
            Self::Many(users) => users,
        }
    }
}

pub fn parse_body(bytes: &[u8]) -> GitHubUserResult<Decoded> {
    let value = serde_json::from_slice::<Value>(bytes)?;
    decode_document(&value)
}

pub fn parse_str(s: &str) -> GitHubUserResult<Decoded> {
    let value = serde_json::from_str::<Value>(s)?;
    decode_document(&value)
}

// An array decodes element by element; anything else keeps the fail-fast
// behaviour of `decode_document`.
pub fn parse_each_str(s: &str) -> GitHubUserResult<Vec<Result<User, DecodeError>>> {
    let value = serde_json::from_str::<Value>(s)?;
    match &value {
        Value::Array(items) => Ok(decode_each(items)),
        _ => Ok(decode_document(&value)?.into_users().into_iter().map(Ok).collect()),
    }
}

pub fn decode_document(value: &Value) -> GitHubUserResult<Decoded> {
    match value {
        Value::Object(object) => Ok(Decoded::One(User::from_json_object(object)?)),
        Value::Array(items) => Ok(Decoded::Many(decode_users(items)?)),
        _ => Err(DecodeError::TypeMismatch {
            path: String::from(ROOT_PATH),
            expected: "object or array",
            found: JsonKind::of(value),
        }
        .into()),
    }
}

pub fn decode_users(items: &[Value]) -> Result<Vec<User>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| User::from_json_value(item).map_err(|e| e.at_index(i)))
        .collect()
}

pub fn decode_each(items: &[Value]) -> Vec<Result<User, DecodeError>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            User::from_json_value(item).map_err(|e| {
                let e = e.at_index(i);
                debug!("skipping invalid user: {}", e);
                e
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_document, decode_each, parse_body, parse_each_str, parse_str, Decoded};
    use crate::error::{DecodeError, GitHubUserError, JsonKind};
    use crate::object_model::User;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn object_body_decodes_one() {
        let decoded = parse_str(r#"{"login":"octocat","id":1}"#).unwrap();
        assert_eq!(Decoded::One(User::new("octocat", 1, None, None)), decoded);
    }

    #[test]
    fn array_body_decodes_many() {
        let decoded = parse_body(br#"[{"login":"a","id":1},{"login":"b","id":2,"name":"B"}]"#)
            .unwrap();
        assert_eq!(
            vec![
                User::new("a", 1, None, None),
                User::new("b", 2, None, Some(String::from("B"))),
            ],
            decoded.into_users()
        );
    }

    #[test]
    fn empty_array_decodes_to_no_users() {
        assert_eq!(Decoded::Many(Vec::new()), parse_str("[]").unwrap());
    }

    #[test]
    fn invalid_element_fails_whole_array() {
        let e = parse_str(r#"[{"login":"a","id":1},{"login":"b"}]"#).unwrap_err();
        let GitHubUserError::Decode(e) = e else {
            panic!("expected decode error, got {e:?}");
        };
        assert_eq!(
            DecodeError::MissingField {
                path: String::from("[1].id")
            },
            e
        );
    }

    #[test]
    fn scalar_body_is_type_mismatch() {
        let e = decode_document(&json!(42)).unwrap_err();
        assert!(matches!(
            e,
            GitHubUserError::Decode(DecodeError::TypeMismatch {
                found: JsonKind::Number,
                ..
            })
        ));
    }

    #[test]
    fn invalid_json_is_json_error() {
        assert!(matches!(
            parse_str("{\"login\":"),
            Err(GitHubUserError::Json(_))
        ));
    }

    #[test]
    fn decode_each_keeps_valid_neighbours() {
        let items = vec![
            json!({ "login": "a", "id": 1 }),
            json!("b"),
            json!({ "login": "c", "id": 3, "avatar_url": "::" }),
            json!({ "login": "d", "id": 4 }),
        ];
        let results = decode_each(&items);

        assert_eq!(4, results.len());
        assert_eq!(Ok(User::new("a", 1, None, None)), results[0]);
        assert_eq!(Some("[1]"), results[1].as_ref().err().map(DecodeError::path));
        assert_eq!(
            Some("[2].avatar_url"),
            results[2].as_ref().err().map(DecodeError::path)
        );
        assert_eq!(Ok(User::new("d", 4, None, None)), results[3]);
    }

    #[test]
    fn parse_each_str_reports_bad_elements() {
        let results =
            parse_each_str(r#"[{"login":"a","id":1},{"login":"b","id":"x"}]"#).unwrap();
        assert_eq!(Ok(User::new("a", 1, None, None)), results[0]);
        assert_eq!(Some("[1].id"), results[1].as_ref().err().map(DecodeError::path));
    }

    #[test]
    fn parse_each_str_fails_fast_on_single_object() {
        assert_eq!(
            vec![Ok(User::new("a", 1, None, None))],
            parse_each_str(r#"{"login":"a","id":1}"#).unwrap()
        );
        assert!(matches!(
            parse_each_str(r#"{"login":"a"}"#),
            Err(GitHubUserError::Decode(DecodeError::MissingField { .. }))
        ));
    }
}
