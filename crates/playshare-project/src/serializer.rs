use thiserror::Error;

use crate::file::compact;
use crate::file::CompactProjectFile;
use crate::file::ProjectFile;
use crate::token;
use crate::token::DecodeError;

/// The token decoded cleanly but its text is not a list of file records.
#[derive(Error, Debug)]
#[error("project payload is not a list of file records")]
pub struct MalformedProjectError {
    #[from]
    source: serde_json::Error,
}

#[derive(Error, Debug)]
#[error("failed to serialize project files")]
pub struct EncodeError {
    #[from]
    source: serde_json::Error,
}

/// Everything that can go wrong turning a `project` token back into files.
#[derive(Error, Debug)]
pub enum ProjectTokenError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Malformed(#[from] MalformedProjectError),
}

pub fn serialize(files: &[ProjectFile]) -> Result<String, EncodeError> {
    let compacted = files.iter().map(compact).collect::<Vec<_>>();
    let json = serde_json::to_string(&compacted)?;
    Ok(token::encode(&json))
}

pub fn deserialize(token: &str) -> Result<Vec<CompactProjectFile>, ProjectTokenError> {
    let json = token::decode(token)?;
    let files = serde_json::from_str::<Vec<CompactProjectFile>>(&json)
        .map_err(MalformedProjectError::from)?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::expand;

    fn roundtrip(files: &[ProjectFile]) -> Vec<ProjectFile> {
        let token = serialize(files).unwrap();
        deserialize(&token)
            .unwrap()
            .into_iter()
            .map(expand)
            .collect()
    }

    #[test]
    fn test_roundtrip_preserves_order_and_flags() {
        let files = vec![
            ProjectFile::new("index.html", "<script type=\"module\" src=\"./app.js\"></script>"),
            ProjectFile::new("app.ts", "console.log('hi');\n"),
            ProjectFile::new("package.json", "{\"dependencies\":{}}").hidden(true),
            ProjectFile::new("styles/main.css", "body { margin: 0 }"),
        ];
        assert_eq!(roundtrip(&files), files);
    }

    #[test]
    fn test_roundtrip_unicode_and_blank_content() {
        let files = vec![
            ProjectFile::new("empty.txt", ""),
            ProjectFile::new("ünïcødé/名前.md", "# 見出し\n\u{1f680}"),
        ];
        assert_eq!(roundtrip(&files), files);
    }

    #[test]
    fn test_wire_format_uses_plain_field_names() {
        let token = serialize(&[ProjectFile::new("a", "b").hidden(true)]).unwrap();
        let json = token::decode(&token).unwrap();
        assert_eq!(json, r#"[{"name":"a","content":"b","hidden":true}]"#);
    }

    #[test]
    fn test_token_is_fragment_safe() {
        let token = serialize(&[ProjectFile::new("x.js", "a ~~~ b ??? c")]).unwrap();
        assert!(!token.contains(['+', '/', '=']));
    }

    #[test]
    fn test_ignores_unknown_record_fields() {
        let token = token::encode(r#"[{"name":"a","content":"b","label":"x"}]"#);
        let files = deserialize(&token).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a");
    }

    #[test]
    fn test_bad_alphabet_is_decode_error() {
        let result = deserialize("not/base64+");
        assert!(matches!(result, Err(ProjectTokenError::Decode(_))));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let token = token::encode("[{\"name\":");
        assert!(matches!(
            deserialize(&token),
            Err(ProjectTokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_list_payload_is_malformed() {
        for payload in [
            r#"{"name":"a","content":"b"}"#,
            r#"["a","b"]"#,
            r#"[{"name":"a"}]"#,
            r#"[{"name":1,"content":"b"}]"#,
            "null",
        ] {
            let token = token::encode(payload);
            assert!(
                matches!(deserialize(&token), Err(ProjectTokenError::Malformed(_))),
                "{payload} should be rejected"
            );
        }
    }

    mod properties {
        use std::collections::HashSet;

        use proptest::prelude::*;

        use super::*;

        /// File lists with unique names in arbitrary order.
        fn arb_files() -> impl Strategy<Value = Vec<ProjectFile>> {
            prop::collection::vec((any::<String>(), any::<String>(), any::<bool>()), 0..8)
                .prop_map(|entries| {
                    let mut seen = HashSet::new();
                    entries
                        .into_iter()
                        .filter(|(name, _, _)| seen.insert(name.clone()))
                        .map(|(name, content, hidden)| ProjectFile::new(name, content).hidden(hidden))
                        .collect()
                })
        }

        proptest! {
            #[test]
            fn prop_roundtrip_preserves_files(files in arb_files()) {
                prop_assert_eq!(roundtrip(&files), files);
            }
        }
    }
}
