#[cfg(test)]
use super::*;
use crate::TomlError;

#[test]
fn test_classify_lines() {
    assert_eq!(classify(""), Line::Blank);
    assert_eq!(classify("   # only a comment"), Line::Blank);
    assert_eq!(
        classify("[database]"),
        Line::Group { name: "database", text: "[database]" }
    );
    assert_eq!(
        classify("  [servers.alpha]  # nested"),
        Line::Group { name: "servers.alpha", text: "[servers.alpha]" }
    );
    assert_eq!(
        classify("title = \"TOML Example\""),
        Line::Assignment { key: "title", value: "\"TOML Example\"", text: "title = \"TOML Example\"" }
    );
    assert_eq!(classify("1, 2, 3"), Line::Other("1, 2, 3"));
    assert_eq!(classify("]"), Line::Other("]"));
}

#[test]
fn test_assignment_splits_on_first_equals() {
    match classify("query = \"a=b=c\"") {
        Line::Assignment { key, value, .. } => {
            assert_eq!(key, "query");
            assert_eq!(value, "\"a=b=c\"");
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_comment_strip_is_not_quote_aware() {
    assert_eq!(strip_comment("color = \"#fff\""), "color = \"");
    assert_eq!(strip_comment("port = 80 # http"), "port = 80");
}

#[test]
fn test_dashed_keys_are_assignments() {
    assert!(matches!(classify("max-conn = 5000"), Line::Assignment { key: "max-conn", .. }));
}

#[test]
fn test_split_flat_array() {
    let items = split_array_items("[ 8001, 8001, 8002 ]").unwrap();
    assert_eq!(items, vec!["8001", "8001", "8002"]);
}

#[test]
fn test_split_keeps_nested_arrays_whole() {
    let items = split_array_items(r#"[ [ 1, 2 ], ["a", "b", "c"] ]"#).unwrap();
    assert_eq!(items, vec!["[1,2]", r#"["a","b","c"]"#]);
}

#[test]
fn test_split_respects_quotes() {
    let items = split_array_items(r#"[ "1,1", 'a b', "x" ]"#).unwrap();
    assert_eq!(items, vec![r#""1,1""#, "'a b'", r#""x""#]);
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    let items = split_array_items(r#"["say \"hi, there\"", 2]"#).unwrap();
    assert_eq!(items, vec![r#""say \"hi, there\"""#, "2"]);
}

#[test]
fn test_trailing_comma_and_empty_array() {
    assert_eq!(split_array_items("[1, 2,]").unwrap(), vec!["1", "2"]);
    assert_eq!(split_array_items("[1,,2]").unwrap(), vec!["1", "", "2"]);
    assert_eq!(split_array_items("[ , ]").unwrap(), vec![""]);
    assert!(split_array_items("[]").unwrap().is_empty());
    assert!(split_array_items("[ ]").unwrap().is_empty());
}

#[test]
fn test_unterminated_array() {
    let err = split_array_items("[ 1, 2, 3").unwrap_err();
    match err {
        TomlError::UnterminatedArray { near, code, .. } => {
            assert_eq!(near, "3");
            assert_eq!(code, Some(101));
        }
        other => panic!("Expected UnterminatedArray, got {:?}", other),
    }
}

#[test]
fn test_bracket_balance_ignores_quoted_brackets() {
    assert_eq!(bracket_balance("ports = ["), 1);
    assert_eq!(bracket_balance("ports = [ 1, 2 ]"), 0);
    assert_eq!(bracket_balance(r#"a = ["]", "["#), 1);
    assert_eq!(bracket_balance("[ [1, 2], [3"), 2);
}

#[test]
fn test_bracket_balance_matches_scanner_escapes() {
    // An escaped quote outside a string is plain content to both.
    assert_eq!(bracket_balance(r#"a = [\"x]"#), 0);
    assert_eq!(split_array_items(r#"[\"x]"#).unwrap(), vec![r#"\"x"#]);
}
