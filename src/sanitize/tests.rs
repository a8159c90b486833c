use super::*;
use rstest::rstest;

fn block_texts<'a>(text: &'a str, sanitized: &Sanitized) -> Vec<(BlockKind, &'a str)> {
    sanitized
        .blocks
        .iter()
        .map(|block| (block.kind, &text[block.range]))
        .collect()
}

#[rstest]
#[case("")]
#[case("float h = Input.GetAxis(\"Horizontal\");")]
#[case("// trailing comment without newline")]
#[case("/* unterminated block comment\n spanning lines")]
#[case("\"unterminated string")]
#[case("x = 'c'; // ünïcödé comment ✓\ny = 1;")]
#[case("/* ✓✓✓ */ z = @\"C:\\path\\\";")]
fn test_length_is_preserved(#[case] text: &str) {
    let sanitized = sanitize(text);
    assert_eq!(sanitized.text.len(), text.len(), "input: {:?}", text);
}

#[test]
fn test_line_comment_is_masked() {
    let text = "a = 1; // Input.GetAxis(\"Old\")\nb = 2;";
    let sanitized = sanitize(text);
    assert_eq!(sanitized.text, "a = 1;                        \nb = 2;");
    assert_eq!(
        block_texts(text, &sanitized),
        vec![(BlockKind::LineComment, "// Input.GetAxis(\"Old\")")]
    );
}

#[test]
fn test_block_comment_keeps_newlines() {
    let text = "a /* one\ntwo */ b";
    let sanitized = sanitize(text);
    assert_eq!(sanitized.text, "a       \n       b");
    assert_eq!(
        block_texts(text, &sanitized),
        vec![(BlockKind::BlockComment, "/* one\ntwo */")]
    );
}

#[test]
fn test_string_content_is_not_masked() {
    let text = r#"Debug.Log("// not a comment"); // real"#;
    let sanitized = sanitize(text);
    assert!(sanitized.text.starts_with(r#"Debug.Log("// not a comment");"#));
    assert!(!sanitized.text.contains("real"));
    assert_eq!(
        block_texts(text, &sanitized),
        vec![
            (BlockKind::String, r#""// not a comment""#),
            (BlockKind::LineComment, "// real"),
        ]
    );
}

#[test]
fn test_escaped_quotes_do_not_close_strings() {
    let text = r#"s = "say \"hi\""; c = '\''; d = 1;"#;
    let sanitized = sanitize(text);
    assert_eq!(
        block_texts(text, &sanitized),
        vec![
            (BlockKind::String, r#""say \"hi\"""#),
            (BlockKind::AltString, r"'\''"),
        ]
    );
}

#[test]
fn test_verbatim_string_ignores_backslash() {
    let text = r#"p = @"C:\dir\"; q = @"a""b"; r = 1;"#;
    let sanitized = sanitize(text);
    assert_eq!(
        block_texts(text, &sanitized),
        vec![
            (BlockKind::String, r#""C:\dir\""#),
            (BlockKind::String, r#""a""b""#),
        ]
    );
}

#[test]
fn test_unterminated_block_runs_to_end_of_file() {
    let text = "x = 1; /* never closed\nInput.GetKey(\"a\")";
    let sanitized = sanitize(text);
    assert_eq!(sanitized.blocks.len(), 1);
    let block = sanitized.blocks[0];
    assert_eq!(block.kind, BlockKind::BlockComment);
    assert_eq!(block.index() + block.len(), text.len());
    assert!(!sanitized.text.contains("Input"));
}

#[test]
fn test_comment_markers_inside_strings_are_ignored() {
    let text = "url = \"http://example.com/*\"; y = 2;";
    let sanitized = sanitize(text);
    assert_eq!(sanitized.text, text);
    assert_eq!(sanitized.blocks.len(), 1);
    assert_eq!(sanitized.blocks[0].kind, BlockKind::String);
}

#[test]
fn test_multibyte_comment_is_masked_bytewise() {
    let text = "// ✓\nx";
    let sanitized = sanitize(text);
    assert_eq!(sanitized.text, "      \nx");
}

#[test]
fn test_directive_line_is_a_comment() {
    let text = "  #region Player's input\nbool b = Input.anyKey;\n#endregion";
    let sanitized = sanitize(text);
    assert_eq!(
        block_texts(text, &sanitized),
        vec![
            (BlockKind::Directive, "#region Player's input"),
            (BlockKind::Directive, "#endregion"),
        ]
    );
    assert!(sanitized.text.starts_with("                        \nbool b"));
    assert_eq!(sanitized.text.len(), text.len());
}

#[rstest]
#[case("x = a # b; 'c'", (BlockKind::AltString, "'c'"))]
#[case("/* c */ #if X\n", (BlockKind::BlockComment, "/* c */"))]
#[case("s = \"#x\";", (BlockKind::String, "\"#x\""))]
fn test_hash_inside_a_line_is_not_a_directive(
    #[case] text: &str,
    #[case] first: (BlockKind, &str),
) {
    let sanitized = sanitize(text);
    let blocks = block_texts(text, &sanitized);
    assert_eq!(blocks[0], first);
    assert!(blocks.iter().all(|(kind, _)| *kind != BlockKind::Directive));
}
