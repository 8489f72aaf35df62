use plume_ui::highlight;
use plume_ui::markdown::{Segment, parse_language, split_segments};
use plume_ui::message::{ColorMode, Message, MessageIntent, Role, resolve_edit};
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn fenced_block_becomes_code_segment() {
    let segments = split_segments("```rust\nfn main() {}\n```");
    assert_eq!(
        segments,
        vec![Segment::Code {
            language: Some("rust".to_string()),
            code: "fn main() {}".to_string(),
        }]
    );
}

#[wasm_bindgen_test]
fn fence_strips_exactly_one_trailing_newline() {
    let segments = split_segments("```\na\n\n```");
    assert_eq!(
        segments,
        vec![Segment::Code {
            language: None,
            code: "a\n".to_string(),
        }]
    );
}

#[wasm_bindgen_test]
fn text_around_fence_renders_as_html() {
    let segments = split_segments("before\n\n```js\nlet x = 1;\n```\n\nafter");
    assert_eq!(segments.len(), 3);
    match (&segments[0], &segments[1], &segments[2]) {
        (Segment::Html(before), Segment::Code { language, code }, Segment::Html(after)) => {
            assert!(before.contains("<p>before</p>"));
            assert_eq!(language.as_deref(), Some("js"));
            assert_eq!(code, "let x = 1;");
            assert!(after.contains("<p>after</p>"));
        }
        other => panic!("unexpected segments: {other:?}"),
    }
}

#[wasm_bindgen_test]
fn inline_code_stays_in_html() {
    let segments = split_segments("use `foo` here");
    assert_eq!(segments.len(), 1);
    match &segments[0] {
        Segment::Html(html) => assert!(html.contains("<code>foo</code>")),
        other => panic!("unexpected segment: {other:?}"),
    }
}

#[wasm_bindgen_test]
fn indented_code_block_stays_in_html() {
    let segments = split_segments("para\n\n    indented line\n");
    assert_eq!(segments.len(), 1);
    match &segments[0] {
        Segment::Html(html) => {
            assert!(html.contains("<pre><code>indented line"));
        }
        other => panic!("unexpected segment: {other:?}"),
    }
}

#[wasm_bindgen_test]
fn tables_render_with_table_markup() {
    let segments = split_segments("| a | b |\n| --- | --- |\n| 1 | 2 |");
    assert_eq!(segments.len(), 1);
    match &segments[0] {
        Segment::Html(html) => {
            assert!(html.contains("<table>"));
            assert!(html.contains("<th>a</th>"));
            assert!(html.contains("<td>1</td>"));
        }
        other => panic!("unexpected segment: {other:?}"),
    }
}

#[wasm_bindgen_test]
fn markdown_escapes_inline_html() {
    let segments = split_segments(r#"<script>alert("xss")</script>"#);
    let html = match &segments[0] {
        Segment::Html(html) => html,
        other => panic!("unexpected segment: {other:?}"),
    };
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[wasm_bindgen_test]
fn language_tag_is_first_token_lowercased() {
    assert_eq!(parse_language("Rust"), Some("rust".to_string()));
    assert_eq!(parse_language("rust ignore"), Some("rust".to_string()));
    assert_eq!(parse_language("c++"), Some("c++".to_string()));
}

#[wasm_bindgen_test]
fn malformed_language_tag_is_none() {
    assert_eq!(parse_language(""), None);
    assert_eq!(parse_language("   "), None);
    assert_eq!(parse_language("~~~"), None);
}

#[wasm_bindgen_test]
fn edit_submission_is_trimmed() {
    assert_eq!(resolve_edit("  hello  ", "original"), "hello");
}

#[wasm_bindgen_test]
fn whitespace_edit_falls_back_to_original() {
    assert_eq!(resolve_edit("   ", "original"), "original");
    assert_eq!(resolve_edit("", "  original  "), "  original  ");
}

#[wasm_bindgen_test]
fn delete_and_regenerate_carry_no_payload() {
    assert_eq!(MessageIntent::Delete, MessageIntent::Delete);
    assert_ne!(MessageIntent::Delete, MessageIntent::Regenerate);
    assert_ne!(
        MessageIntent::Edit("x".to_string()),
        MessageIntent::Edit("y".to_string())
    );
}

#[wasm_bindgen_test]
fn known_language_highlights() {
    let html = highlight::highlight_html("fn main() {}", "rust", ColorMode::Dark)
        .expect("rust should highlight");
    assert!(html.contains("<pre"));
    assert!(html.contains("main"));
}

#[wasm_bindgen_test]
fn unknown_language_does_not_highlight() {
    assert!(highlight::highlight_html("x", "notalanguage", ColorMode::Light).is_none());
}

#[wasm_bindgen_test]
fn language_aliases_resolve() {
    assert!(highlight::find_syntax("python").is_some());
    assert!(highlight::find_syntax("typescript").is_some());
    assert!(highlight::find_syntax("bash").is_some());
}

#[wasm_bindgen_test]
fn message_roundtrips_through_json() {
    let msg = Message::assistant("hi `there`");
    let json = serde_json::to_string(&msg).expect("serialize");
    assert!(json.contains(r#""role":"assistant""#));
    let back: Message = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, msg);
}

#[wasm_bindgen_test]
fn role_labels_match_display() {
    assert_eq!(Role::User.label(), "You:");
    assert_eq!(Role::Assistant.label(), "AI:");
}
