use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

/// A slice of rendered assistant content. Fenced code blocks are lifted out
/// of the markdown stream so the code block component can render them;
/// everything else arrives as ready-to-inject HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Html(String),
    Code {
        language: Option<String>,
        code: String,
    },
}

fn parser_options() -> Options {
    // The GFM extensions: tables, strikethrough, task lists.
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

/// Extract the language tag from a fence info string: first token, truncated
/// at the first character outside the tag charset, lowercased. A malformed
/// tag yields `None` and the block renders unhighlighted.
pub fn parse_language(info: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    let tag: String = token
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '#' | '-'))
        .collect();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_ascii_lowercase())
    }
}

/// Split assistant markdown into renderable segments.
///
/// Fenced code blocks become `Segment::Code` with exactly one trailing
/// newline stripped from the collected text. Indented code blocks stay in
/// the HTML stream and get default `<pre><code>` rendering. Raw HTML events
/// are converted to text so `push_html` escapes them; pulldown-cmark would
/// pass them through verbatim otherwise.
pub fn split_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending: Vec<Event> = Vec::new();
    let mut fence: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(input, parser_options()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                fence = Some((parse_language(&info), String::new()));
            }
            Event::Text(text) if fence.is_some() => {
                if let Some((_, code)) = fence.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => match fence.take() {
                Some((language, mut code)) => {
                    if code.ends_with('\n') {
                        code.pop();
                    }
                    flush_html(&mut pending, &mut segments);
                    segments.push(Segment::Code { language, code });
                }
                // Closes an indented block still in the HTML stream.
                None => pending.push(Event::End(TagEnd::CodeBlock)),
            },
            Event::Html(raw) | Event::InlineHtml(raw) => pending.push(Event::Text(raw)),
            other => pending.push(other),
        }
    }
    flush_html(&mut pending, &mut segments);
    segments
}

fn flush_html(pending: &mut Vec<Event>, segments: &mut Vec<Segment>) {
    if pending.is_empty() {
        return;
    }
    let mut out = String::new();
    html::push_html(&mut out, pending.drain(..));
    if !out.trim().is_empty() {
        segments.push(Segment::Html(out));
    }
}
