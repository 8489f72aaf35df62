use once_cell::sync::Lazy;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::message::ColorMode;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const LIGHT_THEME: &str = "InspiredGitHub";
const DARK_THEME: &str = "base16-ocean.dark";

fn theme_for(mode: ColorMode) -> Option<&'static Theme> {
    let name = match mode {
        ColorMode::Light => LIGHT_THEME,
        ColorMode::Dark => DARK_THEME,
    };
    THEME_SET.themes.get(name)
}

/// Map a fence language tag to a syntax definition: token lookup first
/// (names and extensions), then a table of common aliases.
pub fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
    let lang = lang.to_ascii_lowercase();
    SYNTAX_SET.find_syntax_by_token(&lang).or_else(|| {
        let mapped = match lang.as_str() {
            "rust" => "rs",
            "python" => "py",
            "javascript" => "js",
            "typescript" => "ts",
            "c++" | "cpp" => "cpp",
            "c#" | "csharp" => "cs",
            "shell" | "bash" | "zsh" => "sh",
            "yaml" => "yml",
            "markdown" => "md",
            "ruby" => "rb",
            _ => return None,
        };
        SYNTAX_SET.find_syntax_by_extension(mapped)
    })
}

/// Render a code block as themed, inline-styled HTML. `None` when the
/// language matches no known syntax; callers fall back to an escaped plain
/// block.
pub fn highlight_html(code: &str, language: &str, mode: ColorMode) -> Option<String> {
    let syntax = find_syntax(language)?;
    let theme = theme_for(mode)?;
    highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme).ok()
}
