//! MDX/Markdown compilation with syntax highlighting

use anyhow::Result;
use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::escape_html;

lazy_static! {
    static ref ESM_START: Regex = Regex::new(r"^(import|export)\s").unwrap();
    static ref MDX_COMMENT: Regex = Regex::new(r"(?s)\{\s*/\*.*?\*/\s*\}").unwrap();
}

/// Compiles post bodies into HTML
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Compile an MDX body: drop MDX-only syntax, then render as markdown
    pub fn compile_mdx(&self, source: &str) -> Result<String> {
        self.render(&strip_mdx_syntax(source))
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<Option<String>> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            // Info strings may carry attributes after the language
                            let lang = lang.split_whitespace().next().unwrap_or("").to_string();
                            (!lang.is_empty()).then_some(lang)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(lang);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let highlighted = self.highlight_code(&code_block_content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted = theme.and_then(|theme| {
            highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
        });

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, lang),
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                lang, highlighted
            ),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                escape_html(code)
            ),
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            lang,
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove MDX-only syntax outside fenced code
///
/// ESM blocks (`import`/`export` at the start of a line) run until the next
/// blank line. `{/* comments */}` are dropped. JSX elements are left in
/// place and pass through the markdown renderer as inline HTML.
pub fn strip_mdx_syntax(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut prose = String::new();
    let mut fence: Option<String> = None;
    let mut in_esm = false;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_start();

        if let Some(marker) = &fence {
            output.push_str(line);
            if trimmed.trim_end() == marker.as_str() {
                fence = None;
            }
            continue;
        }

        if in_esm {
            if line.trim().is_empty() {
                in_esm = false;
                prose.push_str(line);
            }
            continue;
        }

        if let Some(marker) = fence_marker(trimmed) {
            output.push_str(&MDX_COMMENT.replace_all(&prose, ""));
            prose.clear();
            output.push_str(line);
            fence = Some(marker);
            continue;
        }

        if ESM_START.is_match(line) {
            in_esm = true;
            continue;
        }

        prose.push_str(line);
    }

    output.push_str(&MDX_COMMENT.replace_all(&prose, ""));
    output
}

/// Opening fence of a code block (the run of backticks or tildes)
fn fence_marker(line: &str) -> Option<String> {
    let ch = line.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run: String = line.chars().take_while(|c| *c == ch).collect();
    (run.len() >= 3).then_some(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains("highlight rust"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_line_numbers() {
        let renderer = MarkdownRenderer::with_options("base16-ocean.dark", true);
        let html = renderer.render("```js\nlet a = 1;\nlet b = 2;\n```").unwrap();
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }

    #[test]
    fn test_strip_esm_and_comments() {
        let source = r#"import Image from 'next/image'
import {
  Callout,
} from '../components'

export const meta = { featured: true }

# Title {/* hidden */}

<Callout type="note">Visible</Callout>
"#;
        let stripped = strip_mdx_syntax(source);
        assert!(!stripped.contains("import"));
        assert!(!stripped.contains("export"));
        assert!(!stripped.contains("hidden"));
        assert!(stripped.contains("# Title"));
        assert!(stripped.contains(r#"<Callout type="note">Visible</Callout>"#));
    }

    #[test]
    fn test_strip_leaves_code_fences_alone() {
        let source = "Intro\n\n```js\nimport x from 'y'\n{/* kept */}\n```\n";
        let stripped = strip_mdx_syntax(source);
        assert!(stripped.contains("import x from 'y'"));
        assert!(stripped.contains("{/* kept */}"));
    }

    #[test]
    fn test_compile_mdx() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .compile_mdx("import A from './a'\n\nHello **MDX**\n")
            .unwrap();
        assert_eq!(html.trim(), "<p>Hello <strong>MDX</strong></p>");
    }
}
