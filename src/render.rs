//! Presentation adapters for the generated question list

use crate::errors::{QuizError, Result};
use std::fmt::Write;
use std::str::FromStr;

/// Output format for a question list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Numbered plain-text list
    #[default]
    Text,
    /// JSON array of strings
    Json,
    /// Standalone printable HTML page
    Html,
}

impl FromStr for OutputFormat {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(QuizError::invalid_config(format!(
                "unknown output format '{other}' (expected text, json or html)"
            ))),
        }
    }
}

/// Render `questions` in `format`
pub fn render(questions: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(questions)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(questions)?),
        OutputFormat::Html => Ok(render_html(questions)),
    }
}

/// `1. <question>` per item; continuation lines are indented under the text
pub fn render_text(questions: &[String]) -> String {
    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        let prefix = format!("{}. ", i + 1);
        let indent = " ".repeat(prefix.len());
        for (j, line) in question.lines().enumerate() {
            let lead = if j == 0 { prefix.as_str() } else { indent.as_str() };
            let _ = writeln!(out, "{lead}{line}");
        }
    }
    out
}

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HTML_STYLE: &str = r#"  body { font-family: "Courier New", monospace; margin: 20px;
         background: #f0f7ff; color: #0b1b33; }
  .wrap { max-width: 900px; margin: 0 auto; padding: 22px;
          background: #ffffff; border-radius: 12px; }
  h1 { font-size: 22px; margin: 0; }
  .meta { color: #51607a; font-size: 13px; margin: 0; }
  ol { margin-top: 18px; padding-left: 1.2em; }
  li { margin: 10px 0; line-height: 1.5; white-space: pre-wrap; }
  @media print { body { background: #ffffff; } .wrap { padding: 0; } }"#;

/// Printable standalone page listing the questions
pub fn render_html(questions: &[String]) -> String {
    let count = questions.len();
    let plural = if count == 1 { "" } else { "s" };

    let mut items = String::new();
    for question in questions {
        let _ = writeln!(items, "      <li>{}</li>", escape_html(question));
    }

    format!(
        "<!doctype html>
<html>
<head>
<meta charset=\"utf-8\">
<title>Generated Questions</title>
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">
<style>
{HTML_STYLE}
</style>
</head>
<body>
  <div class=\"wrap\">
    <h1>Generated Questions</h1>
    <p class=\"meta\">{count} question{plural} generated</p>
    <ol>
{items}    </ol>
  </div>
</body>
</html>
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<String> {
        vec![
            "Define Heap.".to_string(),
            concat!(
                "Which of the following best describes Heap?\n",
                "Options: A. Heap | B. Stack | C. Heaps | D. Heaping\n",
                "Answer: Heap"
            )
            .to_string(),
        ]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&questions());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1. Define Heap.");
        assert_eq!(lines[1], "2. Which of the following best describes Heap?");
        assert_eq!(lines[2], "   Options: A. Heap | B. Stack | C. Heaps | D. Heaping");
        assert_eq!(lines[3], "   Answer: Heap");
    }

    #[test]
    fn test_render_json() {
        let json = render(&questions(), OutputFormat::Json).unwrap();
        let back: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, questions());
    }

    #[test]
    fn test_render_html_escapes() {
        let html = render_html(&["Is a < b & \"c\"?".to_string()]);
        assert!(html.contains("<li>Is a &lt; b &amp; &quot;c&quot;?</li>"));
        assert!(html.contains("1 question generated"));
        assert!(html.contains("white-space: pre-wrap"));
    }

    #[test]
    fn test_render_html_count() {
        let html = render(&questions(), OutputFormat::Html).unwrap();
        assert!(html.contains("2 questions generated"));
        assert_eq!(html.matches("<li>").count(), 2);
    }
}
