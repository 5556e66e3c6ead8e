//! Best-effort markdown to HTML conversion.
//!
//! This is an ordered sequence of regex substitutions, not a parser. Each rule
//! runs over the output of the previous one, so when constructs overlap the
//! earlier rule wins. The output is raw HTML: nothing in the source is escaped.

use regex::Regex;
use std::sync::LazyLock;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid markdown rule {pattern}: {e}")),
            replacement,
        }
    }

    fn apply(&self, input: &str) -> String {
        self.pattern.replace_all(input, self.replacement).into_owned()
    }
}

/// Substitutions applied before paragraph splitting, in order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Fenced code blocks
        Rule::new(r"(?s)```(.*?)```", "<pre><code>${1}</code></pre>"),
        // Headings, longest prefix first
        Rule::new(r"(?m)^###### (.*)$", "<h6>${1}</h6>"),
        Rule::new(r"(?m)^##### (.*)$", "<h5>${1}</h5>"),
        Rule::new(r"(?m)^#### (.*)$", "<h4>${1}</h4>"),
        Rule::new(r"(?m)^### (.*)$", "<h3>${1}</h3>"),
        Rule::new(r"(?m)^## (.*)$", "<h2>${1}</h2>"),
        Rule::new(r"(?m)^# (.*)$", "<h1>${1}</h1>"),
        // Bold before italic so the double delimiters are gone by then
        Rule::new(r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        Rule::new(r"__(.*?)__", "<strong>${1}</strong>"),
        Rule::new(r"\*(.*?)\*", "<em>${1}</em>"),
        Rule::new(r"_(.*?)_", "<em>${1}</em>"),
        Rule::new(r"`(.*?)`", "<code>${1}</code>"),
        // List items. Ordered items become plain <li> as well.
        Rule::new(r"(?m)^- (.*)$", "<li>${1}</li>"),
        Rule::new(r"(?m)^\* (.*)$", "<li>${1}</li>"),
        Rule::new(r"(?m)^\+ (.*)$", "<li>${1}</li>"),
        Rule::new(r"(?m)^\d+\. (.*)$", "<li>${1}</li>"),
        // One <ul> spanning from the first <li> to the last one
        Rule::new(r"(?s)(<li>.*</li>)", "<ul>${1}</ul>"),
        Rule::new(r"(?m)^> (.*)$", "<blockquote>${1}</blockquote>"),
        Rule::new(
            r"!\[(.*?)\]\((.*?)\)",
            r#"<img src="${2}" alt="${1}" style="max-width:100%">"#,
        ),
        Rule::new(r"\[(.*?)\]\((.*?)\)", r#"<a href="${2}" target="_blank">${1}</a>"#),
    ]
});

/// Bare tags and the classed tags they become in the final output.
const CLASSED_TAGS: [(&str, &str); 14] = [
    ("<h1>", r#"<h1 class="md-h1">"#),
    ("<h2>", r#"<h2 class="md-h2">"#),
    ("<h3>", r#"<h3 class="md-h3">"#),
    ("<h4>", r#"<h4 class="md-h4">"#),
    ("<h5>", r#"<h5 class="md-h5">"#),
    ("<h6>", r#"<h6 class="md-h6">"#),
    ("<strong>", r#"<strong class="md-strong">"#),
    ("<em>", r#"<em class="md-em">"#),
    ("<ul>", r#"<ul class="md-ul">"#),
    ("<ol>", r#"<ol class="md-ol">"#),
    ("<li>", r#"<li class="md-li">"#),
    ("<blockquote>", r#"<blockquote class="md-blockquote">"#),
    ("<code>", r#"<code class="md-code">"#),
    ("<pre>", r#"<pre class="md-pre">"#),
];

/// Convert markdown-flavoured `source` into an HTML fragment.
///
/// Pure function: the same input always yields the same output.
pub fn render_markdown(source: &str) -> String {
    // `.` and `$` only stop at `\n`
    let source = source.replace("\r\n", "\n");
    let mut html = RULES.iter().fold(source, |acc, rule| rule.apply(&acc));

    // Blank lines separate paragraphs
    html = format!("<p>{}</p>", html.replace("\n\n", "</p><p>"));
    html = html.replace("<p></p>", "");
    html = html.replace('\n', "<br>");

    for (bare, classed) in CLASSED_TAGS {
        html = html.replace(bare, classed);
    }
    html
}
