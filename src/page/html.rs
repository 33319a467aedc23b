use anyhow::{Context, Result};
use pulldown_cmark::{html::push_html, Parser};
use std::fmt::Write;

use super::{Component, Page};

pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the page as a standalone HTML document.
pub fn render_html(page: &Page) -> Result<String> {
    let mut body = String::new();
    for node in &page.children {
        render_node(node, &mut body)?;
    }

    let links: String = page
        .stylesheets
        .iter()
        .map(|href| format!(r#"    <link rel="stylesheet" href="{}">"#, escape(href)) + "\n")
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{links}    <script src="{plotly}"></script>
</head>
<body>
    <div class="container">
{body}    </div>
</body>
</html>
"#,
        title = escape(&page.title),
        links = links,
        plotly = PLOTLY_JS,
        body = body,
    ))
}

fn render_node(node: &Component, out: &mut String) -> Result<()> {
    match node {
        Component::Heading { level, text } => {
            writeln!(out, "<h{lvl}>{}</h{lvl}>", escape(text), lvl = level)?;
        }
        Component::Markdown { source } => {
            out.push_str("<div class=\"markdown\">\n");
            push_html(out, Parser::new(source));
            out.push_str("</div>\n");
        }
        Component::Graph { id, figure } => {
            let spec = serde_json::to_string(figure)
                .with_context(|| format!("serializing figure {}", id))?;
            writeln!(out, r#"<div id="{}" class="graph"></div>"#, escape(id))?;
            writeln!(
                out,
                r#"<script>(function () {{ var fig = {}; Plotly.newPlot({:?}, fig.data, fig.layout, {{"responsive": true}}); }})();</script>"#,
                script_safe(&spec),
                id
            )?;
        }
        Component::Div { style, children } => {
            let css: Vec<String> = style.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
            writeln!(out, r#"<div style="{}">"#, escape(&css.join("; ")))?;
            for child in children {
                render_node(child, out)?;
            }
            out.push_str("</div>\n");
        }
    }
    Ok(())
}

fn escape(s: &str) -> String {
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

/// JSON inside `<script>` must not close the tag early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
