//! HTML renderer: standalone HTML page with semantic markup.

use crate::config::HtmlConfig;
use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct HtmlRenderer {
    title: Option<String>,
    css: Option<String>,
}

impl HtmlRenderer {
    pub fn new(config: &HtmlConfig) -> Self {
        Self {
            title: config.title.clone(),
            css: config.css.clone(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(&HtmlConfig::default())
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();
        let anchors = toc::anchors(doc);

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        let title = self
            .title
            .as_deref()
            .unwrap_or_else(|| doc.sections()[0].heading());
        out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        if let Some(ref css) = self.css {
            out.push_str(css);
            out.push('\n');
        }
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        // Index
        out.push_str("<nav>\n<h2>Index</h2>\n<ul>\n");
        for (section, anchor) in doc.sections().iter().zip(&anchors) {
            out.push_str(&format!(
                "  <li><a href=\"#{}\">{}</a></li>\n",
                html_escape(anchor),
                html_escape(section.heading())
            ));
        }
        out.push_str("</ul>\n</nav>\n");

        for (section, anchor) in doc.sections().iter().zip(&anchors) {
            out.push_str(&render_section_html(section, anchor));
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_section_html(section: &Section, anchor: &str) -> String {
    let mut out = String::new();
    let level = section.level();

    out.push_str("<section>\n");
    out.push_str(&format!(
        "<h{} id=\"{}\">{}</h{}>\n",
        level,
        html_escape(anchor),
        html_escape(section.heading()),
        level
    ));

    out.push_str("<dl>\n");
    for entry in section.entries() {
        out.push_str(&format!("  <dt>{}</dt>\n", html_escape(entry.label())));
        let body = entry
            .body_lines()
            .map(html_escape)
            .collect::<Vec<_>>()
            .join("<br>\n");
        out.push_str(&format!("  <dd>{}</dd>\n", body));
    }
    out.push_str("</dl>\n");
    out.push_str("</section>\n");

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
