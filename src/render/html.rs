use crate::error::Result;
use crate::model::Recipe;
use crate::pipeline::SearchOutcome;
use crate::render::pages::{self, Metric, HOME_METRICS};
use crate::render::{notice_for, Level, Renderer};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
.metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; }
.metric-box { background-color: #333; border-radius: 10px; padding: 15px; color: white; }
.metric-box h3 { font-size: 16px; color: #CCC; margin: 0 0 5px; }
.metric-box p { font-size: 24px; font-weight: bold; margin: 0 0 5px; }
.metric-box span { font-size: 14px; color: #AAA; }
.metric-box.blue { background-color: #004a9e; }
.metric-box.yellow { background-color: #b38600; }
.metric-box.green { background-color: #006400; }
.metric-box.red { background-color: #8b0000; }
.metric-box.grey { background-color: #4a4a4a; }
.notice { border-radius: 6px; padding: 10px 14px; }
.notice.success { background: #e6f4ea; }
.notice.info { background: #e8f0fe; }
.notice.warning { background: #fef7e0; }
.notice.error { background: #fce8e6; }
details { border: 1px solid #ddd; border-radius: 6px; padding: 8px 12px; margin: 8px 0; }
summary { font-weight: bold; cursor: pointer; }
"#;

/// Standalone HTML document output
#[derive(Debug, Default)]
pub struct HtmlRenderer;

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        STYLE,
        body
    )
}

fn metric_box(out: &mut String, metric: &Metric) {
    out.push_str(&format!(
        "<div class=\"metric-box {}\"><h3>{}</h3><p>{}</p><span>{}</span></div>\n",
        metric.tone.css_class(),
        encode_text(metric.label),
        encode_text(metric.value),
        encode_text(metric.caption)
    ));
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Success => "success",
        Level::Info => "info",
        Level::Warning => "warning",
        Level::Error => "error",
    }
}

fn recipe(out: &mut String, recipe: &Recipe) {
    out.push_str(&format!(
        "<details>\n<summary>{}</summary>\n",
        encode_text(recipe.name())
    ));
    out.push_str("<h4>Bahan-bahan:</h4>\n<ul>\n");
    for ingredient in recipe.ingredients() {
        out.push_str(&format!("<li>{}</li>\n", encode_text(ingredient)));
    }
    out.push_str("</ul>\n<h4>Langkah-langkah:</h4>\n<ol>\n");
    for step in recipe.steps() {
        out.push_str(&format!("<li>{}</li>\n", encode_text(step)));
    }
    out.push_str(&format!(
        "</ol>\n<p><a href=\"{}\">Lihat resep asli</a></p>\n</details>\n",
        encode_double_quoted_attribute(recipe.source_url())
    ));
}

impl Renderer for HtmlRenderer {
    fn home(&self) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", pages::APP_NAME));
        body.push_str(&format!("<p>{}</p>\n", encode_text(pages::HOME_INTRO)));
        body.push_str(&format!("<h2>{}</h2>\n", encode_text(pages::HOME_FACTS_TITLE)));
        body.push_str(&format!("<p>{}</p>\n", encode_text(pages::HOME_FACTS_INTRO)));
        body.push_str("<div class=\"metrics\">\n");
        for metric in HOME_METRICS.iter() {
            metric_box(&mut body, metric);
        }
        body.push_str("</div>\n");
        document(pages::APP_NAME, &body)
    }

    fn about(&self) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", encode_text(pages::ABOUT_TITLE)));
        for paragraph in pages::ABOUT_BODY.iter() {
            body.push_str(&format!("<p>{}</p>\n", encode_text(paragraph)));
        }
        body.push_str(&format!("<h3>{}</h3>\n<ul>\n", encode_text(pages::TECH_TITLE)));
        for (label, value) in pages::TECH_STACK.iter() {
            body.push_str(&format!(
                "<li><strong>{}:</strong> {}</li>\n",
                encode_text(label),
                encode_text(value)
            ));
        }
        body.push_str("</ul>\n");
        document(pages::ABOUT_TITLE, &body)
    }

    fn search_results(&self, query: &str, result: &Result<SearchOutcome>) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", encode_text(pages::SEARCH_TITLE)));
        body.push_str(&format!("<p>{}</p>\n", encode_text(pages::SEARCH_HINT)));
        body.push_str(&format!(
            "<p>Bahan: <em>{}</em></p>\n",
            encode_text(query.trim())
        ));
        let notice = notice_for(query, result);
        body.push_str(&format!(
            "<div class=\"notice {}\">{}</div>\n",
            level_class(notice.level),
            encode_text(&notice.text)
        ));
        if let Ok(SearchOutcome::Found(recipes)) = result {
            for r in recipes {
                recipe(&mut body, r);
            }
        }
        document(pages::SEARCH_TITLE, &body)
    }
}
