// src/views/html.rs

//! Server-side HTML for the form and summary pages.

use crate::{
    utils::html::escape,
    views::{
        FormView, Page, SummaryView,
        chart::BarChart,
        schema::{FieldSchema, FieldValue, FormSchema, Widget, field_value},
        summary::SummaryLine,
    },
};

const STYLE: &str = "
body { font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
h1 { color: #FF6B6B; text-align: center; }
fieldset { border: none; border-left: 5px solid #FF6B6B; background: #f8f9fa; margin: 1rem 0; padding: 1rem 1.5rem; }
label { display: block; margin: 0.5rem 0 0.25rem; }
.error { color: #b00020; font-weight: bold; }
.notice { color: #1b5e20; background: #e8f5e9; padding: 0.5rem 1rem; }
.bar { background: #4ECDC4; height: 1.2rem; }
.track { background: #e0e0e0; width: 100%; }
button { background: #4ECDC4; color: white; border: none; border-radius: 25px; padding: 0.75rem 2rem; }
";

/// Renders a full HTML document for `page`.
///
/// `notice` is a one-off confirmation shown above the summary, such as the
/// message right after a successful submit. Form pages ignore it.
pub fn render(page: &Page, notice: Option<&str>) -> String {
    let body = match page {
        Page::Form(form) => render_form(form, &FormSchema::movie_survey()),
        Page::Summary(summary) => render_summary(summary, notice),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Movie Survey</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Movie Survey</h1>\n<hr>\n{body}</body>\n</html>\n"
    )
}

fn render_form(form: &FormView, schema: &FormSchema) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h3>{}</h3>\n", escape(schema.intro)));

    if let Some(error) = &form.error {
        out.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape(error)
        ));
    }

    out.push_str("<form method=\"post\" action=\"/submit\">\n");
    for section in &schema.sections {
        out.push_str(&format!(
            "<fieldset>\n<legend><h2>{}</h2></legend>\n",
            escape(section.title)
        ));
        for field in &section.fields {
            if let Some(value) = field_value(&form.values, field.key) {
                out.push_str(&render_field(field, &value));
            }
        }
        out.push_str("</fieldset>\n");
    }
    out.push_str("<button type=\"submit\">Submit Survey</button>\n</form>\n");
    out
}

fn render_field(field: &FieldSchema, value: &FieldValue<'_>) -> String {
    let key = field.key;
    let label = if field.required {
        format!("{} *", escape(field.label))
    } else {
        escape(field.label)
    };
    let placeholder = field
        .placeholder
        .map(|p| format!(" placeholder=\"{}\"", escape(p)))
        .unwrap_or_default();

    match (&field.widget, value) {
        (Widget::Text, FieldValue::Text(text)) => format!(
            "<label for=\"{key}\">{label}</label>\n\
             <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\"{placeholder}>\n",
            escape(text)
        ),
        (Widget::TextArea, FieldValue::Text(text)) => format!(
            "<label for=\"{key}\">{label}</label>\n\
             <textarea id=\"{key}\" name=\"{key}\"{placeholder}>{}</textarea>\n",
            escape(text)
        ),
        (Widget::Number { min, max, .. }, FieldValue::Number(n)) => format!(
            "<label for=\"{key}\">{label}</label>\n\
             <input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"{min}\" max=\"{max}\" value=\"{n}\">\n"
        ),
        (Widget::Slider { min, max, .. }, FieldValue::Number(n)) => format!(
            "<label for=\"{key}\">{label} ({min}-{max})</label>\n\
             <input type=\"range\" id=\"{key}\" name=\"{key}\" min=\"{min}\" max=\"{max}\" value=\"{n}\">\n"
        ),
        (Widget::Select { choices, .. }, FieldValue::Choice(current)) => {
            let mut out = format!(
                "<label for=\"{key}\">{label}</label>\n<select id=\"{key}\" name=\"{key}\">\n"
            );
            for choice in choices {
                let selected = if choice == current { " selected" } else { "" };
                out.push_str(&format!(
                    "<option value=\"{0}\"{selected}>{0}</option>\n",
                    escape(choice)
                ));
            }
            out.push_str("</select>\n");
            out
        }
        (Widget::Radio { choices, .. }, FieldValue::Choice(current)) => {
            let mut out = format!("<p>{label}</p>\n");
            for (i, choice) in choices.iter().enumerate() {
                let checked = if choice == current { " checked" } else { "" };
                out.push_str(&format!(
                    "<label><input type=\"radio\" id=\"{key}_{i}\" name=\"{key}\" value=\"{0}\"{checked}> {0}</label>\n",
                    escape(choice)
                ));
            }
            out
        }
        (Widget::MultiSelect { choices }, FieldValue::Choices(current)) => {
            let mut out = format!("<p>{label}</p>\n");
            for (i, choice) in choices.iter().enumerate() {
                let checked = if current.contains(choice) { " checked" } else { "" };
                out.push_str(&format!(
                    "<label><input type=\"checkbox\" id=\"{key}_{i}\" name=\"{key}\" value=\"{0}\"{checked}> {0}</label>\n",
                    escape(choice)
                ));
            }
            out
        }
        (widget, value) => {
            tracing::warn!("Widget {:?} cannot display value {:?} for '{}'", widget, value, key);
            String::new()
        }
    }
}

fn render_summary(summary: &SummaryView, notice: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(notice) = notice {
        out.push_str(&format!(
            "<p class=\"notice\" role=\"status\">{}</p>\n",
            escape(notice)
        ));
    }
    out.push_str("<h2>Survey Results Summary</h2>\n");

    for section in summary.sections.iter().take(2) {
        out.push_str(&render_section(section.title, section.lines.iter()));
    }

    out.push_str(&render_chart(&summary.chart));

    for section in summary.sections.iter().skip(2) {
        out.push_str(&render_section(section.title, section.lines.iter()));
    }

    out.push_str(&format!(
        "<hr>\n<p class=\"saved\">Survey data saved to: <code>{}</code></p>\n",
        escape(&summary.location)
    ));
    out.push_str(
        "<form method=\"post\" action=\"/reset\">\n\
         <button type=\"submit\">Take Another Survey</button>\n</form>\n",
    );
    out
}

fn render_section<'a>(
    title: &str,
    lines: impl Iterator<Item = &'a SummaryLine>,
) -> String {
    let mut out = format!("<section>\n<h3>{}</h3>\n<ul>\n", escape(title));
    for line in lines {
        out.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            escape(line.label),
            escape(&line.value)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

fn render_chart(chart: &BarChart) -> String {
    let mut out = format!(
        "<section class=\"chart\">\n<h3>{}</h3>\n<table>\n",
        escape(chart.title)
    );
    for bar in &chart.bars {
        out.push_str(&format!(
            "<tr><th>{}</th><td class=\"track\"><div class=\"bar\" style=\"width: {}%\"></div></td><td>{}</td></tr>\n",
            escape(bar.label),
            chart.percent(bar),
            bar.value
        ));
    }
    out.push_str("</table>\n</section>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder,
        models::{choices::Genre, survey::RawSurveyFields},
    };

    #[test]
    fn form_page_keeps_draft_and_error() {
        let draft = RawSurveyFields {
            name: "<b>Alex</b>".to_string(),
            favorite_genres: vec![Genre::Horror],
            ..RawSurveyFields::default()
        };
        let page = Page::Form(FormView::new(
            draft,
            Some("at least one genre required".to_string()),
        ));
        let html = render(&page, Some("Submitted"));

        assert!(html.contains("action=\"/submit\""));
        assert!(html.contains("class=\"error\""));
        assert!(!html.contains("class=\"notice\""));
        assert!(!html.contains("<b>Alex</b>"));
        assert!(html.contains("value=\"Horror\" checked"));
        assert!(html.contains("name=\"age\" min=\"13\" max=\"100\" value=\"25\""));
    }

    #[test]
    fn summary_page_has_chart_and_reset() {
        let record = builder::build(RawSurveyFields {
            name: "Alex".to_string(),
            favorite_genres: vec![Genre::Comedy],
            story_quality: 10,
            ..RawSurveyFields::default()
        })
        .unwrap();
        let page = Page::Summary(SummaryView::new(&record, "out.json"));
        let html = render(&page, None);
        assert!(!html.contains("class=\"notice\""));

        assert!(html.contains("<strong>Name:</strong> Alex"));
        assert!(html.contains("style=\"width: 100%\""));
        assert!(html.contains("style=\"width: 50%\""));
        assert!(html.contains("action=\"/reset\""));
        assert!(html.contains("out.json"));

        let confirmed = render(&page, Some("Submitted"));
        assert!(confirmed.contains("<p class=\"notice\" role=\"status\">Submitted</p>"));
    }
}
