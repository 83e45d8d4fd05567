//! HTML rendering for the fortunes page

use std::borrow::Cow;

use crate::models::Fortune;

const HEAD: &str = "<!DOCTYPE html><html><head><title>Fortunes</title></head><body>\
<table><tr><th>id</th><th>message</th></tr>";
const TAIL: &str = "</table></body></html>";

/// Escape `& < > ' "` for use in HTML text and attribute values.
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// The fortunes table document.
///
/// Rows are written in the order given; callers sort beforehand.
pub struct FortunesPage<'a> {
    fortunes: &'a [Fortune],
}

impl<'a> FortunesPage<'a> {
    pub fn new(fortunes: &'a [Fortune]) -> Self {
        Self { fortunes }
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(HEAD.len() + TAIL.len() + self.fortunes.len() * 64);
        html.push_str(HEAD);
        for fortune in self.fortunes {
            html.push_str("<tr><td>");
            html.push_str(&fortune.id.to_string());
            html.push_str("</td><td>");
            html.push_str(&escape_html(&fortune.message));
            html.push_str("</td></tr>");
        }
        html.push_str(TAIL);
        html
    }
}
