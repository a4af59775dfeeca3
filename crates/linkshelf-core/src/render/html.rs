//! Standalone HTML page of the grouped view.

use std::fmt::Write;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::controller::ShelfView;

use super::EMPTY_STATE;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Bytes `encodeURI` escapes: all but ASCII alphanumerics and URI structure characters.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encode like ECMAScript `encodeURI`: URI structure characters are kept,
/// everything else is UTF-8 percent-encoded.
pub fn encode_uri(s: &str) -> String {
    utf8_percent_encode(s, URI_ENCODE_SET).to_string()
}

/// Category filter `<select>` (current selection marked) and the suggestion `<datalist>`.
fn write_controls(out: &mut String, view: &ShelfView<'_>) {
    out.push_str("<select id=\"categoryFilter\">\n");
    for option in &view.controls.filter_options {
        let selected = if option.value == view.controls.selected {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            escape_html(&option.value),
            escape_html(&option.label)
        );
    }
    out.push_str("</select>\n<datalist id=\"categoryOptions\">\n");
    for category in &view.controls.suggestions {
        let _ = writeln!(out, "<option value=\"{}\"></option>", escape_html(category));
    }
    out.push_str("</datalist>\n");
}

/// Render the view as a complete HTML document.
pub fn render_html(view: &ShelfView<'_>, page_title: &str) -> String {
    let mut out = String::new();
    let title = escape_html(page_title);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<p class=\"count\">{}</p>\n",
        view.result.count
    );
    write_controls(&mut out, view);

    if view.result.is_empty() {
        let _ = writeln!(out, "<div class=\"empty\">{}</div>", escape_html(EMPTY_STATE));
    } else {
        for group in &view.result.groups {
            let _ = write!(
                out,
                "<section class=\"category-group\">\n<h2 class=\"category-header\">{}</h2>\n<ul class=\"links\">\n",
                escape_html(&group.category)
            );
            for link in &group.links {
                let _ = writeln!(
                    out,
                    "<li class=\"link-item\" data-id=\"{id}\"><a href=\"{href}\" target=\"_blank\" rel=\"noopener\" title=\"{t}\">{t}</a></li>",
                    id = escape_html(&link.id),
                    href = escape_html(&encode_uri(&link.url)),
                    t = escape_html(&link.title),
                );
            }
            out.push_str("</ul>\n</section>\n");
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}
