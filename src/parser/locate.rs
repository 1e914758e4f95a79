use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<table.*?</table>").unwrap());

/// Slice the first `<section ... id="<section_id>" ...>...</section>` block
/// out of the page. The id attribute may sit anywhere inside the opening
/// tag; the match runs to the first closing tag after it.
pub fn section_block<'a>(html: &'a str, section_id: &str) -> Result<&'a str, Error> {
    let pattern = format!(
        r#"(?s)<section[^>]+id="{}".*?</section>"#,
        regex::escape(section_id)
    );
    let re = Regex::new(&pattern).expect("escaped section id forms a valid pattern");

    re.find(html)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::SectionNotFound(section_id.to_string()))
}

/// Slice the first `<table>...</table>` block inside a section.
pub fn table_block<'a>(section_html: &'a str, section_id: &str) -> Result<&'a str, Error> {
    TABLE_RE
        .find(section_html)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::TableNotFound(section_id.to_string()))
}
