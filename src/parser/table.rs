use html_escape::decode_html_entities;

/// Single forward pass over table markup, producing one `Vec<String>` per
/// `<tr>` in document order. Keeps just enough state to mirror an
/// event-driven parse: the row and cell being built, whether the cursor is
/// inside a cell, and which non-content tag (script/style) is currently
/// swallowing input.
///
/// Cell text is entity-decoded and whitespace-collapsed; text outside cells
/// and rows without cells are dropped.
pub fn scan_rows(table_html: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_cell = false;
    let mut skip: Option<String> = None;

    let mut rest = table_html;
    while let Some(lt) = rest.find('<') {
        let (text, tail) = rest.split_at(lt);
        if in_cell && skip.is_none() {
            cell.push_str(text);
        }

        // Markup comments contribute nothing, whatever they contain.
        if let Some(after) = tail.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
            continue;
        }

        let Some(gt) = tail.find('>') else { break };
        let (name, is_close) = tag_name(&tail[1..gt]);
        rest = &tail[gt + 1..];

        if !is_close && matches!(name.as_str(), "script" | "style") {
            skip = Some(name);
            continue;
        }
        if skip.is_some() {
            if is_close && skip.as_deref() == Some(name.as_str()) {
                skip = None;
            }
            continue;
        }

        match (name.as_str(), is_close) {
            ("td" | "th", false) => {
                in_cell = true;
                cell.clear();
            }
            ("td" | "th", true) => {
                row.push(clean_text(&cell));
                in_cell = false;
                cell.clear();
            }
            ("tr", true) => {
                if !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                }
            }
            _ => {}
        }
    }

    rows
}

/// Decode HTML entities, collapse whitespace runs to single spaces, trim.
fn clean_text(raw: &str) -> String {
    let decoded = decode_html_entities(raw);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased tag name and whether the tag is a closing one. Attributes and
/// self-closing slashes are ignored.
fn tag_name(tag: &str) -> (String, bool) {
    let tag = tag.trim();
    let (tag, is_close) = match tag.strip_prefix('/') {
        Some(rest) => (rest, true),
        None => (tag, false),
    };
    let name = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    (name, is_close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_cells_in_document_order() {
        let html = "<table>\
            <tr><th></th><th>Jun 2025</th></tr>\
            <tr><td>Sales</td><td>120</td></tr>\
            </table>";
        let rows = scan_rows(html);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["", "Jun 2025"]);
        assert_eq!(rows[1], vec!["Sales", "120"]);
    }

    #[test]
    fn decodes_entities() {
        let rows = scan_rows("<tr><td>P &amp; L</td><td>&lt;1</td></tr>");
        assert_eq!(rows[0], vec!["P & L", "<1"]);
    }

    #[test]
    fn collapses_whitespace() {
        let rows = scan_rows("<tr><td>  Net \n\t  Profit </td></tr>");
        assert_eq!(rows[0][0], "Net Profit");
    }

    #[test]
    fn nbsp_collapses_like_space() {
        let rows = scan_rows("<tr><td>Sales&nbsp;&nbsp;+</td></tr>");
        assert_eq!(rows[0][0], "Sales +");
    }

    #[test]
    fn nested_inline_tags_accumulate() {
        let rows = scan_rows("<tr><td><b>OPM</b> <span>%</span></td></tr>");
        assert_eq!(rows[0][0], "OPM %");
    }

    #[test]
    fn script_and_style_content_dropped() {
        let rows = scan_rows(
            "<tr><td>X<script>var t = \"<td>not a cell</td>\";</script></td>\
             <td><style>.x { color: red }</style>Y</td></tr>",
        );
        assert_eq!(rows[0], vec!["X", "Y"]);
    }

    #[test]
    fn comments_dropped() {
        let rows = scan_rows("<tr><td>a<!-- <td>ghost</td> -->b</td></tr>");
        assert_eq!(rows[0][0], "ab");
    }

    #[test]
    fn empty_rows_not_emitted() {
        let rows = scan_rows("<table><tr></tr><tr><td>a</td></tr><tr>\n</tr></table>");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn text_outside_cells_dropped() {
        let rows = scan_rows("<table>stray<tr>noise<td>kept</td></tr></table>");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["kept"]);
    }

    #[test]
    fn empty_markup() {
        assert!(scan_rows("").is_empty());
        assert!(scan_rows("<table></table>").is_empty());
    }

    #[test]
    fn uppercase_tags() {
        let rows = scan_rows("<TR><TD>a</TD></TR>");
        assert_eq!(rows[0], vec!["a"]);
    }
}
