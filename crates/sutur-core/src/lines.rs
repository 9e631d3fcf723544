use crate::model::LineRecord;

/// Unicode whitespace plus the ASCII file/group/record/unit separators
/// (U+001C..=U+001F), which text extractors treat as blank too.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip [`is_blank`] characters from both ends.
fn trim_line(line: &str) -> &str {
    line.trim_matches(is_blank)
}

/// Split raw page text on `'\n'`, trim each piece and drop the blank ones.
///
/// A stray `'\r'` from CRLF output is whitespace and goes away with the trim.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(trim_line).filter(|l| !l.is_empty())
}

/// Lines of one page as records tagged with `page_number`.
pub fn page_lines(page_number: usize, text: &str) -> Vec<LineRecord> {
    split_lines(text)
        .map(|line| LineRecord {
            page: page_number,
            text: line.to_string(),
        })
        .collect()
}
