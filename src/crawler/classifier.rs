//! Textual-content classification
//!
//! Decides whether a fetched page is a substantive text article worth
//! archiving. This is a heuristic: after stripping non-visible elements the
//! page must carry a minimum amount of text, and that text must show evidence
//! of readable language (Cyrillic characters, or failing that a run of Latin
//! letters). False positives and negatives on short or script-heavy pages are
//! expected.

use scraper::{ElementRef, Html, Node};

/// Minimum visible text length (in characters) for a page to qualify
const MIN_TEXT_CHARS: usize = 100;

/// Elements whose contents never count as visible text
const STRIPPED_ELEMENTS: &[&str] = &["script", "style", "meta", "link"];

/// Returns true if `html` looks like a substantive text page
pub fn is_text_page(html: &str) -> bool {
    if html.is_empty() {
        return false;
    }

    let text = visible_text(html);

    if text.chars().count() < MIN_TEXT_CHARS {
        return false;
    }

    if has_cyrillic(&text) {
        return true;
    }

    has_latin_run(&text)
}

/// Extracts the visible text of a document, skipping stripped elements
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    collect_text(document.root_element(), &mut text);
    text.trim().to_string()
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if STRIPPED_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

/// Any character in the Cyrillic Unicode block
fn has_cyrillic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

/// At least 3 consecutive ASCII letters anywhere in the text
fn has_latin_run(text: &str) -> bool {
    let mut run = 0;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<html><head><title>t</title></head><body>{}</body></html>", body)
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(!is_text_page(""));
    }

    #[test]
    fn test_short_text_rejected() {
        assert!(!is_text_page(&page("Новость")));
    }

    #[test]
    fn test_cyrillic_text_accepted() {
        let body = "Новость ".repeat(20);
        assert!(is_text_page(&page(&body)));
    }

    #[test]
    fn test_single_cyrillic_word_in_long_text_accepted() {
        // One Cyrillic token is enough once the length threshold is met
        let body = format!("{} Новость", "12 34 56 78 90 ".repeat(10));
        assert!(is_text_page(&page(&body)));
    }

    #[test]
    fn test_latin_run_accepted() {
        let body = "abc ".repeat(30);
        assert!(is_text_page(&page(&body)));
    }

    #[test]
    fn test_no_letter_run_rejected() {
        // Long enough, but only 2-letter tokens and no Cyrillic
        let body = "ab cd ef ".repeat(15);
        assert!(!is_text_page(&page(&body)));
    }

    #[test]
    fn test_digits_only_rejected() {
        let body = "0123456789 ".repeat(15);
        assert!(!is_text_page(&page(&body)));
    }

    #[test]
    fn test_script_and_style_do_not_count() {
        let html = format!(
            "<html><head><style>{}</style></head><body>\
             <script>{}</script><p>короткий текст</p></body></html>",
            "body { color: red; } ".repeat(20),
            "var longVariableName = 1; ".repeat(20),
        );
        // Visible text is under the threshold once script/style are stripped
        assert!(!is_text_page(&html));
    }

    #[test]
    fn test_text_across_nested_elements_accumulates() {
        let body = format!(
            "<div><p>{}</p><p>{}</p></div>",
            "Первый абзац новости. ".repeat(3),
            "Второй абзац новости. ".repeat(3),
        );
        assert!(is_text_page(&page(&body)));
    }
}
