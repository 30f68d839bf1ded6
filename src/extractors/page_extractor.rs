use select::{document::Document, node::Node, predicate::Name};

/// Bits of markup that show up on every kind of Letterboxd page.
#[derive(Debug)]
pub struct PageExtractor {}

impl PageExtractor {
    /// Highest `/page/N/` linked from the pagination block.
    pub fn get_last_page_from_html(page_html: &str) -> Option<u32> {
        Document::from(page_html)
            .find(Name("a"))
            .flat_map(|n| n.attr("href"))
            .flat_map(|link| {
                link.split("/page/")
                    .nth(1)
                    .and_then(|rest| rest.split('/').next())
                    .and_then(|num| num.parse::<u32>().ok())
            })
            .max()
    }

    /// `1,234 people` / `12,345` -> 1234 / 12345.
    pub fn parse_count(text: &str) -> Option<u64> {
        let digits: String = text
            .split_whitespace()
            .next()?
            .chars()
            .filter(|c| *c != ',')
            .collect();
        digits.parse::<u64>().ok()
    }

    /// Letterboxd encodes half-star ratings as a `rated-N` class.
    pub fn rating_from_classes(node: &Node) -> Option<u8> {
        node.attr("class")?
            .split_whitespace()
            .find_map(|class| class.strip_prefix("rated-"))
            .and_then(|value| value.parse::<u8>().ok())
            .filter(|rating| *rating <= 10)
    }

    /// `Parasite (2019)` -> (`Parasite`, 2019).
    pub fn split_name_and_year(text: &str) -> (String, Option<i32>) {
        let text = text.trim();
        if let Some(open) = text.rfind(" (") {
            if let Some(year) = text[open + 2..]
                .strip_suffix(')')
                .filter(|y| y.len() == 4)
                .and_then(|y| y.parse::<i32>().ok())
            {
                return (text[..open].trim().to_string(), Some(year));
            }
        }
        (text.to_string(), None)
    }

    pub fn first_text<'a, I>(nodes: I) -> Option<String>
    where
        I: IntoIterator<Item = Node<'a>>,
    {
        nodes
            .into_iter()
            .map(|n| n.text().trim().to_string())
            .find(|text| !text.is_empty())
    }

    /// Text of the first non-empty block, with its `<p>` children kept apart
    /// by a blank line.
    pub fn first_paragraphs<'a, I>(nodes: I) -> Option<String>
    where
        I: IntoIterator<Item = Node<'a>>,
    {
        nodes
            .into_iter()
            .map(|block| {
                let paragraphs: Vec<String> = block
                    .find(Name("p"))
                    .map(|p| p.text().trim().to_string())
                    .filter(|text| !text.is_empty())
                    .collect();
                if paragraphs.is_empty() {
                    block.text().trim().to_string()
                } else {
                    paragraphs.join("\n\n")
                }
            })
            .find(|text| !text.is_empty())
    }

    /// `/someone/` -> `someone`.
    pub fn first_segment(href: &str) -> Option<String> {
        Self::path_segments(href).first().map(|s| s.to_string())
    }

    /// Non-empty path segments of a site-relative or absolute link.
    pub fn path_segments(href: &str) -> Vec<&str> {
        let path = href
            .split_once("://")
            .map(|(_, rest)| rest.split_once('/').map(|(_, path)| path).unwrap_or(""))
            .unwrap_or(href);
        path.split(['?', '#'])
            .next()
            .unwrap_or("")
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}
