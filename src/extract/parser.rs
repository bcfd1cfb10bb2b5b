//! HTML extraction for the Kawasaki catalog markup
//!
//! Every function here is pure: it takes an already parsed document and
//! returns what it finds. Missing structure is reported as an empty result,
//! never as a panic, since the markup is owned by a third party and changes
//! without notice.

use crate::extract::literal::model_name_from_data_content;
use crate::model::{SpecIdentity, SpecificationRecord};
use crate::normalize::category_key;
use crate::ScrapeError;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Glyphs decorating line names in the navigation
const DECORATION_GLYPHS: &[char] = &['®', '™', '℠'];

/// Marker identifying model links inside a product container
const MODEL_LINK_MARKER: &str = "Navigation Motorcycle";

/// Label carried by the spec links on a model page
const SPEC_LINK_LABEL: &str = "VIEW SPECS & DETAILS";

/// A product container's link to its model page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLink {
    /// Canonical model name from the link's data-content
    pub model_name: String,

    /// Model page href as it appears in the markup
    pub href: String,
}

/// Extracts line names from the motorcycle section of the catalog navigation
///
/// # Extraction Rules
///
/// - Section: `div[data-nav-sub-cat-id="1"]`
/// - Entries: `li.list-inline-item[data-item="subcat"]`, text of `a.nav-link`
/// - ®, ™ and ℠ are removed and whitespace collapsed; empty names are dropped
///
/// # Returns
///
/// Line names in document order (empty if the section is missing)
pub fn extract_lines(document: &Html) -> Vec<String> {
    let (Some(section_sel), Some(entry_sel), Some(link_sel)) = (
        selector(r#"div[data-nav-sub-cat-id="1"]"#),
        selector(r#"li.list-inline-item[data-item="subcat"]"#),
        selector("a.nav-link"),
    ) else {
        return Vec::new();
    };

    let Some(section) = document.select(&section_sel).next() else {
        tracing::error!("Could not find motorcycle subcategory container");
        return Vec::new();
    };

    let mut lines = Vec::new();
    for entry in section.select(&entry_sel) {
        let Some(link) = entry.select(&link_sel).next() else {
            continue;
        };

        let name = clean_line_name(&link.text().collect::<String>());
        if !name.is_empty() {
            tracing::debug!("Found motorcycle line: {}", name);
            lines.push(name);
        }
    }

    lines
}

/// Removes trademark glyphs and collapses whitespace in a line name
pub fn clean_line_name(raw: &str) -> String {
    raw.replace(DECORATION_GLYPHS, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts model page links from the product containers of one tab panel
///
/// Within `div#<panel_id>`, each `div.productRepeat` contributes the first
/// `a[data-content]` whose data-content mentions "Navigation Motorcycle".
/// Containers without such a link, without an href, or with unparseable
/// data-content are skipped.
///
/// # Returns
///
/// * `Some(Vec<ProductLink>)` - Links in document order
/// * `None` - The panel does not exist in the document
pub fn extract_product_links(document: &Html, panel_id: &str) -> Option<Vec<ProductLink>> {
    let panel_sel = selector("div[id]")?;
    let container_sel = selector("div.productRepeat")?;
    let link_sel = selector("a[data-content]")?;

    let panel = document
        .select(&panel_sel)
        .find(|div| div.value().id() == Some(panel_id))?;

    let mut links = Vec::new();
    for container in panel.select(&container_sel) {
        let Some(link) = container.select(&link_sel).find(|a| {
            a.value()
                .attr("data-content")
                .is_some_and(|content| content.contains(MODEL_LINK_MARKER))
        }) else {
            continue;
        };

        let Some(href) = link.value().attr("href").map(str::trim).filter(|h| !h.is_empty()) else {
            continue;
        };

        let data_content = link.value().attr("data-content").unwrap_or_default();
        let Some(model_name) = model_name_from_data_content(data_content) else {
            tracing::error!("Failed to parse data-content: {}", data_content);
            continue;
        };

        links.push(ProductLink {
            model_name,
            href: href.to_string(),
        });
    }

    Some(links)
}

/// Extracts spec page hrefs from a model page
///
/// Matches `a.blackBtn` links whose aria-label contains "VIEW SPECS & DETAILS".
pub fn extract_spec_links(document: &Html) -> Vec<String> {
    let Some(link_sel) = selector("a.blackBtn[aria-label]") else {
        return Vec::new();
    };

    document
        .select(&link_sel)
        .filter(|a| {
            a.value()
                .attr("aria-label")
                .is_some_and(|label| label.contains(SPEC_LINK_LABEL))
        })
        .filter_map(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts a specification record from a spec page
///
/// Identity fields come from the URL alone. Every
/// `div.collapse.specAccordion` section contributes its `table.specTable`
/// rows as `<category>_<normalized label>` entries, where the category is the
/// lower-cased `data-accordion` attribute. Rows lacking a `th.first` label or
/// a `td` value, and sections lacking a category or table, are skipped.
///
/// # Arguments
///
/// * `document` - The parsed spec page
/// * `url` - The spec page URL
/// * `make` - Manufacturer name written into the record
///
/// # Returns
///
/// * `Ok(SpecificationRecord)` - The record (identity only if no tables matched)
/// * `Err(ScrapeError::HtmlParse)` - The URL does not carry an identity
pub fn extract_specs(
    document: &Html,
    url: &Url,
    make: &str,
) -> Result<SpecificationRecord, ScrapeError> {
    let identity = SpecIdentity::from_url(url).ok_or_else(|| ScrapeError::HtmlParse {
        url: url.to_string(),
        message: "spec URL has fewer than four path segments".to_string(),
    })?;

    let mut record = SpecificationRecord::with_identity(make, identity);

    let (Some(section_sel), Some(table_sel), Some(row_sel), Some(label_sel), Some(value_sel)) = (
        selector("div.collapse.specAccordion"),
        selector("table.specTable"),
        selector("tr"),
        selector("th.first"),
        selector("td"),
    ) else {
        return Ok(record);
    };

    for section in document.select(&section_sel) {
        let Some(category) = section
            .value()
            .attr("data-accordion")
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
        else {
            continue;
        };

        let Some(table) = section.select(&table_sel).next() else {
            continue;
        };

        for row in table.select(&row_sel) {
            let (Some(label), Some(value)) = (
                row.select(&label_sel).next(),
                row.select(&value_sel).next(),
            ) else {
                continue;
            };

            let key = category_key(&category, &element_text(label));
            record.insert(key, element_text(value));
        }
    }

    Ok(record)
}

/// Text of an element: trimmed text nodes concatenated as-is
///
/// A `<br>` between two text nodes becomes a single space.
fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    let mut line_break = false;

    for node in element.descendants() {
        match node.value() {
            Node::Text(t) => {
                let t = t.trim();
                if t.is_empty() {
                    continue;
                }
                if line_break && !text.is_empty() {
                    text.push(' ');
                }
                line_break = false;
                text.push_str(t);
            }
            Node::Element(el) if el.name() == "br" => line_break = true,
            _ => {}
        }
    }

    text
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}
