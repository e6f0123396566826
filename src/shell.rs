use log::warn;
use stylist::css;
use stylist::yew::Global;
use web_sys::{Document, Element};
use yew::prelude::*;

pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub theme_color: &'static str,
    pub favicon: &'static str,
    pub font_stylesheet: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_site_name: &'static str,
    pub og_locale: &'static str,
    pub twitter_card: &'static str,
    pub robots: &'static str,
    pub googlebot: &'static str,
    pub format_detection: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Shivam Roy - Personal Branding Specialist | LinkedIn Authority Builder",
    description: "Transform your expertise into digital authority that attracts premium opportunities. Done-for-you LinkedIn personal branding for founders, lawyers, law firms and legal tech companies.",
    keywords: "LinkedIn personal branding, digital authority, thought leadership, legal marketing, founder branding, LinkedIn strategy, professional branding",
    author: "Shivam Roy",
    theme_color: "#3b82f6",
    favicon: "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>👨‍💼</text></svg>",
    font_stylesheet: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap",
    og_title: "Shivam Roy - Personal Branding Specialist",
    og_description: "Build LinkedIn Authority That Attracts Premium Opportunities",
    og_site_name: "Shivam Roy Portfolio",
    og_locale: "en_US",
    twitter_card: "summary_large_image",
    robots: "index, follow",
    googlebot: "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
    format_detection: "telephone=no, address=no, email=no",
};

impl SiteMetadata {
    /// `(attribute, key, content)` for every `<meta>` tag the page carries.
    pub fn meta_tags(&self) -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("name", "description", self.description),
            ("name", "keywords", self.keywords),
            ("name", "author", self.author),
            ("name", "creator", self.author),
            ("name", "publisher", self.author),
            ("name", "theme-color", self.theme_color),
            ("name", "robots", self.robots),
            ("name", "googlebot", self.googlebot),
            ("name", "format-detection", self.format_detection),
            ("property", "og:title", self.og_title),
            ("property", "og:description", self.og_description),
            ("property", "og:site_name", self.og_site_name),
            ("property", "og:locale", self.og_locale),
            ("property", "og:type", "website"),
            ("name", "twitter:card", self.twitter_card),
            ("name", "twitter:title", self.og_title),
            ("name", "twitter:description", self.og_description),
        ]
    }

    /// `(rel, href)` for every `<link>` tag the page carries.
    pub fn link_tags(&self) -> Vec<(&'static str, &'static str)> {
        vec![("icon", self.favicon), ("stylesheet", self.font_stylesheet)]
    }
}

/// Find the head element matching `selector`, creating it if absent.
fn upsert(document: &Document, head: &Element, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let element = document.create_element(tag).ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}

/// Write title, language, meta and link tags into the live document.
/// Running it again updates the same tags instead of adding duplicates.
pub fn apply_metadata(metadata: &SiteMetadata) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document to apply metadata to");
        return;
    };
    let Some(head) = document.head() else {
        warn!("Document has no <head>");
        return;
    };
    let head: Element = head.into();

    document.set_title(metadata.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", "en");
    }

    for (attr, key, content) in metadata.meta_tags() {
        let selector = format!("meta[{attr}=\"{key}\"]");
        if let Some(meta) = upsert(&document, &head, &selector, "meta") {
            let _ = meta.set_attribute(attr, key);
            let _ = meta.set_attribute("content", content);
        }
    }

    for (rel, href) in metadata.link_tags() {
        let selector = format!("link[rel=\"{rel}\"]");
        if let Some(link) = upsert(&document, &head, &selector, "link") {
            let _ = link.set_attribute("rel", rel);
            let _ = link.set_attribute("href", href);
        }
    }
}

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                color: #111827;
                background: #ffffff;
                -webkit-font-smoothing: antialiased;
                -moz-osx-font-smoothing: grayscale;
            }
            * {
                box-sizing: border-box;
            }
            button {
                font-family: inherit;
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_keys_are_unique() {
        let tags = SITE_METADATA.meta_tags();
        let mut keys: Vec<&str> = tags.iter().map(|(_, key, _)| *key).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len());
    }

    #[test]
    fn social_preview_fields_present() {
        let tags = SITE_METADATA.meta_tags();
        let content = |key: &str| {
            tags.iter()
                .find(|(_, k, _)| *k == key)
                .map(|(_, _, c)| *c)
        };
        assert_eq!(content("og:site_name"), Some("Shivam Roy Portfolio"));
        assert_eq!(content("og:locale"), Some("en_US"));
        assert_eq!(content("twitter:card"), Some("summary_large_image"));
        assert_eq!(content("robots"), Some("index, follow"));
    }
}
