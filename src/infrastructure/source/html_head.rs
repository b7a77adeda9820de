//! Document metadata read from an HTML page

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::application::ports::DocumentMetadata;

fn link_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Quoted attribute values may contain '>'
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<link\b(?:"[^"]*"|'[^']*'|[^'">])*>"#).expect("valid link regex")
    })
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)([a-z][a-z0-9:_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("valid attribute regex")
    })
}

/// One `<link>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    /// Lowercased, whitespace-normalized `rel`
    pub rel: String,
    pub mime: Option<String>,
    pub href: String,
}

impl LinkTag {
    fn parse(tag: &str) -> Option<Self> {
        let mut rel = None;
        let mut mime = None;
        let mut href = None;

        for caps in attribute_regex().captures_iter(tag) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().trim().to_string());
            match caps[1].to_lowercase().as_str() {
                "rel" => rel = value,
                "type" => mime = value,
                "href" => href = value,
                _ => {}
            }
        }

        Some(Self {
            rel: normalize_rel(&rel?),
            mime: mime.map(|m| m.to_lowercase()),
            href: href.filter(|h| !h.is_empty())?,
        })
    }
}

fn normalize_rel(rel: &str) -> String {
    rel.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<link>` tags and origin of an HTML document
#[derive(Debug, Clone, Default)]
pub struct HtmlHeadMetadata {
    links: Vec<LinkTag>,
    base: Option<Url>,
}

impl HtmlHeadMetadata {
    /// Parse `html`, resolving relative hrefs against `page_url`
    pub fn parse(html: &str, page_url: Option<Url>) -> Self {
        let links = link_tag_regex()
            .find_iter(html)
            .filter_map(|m| LinkTag::parse(m.as_str()))
            .collect();
        Self {
            links,
            base: page_url,
        }
    }

    /// Read and parse an HTML file
    pub fn from_file(path: &Path, page_url: Option<Url>) -> std::io::Result<Self> {
        let html = std::fs::read_to_string(path)?;
        Ok(Self::parse(&html, page_url))
    }

    /// Document with only a page URL (favicon falls back to `/favicon.ico`)
    pub fn from_url(page_url: Url) -> Self {
        Self {
            links: Vec::new(),
            base: Some(page_url),
        }
    }

    pub fn links(&self) -> &[LinkTag] {
        &self.links
    }

    fn resolve(&self, href: &str) -> String {
        match &self.base {
            Some(base) => base
                .join(href)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}

impl DocumentMetadata for HtmlHeadMetadata {
    fn link_href(&self, rel: &str, mime: Option<&str>) -> Option<String> {
        let rel = normalize_rel(rel);
        self.links
            .iter()
            .find(|link| {
                link.rel == rel
                    && mime.map_or(true, |m| link.mime.as_deref() == Some(m))
            })
            .map(|link| self.resolve(&link.href))
    }

    fn origin(&self) -> Option<String> {
        let origin = self.base.as_ref()?.origin();
        origin.is_tuple().then(|| origin.ascii_serialization())
    }
}

/// No document available: no links and no origin
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocument;

impl DocumentMetadata for NoDocument {
    fn link_href(&self, _rel: &str, _mime: Option<&str>) -> Option<String> {
        None
    }

    fn origin(&self) -> Option<String> {
        None
    }
}
