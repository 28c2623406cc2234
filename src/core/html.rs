// src/core/html.rs
//! Markup queries over `scraper`.
//!
//! The sites we read change their markup from time to time. Every lookup the
//! modes depend on goes through `find_tag`/`select_first`, which turn a missing
//! element into a `QueryError::TagNotFound` naming what was searched for.

use scraper::{ ElementRef, Html, Selector };

use crate::error::QueryError;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    /// Parse `body` keeping only the outermost elements matching `filter`.
    /// This narrows query scope only: the whole body is still parsed first,
    /// so it is never cheaper than `parse`.
    pub fn parse_only(body: &str, filter: &str) -> Result<Self, QueryError> {
        let full = Html::parse_document(body);
        let sel = selector(filter)?;

        let mut kept = String::new();
        for el in full.select(&sel) {
            let nested = el
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| sel.matches(&a));
            if !nested {
                kept.push_str(&el.html());
            }
        }
        Ok(Self { html: Html::parse_fragment(&kept) })
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn find_tag(&self, tag: &str, attrs: &[(&str, &str)]) -> Result<ElementRef<'_>, QueryError> {
        find_tag(self.root(), tag, attrs)
    }

    pub fn select_first(&self, css: &str) -> Result<ElementRef<'_>, QueryError> {
        select_first(self.root(), css)
    }

    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>, QueryError> {
        select_all(self.root(), css)
    }
}

pub fn selector(css: &str) -> Result<Selector, QueryError> {
    Selector::parse(css).map_err(|e| QueryError::Selector(format!("{css}: {e}")))
}

/// First descendant of `scope` named `tag` with every `attrs` pair present.
/// `class` matches a single class token; other attributes match exactly.
pub fn find_tag<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Result<ElementRef<'a>, QueryError> {
    let mut css = s!(tag);
    for (name, value) in attrs {
        let value = value.replace('"', "\\\"");
        if *name == "class" {
            css.push_str(&format!("[class~=\"{value}\"]"));
        } else {
            css.push_str(&format!("[{name}=\"{value}\"]"));
        }
    }
    let sel = selector(&css)?;
    scope.select(&sel).next().ok_or_else(|| QueryError::TagNotFound {
        tag: s!(tag),
        attrs: describe_attrs(attrs),
    })
}

pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>, QueryError> {
    let sel = selector(css)?;
    scope.select(&sel).next().ok_or_else(|| QueryError::TagNotFound {
        tag: s!(css),
        attrs: s!(),
    })
}

pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>, QueryError> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).collect())
}

/// First match of an already-parsed selector, if any.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// All text below `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

fn describe_attrs(attrs: &[(&str, &str)]) -> String {
    if attrs.is_empty() {
        return s!();
    }
    let pairs: Vec<String> = attrs.iter().map(|(k, v)| format!("{k}=\"{v}\"")).collect();
    format!("{{{}}}", pairs.join(", "))
}
