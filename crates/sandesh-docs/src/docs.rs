//! Documentation content store
//!
//! Holds the pages of the documentation viewer keyed by page id, the sidebar
//! navigation sections, and the hash routes (`#/docs/<page>`) that select a
//! page. Page bodies are rendered on demand; nothing is cached.

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sandesh_docs_core::Block;

use crate::service::Renderer;
use crate::{DocsError, Result};

/// Default hash route prefix for documentation pages
pub const ROUTE_PREFIX: &str = "#/docs/";

/// A single documentation page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocPage {
    pub id: String,
    pub title: String,
    /// Markdown source of the page body
    pub content: String,
}

impl DocPage {
    pub fn new(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

/// A sidebar entry pointing at a page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavItem {
    pub id: String,
    pub title: String,
}

impl NavItem {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// A titled group of sidebar entries
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavItem>,
}

impl NavSection {
    pub fn new(title: &str, items: Vec<NavItem>) -> Self {
        Self {
            title: title.to_string(),
            items,
        }
    }
}

/// Pages and navigation as loaded from a content file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    pub pages: Vec<DocPage>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<NavSection>,
}

/// A page rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub id: String,
    pub title: String,
    pub blocks: Vec<Block>,
    pub previous: Option<NavItem>,
    pub next: Option<NavItem>,
}

/// The documentation content store
#[derive(Debug, Clone)]
pub struct DocStore {
    pages: IndexMap<String, DocPage>,
    sections: Vec<NavSection>,
    route_prefix: String,
}

impl DocStore {
    /// Create an empty store using the `#/docs/` route prefix
    pub fn new() -> Self {
        Self {
            pages: IndexMap::new(),
            sections: Vec::new(),
            route_prefix: ROUTE_PREFIX.to_string(),
        }
    }

    /// Create an empty store routing with the renderer's cross-reference prefix
    ///
    /// Links rendered by `renderer` then resolve through [`DocStore::route`].
    pub fn for_renderer(renderer: &Renderer) -> Self {
        Self::new().with_route_prefix(&renderer.options().doc_link_prefix)
    }

    /// Use a different hash route prefix
    pub fn with_route_prefix(mut self, prefix: &str) -> Self {
        self.route_prefix = prefix.to_string();
        self
    }

    /// Add a page; ids must be unique
    pub fn add_page(&mut self, page: DocPage) -> Result<&mut Self> {
        if self.pages.contains_key(&page.id) {
            return Err(DocsError::DuplicatePage(page.id));
        }
        self.pages.insert(page.id.clone(), page);
        Ok(self)
    }

    /// Add a navigation section; every item must name a known page
    pub fn add_section(&mut self, section: NavSection) -> Result<&mut Self> {
        if let Some(item) = section
            .items
            .iter()
            .find(|item| !self.pages.contains_key(&item.id))
        {
            return Err(DocsError::UnknownNavItem(item.id.clone()));
        }
        self.sections.push(section);
        Ok(self)
    }

    /// Look up a page by id
    pub fn page(&self, id: &str) -> Result<&DocPage> {
        self.pages
            .get(id)
            .ok_or_else(|| DocsError::PageNotFound(id.to_string()))
    }

    /// Pages in insertion order
    pub fn pages(&self) -> impl Iterator<Item = &DocPage> {
        self.pages.values()
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Navigation items in reading order, across all sections
    pub fn nav_order(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// The landing page: first navigation item, else the first page added
    pub fn default_page(&self) -> Option<&str> {
        self.nav_order()
            .next()
            .map(|item| item.id.as_str())
            .or_else(|| self.pages.keys().next().map(String::as_str))
    }

    /// The navigation item before `id`
    pub fn previous(&self, id: &str) -> Option<&NavItem> {
        let items: Vec<&NavItem> = self.nav_order().collect();
        let index = items.iter().position(|item| item.id == id)?;
        index.checked_sub(1).map(|i| items[i])
    }

    /// The navigation item after `id`
    pub fn next(&self, id: &str) -> Option<&NavItem> {
        let mut items = self.nav_order().skip_while(|item| item.id != id);
        items.next()?;
        items.next()
    }

    /// Resolve a location hash to a page id
    ///
    /// `#/docs/<id>` selects `<id>`; `#/docs`, `#/docs/`, and the empty hash
    /// select the default page. The page is not required to exist.
    ///
    /// Any other hash is [`DocsError::InvalidRoute`]; the viewer keeps showing
    /// its current page in that case rather than falling back to the default.
    pub fn route<'a>(&'a self, hash: &'a str) -> Result<&'a str> {
        let bare_prefix = self.route_prefix.trim_end_matches('/');
        let id = match hash.strip_prefix(self.route_prefix.as_str()) {
            Some(id) => id,
            None if hash.is_empty() || hash == bare_prefix => "",
            None => return Err(DocsError::InvalidRoute(hash.to_string())),
        };

        if !id.is_empty() {
            return Ok(id);
        }
        self.default_page()
            .ok_or_else(|| DocsError::InvalidRoute(hash.to_string()))
    }

    /// The hash route that selects `id`
    pub fn href(&self, id: &str) -> String {
        format!("{}{}", self.route_prefix, id)
    }

    /// Render a page with its neighbours in navigation order
    pub fn render_page(&self, renderer: &Renderer, id: &str) -> Result<RenderedPage> {
        let page = self.page(id).inspect_err(|_| {
            log::debug!("documentation page {:?} not found", id);
        })?;
        log::debug!("rendering documentation page {:?}", id);

        Ok(RenderedPage {
            id: page.id.clone(),
            title: page.title.clone(),
            blocks: renderer.render(&page.content),
            previous: self.previous(id).cloned(),
            next: self.next(id).cloned(),
        })
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Catalog> for DocStore {
    type Error = DocsError;

    fn try_from(catalog: Catalog) -> Result<Self> {
        let mut store = DocStore::new();
        for page in catalog.pages {
            store.add_page(page)?;
        }
        for section in catalog.sections {
            store.add_section(section)?;
        }
        Ok(store)
    }
}
