//! Page navigation: which page of the window is currently visible.

use std::collections::BTreeMap;

/// Pages of the application window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageId {
    Home,
    PredictForm,
}

impl PageId {
    pub const ALL: [PageId; 2] = [PageId::Home, PageId::PredictForm];
}

/// Surface-side handle for one page that can be shown or hidden.
pub trait PageHandle {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// Capability handed to pages so they can request a page switch.
pub trait PageSwitcher {
    fn request_page(&mut self, page: PageId);
}

/// Visibility flag for a page drawn by an immediate-mode renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    visible: bool,
}

impl PageHandle for PageView {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Owns every page handle and keeps exactly one of them visible.
#[derive(Debug)]
pub struct Navigator<H: PageHandle> {
    pages: BTreeMap<PageId, H>,
    active: PageId,
}

impl Navigator<PageView> {
    /// Navigator over plain visibility flags for every [`PageId`].
    pub fn with_views() -> Self {
        Self::new(PageId::ALL.map(|page| (page, PageView::default())))
    }
}

impl<H: PageHandle> Navigator<H> {
    /// Register the pages and show [`PageId::Home`].
    ///
    /// Panics if a [`PageId`] has no handle.
    pub fn new(pages: impl IntoIterator<Item = (PageId, H)>) -> Self {
        let pages: BTreeMap<_, _> = pages.into_iter().collect();
        for page in PageId::ALL {
            assert!(pages.contains_key(&page), "no handle registered for {page:?}");
        }
        let mut navigator = Self {
            pages,
            active: PageId::Home,
        };
        navigator.show(PageId::Home);
        navigator
    }

    /// Make `page` the only visible page.
    pub fn show(&mut self, page: PageId) {
        assert!(self.pages.contains_key(&page), "unknown page {page:?}");
        for (id, handle) in self.pages.iter_mut() {
            handle.set_visible(*id == page);
        }
        if self.active != page {
            tracing::debug!("Switched page {:?} -> {:?}", self.active, page);
        }
        self.active = page;
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn is_visible(&self, page: PageId) -> bool {
        self.pages
            .get(&page)
            .is_some_and(|handle| handle.is_visible())
    }

    /// Pages currently reporting themselves visible.
    pub fn visible_pages(&self) -> Vec<PageId> {
        self.pages
            .iter()
            .filter(|(_, handle)| handle.is_visible())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn handle(&self, page: PageId) -> Option<&H> {
        self.pages.get(&page)
    }
}

impl<H: PageHandle> PageSwitcher for Navigator<H> {
    fn request_page(&mut self, page: PageId) {
        self.show(page);
    }
}
