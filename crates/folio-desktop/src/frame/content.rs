//! Content renderers for the catalog payload shapes

use super::{ContentView, WindowContent};
use crate::window::{DocumentPayload, ImagePayload, PagePayload};

/// Text window: `{name, image?, subtitle?, description[]}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentViewer;

impl WindowContent for DocumentViewer {
    type Output = DocumentPayload;

    fn render(&self, view: &ContentView<'_>) -> Option<DocumentPayload> {
        view.data?.document()
    }
}

/// Image window: `{name, imageUrl}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageViewer;

impl WindowContent for ImageViewer {
    type Output = ImagePayload;

    fn render(&self, view: &ContentView<'_>) -> Option<ImagePayload> {
        view.data?.image()
    }
}

/// Browser window: `{url}`, falling back to a home page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageViewer {
    pub home: Option<String>,
}

impl WindowContent for PageViewer {
    type Output = PagePayload;

    fn render(&self, view: &ContentView<'_>) -> Option<PagePayload> {
        view.data
            .and_then(|data| data.page())
            .or_else(|| self.home.clone().map(|url| PagePayload { url, name: None }))
    }
}
