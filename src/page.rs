//! The page surface the greeting handler reads from and writes to.
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, PoisonError, RwLock},
};

use log::debug;
use tokio::{runtime::Handle, task::JoinHandle};

use crate::errors::PageError;

/// Listener run on every click of the element it is registered on. The
/// call itself happens during dispatch; the returned future runs afterwards.
pub type ClickListener =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Minimal view of a document: read an input, replace an element's text,
/// listen for clicks.
pub trait Page: Send + Sync {
    /// Current value of the input element `id`.
    fn value(&self, id: &str) -> Result<String, PageError>;

    /// Replaces the visible text of element `id`.
    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError>;

    /// Registers `listener` for clicks on element `id`.
    fn add_click_listener(&self, id: &str, listener: ClickListener) -> Result<(), PageError>;
}

impl<T> Page for Arc<T>
where
    T: Page + ?Sized,
{
    fn value(&self, id: &str) -> Result<String, PageError> {
        (**self).value(id)
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        (**self).set_text(id, text)
    }

    fn add_click_listener(&self, id: &str, listener: ClickListener) -> Result<(), PageError> {
        (**self).add_click_listener(id, listener)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Input,
    Button,
    Text,
}

#[derive(Debug, Clone)]
struct Element {
    kind: ElementKind,
    value: String,
    text: String,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            value: String::new(),
            text: String::new(),
        }
    }
}

/// In-process page. Clicks are dispatched onto the ambient tokio runtime,
/// one task per listener, so overlapping activations run unordered.
#[derive(Default)]
pub struct MemoryPage {
    elements: RwLock<HashMap<String, Element>>,
    listeners: RwLock<HashMap<String, Vec<ClickListener>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(self, id: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Element::new(ElementKind::Input);
        element.value = value.into();
        self.insert(id.into(), element);
        self
    }

    pub fn with_button(self, id: impl Into<String>) -> Self {
        self.insert(id.into(), Element::new(ElementKind::Button));
        self
    }

    pub fn with_element(self, id: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Element::new(ElementKind::Text);
        element.text = text.into();
        self.insert(id.into(), element);
        self
    }

    fn insert(&self, id: String, element: Element) {
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, element);
    }

    /// Simulates the user typing into input `id`.
    pub fn set_value(&self, id: &str, value: impl Into<String>) -> Result<(), PageError> {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        if element.kind != ElementKind::Input {
            return Err(PageError::NotAnInput(id.to_string()));
        }
        element.value = value.into();
        Ok(())
    }

    /// Visible text of element `id`.
    pub fn text(&self, id: &str) -> Result<String, PageError> {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .map(|element| element.text.clone())
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    pub fn on_click<F, Fut>(&self, id: &str, listener: F) -> Result<(), PageError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.add_click_listener(
            id,
            Arc::new(move || Box::pin(listener()) as Pin<Box<dyn Future<Output = ()> + Send>>),
        )
    }

    fn contains(&self, id: &str) -> bool {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn listener_count(&self, id: &str) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .map_or(0, Vec::len)
    }

    /// Dispatches one click on element `id` onto the current tokio runtime.
    /// The returned handles resolve when each listener ends.
    pub fn click(&self, id: &str) -> Result<Vec<JoinHandle<()>>, PageError> {
        if !self.contains(id) {
            return Err(PageError::MissingElement(id.to_string()));
        }
        let runtime = Handle::try_current().map_err(|_| PageError::NoRuntime(id.to_string()))?;

        let listeners: Vec<ClickListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .unwrap_or_default();
        debug!("click on {} dispatched to {} listener(s)", id, listeners.len());

        Ok(listeners
            .into_iter()
            .map(|listener| runtime.spawn(listener()))
            .collect())
    }
}

impl Page for MemoryPage {
    fn value(&self, id: &str) -> Result<String, PageError> {
        let elements = self.elements.read().unwrap_or_else(PoisonError::into_inner);
        let element = elements
            .get(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        match element.kind {
            ElementKind::Input => Ok(element.value.clone()),
            _ => Err(PageError::NotAnInput(id.to_string())),
        }
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        element.text = text.to_string();
        Ok(())
    }

    fn add_click_listener(&self, id: &str, listener: ClickListener) -> Result<(), PageError> {
        if !self.contains(id) {
            return Err(PageError::MissingElement(id.to_string()));
        }
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id.to_string())
            .or_default()
            .push(listener);
        Ok(())
    }
}
