use std::{future::Future, pin::Pin, sync::Arc};

use log::{debug, warn};

use crate::{
    actor::Greeter,
    config::ElementIds,
    errors::HandlerError,
    page::Page,
};

/// Click handler that greets whoever is named in the input element.
///
/// Holds no state between activations: every click reads the input afresh,
/// makes one `greet` call and, on success, overwrites the output element.
/// Overlapping clicks are neither cancelled nor sequenced, so the call that
/// resolves last determines the final output.
pub struct GreetingHandler<G, P> {
    greeter: G,
    page: P,
    ids: ElementIds,
}

impl<G: Greeter, P: Page> GreetingHandler<G, P> {
    pub fn new(greeter: G, page: P) -> Self {
        Self::with_ids(greeter, page, ElementIds::default())
    }

    pub fn with_ids(greeter: G, page: P, ids: ElementIds) -> Self {
        Self { greeter, page, ids }
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Runs one activation and returns the greeting written to the page.
    /// On failure the output element keeps its prior content.
    pub async fn on_click(&self) -> Result<String, HandlerError> {
        let name = self.read_name()?;
        self.greet_into_page(name).await
    }

    fn read_name(&self) -> Result<String, HandlerError> {
        Ok(self.page.value(self.ids.input())?)
    }

    async fn greet_into_page(&self, name: String) -> Result<String, HandlerError> {
        debug!("greeting {:?}", name);
        let greeting = self.greeter.greet(&name).await?;
        self.page.set_text(self.ids.output(), &greeting)?;
        Ok(greeting)
    }
}

impl<G, P> GreetingHandler<G, P>
where
    G: Greeter + 'static,
    P: Page + 'static,
{
    /// Binds the handler to clicks on the configured button of its page.
    ///
    /// The input is read while the click is dispatched, the greet call runs
    /// afterwards as its own task. Failed activations are logged and
    /// otherwise ignored; nothing is shown on the page.
    ///
    /// The page only keeps a weak reference to the handler: clicks are
    /// served for as long as the returned `Arc` is held.
    pub fn install(self) -> Result<Arc<Self>, HandlerError> {
        let handler = Arc::new(self);
        let button = handler.ids.button().to_string();

        let listener = Arc::downgrade(&handler);
        handler.page.add_click_listener(
            &button,
            Arc::new(move || {
                let Some(handler) = listener.upgrade() else {
                    debug!("click after greeting handler was dropped");
                    return Box::pin(async {}) as Pin<Box<dyn Future<Output = ()> + Send>>;
                };
                let name = handler.read_name();
                Box::pin(async move {
                    let result = match name {
                        Ok(name) => handler.greet_into_page(name).await,
                        Err(e) => Err(e),
                    };
                    if let Err(e) = result {
                        warn!("greeting failed: {}", e);
                    }
                }) as Pin<Box<dyn Future<Output = ()> + Send>>
            }),
        )?;
        debug!("greeting handler bound to {}", button);

        Ok(handler)
    }
}
