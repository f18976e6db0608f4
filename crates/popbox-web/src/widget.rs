use std::cell::RefCell;
use std::rc::Rc;

use popbox::{AnchorAttributes, Controller, PopboxConfig, Trigger};
use web_sys::HtmlElement;

use crate::dom::{Dispatcher, WebDom};

/// Handle to a tooltip attached to one anchor. Clones share the same widget;
/// dropping the last clone tears the widget down.
#[derive(Clone)]
pub struct Popbox {
    inner: Rc<RefCell<Controller<WebDom>>>,
}

impl Popbox {
    pub fn new(anchor: HtmlElement, config: &PopboxConfig) -> Self {
        let attrs = AnchorAttributes::from_lookup(|name| anchor.get_attribute(name));
        let config = config.clone();

        let inner = Rc::new_cyclic(|weak| {
            let dom = WebDom::new(anchor, Dispatcher::new(weak.clone()));
            RefCell::new(Controller::new(dom, config, attrs))
        });

        Self { inner }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Controller<WebDom>) -> R) -> Option<R> {
        match self.inner.try_borrow_mut() {
            Ok(mut controller) => Some(f(&mut controller)),
            Err(_) => {
                log::warn!("popbox is handling an event, call ignored");
                None
            }
        }
    }

    pub fn show(&self) {
        self.with(|ctl| ctl.show(Trigger::Explicit));
    }

    pub fn hide(&self) {
        self.with(|ctl| ctl.hide(Trigger::Explicit));
    }

    pub fn toggle(&self) {
        self.with(|ctl| ctl.toggle(Trigger::Explicit));
    }

    pub fn set_text(&self, text: &str) {
        self.with(|ctl| ctl.set_text(text));
    }

    pub fn reposition(&self) {
        self.with(|ctl| ctl.reposition());
    }

    pub fn destroy(&self) {
        self.with(|ctl| ctl.destroy());
    }

    pub fn is_open(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|controller| controller.is_open())
            .unwrap_or_default()
    }

    pub fn anchor(&self) -> Option<HtmlElement> {
        self.inner
            .try_borrow()
            .ok()
            .map(|controller| controller.dom().anchor().clone())
    }
}
