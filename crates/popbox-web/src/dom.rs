use std::cell::RefCell;
use std::rc::Weak;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use gloo::utils::{body, document, window};
use popbox::direction::DIRECTION_CLASSES;
use popbox::{
    Controller, DomAdapter, EventKind, FloatingContent, Input, Placement, PopboxError, PopboxEvent, PopboxResult,
    Propagation, Rect, Size, Target, TimerId, Viewport,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventInit, HtmlElement};

const OPEN_CLASS: &str = "open";

fn dom_error(err: JsValue) -> PopboxError {
    PopboxError::Dom(format!("{err:?}"))
}

/// Routes DOM callbacks back into the controller that owns the adapter.
#[derive(Clone)]
pub struct Dispatcher(Weak<RefCell<Controller<WebDom>>>);

impl Dispatcher {
    pub fn new(controller: Weak<RefCell<Controller<WebDom>>>) -> Self {
        Self(controller)
    }

    pub fn dispatch(&self, input: Input) -> Propagation {
        let Some(controller) = self.0.upgrade() else {
            return Propagation::Continue;
        };

        // Happens when a `show`/`hide` listener on the anchor calls back
        // into the same widget.
        let Ok(mut controller) = controller.try_borrow_mut() else {
            log::warn!("popbox busy, dropping {input:?}");
            return Propagation::Continue;
        };

        controller.handle(input)
    }
}

/// Event listeners bound for one [`EventKind`], removed on drop.
pub struct WebListener(Vec<EventListener>);

pub struct WebDom {
    anchor: HtmlElement,
    floating: Option<HtmlElement>,
    dispatcher: Dispatcher,
}

impl WebDom {
    pub fn new(anchor: HtmlElement, dispatcher: Dispatcher) -> Self {
        Self {
            anchor,
            floating: None,
            dispatcher,
        }
    }

    pub fn anchor(&self) -> &HtmlElement {
        &self.anchor
    }

    fn build_floating(container_class: &str, content: &FloatingContent) -> PopboxResult<HtmlElement> {
        let container = create_div(container_class)?;

        match content {
            FloatingContent::Template(selector) => {
                let template = document()
                    .query_selector(selector)
                    .map_err(dom_error)?
                    .ok_or_else(|| PopboxError::TemplateNotFound(selector.clone()))?;
                container.set_inner_html(&template.inner_html());
            }
            FloatingContent::Text { title, text } => {
                if let Some(title) = title {
                    let el = create_div("title")?;
                    el.set_inner_html(title);
                    container.append_child(&el).map_err(dom_error)?;
                }

                if !text.is_empty() {
                    let el = create_div("text")?;
                    el.set_inner_html(text);
                    container.append_child(&el).map_err(dom_error)?;
                }
            }
        }

        Ok(container)
    }

    fn style(el: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = el.style().set_property(property, value) {
            log::error!("Unable to set {property}: {err:?}");
        }
    }
}

fn create_div(class: &str) -> PopboxResult<HtmlElement> {
    let el = document()
        .create_element("div")
        .map_err(dom_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PopboxError::Dom("created element is not an HtmlElement".into()))?;
    el.set_class_name(class);
    Ok(el)
}

fn event_names(kind: EventKind) -> &'static [&'static str] {
    match kind {
        EventKind::MouseEnter => &["mouseenter"],
        EventKind::MouseLeave => &["mouseleave"],
        EventKind::Click => &["click"],
        EventKind::TransitionEnd => &["transitionend", "webkitTransitionEnd"],
    }
}

impl DomAdapter for WebDom {
    type Listener = WebListener;
    type Timer = Timeout;

    fn anchor_rect(&self) -> Rect {
        let rect = self.anchor.get_bounding_client_rect();
        let window = window();
        let scroll_x = window.scroll_x().unwrap_or_default();
        let scroll_y = window.scroll_y().unwrap_or_default();

        Rect::new(
            rect.left() + scroll_x,
            rect.top() + scroll_y,
            self.anchor.offset_width() as f64,
            self.anchor.offset_height() as f64,
        )
    }

    fn viewport(&self) -> Viewport {
        let window = window();
        let (width, height) = match document().document_element() {
            Some(root) => (root.client_width() as f64, root.client_height() as f64),
            None => (0.0, 0.0),
        };

        Viewport::new(width, height).with_scroll(
            window.scroll_x().unwrap_or_default(),
            window.scroll_y().unwrap_or_default(),
        )
    }

    fn insert_floating(&mut self, container_class: &str, content: &FloatingContent) -> PopboxResult<()> {
        let floating = Self::build_floating(container_class, content)?;
        body().append_child(&floating).map_err(dom_error)?;
        Self::style(&floating, "position", "absolute");
        self.floating = Some(floating);
        Ok(())
    }

    fn remove_floating(&mut self) {
        if let Some(floating) = self.floating.take() {
            floating.remove();
        }
    }

    fn floating_size(&self) -> Size {
        self.floating
            .as_ref()
            .map(|el| Size::new(el.offset_width() as f64, el.offset_height() as f64))
            .unwrap_or_default()
    }

    fn apply_placement(&mut self, placement: &Placement) {
        let Some(floating) = &self.floating else {
            return;
        };

        let class_list = floating.class_list();
        for class in DIRECTION_CLASSES {
            if let Err(err) = class_list.remove_1(class) {
                log::error!("Unable to remove class {class}: {err:?}");
            }
        }
        for class in placement.classes() {
            if let Err(err) = class_list.add_1(class) {
                log::error!("Unable to add class {class}: {err:?}");
            }
        }

        Self::style(floating, "left", &placement.left.to_string());
        Self::style(floating, "right", &placement.right.to_string());
        Self::style(floating, "top", &format!("{}px", placement.top));
    }

    fn set_open(&mut self, open: bool) {
        if let Some(floating) = &self.floating {
            if let Err(err) = floating.class_list().toggle_with_force(OPEN_CLASS, open) {
                log::error!("Unable to toggle {OPEN_CLASS}: {err:?}");
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        let Some(floating) = &self.floating else {
            return;
        };

        match floating.query_selector(".text") {
            Ok(Some(el)) => el.set_text_content(Some(text)),
            Ok(None) => log::debug!("popbox has no text node to update"),
            Err(err) => log::error!("Unable to update text: {err:?}"),
        }
    }

    fn listen(&mut self, target: Target, kind: EventKind) -> PopboxResult<WebListener> {
        let element = match target {
            Target::Anchor => &self.anchor,
            Target::Floating => self
                .floating
                .as_ref()
                .ok_or_else(|| PopboxError::Dom("no floating element".into()))?,
        };

        let input = Input::from_event(target, kind)
            .ok_or_else(|| PopboxError::Dom(format!("{target} does not emit {kind}")))?;

        let listeners = event_names(kind)
            .iter()
            .map(|name| {
                let dispatcher = self.dispatcher.clone();
                EventListener::new_with_options(
                    element,
                    *name,
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        if dispatcher.dispatch(input) == Propagation::Stop {
                            event.prevent_default();
                            event.stop_propagation();
                        }
                    },
                )
            })
            .collect();

        Ok(WebListener(listeners))
    }

    fn start_timer(&mut self, id: TimerId, delay_ms: u32) -> Timeout {
        let dispatcher = self.dispatcher.clone();
        Timeout::new(delay_ms, move || {
            dispatcher.dispatch(Input::HideTimerElapsed(id));
        })
    }

    fn emit(&mut self, event: PopboxEvent) {
        let mut init = EventInit::new();
        init.bubbles(true);

        let result = Event::new_with_event_init_dict(event.as_ref(), &init)
            .and_then(|dom_event| self.anchor.dispatch_event(&dom_event));
        if let Err(err) = result {
            log::error!("Unable to emit {event}: {err:?}");
        }
    }
}
