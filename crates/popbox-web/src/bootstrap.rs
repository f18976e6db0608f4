use std::cell::RefCell;

use gloo::utils::{document, window};
use popbox::{unbound_anchors, PopboxConfig, PopboxError, PopboxResult};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlElement, Node};

use crate::widget::Popbox;

/// Anchors carrying this attribute are picked up by [`auto_anchors`].
pub const AUTO_INIT_SELECTOR: &str = "[data-popbox]";

thread_local! {
    // Widgets created from JS have no Rust owner.
    static REGISTRY: RefCell<Vec<Popbox>> = RefCell::new(Vec::new());
}

/// True when the browser exposes touch events.
pub fn detect_touch() -> bool {
    js_sys::Reflect::has(&window(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

/// Every element in the document marked with [`AUTO_INIT_SELECTOR`].
pub fn auto_anchors() -> Vec<HtmlElement> {
    let nodes = match document().query_selector_all(AUTO_INIT_SELECTOR) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::error!("Unable to query anchors: {err:?}");
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attaches a widget to every anchor. The caller keeps the returned handles
/// alive for as long as the tooltips should work.
pub fn bootstrap(anchors: impl IntoIterator<Item = HtmlElement>, config: &PopboxConfig) -> Vec<Popbox> {
    let widgets: Vec<Popbox> = anchors
        .into_iter()
        .map(|anchor| Popbox::new(anchor, config))
        .collect();

    log::info!("popbox attached to {} anchors", widgets.len());
    widgets
}

/// Parses a JS options object. Missing keys take their defaults and
/// `isTouch` is detected when not given.
pub fn config_from_js(value: JsValue) -> PopboxResult<PopboxConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(PopboxConfig {
            is_touch: detect_touch(),
            ..Default::default()
        });
    }

    let has_touch = js_sys::Reflect::has(value.unchecked_ref(), &JsValue::from_str("isTouch")).unwrap_or(false);
    let mut config: PopboxConfig =
        serde_wasm_bindgen::from_value(value).map_err(|err| PopboxError::InvalidConfig(err.to_string()))?;
    if !has_touch {
        config.is_touch = detect_touch();
    }

    Ok(config)
}

/// JS entry point: attaches widgets to every `[data-popbox]` element not
/// bound by an earlier call and keeps them alive until the page unloads.
/// Returns the number of newly attached anchors.
#[wasm_bindgen(js_name = "popboxBootstrap")]
pub fn js_bootstrap(options: JsValue) -> Result<usize, JsValue> {
    let config = config_from_js(options).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let bound: Vec<HtmlElement> =
        REGISTRY.with(|registry| registry.borrow().iter().filter_map(Popbox::anchor).collect());
    let fresh = unbound_anchors(auto_anchors(), &bound, |candidate, existing| {
        let node: &Node = candidate.as_ref();
        existing.is_same_node(Some(node))
    });

    let widgets = bootstrap(fresh, &config);
    let count = widgets.len();

    REGISTRY.with(|registry| registry.borrow_mut().extend(widgets));
    Ok(count)
}
