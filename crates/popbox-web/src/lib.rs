//! Browser front end for [`popbox`]: a `web-sys` DOM adapter, the
//! [`Popbox`] handle and the bootstrap helpers.
mod bootstrap;
pub mod dom;
mod widget;

pub use bootstrap::{auto_anchors, bootstrap, config_from_js, detect_touch, AUTO_INIT_SELECTOR};
pub use popbox::{PopboxConfig, PopboxError};
pub use widget::Popbox;

/// Routes `log` output to the browser console.
pub fn init_logger() {
    wasm_logger::init(wasm_logger::Config::default());
}
