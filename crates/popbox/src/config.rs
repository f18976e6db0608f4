use serde::{Deserialize, Serialize};

use crate::direction::DirectionPreference;
use crate::dom::FloatingContent;
use crate::placement::Offsets;
use crate::PopboxResult;

pub const ATTR_TEXT: &str = "data-popbox-text";
pub const ATTR_TITLE: &str = "data-popbox-title";
pub const ATTR_TEMPLATE: &str = "data-popbox-el";
pub const ATTR_DIRECTION: &str = "data-popbox-direction";
pub const ATTR_DISABLE_TOUCH: &str = "data-disable-touch";

/// Options shared by every widget created from the same bootstrap call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopboxConfig {
    /// Root class of the floating element.
    #[serde(default = "PopboxConfig::default_container_class")]
    pub container_class: String,
    #[serde(default)]
    pub direction: DirectionPreference,
    /// Pixels between anchor and floating element.
    #[serde(default = "PopboxConfig::default_direction_offset")]
    pub direction_offset: f64,
    /// Extra pixels reserved for the open animation.
    #[serde(default = "PopboxConfig::default_anim_offset")]
    pub anim_offset: f64,
    /// Milliseconds to wait before the close transition starts.
    #[serde(default = "PopboxConfig::default_hide_timeout")]
    pub hide_timeout: u32,
    #[serde(default = "PopboxConfig::default_true")]
    pub enable_hover: bool,
    #[serde(default = "PopboxConfig::default_true")]
    pub click_to_show: bool,
    /// Set by the host when the environment has touch input.
    #[serde(default)]
    pub is_touch: bool,
}

impl Default for PopboxConfig {
    fn default() -> Self {
        Self {
            container_class: Self::default_container_class(),
            direction: DirectionPreference::Smart,
            direction_offset: Self::default_direction_offset(),
            anim_offset: Self::default_anim_offset(),
            hide_timeout: Self::default_hide_timeout(),
            enable_hover: true,
            click_to_show: true,
            is_touch: false,
        }
    }
}

impl PopboxConfig {
    fn default_container_class() -> String {
        "popbox".to_string()
    }

    fn default_direction_offset() -> f64 {
        10.0
    }

    fn default_anim_offset() -> f64 {
        5.0
    }

    fn default_hide_timeout() -> u32 {
        100
    }

    fn default_true() -> bool {
        true
    }

    pub fn from_json(contents: &str) -> PopboxResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn offsets(&self) -> Offsets {
        Offsets {
            direction: self.direction_offset,
            anim: self.anim_offset,
        }
    }
}

/// Per-anchor settings read from `data-*` attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorAttributes {
    pub text: String,
    pub title: Option<String>,
    /// Selector of an element whose markup becomes the floating content.
    pub template: Option<String>,
    pub direction: Option<DirectionPreference>,
    pub disable_on_touch: bool,
}

impl AnchorAttributes {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Builds the attributes from an attribute getter such as
    /// `Element::get_attribute`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let direction = non_empty(ATTR_DIRECTION).and_then(|value| match value.parse::<DirectionPreference>() {
            Ok(direction) => Some(direction),
            Err(err) => {
                log::warn!("Ignoring {ATTR_DIRECTION}: {err}");
                None
            }
        });

        let disable_on_touch = lookup(ATTR_DISABLE_TOUCH)
            .map(|value| !matches!(value.trim(), "" | "false" | "0"))
            .unwrap_or(false);

        Self {
            text: lookup(ATTR_TEXT).unwrap_or_default(),
            title: non_empty(ATTR_TITLE),
            template: non_empty(ATTR_TEMPLATE),
            direction,
            disable_on_touch,
        }
    }

    pub fn content(&self) -> FloatingContent {
        match &self.template {
            Some(selector) => FloatingContent::Template(selector.clone()),
            None => FloatingContent::Text {
                title: self.title.clone(),
                text: self.text.clone(),
            },
        }
    }
}
