use crate::config::{AnchorAttributes, PopboxConfig};
use crate::direction::DirectionPreference;
use crate::dom::{DomAdapter, EventKind, Input, PopboxEvent, Propagation, Target, TimerId};
use crate::placement::compute_position;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisibilityState {
    #[default]
    Closed,
    Opening,
    Open,
    /// Hide timer pending, floating element still visible.
    Closing,
}

/// Who asked for a show/hide. Explicit calls come from the API and take
/// precedence over pointer events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Explicit,
    Event,
}

/// Which anchor events open and close the widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InteractionMode {
    Hover,
    Click,
    /// Nothing is bound, only the API opens the widget.
    Manual,
}

impl InteractionMode {
    pub fn resolve(config: &PopboxConfig, attrs: &AnchorAttributes) -> Self {
        if config.enable_hover && !config.is_touch {
            Self::Hover
        } else if config.is_touch && !attrs.disable_on_touch {
            Self::Click
        } else {
            Self::Manual
        }
    }
}

struct Floating<L> {
    _listeners: Vec<L>,
    /// Set between the end of the hide delay and the transition end.
    teardown: Option<L>,
}

struct PendingTimer<T> {
    id: TimerId,
    _handle: T,
}

/// Show/hide state machine for a single anchor.
pub struct Controller<D: DomAdapter> {
    dom: D,
    config: PopboxConfig,
    attrs: AnchorAttributes,
    direction: DirectionPreference,
    mode: InteractionMode,
    state: VisibilityState,
    forced_open: Option<bool>,
    hovering_floating: bool,
    floating: Option<Floating<D::Listener>>,
    hide_timer: Option<PendingTimer<D::Timer>>,
    anchor_listeners: Vec<D::Listener>,
    next_timer: u64,
}

impl<D: DomAdapter> Controller<D> {
    pub fn new(dom: D, config: PopboxConfig, attrs: AnchorAttributes) -> Self {
        let direction = attrs.direction.unwrap_or(config.direction);
        let mode = InteractionMode::resolve(&config, &attrs);

        let mut controller = Self {
            dom,
            config,
            attrs,
            direction,
            mode,
            state: VisibilityState::Closed,
            forced_open: None,
            hovering_floating: false,
            floating: None,
            hide_timer: None,
            anchor_listeners: Vec::new(),
            next_timer: 0,
        };

        let kinds: &[EventKind] = match mode {
            InteractionMode::Hover => &[EventKind::MouseEnter, EventKind::MouseLeave],
            InteractionMode::Click => &[EventKind::Click],
            InteractionMode::Manual => &[],
        };
        controller.anchor_listeners = controller.bind(Target::Anchor, kinds);
        log::debug!("popbox attached ({mode:?}, direction {direction})");

        controller
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn forced_open(&self) -> Option<bool> {
        self.forced_open
    }

    pub fn is_hovering_floating(&self) -> bool {
        self.hovering_floating
    }

    /// True from the start of `show` until the hide delay has elapsed.
    pub fn is_open(&self) -> bool {
        matches!(
            self.state,
            VisibilityState::Opening | VisibilityState::Open | VisibilityState::Closing
        )
    }

    pub fn text(&self) -> &str {
        &self.attrs.text
    }

    pub fn handle(&mut self, input: Input) -> Propagation {
        match input {
            Input::AnchorEnter => self.show(Trigger::Event),
            Input::AnchorLeave => self.hide(Trigger::Event),
            Input::AnchorClick => return self.toggle(Trigger::Event),
            Input::FloatingEnter => self.enter_floating(),
            Input::FloatingLeave => self.leave_floating(),
            Input::FloatingClick => self.dom.emit(PopboxEvent::Click),
            Input::HideTimerElapsed(id) => self.hide_delay_elapsed(id),
            Input::TransitionEnd => self.transition_end(),
        }

        Propagation::Continue
    }

    pub fn show(&mut self, trigger: Trigger) {
        if self.hovering_floating {
            return;
        }

        if self.attrs.text.is_empty() {
            log::debug!("popbox has no text, not showing");
            return;
        }

        let forced_open = match trigger {
            Trigger::Event if self.forced_open == Some(true) => return,
            // A pointer event takes back control after an explicit hide.
            Trigger::Event => None,
            Trigger::Explicit => Some(true),
        };

        if !self.is_open() && !self.open_floating() {
            return;
        }

        self.forced_open = forced_open;
        self.hide_timer = None;
        if let Some(floating) = self.floating.as_mut() {
            floating.teardown = None;
        }

        self.state = VisibilityState::Open;
        self.dom.emit(PopboxEvent::Show);
    }

    pub fn hide(&mut self, trigger: Trigger) {
        if self.hovering_floating || !self.is_open() {
            return;
        }

        match trigger {
            Trigger::Event if self.forced_open.is_some() => return,
            Trigger::Event => {}
            Trigger::Explicit => self.forced_open = Some(false),
        }

        if self.state == VisibilityState::Closing {
            return;
        }

        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        let handle = self.dom.start_timer(id, self.config.hide_timeout);
        self.hide_timer = Some(PendingTimer { id, _handle: handle });
        self.state = VisibilityState::Closing;
    }

    pub fn toggle(&mut self, trigger: Trigger) -> Propagation {
        if !self.config.click_to_show {
            return Propagation::Continue;
        }

        if self.is_open() {
            self.hide(trigger);
        } else {
            self.show(trigger);
        }

        Propagation::Stop
    }

    pub fn set_text(&mut self, text: &str) {
        self.attrs.text = text.to_string();
        if self.is_open() {
            self.dom.set_text(text);
        }
    }

    /// Recomputes the placement of an open floating element, e.g. after the
    /// window was resized.
    pub fn reposition(&mut self) {
        if self.is_open() {
            self.position();
        }
    }

    /// Removes the floating element and every listener and timer. A later
    /// `show` starts from a fresh floating element.
    pub fn destroy(&mut self) {
        self.hide_timer = None;
        self.reset();
        self.anchor_listeners.clear();
        self.state = VisibilityState::Closed;
        self.forced_open = None;
        self.hovering_floating = false;
    }

    fn bind(&mut self, target: Target, kinds: &[EventKind]) -> Vec<D::Listener> {
        kinds
            .iter()
            .filter_map(|kind| match self.dom.listen(target, *kind) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    log::error!("Unable to bind {target} {kind}: {err}");
                    None
                }
            })
            .collect()
    }

    fn open_floating(&mut self) -> bool {
        self.state = VisibilityState::Opening;

        if self.floating.is_none() {
            let content = self.attrs.content();
            if let Err(err) = self.dom.insert_floating(&self.config.container_class, &content) {
                log::warn!("Unable to create popbox: {err}");
                self.state = VisibilityState::Closed;
                return false;
            }

            let listeners = self.bind(
                Target::Floating,
                &[EventKind::MouseEnter, EventKind::MouseLeave, EventKind::Click],
            );
            self.floating = Some(Floating {
                _listeners: listeners,
                teardown: None,
            });
        }

        self.position();
        self.dom.set_open(true);
        true
    }

    fn position(&mut self) {
        let anchor = self.dom.anchor_rect();
        let size = self.dom.floating_size();
        let viewport = self.dom.viewport();

        let placement = compute_position(
            &anchor,
            &size,
            self.direction,
            &viewport,
            &self.config.offsets(),
        );
        log::debug!("popbox placed {:?}", placement.classes());
        self.dom.apply_placement(&placement);
    }

    fn hide_delay_elapsed(&mut self, id: TimerId) {
        let pending = self.hide_timer.as_ref().map(|timer| timer.id);
        if pending != Some(id) || self.state != VisibilityState::Closing {
            log::debug!("ignoring stale hide timer {id:?}");
            return;
        }

        self.hide_timer = None;
        self.dom.set_open(false);
        self.state = VisibilityState::Closed;

        match self.dom.listen(Target::Floating, EventKind::TransitionEnd) {
            Ok(listener) => {
                if let Some(floating) = self.floating.as_mut() {
                    floating.teardown = Some(listener);
                }
            }
            Err(err) => {
                log::warn!("No close transition to wait for: {err}");
                self.finish_hide();
            }
        }
    }

    fn transition_end(&mut self) {
        let pending = self
            .floating
            .as_ref()
            .is_some_and(|floating| floating.teardown.is_some());

        if pending && self.state == VisibilityState::Closed {
            self.finish_hide();
        }
    }

    fn finish_hide(&mut self) {
        self.reset();
        self.dom.emit(PopboxEvent::Hide);
        self.hovering_floating = false;
    }

    fn reset(&mut self) {
        if let Some(floating) = self.floating.take() {
            drop(floating);
            self.dom.remove_floating();
        }
    }

    fn enter_floating(&mut self) {
        self.hide_timer = None;
        if self.state == VisibilityState::Closing {
            self.state = VisibilityState::Open;
        }
        self.hovering_floating = true;
    }

    fn leave_floating(&mut self) {
        self.hovering_floating = false;
        // Same path as the pointer leaving the anchor.
        if self.mode == InteractionMode::Hover {
            self.handle(Input::AnchorLeave);
        }
    }
}

impl<D: DomAdapter> Drop for Controller<D> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod test {
    use super::{Controller, InteractionMode, Trigger, VisibilityState};
    use crate::config::{AnchorAttributes, PopboxConfig};
    use crate::direction::Direction;
    use crate::dom::{EventKind, FloatingContent, Input, PopboxEvent, Propagation, Target};
    use crate::geometry::Rect;
    use crate::test::FakeDom;

    fn setup(config: PopboxConfig, text: &str) -> Controller<FakeDom> {
        Controller::new(FakeDom::default(), config, AnchorAttributes::new(text))
    }

    fn hover(text: &str) -> Controller<FakeDom> {
        setup(PopboxConfig::default(), text)
    }

    fn touch() -> Controller<FakeDom> {
        let config = PopboxConfig {
            is_touch: true,
            ..Default::default()
        };
        setup(config, "Tap tip")
    }

    fn fire_timer(ctl: &mut Controller<FakeDom>) {
        let id = ctl.dom().pending_timer().expect("no pending timer");
        ctl.handle(Input::HideTimerElapsed(id));
    }

    #[test]
    fn test_mode_resolution() {
        let attrs = AnchorAttributes::default();
        let touch_disabled = AnchorAttributes {
            disable_on_touch: true,
            ..Default::default()
        };
        let touch = PopboxConfig {
            is_touch: true,
            ..Default::default()
        };
        let no_hover = PopboxConfig {
            enable_hover: false,
            ..Default::default()
        };

        assert_eq!(InteractionMode::resolve(&PopboxConfig::default(), &attrs), InteractionMode::Hover);
        assert_eq!(InteractionMode::resolve(&touch, &attrs), InteractionMode::Click);
        assert_eq!(InteractionMode::resolve(&touch, &touch_disabled), InteractionMode::Manual);
        assert_eq!(InteractionMode::resolve(&no_hover, &attrs), InteractionMode::Manual);
    }

    #[test]
    fn test_binds_anchor_for_mode() {
        let ctl = hover("Tip");
        assert!(ctl.dom().is_listening(Target::Anchor, EventKind::MouseEnter));
        assert!(ctl.dom().is_listening(Target::Anchor, EventKind::MouseLeave));
        assert!(!ctl.dom().is_listening(Target::Anchor, EventKind::Click));

        let ctl = touch();
        assert!(ctl.dom().is_listening(Target::Anchor, EventKind::Click));
        assert!(!ctl.dom().is_listening(Target::Anchor, EventKind::MouseEnter));
    }

    #[test]
    fn test_show_without_text() {
        let mut ctl = hover("");
        ctl.show(Trigger::Explicit);
        ctl.handle(Input::AnchorEnter);

        assert_eq!(ctl.state(), VisibilityState::Closed);
        assert_eq!(ctl.dom().created(), 0);
        assert!(ctl.dom().floating().is_none());
        assert!(ctl.dom().events().is_empty());
    }

    #[test]
    fn test_show() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);

        assert_eq!(ctl.state(), VisibilityState::Open);
        assert!(ctl.is_open());
        assert_eq!(ctl.forced_open(), None);

        let floating = ctl.dom().floating().expect("floating element");
        assert!(floating.open);
        assert_eq!(floating.container_class, "popbox");
        assert_eq!(floating.classes, vec!["down"]);
        assert!(ctl.dom().is_listening(Target::Floating, EventKind::MouseEnter));
        assert!(ctl.dom().is_listening(Target::Floating, EventKind::MouseLeave));
        assert!(ctl.dom().is_listening(Target::Floating, EventKind::Click));
        assert_eq!(ctl.dom().events(), vec![PopboxEvent::Show]);
    }

    #[test]
    fn test_show_twice_creates_once() {
        let mut ctl = hover("Tip");
        ctl.show(Trigger::Explicit);
        ctl.show(Trigger::Explicit);

        assert_eq!(ctl.dom().created(), 1);
        assert_eq!(ctl.dom().events(), vec![PopboxEvent::Show, PopboxEvent::Show]);
    }

    #[test]
    fn test_show_uses_smart_placement() {
        let mut dom = FakeDom::default();
        dom.anchor = Rect::new(200.0, 700.0, 20.0, 20.0);
        let mut ctl = Controller::new(dom, PopboxConfig::default(), AnchorAttributes::new("Tip"));
        ctl.show(Trigger::Explicit);

        let floating = ctl.dom().floating().unwrap();
        assert_eq!(floating.classes, vec!["up"]);
        assert_eq!(floating.placement.unwrap().direction, Direction::Up);
    }

    #[test]
    fn test_attribute_direction_overrides_config() {
        let attrs = AnchorAttributes {
            direction: Some(Direction::Right.into()),
            ..AnchorAttributes::new("Tip")
        };
        let mut ctl = Controller::new(FakeDom::default(), PopboxConfig::default(), attrs);
        ctl.show(Trigger::Explicit);

        assert_eq!(ctl.dom().floating().unwrap().classes, vec!["right"]);
    }

    #[test]
    fn test_hide_waits_for_delay_and_transition() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);

        // Delay still running: nothing visual has changed.
        assert_eq!(ctl.state(), VisibilityState::Closing);
        assert_eq!(ctl.dom().timers_started(), vec![100]);
        assert!(ctl.dom().floating().unwrap().open);

        fire_timer(&mut ctl);
        assert_eq!(ctl.state(), VisibilityState::Closed);
        assert!(!ctl.is_open());
        assert!(!ctl.dom().floating().unwrap().open);
        assert!(ctl.dom().is_listening(Target::Floating, EventKind::TransitionEnd));
        assert_eq!(ctl.dom().events(), vec![PopboxEvent::Show]);

        ctl.handle(Input::TransitionEnd);
        assert!(ctl.dom().floating().is_none());
        assert_eq!(ctl.dom().removed(), 1);
        assert!(!ctl.dom().is_listening(Target::Floating, EventKind::MouseEnter));
        assert_eq!(ctl.dom().events(), vec![PopboxEvent::Show, PopboxEvent::Hide]);
    }

    #[test]
    fn test_hide_without_transition() {
        let dom = FakeDom {
            no_transitions: true,
            ..Default::default()
        };
        let mut ctl = Controller::new(dom, PopboxConfig::default(), AnchorAttributes::new("Tip"));
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);
        assert!(ctl.dom().floating().is_some());

        fire_timer(&mut ctl);
        assert_eq!(ctl.state(), VisibilityState::Closed);
        assert!(ctl.dom().floating().is_none());
        assert_eq!(ctl.dom().removed(), 1);
        assert_eq!(ctl.dom().events(), vec![PopboxEvent::Show, PopboxEvent::Hide]);
        assert!(!ctl.dom().is_listening(Target::Floating, EventKind::MouseEnter));
    }

    #[test]
    fn test_reposition() {
        let mut ctl = hover("Tip");
        ctl.reposition();
        assert_eq!(ctl.dom().created(), 0);

        ctl.show(Trigger::Explicit);
        let before = ctl.dom().floating().unwrap().placement.unwrap();
        assert_eq!(before.top, 85.0);

        ctl.dom().move_anchor(Rect::new(50.0, 300.0, 20.0, 20.0));
        ctl.reposition();
        let after = ctl.dom().floating().unwrap().placement.unwrap();
        assert_eq!(after.top, 335.0);
        assert_eq!(after.left, before.left);
        assert_eq!(ctl.dom().created(), 1);
    }

    #[test]
    fn test_show_cancels_pending_hide() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);
        let stale = ctl.dom().pending_timer().unwrap();

        ctl.handle(Input::AnchorEnter);
        assert_eq!(ctl.state(), VisibilityState::Open);
        assert_eq!(ctl.dom().pending_timer(), None);

        // The host delivers the cancelled timer anyway.
        ctl.handle(Input::HideTimerElapsed(stale));
        ctl.handle(Input::TransitionEnd);

        assert_eq!(ctl.state(), VisibilityState::Open);
        assert!(ctl.dom().floating().unwrap().open);
        assert_eq!(ctl.dom().removed(), 0);
        assert!(!ctl.dom().events().contains(&PopboxEvent::Hide));
    }

    #[test]
    fn test_show_during_close_transition_reuses_element() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);
        fire_timer(&mut ctl);

        ctl.handle(Input::AnchorEnter);
        assert_eq!(ctl.state(), VisibilityState::Open);
        assert_eq!(ctl.dom().created(), 1);
        assert!(ctl.dom().floating().unwrap().open);
        assert!(!ctl.dom().is_listening(Target::Floating, EventKind::TransitionEnd));

        ctl.handle(Input::TransitionEnd);
        assert!(ctl.dom().floating().is_some());
        assert!(!ctl.dom().events().contains(&PopboxEvent::Hide));
    }

    #[test]
    fn test_repeated_hide_keeps_one_timer() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);
        ctl.handle(Input::AnchorLeave);
        ctl.hide(Trigger::Explicit);

        assert_eq!(ctl.dom().timers_started().len(), 1);
        assert_eq!(ctl.dom().active_timers(), 1);
    }

    #[test]
    fn test_hide_when_closed() {
        let mut ctl = hover("Tip");
        ctl.hide(Trigger::Explicit);
        ctl.handle(Input::AnchorLeave);

        assert!(ctl.dom().timers_started().is_empty());
        assert_eq!(ctl.forced_open(), None);
    }

    #[test]
    fn test_explicit_show_wins_over_hover() {
        let mut ctl = hover("Tip");
        ctl.show(Trigger::Explicit);
        assert_eq!(ctl.forced_open(), Some(true));

        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);
        assert_eq!(ctl.state(), VisibilityState::Open);
        assert!(ctl.dom().timers_started().is_empty());
        assert_eq!(ctl.forced_open(), Some(true));

        ctl.hide(Trigger::Explicit);
        assert_eq!(ctl.forced_open(), Some(false));
        assert_eq!(ctl.state(), VisibilityState::Closing);
    }

    #[test]
    fn test_explicit_hide_wins_over_hover() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.hide(Trigger::Explicit);
        ctl.handle(Input::AnchorLeave);

        assert_eq!(ctl.forced_open(), Some(false));
        assert_eq!(ctl.dom().timers_started().len(), 1);

        fire_timer(&mut ctl);
        ctl.handle(Input::TransitionEnd);
        ctl.handle(Input::AnchorLeave);
        assert_eq!(ctl.dom().timers_started().len(), 1);

        // Hovering again hands control back to pointer events.
        ctl.handle(Input::AnchorEnter);
        assert_eq!(ctl.forced_open(), None);
        ctl.handle(Input::AnchorLeave);
        assert_eq!(ctl.state(), VisibilityState::Closing);
    }

    #[test]
    fn test_hovering_floating_keeps_open() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);

        ctl.handle(Input::FloatingEnter);
        assert!(ctl.is_hovering_floating());
        assert_eq!(ctl.state(), VisibilityState::Open);
        assert_eq!(ctl.dom().pending_timer(), None);

        // Anchor leave while over the floating element is ignored.
        ctl.handle(Input::AnchorLeave);
        ctl.show(Trigger::Explicit);
        assert_eq!(ctl.dom().timers_started().len(), 1);
        assert_eq!(ctl.forced_open(), None);

        ctl.handle(Input::FloatingLeave);
        assert!(!ctl.is_hovering_floating());
        assert_eq!(ctl.state(), VisibilityState::Closing);
        assert_eq!(ctl.dom().timers_started().len(), 2);
    }

    #[test]
    fn test_floating_leave_in_click_mode() {
        let mut ctl = touch();
        ctl.handle(Input::AnchorClick);
        ctl.handle(Input::FloatingEnter);
        ctl.handle(Input::FloatingLeave);

        assert!(!ctl.is_hovering_floating());
        assert_eq!(ctl.state(), VisibilityState::Open);
    }

    #[test]
    fn test_floating_click() {
        let mut ctl = hover("Tip");
        ctl.show(Trigger::Explicit);
        ctl.handle(Input::FloatingClick);

        assert_eq!(ctl.dom().events(), vec![PopboxEvent::Show, PopboxEvent::Click]);
    }

    #[test]
    fn test_toggle() {
        let mut ctl = touch();
        assert_eq!(ctl.mode(), InteractionMode::Click);

        assert_eq!(ctl.handle(Input::AnchorClick), Propagation::Stop);
        assert_eq!(ctl.state(), VisibilityState::Open);

        assert_eq!(ctl.handle(Input::AnchorClick), Propagation::Stop);
        assert_eq!(ctl.state(), VisibilityState::Closing);
    }

    #[test]
    fn test_toggle_disabled() {
        let config = PopboxConfig {
            is_touch: true,
            click_to_show: false,
            ..Default::default()
        };
        let mut ctl = setup(config, "Tip");

        // The click keeps its default action, e.g. following a link.
        assert_eq!(ctl.toggle(Trigger::Explicit), Propagation::Continue);
        assert_eq!(ctl.handle(Input::AnchorClick), Propagation::Continue);
        assert_eq!(ctl.state(), VisibilityState::Closed);
        assert_eq!(ctl.dom().created(), 0);
    }

    #[test]
    fn test_set_text() {
        let mut ctl = hover("Tip");
        ctl.set_text("Closed text");
        assert_eq!(ctl.dom().text_updates(), 0);

        ctl.show(Trigger::Explicit);
        ctl.set_text("Open text");
        assert_eq!(ctl.text(), "Open text");
        assert_eq!(ctl.dom().floating().unwrap().text, "Open text");
    }

    #[test]
    fn test_set_text_empty_disables_show() {
        let mut ctl = hover("Tip");
        ctl.set_text("");
        ctl.show(Trigger::Explicit);
        assert_eq!(ctl.dom().created(), 0);
    }

    #[test]
    fn test_missing_template() {
        let attrs = AnchorAttributes {
            template: Some("#missing".into()),
            ..AnchorAttributes::new("Tip")
        };
        let mut ctl = Controller::new(FakeDom::default(), PopboxConfig::default(), attrs);
        ctl.show(Trigger::Explicit);

        assert_eq!(ctl.state(), VisibilityState::Closed);
        assert!(ctl.dom().floating().is_none());
        assert_eq!(ctl.forced_open(), None);
        assert!(ctl.dom().events().is_empty());
    }

    #[test]
    fn test_template_content() {
        let mut dom = FakeDom::default();
        dom.templates.push("#card".into());
        let attrs = AnchorAttributes {
            template: Some("#card".into()),
            ..AnchorAttributes::new("Tip")
        };
        let mut ctl = Controller::new(dom, PopboxConfig::default(), attrs);
        ctl.show(Trigger::Explicit);

        let floating = ctl.dom().floating().unwrap();
        assert_eq!(floating.content, FloatingContent::Template("#card".into()));
    }

    #[test]
    fn test_destroy() {
        let mut ctl = hover("Tip");
        ctl.handle(Input::AnchorEnter);
        ctl.handle(Input::AnchorLeave);

        ctl.destroy();
        assert_eq!(ctl.state(), VisibilityState::Closed);
        assert!(ctl.dom().floating().is_none());
        assert_eq!(ctl.dom().active_listeners(), 0);
        assert_eq!(ctl.dom().active_timers(), 0);

        ctl.destroy();
        assert_eq!(ctl.dom().removed(), 1);
    }

    #[test]
    fn test_show_after_destroy() {
        let mut ctl = hover("Tip");
        ctl.show(Trigger::Explicit);
        ctl.destroy();
        ctl.show(Trigger::Explicit);

        assert_eq!(ctl.dom().created(), 2);
        assert!(ctl.dom().floating().unwrap().open);
        assert!(ctl.dom().is_listening(Target::Floating, EventKind::MouseEnter));
        assert!(!ctl.dom().is_listening(Target::Anchor, EventKind::MouseEnter));
    }
}
