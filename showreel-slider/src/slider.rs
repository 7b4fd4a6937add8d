//! The slider controller.
//!
//! A `Slider` owns one rotation of slide items and drives a
//! [`RenderSurface`]. It is single-threaded and never blocks: input arrives
//! through [`Slider::handle`], and timer work (autoplay ticks, transition
//! completion) happens in [`Slider::poll`], which the host calls whenever
//! [`Slider::next_deadline`] has passed.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use showreel_model::SlideItem;
use tracing::{debug, trace};

use crate::card::{ArrowLabels, Chrome, DotIndicator, SlideCard};
use crate::focus::SliderFocus;
use crate::messages::{Direction, Key, SliderInput};
use crate::options::{SliderOptions, WrapMode};
use crate::surface::{RenderSurface, SlideStyle};
use crate::swipe::SwipeTracker;
use crate::time::{SystemTimeProvider, TimeProvider};
use crate::timers::{AutoplayTimer, PendingTransition};

/// Callback invoked with the item whose slide body was activated.
pub type SlideClickHandler = Box<dyn FnMut(&SlideItem) + Send>;

/// Point-in-time view of a slider's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSnapshot {
    pub current_index: usize,
    pub len: usize,
    pub animating: bool,
    pub autoplay_active: bool,
}

pub struct Slider<S: RenderSurface> {
    surface: S,
    options: SliderOptions,
    slides: Arc<[SlideItem]>,
    current_index: usize,
    transition: Option<PendingTransition>,
    /// Generation handed to the most recently started transition.
    transition_generation: u64,
    autoplay: Option<AutoplayTimer>,
    swipe: SwipeTracker,
    focus: SliderFocus,
    on_slide_click: Option<SlideClickHandler>,
    clock: Arc<dyn TimeProvider>,
}

impl<S: RenderSurface> fmt::Debug for Slider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("options", &self.options)
            .field("len", &self.slides.len())
            .field("current_index", &self.current_index)
            .field("transition", &self.transition)
            .field("autoplay", &self.autoplay)
            .finish_non_exhaustive()
    }
}

impl<S: RenderSurface> Slider<S> {
    /// Create a slider on the system clock and mount its navigation chrome.
    /// The rotation starts empty.
    pub fn new(surface: S, options: SliderOptions) -> Self {
        Self::with_clock(surface, options, Arc::new(SystemTimeProvider))
    }

    pub fn with_clock(
        mut surface: S,
        options: SliderOptions,
        clock: Arc<dyn TimeProvider>,
    ) -> Self {
        surface.mount_chrome(Chrome {
            arrows: options.show_arrows.then(ArrowLabels::default),
            dots: options.show_dots,
        });

        Self {
            surface,
            options,
            slides: Arc::from(Vec::new()),
            current_index: 0,
            transition: None,
            transition_generation: 0,
            autoplay: None,
            swipe: SwipeTracker::new(),
            focus: SliderFocus::new(),
            on_slide_click: None,
            clock,
        }
    }

    /// Register the slide body click callback.
    pub fn on_slide_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&SlideItem) + Send + 'static,
    {
        self.on_slide_click = Some(Box::new(handler));
        self
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn slides(&self) -> &Arc<[SlideItem]> {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Generation of the running transition, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        self.transition.map(|t| t.generation)
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            current_index: self.current_index,
            len: self.slides.len(),
            animating: self.is_animating(),
            autoplay_active: self.is_autoplay_active(),
        }
    }

    /// Replace the whole rotation.
    ///
    /// Every slide element and dot is torn down and rebuilt, the first
    /// slide becomes current, and autoplay restarts when enabled. A running
    /// transition is abandoned along with the elements it was animating.
    pub fn update_slides(&mut self, items: impl Into<Arc<[SlideItem]>>) {
        self.slides = items.into();
        self.current_index = 0;
        self.transition = None;

        self.surface.clear_slides();
        for (position, item) in self.slides.iter().enumerate() {
            self.surface
                .append_slide(SlideCard::from_item(item, position));
        }

        if self.options.show_dots {
            self.surface.clear_dots();
            for position in 0..self.slides.len() {
                self.surface.append_dot(DotIndicator::new(position));
            }
        }

        if self.options.autoplay && self.autoplay_allowed() {
            self.start_autoplay();
        }

        debug!(count = self.slides.len(), "slider rotation rebuilt");
    }

    pub fn next(&mut self) {
        if self.is_animating() {
            return;
        }
        self.go_to(self.current_index as isize + 1, Direction::Next);
    }

    pub fn prev(&mut self) {
        if self.is_animating() {
            return;
        }
        self.go_to(self.current_index as isize - 1, Direction::Prev);
    }

    /// Transition to `index`.
    ///
    /// Dropped while another transition is running. Out-of-range targets
    /// wrap to the opposite end (forcing the direction) when looping is
    /// enabled and are dropped otherwise. Moving to the slide already shown
    /// is a no-op.
    pub fn go_to(&mut self, index: isize, direction: Direction) {
        if self.is_animating() {
            trace!(index, "navigation dropped during transition");
            return;
        }

        let Some((target, direction)) = self.resolve_target(index, direction)
        else {
            return;
        };
        let from = self.current_index;
        if target == from {
            return;
        }

        let duration = self.options.transition_duration();
        self.transition_generation += 1;
        let generation = self.transition_generation;
        self.transition = Some(PendingTransition::new(
            from,
            target,
            self.clock.now() + duration,
            generation,
        ));

        self.surface.style_slide(
            from,
            SlideStyle::outgoing(direction, duration, generation),
        );
        self.surface
            .style_slide(target, SlideStyle::incoming(duration, generation));
        self.surface.set_slide_hidden(from, true);
        self.surface.set_slide_hidden(target, false);
        self.surface.set_slide_active(from, false);
        self.surface.set_slide_active(target, true);

        if self.options.show_dots {
            self.surface.set_dot_selected(from, false);
            self.surface.set_dot_selected(target, true);
        }

        self.current_index = target;

        if self.options.autoplay && self.autoplay_allowed() {
            self.restart_autoplay();
        }

        debug!(
            from,
            to = target,
            ?direction,
            generation,
            "slide transition started"
        );
    }

    fn resolve_target(
        &self,
        index: isize,
        direction: Direction,
    ) -> Option<(usize, Direction)> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }

        let wrap = self.options.wrap_mode() == WrapMode::Infinite;
        if index < 0 {
            wrap.then_some((len - 1, Direction::Prev))
        } else if index as usize >= len {
            wrap.then_some((0, Direction::Next))
        } else {
            Some((index as usize, direction))
        }
    }

    /// Start (or restart) the autoplay timer. Any existing timer is
    /// replaced, so at most one is ever pending.
    pub fn start_autoplay(&mut self) {
        let timer = AutoplayTimer::start(
            self.clock.now(),
            self.options.autoplay_interval(),
        );
        trace!(period_ms = timer.period().as_millis() as u64, "autoplay started");
        self.autoplay = Some(timer);
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.take().is_some() {
            trace!("autoplay stopped");
        }
    }

    /// Cancel the pending tick and schedule a fresh one a full period out.
    pub fn restart_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    /// Hovering pauses autoplay when `pause_on_hover` is set; navigation
    /// during a hover must not resume it.
    fn autoplay_allowed(&self) -> bool {
        !(self.options.pause_on_hover && self.focus.is_hovered())
    }

    /// Earliest instant at which [`Slider::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let transition = self.transition.map(|t| t.deadline);
        let autoplay = self.autoplay.as_ref().map(AutoplayTimer::next_due);
        match (transition, autoplay) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire every deadline that has passed, oldest first. A transition
    /// completion due at the same instant as an autoplay tick runs first.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        loop {
            let transition_due = self
                .transition
                .filter(|t| t.is_due(now))
                .map(|t| t.deadline);
            let autoplay_due = self
                .autoplay
                .as_ref()
                .filter(|t| t.is_due(now))
                .map(AutoplayTimer::next_due);

            match (transition_due, autoplay_due) {
                (None, None) => break,
                (Some(t), Some(a)) if a < t => self.fire_autoplay(now),
                (Some(_), _) => self.finish_transition(),
                (None, Some(_)) => self.fire_autoplay(now),
            }
        }
    }

    fn fire_autoplay(&mut self, now: Instant) {
        if let Some(timer) = self.autoplay.as_mut() {
            timer.fire(now);
        }
        trace!(index = self.current_index, "autoplay tick");

        if self.slides.is_empty() {
            return;
        }
        if self.current_index == self.slides.len() - 1 {
            self.go_to(0, Direction::Next);
        } else {
            self.next();
        }
    }

    /// Host acknowledgment that a visual transition ended. Only the running
    /// transition's own generation releases the latch.
    fn acknowledge_transition(&mut self, generation: u64) {
        match self.transition {
            Some(pending) if pending.generation == generation => {
                self.finish_transition()
            }
            _ => trace!(generation, "stale transition acknowledgment"),
        }
    }

    /// Release the animating latch and drop transition styling.
    fn finish_transition(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        self.surface.clear_transition(transition.from);
        self.surface.clear_transition(transition.to);
        debug!(
            from = transition.from,
            to = transition.to,
            "slide transition finished"
        );
    }

    /// Dispatch one host input event.
    pub fn handle(&mut self, input: SliderInput) {
        match input {
            SliderInput::Key(key) => {
                if !self.focus.is_keyboard_target() {
                    return;
                }
                match key {
                    Key::ArrowLeft => self.prev(),
                    Key::ArrowRight => self.next(),
                    Key::Other => {}
                }
            }
            SliderInput::TouchStart { x } => self.swipe.touch_start(x),
            SliderInput::TouchEnd { x } => {
                match self.swipe.touch_end(x, self.options.swipe_threshold) {
                    Some(Direction::Next) => self.next(),
                    Some(Direction::Prev) => self.prev(),
                    None => {}
                }
            }
            SliderInput::PointerEnter => {
                self.focus.set_hovered(true);
                if self.options.pause_on_hover {
                    self.stop_autoplay();
                }
            }
            SliderInput::PointerLeave => {
                self.focus.set_hovered(false);
                if self.options.pause_on_hover && self.options.autoplay {
                    self.start_autoplay();
                }
            }
            SliderInput::FocusGained => self.focus.set_focused(true),
            SliderInput::FocusLost => self.focus.set_focused(false),
            SliderInput::PrevArrow if self.options.show_arrows => self.prev(),
            SliderInput::NextArrow if self.options.show_arrows => self.next(),
            SliderInput::PrevArrow | SliderInput::NextArrow => {}
            SliderInput::DotPressed(position) if self.options.show_dots => {
                self.press_dot(position)
            }
            SliderInput::DotPressed(_) => {}
            SliderInput::SlideActivated(position) => {
                self.activate_slide(position)
            }
            SliderInput::WatchActivated(position) => self.watch(position),
            SliderInput::TransitionEnd { generation } => {
                self.acknowledge_transition(generation)
            }
        }
    }

    fn press_dot(&mut self, position: usize) {
        if position >= self.slides.len() {
            return;
        }
        self.stop_autoplay();
        self.go_to(position as isize, Direction::Next);
        if self.options.autoplay && self.autoplay_allowed() {
            self.start_autoplay();
        }
    }

    fn activate_slide(&mut self, position: usize) {
        let slides = Arc::clone(&self.slides);
        if let (Some(item), Some(handler)) =
            (slides.get(position), self.on_slide_click.as_mut())
        {
            handler(item);
        }
    }

    /// Navigate to the detail page of the slide at `position`. The click
    /// callback is deliberately not invoked.
    fn watch(&mut self, position: usize) {
        let Some(item) = self.slides.get(position) else {
            return;
        };
        let url = item.detail_link().to_relative_url();
        debug!(%url, "navigating to detail page");
        self.surface.navigate(&url);
    }

    /// Release every timer the slider holds. Called on drop.
    pub fn dispose(&mut self) {
        self.stop_autoplay();
        self.finish_transition();
        self.focus.clear_all();
    }
}

impl<S: RenderSurface> Drop for Slider<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
