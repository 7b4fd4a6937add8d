use crate::card::{Chrome, DotIndicator, SlideCard};

use super::{RenderSurface, SlideStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub card: SlideCard,
    pub style: Option<SlideStyle>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDot {
    pub dot: DotIndicator,
    pub selected: bool,
}

/// In-memory element tree.
///
/// Out-of-range indices are ignored, mirroring a query that matched no
/// element.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub chrome: Option<Chrome>,
    pub slides: Vec<RenderedSlide>,
    pub dots: Vec<RenderedDot>,
    pub navigations: Vec<String>,
    /// Number of times the slide list was torn down.
    pub rebuilds: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of slides not hidden from assistive technology.
    pub fn visible_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| !slide.hidden)
            .map(|(i, _)| i)
            .collect()
    }

    /// Positions of slides whose card is marked active.
    pub fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.card.active)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter(|(_, dot)| dot.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// True while any slide still carries transition styling.
    pub fn is_transitioning(&self) -> bool {
        self.slides
            .iter()
            .any(|slide| slide.style.is_some_and(|s| s.transition.is_some()))
    }
}

impl RenderSurface for MemorySurface {
    fn mount_chrome(&mut self, chrome: Chrome) {
        self.chrome = Some(chrome);
    }

    fn clear_slides(&mut self) {
        self.slides.clear();
        self.rebuilds += 1;
    }

    fn append_slide(&mut self, card: SlideCard) {
        let hidden = card.hidden;
        self.slides.push(RenderedSlide {
            card,
            style: None,
            hidden,
        });
    }

    fn clear_dots(&mut self) {
        self.dots.clear();
    }

    fn append_dot(&mut self, dot: DotIndicator) {
        let selected = dot.selected;
        self.dots.push(RenderedDot { dot, selected });
    }

    fn style_slide(&mut self, index: usize, style: SlideStyle) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.style = Some(style);
        }
    }

    fn clear_transition(&mut self, index: usize) {
        if let Some(style) =
            self.slides.get_mut(index).and_then(|s| s.style.as_mut())
        {
            style.transition = None;
        }
    }

    fn set_slide_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.hidden = hidden;
        }
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.card.active = active;
        }
    }

    fn set_dot_selected(&mut self, index: usize, selected: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            dot.selected = selected;
        }
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}
