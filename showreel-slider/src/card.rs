//! View models handed to the render surface.

use showreel_model::{DetailLink, SlideItem};

use crate::rating::StarRating;

pub const PREV_ARROW_LABEL: &str = "Previous slide";
pub const NEXT_ARROW_LABEL: &str = "Next slide";
pub const WATCH_LABEL: &str = "Watch now";

/// Image fetch hint; only the first slide loads eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoading {
    Eager,
    Lazy,
}

/// Everything needed to draw one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCard {
    pub position: usize,
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub image_loading: ImageLoading,
    pub genre: String,
    pub stars: StarRating,
    /// e.g. `"85%"`
    pub popularity_label: String,
    pub description: String,
    pub watch_label: String,
    pub watch_aria_label: String,
    pub watch_link: DetailLink,
    /// Position 0 starts active and visible, all others hidden.
    pub active: bool,
    pub hidden: bool,
}

impl SlideCard {
    pub fn from_item(item: &SlideItem, position: usize) -> Self {
        let popularity = item.popularity_or_default();
        let first = position == 0;

        Self {
            position,
            title: item.title.clone(),
            image_src: item.image.clone(),
            image_alt: item.title.clone(),
            image_loading: if first {
                ImageLoading::Eager
            } else {
                ImageLoading::Lazy
            },
            genre: item.genre.clone(),
            stars: StarRating::from_popularity(popularity),
            popularity_label: format!("{popularity}%"),
            description: item.description_or_default().to_string(),
            watch_label: WATCH_LABEL.to_string(),
            watch_aria_label: format!("{WATCH_LABEL}: {}", item.title),
            watch_link: item.detail_link(),
            active: first,
            hidden: !first,
        }
    }
}

/// One position indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotIndicator {
    pub position: usize,
    pub aria_label: String,
    pub selected: bool,
}

impl DotIndicator {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            aria_label: format!("Go to slide {}", position + 1),
            selected: position == 0,
        }
    }
}

/// Navigation chrome mounted once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub arrows: Option<ArrowLabels>,
    pub dots: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowLabels {
    pub prev: String,
    pub next: String,
}

impl Default for ArrowLabels {
    fn default() -> Self {
        Self {
            prev: PREV_ARROW_LABEL.to_string(),
            next: NEXT_ARROW_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_model::MediaKind;

    #[test]
    fn test_card_from_sparse_item() {
        let item = SlideItem::new(3u64, "Alien", "alien.jpg", "Horror");
        let card = SlideCard::from_item(&item, 2);

        assert_eq!(card.popularity_label, "0%");
        assert_eq!(card.description, "");
        assert_eq!(card.image_loading, ImageLoading::Lazy);
        assert!(card.hidden && !card.active);
        assert_eq!(card.stars.empty, 5);
        assert_eq!(card.watch_link.kind, MediaKind::Movie);
    }

    #[test]
    fn test_first_card_is_active_and_eager() {
        let item = SlideItem::new(1u64, "Dune", "dune.jpg", "Sci-Fi")
            .with_popularity(85.0)
            .with_description("Spice.");
        let card = SlideCard::from_item(&item, 0);

        assert!(card.active && !card.hidden);
        assert_eq!(card.image_loading, ImageLoading::Eager);
        assert_eq!(card.popularity_label, "85%");
        assert_eq!(card.watch_aria_label, "Watch now: Dune");
    }

    #[test]
    fn test_dot_labels_are_one_based() {
        assert_eq!(DotIndicator::new(0).aria_label, "Go to slide 1");
        assert!(DotIndicator::new(0).selected);
        assert!(!DotIndicator::new(4).selected);
    }
}
