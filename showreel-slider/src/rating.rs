//! Five-star popularity rendering.

/// Number of slots in a rating.
pub const STAR_SLOTS: usize = 5;

const POINTS_PER_STAR: f64 = 20.0;
const HALF_STAR_POINTS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// A 0–100 popularity value split into full, half and empty stars.
///
/// `full + half + empty` is always [`STAR_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: usize,
    pub half: bool,
    pub empty: usize,
}

impl StarRating {
    pub fn from_popularity(popularity: f64) -> Self {
        let popularity = if popularity.is_finite() {
            popularity.clamp(0.0, 100.0)
        } else {
            0.0
        };

        let full = (popularity / POINTS_PER_STAR).floor() as usize;
        let half = full < STAR_SLOTS
            && popularity % POINTS_PER_STAR >= HALF_STAR_POINTS;
        let empty = STAR_SLOTS - full - usize::from(half);

        Self { full, half, empty }
    }

    /// Stars in display order.
    pub fn glyphs(&self) -> impl Iterator<Item = Star> + '_ {
        std::iter::repeat_n(Star::Full, self.full)
            .chain(self.half.then_some(Star::Half))
            .chain(std::iter::repeat_n(Star::Empty, self.empty))
    }
}
