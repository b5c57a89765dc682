//! Carousel index arithmetic
//!
//! The hero carousel wraps around; the sample carousel clamps so that the
//! last page is always full.

/// Auto-advancing carousel that wraps at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCarousel {
    len: usize,
    index: usize,
}

impl HeroCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Go to slide `n`; past the end wraps to 0, before the start to the last slide
    pub fn go_to(&mut self, n: isize) {
        if self.len == 0 {
            return;
        }
        self.index = if n >= self.len as isize {
            0
        } else if n < 0 {
            self.len - 1
        } else {
            n as usize
        };
    }

    pub fn next(&mut self) {
        self.go_to(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.index as isize - 1);
    }
}

/// Number of sample cards visible for a viewport width
pub fn visible_for_width(width: f64) -> usize {
    if width <= 560.0 {
        1
    } else if width <= 900.0 {
        2
    } else {
        3
    }
}

/// Sliding strip of sample cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCarousel {
    total: usize,
    visible: usize,
    index: usize,
}

impl SampleCarousel {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible: visible.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Largest valid index
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// Move by `delta`, clamped to `[0, max_index]`
    pub fn step(&mut self, delta: isize) {
        let target = (self.index as isize + delta).max(0) as usize;
        self.index = target.min(self.max_index());
    }

    /// Re-clamp after the viewport changed
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.index = self.index.min(self.max_index());
    }

    /// Indices of the cards currently on screen
    pub fn window(&self) -> std::ops::Range<usize> {
        self.index..(self.index + self.visible).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_wraps() {
        let mut hero = HeroCarousel::new(3);
        hero.prev();
        assert_eq!(hero.index(), 2);
        hero.next();
        assert_eq!(hero.index(), 0);
        hero.go_to(7);
        assert_eq!(hero.index(), 0);
        hero.go_to(1);
        assert_eq!(hero.index(), 1);
    }

    #[test]
    fn test_empty_hero_is_inert() {
        let mut hero = HeroCarousel::new(0);
        hero.next();
        assert_eq!(hero.index(), 0);
        assert!(hero.is_empty());
    }

    #[test]
    fn test_visible_breakpoints() {
        assert_eq!(visible_for_width(400.0), 1);
        assert_eq!(visible_for_width(560.0), 1);
        assert_eq!(visible_for_width(800.0), 2);
        assert_eq!(visible_for_width(1280.0), 3);
    }

    #[test]
    fn test_sample_clamps() {
        let mut sample = SampleCarousel::new(5, 3);
        sample.step(-1);
        assert_eq!(sample.index(), 0);
        sample.step(1);
        sample.step(1);
        sample.step(1);
        assert_eq!(sample.index(), 2);
        assert_eq!(sample.window(), 2..5);

        sample.set_visible(1);
        sample.step(5);
        assert_eq!(sample.index(), 4);
        sample.set_visible(3);
        assert_eq!(sample.index(), 2);
    }

    #[test]
    fn test_sample_fewer_items_than_visible() {
        let mut sample = SampleCarousel::new(2, 3);
        sample.step(1);
        assert_eq!(sample.index(), 0);
        assert_eq!(sample.window(), 0..2);
    }
}
