// Scroll-linked page polish: header shadow, one-shot card reveals, press
// ripples and press-scale feedback. Pure state here; drawing lives in ui.rs.

use ratatui::layout::Rect;

use crate::config::{Config, CATEGORIES, CHANNELS, TRUST_ITEMS};

/// Reveal-slot index bases: category cards first, then channel cards,
/// then trust items.
pub const REVEAL_CHANNEL_BASE: usize = CATEGORIES.len();
pub const REVEAL_TRUST_BASE: usize = REVEAL_CHANNEL_BASE + CHANNELS.len();
pub const REVEAL_SLOTS: usize = REVEAL_TRUST_BASE + TRUST_ITEMS.len();

#[derive(Clone, Copy, PartialEq)]
enum Reveal {
    Hidden,
    Animating(u8),
    Shown,
}

/// Expanding press ripple anchored at the pointer's click coordinates
/// within a button's bounds.
pub struct Ripple {
    pub x: u16,
    pub y: u16,
    pub area: Rect,
    pub ticks_left: u8,
    pub budget: u8,
}

impl Ripple {
    /// Animation progress, 0.0 at press, 1.0 when expired.
    pub fn progress(&self) -> f64 {
        1.0 - f64::from(self.ticks_left) / f64::from(self.budget)
    }
}

pub struct PageFx {
    pub scroll: usize,
    shadow_threshold: usize,
    reveals: Vec<Reveal>,
    reveal_ticks: u8,
    pub hovered_card: Option<usize>,
    ripple: Option<Ripple>,
    ripple_ticks: u8,
    pressed_card: Option<(usize, u8)>,
    card_press_ticks: u8,
}

impl PageFx {
    pub fn new(card_count: usize, config: &Config) -> Self {
        Self {
            scroll: 0,
            shadow_threshold: config.header_shadow_threshold,
            reveals: vec![Reveal::Hidden; card_count],
            reveal_ticks: config.reveal_ticks,
            hovered_card: None,
            ripple: None,
            ripple_ticks: config.ripple_ticks,
            pressed_card: None,
            card_press_ticks: config.card_press_ticks,
        }
    }

    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        let next = self.scroll as isize + delta;
        self.scroll = next.clamp(0, max as isize) as usize;
    }

    /// Header gets its shadow once scrolled past the threshold.
    pub fn header_shadow(&self) -> bool {
        self.scroll > self.shadow_threshold
    }

    /// Mark a card as visible in the viewport. The reveal fires once per
    /// card; scrolling it back out and in again does nothing.
    pub fn observe(&mut self, card: usize) {
        if let Some(state) = self.reveals.get_mut(card) {
            if *state == Reveal::Hidden {
                *state = Reveal::Animating(self.reveal_ticks);
            }
        }
    }

    /// A card still fading in is drawn dimmed.
    pub fn is_revealing(&self, card: usize) -> bool {
        matches!(self.reveals.get(card), Some(Reveal::Animating(_)))
    }

    pub fn is_hidden(&self, card: usize) -> bool {
        matches!(self.reveals.get(card), Some(Reveal::Hidden))
    }

    pub fn press_ripple(&mut self, x: u16, y: u16, area: Rect) {
        self.ripple = Some(Ripple {
            x,
            y,
            area,
            ticks_left: self.ripple_ticks,
            budget: self.ripple_ticks,
        });
    }

    pub fn ripple(&self) -> Option<&Ripple> {
        self.ripple.as_ref()
    }

    pub fn press_card(&mut self, card: usize) {
        self.pressed_card = Some((card, self.card_press_ticks));
    }

    pub fn is_card_pressed(&self, card: usize) -> bool {
        matches!(self.pressed_card, Some((c, _)) if c == card)
    }

    /// Advance every transient effect by one tick.
    pub fn tick(&mut self) {
        for state in &mut self.reveals {
            if let Reveal::Animating(n) = *state {
                *state = if n <= 1 { Reveal::Shown } else { Reveal::Animating(n - 1) };
            }
        }

        if let Some(ripple) = &mut self.ripple {
            ripple.ticks_left = ripple.ticks_left.saturating_sub(1);
            if ripple.ticks_left == 0 {
                self.ripple = None;
            }
        }

        if let Some((_, ticks)) = &mut self.pressed_card {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.pressed_card = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageFx {
        PageFx::new(6, &Config::default())
    }

    #[test]
    fn header_shadow_flips_past_threshold() {
        let mut p = page();
        assert!(!p.header_shadow());

        p.scroll_by(6, 100);
        assert!(!p.header_shadow());

        p.scroll_by(1, 100);
        assert!(p.header_shadow());

        p.scroll_by(-7, 100);
        assert!(!p.header_shadow());
    }

    #[test]
    fn scroll_clamps_to_bounds() {
        let mut p = page();
        p.scroll_by(-10, 100);
        assert_eq!(p.scroll, 0);
        p.scroll_by(500, 100);
        assert_eq!(p.scroll, 100);
    }

    #[test]
    fn reveal_is_one_shot_per_card() {
        let mut p = page();
        assert!(p.is_hidden(2));

        p.observe(2);
        assert!(p.is_revealing(2));

        // Run the animation out.
        for _ in 0..Config::default().reveal_ticks {
            p.tick();
        }
        assert!(!p.is_revealing(2));
        assert!(!p.is_hidden(2));

        // Observing again never restarts it.
        p.observe(2);
        assert!(!p.is_revealing(2));
    }

    #[test]
    fn ripple_expires_after_its_budget() {
        let mut p = page();
        let area = Rect::new(0, 0, 10, 3);
        p.press_ripple(4, 1, area);
        assert!(p.ripple().is_some());
        assert_eq!(p.ripple().unwrap().progress(), 0.0);

        for _ in 0..Config::default().ripple_ticks {
            p.tick();
        }
        assert!(p.ripple().is_none());
    }

    #[test]
    fn card_press_feedback_decays() {
        let mut p = page();
        p.press_card(3);
        assert!(p.is_card_pressed(3));
        assert!(!p.is_card_pressed(1));

        for _ in 0..Config::default().card_press_ticks {
            p.tick();
        }
        assert!(!p.is_card_pressed(3));
    }

    #[test]
    fn observe_out_of_range_is_ignored() {
        let mut p = page();
        p.observe(99);
        p.tick();
    }
}
