//! The simulation context: cards, damped scroll and viewport in one place.
//!
//! The frontend owns a single [`Simulation`], feeds it scroll and resize input,
//! and calls [`Simulation::step`] once per display frame.

use crate::card::{render_y, Card, CardVisual};
use crate::config::ParallaxConfig;
use crate::constants::RESIZE_MARGIN;
use crate::placement::generate_cards;
use crate::scroll::ScrollState;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scrollable vertical extent of the card space.
    #[inline]
    pub fn virtual_height(&self, space_scale: f64) -> f64 {
        self.height * space_scale
    }
}

pub struct Simulation {
    pub config: ParallaxConfig,
    pub cards: Vec<Card>,
    pub scroll: ScrollState,
    viewport: Viewport,
    frames: u64,
    elapsed: Duration,
}

impl Simulation {
    pub fn new<R: Rng + ?Sized>(config: ParallaxConfig, viewport: Viewport, rng: &mut R) -> Self {
        let cards = generate_cards(&config, viewport, rng);
        Self::with_cards(config, viewport, cards)
    }

    /// Build around an existing card list (no placement pass).
    pub fn with_cards(config: ParallaxConfig, viewport: Viewport, cards: Vec<Card>) -> Self {
        Self {
            config,
            cards,
            scroll: ScrollState::default(),
            viewport,
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn set_scroll_target(&mut self, target: f64) {
        self.scroll.set_target(target);
    }

    /// Store the new viewport and pull every card's x back within the margin.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for card in &mut self.cards {
            card.position.x = clamp_x(card.position.x, viewport.width);
        }
    }

    /// Advance one frame and write one visual per card, in card order.
    ///
    /// Motion is per frame, not per second: `dt` only feeds the elapsed counter.
    pub fn step(&mut self, dt: Duration, out: &mut Vec<CardVisual>) {
        self.frames += 1;
        self.elapsed += dt;

        let scroll_y = self.scroll.step(self.config.scroll_smoothness);

        out.clear();
        out.reserve(self.cards.len());
        for card in &mut self.cards {
            // The parallax offset is taken from y before this frame's drift.
            let y = render_y(card.position.y, scroll_y);
            card.integrate();
            let mut translate = card.position;
            translate.y = y;
            out.push(CardVisual {
                translate,
                rot_y: card.rotation.y,
                opacity: card.opacity(),
            });
        }
    }
}

/// Clamp x into `[-RESIZE_MARGIN, width + RESIZE_MARGIN]`.
#[inline]
pub fn clamp_x(x: f64, width: f64) -> f64 {
    x.min(width + RESIZE_MARGIN).max(-RESIZE_MARGIN)
}
