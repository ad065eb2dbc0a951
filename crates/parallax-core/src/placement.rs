use crate::card::Card;
use crate::config::ParallaxConfig;
use crate::constants::*;
use crate::simulation::Viewport;
use glam::DVec3;
use rand::prelude::*;

/// True when `(x, y)` lies closer than `min_distance` to any placed card.
pub fn is_too_close(x: f64, y: f64, cards: &[Card], min_distance: f64) -> bool {
    cards.iter().any(|card| {
        let dx = x - card.position.x;
        let dy = y - card.position.y;
        (dx * dx + dy * dy).sqrt() < min_distance
    })
}

/// Uniform sample in `[-span / 2, span / 2)`.
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}

/// Place `config.card_count` cards over a `viewport.width` x virtual-height area.
///
/// Positions are rejection-sampled to keep `MIN_CARD_DISTANCE` between cards.
/// After `MAX_PLACEMENT_ATTEMPTS` the last candidate is committed even if it
/// overlaps, so generation always produces exactly `card_count` cards.
pub fn generate_cards<R: Rng + ?Sized>(
    config: &ParallaxConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Card> {
    let virtual_height = viewport.virtual_height(config.space_scale);
    let mut cards: Vec<Card> = Vec::with_capacity(config.card_count);

    for i in 0..config.card_count {
        let mut attempts = 0u32;
        let (x, y) = loop {
            let x = rng.gen::<f64>() * viewport.width;
            let y = rng.gen::<f64>() * virtual_height;
            attempts += 1;
            if !is_too_close(x, y, &cards, MIN_CARD_DISTANCE) || attempts >= MAX_PLACEMENT_ATTEMPTS
            {
                break (x, y);
            }
        };
        if attempts >= MAX_PLACEMENT_ATTEMPTS && is_too_close(x, y, &cards, MIN_CARD_DISTANCE) {
            log::debug!("[placement] card {i} overlaps after {attempts} attempts");
        }

        let z = centered(rng, DEPTH_RANGE);
        let rotation = DVec3::new(
            rng.gen::<f64>() * INITIAL_ROTATION_SPAN[0],
            rng.gen::<f64>() * INITIAL_ROTATION_SPAN[1],
            rng.gen::<f64>() * INITIAL_ROTATION_SPAN[2],
        );
        let velocity = DVec3::new(
            centered(rng, config.max_speed),
            centered(rng, config.max_speed * Y_SPEED_FACTOR),
            centered(rng, config.max_speed * Z_SPEED_FACTOR),
        );
        let rot_speed = centered(rng, config.rotation_speed);

        cards.push(Card {
            position: DVec3::new(x, y, z),
            rotation,
            velocity,
            rot_speed,
            image: config.image_for(i).unwrap_or_default().to_string(),
            placement_attempts: attempts,
        });
    }

    log::info!(
        "[placement] cards={} area={:.0}x{:.0}",
        cards.len(),
        viewport.width,
        virtual_height
    );
    cards
}
