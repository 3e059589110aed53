//! Starfield scroll: each star moves left at its own speed and wraps
//! to the right edge once it scrolls past the left edge.

use starfall_core::constants::FIELD_WIDTH;
use starfall_core::types::Star;

pub fn run(stars: &mut [Star]) {
    for star in stars {
        star.x -= star.speed;
        if star.x < 0 {
            star.x += FIELD_WIDTH;
        }
    }
}
