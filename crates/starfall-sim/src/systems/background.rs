//! Background scroll: the offset creeps left one pixel per frame and
//! snaps back to zero after a full field width.

use starfall_core::constants::FIELD_WIDTH;

pub fn run(offset: &mut i32) {
    *offset -= 1;
    if *offset < -FIELD_WIDTH {
        *offset = 0;
    }
}
