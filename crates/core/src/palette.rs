//! The fixed 11-step diverging palette used for temperature cells.

use tempgrid_protocol::Color;

/// Number of discrete color buckets.
pub const PALETTE_SIZE: usize = 11;

/// ColorBrewer RdYlBu, ordered cold → warm (index 0 is the coldest bucket).
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::rgb(0x31, 0x36, 0x95),
    Color::rgb(0x45, 0x75, 0xb4),
    Color::rgb(0x74, 0xad, 0xd1),
    Color::rgb(0xab, 0xd9, 0xe9),
    Color::rgb(0xe0, 0xf3, 0xf8),
    Color::rgb(0xff, 0xff, 0xbf),
    Color::rgb(0xfe, 0xe0, 0x90),
    Color::rgb(0xfd, 0xae, 0x61),
    Color::rgb(0xf4, 0x6d, 0x43),
    Color::rgb(0xd7, 0x30, 0x27),
    Color::rgb(0xa5, 0x00, 0x26),
];
