//! Builtin glyph catalogs.
//!
//! Three faces ship with dwatch. `block` and `hash` share one 3×5 pixel font,
//! each pixel drawn two columns wide so digits look square in a typical
//! terminal cell; `segment` is a compact seven-segment face.

use crate::catalog::{Catalog, Glyph};

/// Style 1: solid full-block digits.
pub static BLOCK: Catalog = Catalog::new(
    "block",
    5,
    2,
    [
        // 0
        Glyph::new(&[
            "██████",
            "██  ██",
            "██  ██",
            "██  ██",
            "██████",
        ]),
        // 1
        Glyph::new(&[
            "  ██  ",
            "████  ",
            "  ██  ",
            "  ██  ",
            "██████",
        ]),
        // 2
        Glyph::new(&[
            "██████",
            "    ██",
            "██████",
            "██    ",
            "██████",
        ]),
        // 3
        Glyph::new(&[
            "██████",
            "    ██",
            "██████",
            "    ██",
            "██████",
        ]),
        // 4
        Glyph::new(&[
            "██  ██",
            "██  ██",
            "██████",
            "    ██",
            "    ██",
        ]),
        // 5
        Glyph::new(&[
            "██████",
            "██    ",
            "██████",
            "    ██",
            "██████",
        ]),
        // 6
        Glyph::new(&[
            "██████",
            "██    ",
            "██████",
            "██  ██",
            "██████",
        ]),
        // 7
        Glyph::new(&[
            "██████",
            "    ██",
            "    ██",
            "    ██",
            "    ██",
        ]),
        // 8
        Glyph::new(&[
            "██████",
            "██  ██",
            "██████",
            "██  ██",
            "██████",
        ]),
        // 9
        Glyph::new(&[
            "██████",
            "██  ██",
            "██████",
            "    ██",
            "██████",
        ]),
    ],
    Glyph::new(&[
        "  ",
        "██",
        "  ",
        "██",
        "  ",
    ]),
);

/// Style 2: the block face drawn with ASCII `#`.
pub static HASH: Catalog = Catalog::new(
    "hash",
    5,
    2,
    [
        // 0
        Glyph::new(&[
            "######",
            "##  ##",
            "##  ##",
            "##  ##",
            "######",
        ]),
        // 1
        Glyph::new(&[
            "  ##  ",
            "####  ",
            "  ##  ",
            "  ##  ",
            "######",
        ]),
        // 2
        Glyph::new(&[
            "######",
            "    ##",
            "######",
            "##    ",
            "######",
        ]),
        // 3
        Glyph::new(&[
            "######",
            "    ##",
            "######",
            "    ##",
            "######",
        ]),
        // 4
        Glyph::new(&[
            "##  ##",
            "##  ##",
            "######",
            "    ##",
            "    ##",
        ]),
        // 5
        Glyph::new(&[
            "######",
            "##    ",
            "######",
            "    ##",
            "######",
        ]),
        // 6
        Glyph::new(&[
            "######",
            "##    ",
            "######",
            "##  ##",
            "######",
        ]),
        // 7
        Glyph::new(&[
            "######",
            "    ##",
            "    ##",
            "    ##",
            "    ##",
        ]),
        // 8
        Glyph::new(&[
            "######",
            "##  ##",
            "######",
            "##  ##",
            "######",
        ]),
        // 9
        Glyph::new(&[
            "######",
            "##  ##",
            "######",
            "    ##",
            "######",
        ]),
    ],
    Glyph::new(&[
        "  ",
        "##",
        "  ",
        "##",
        "  ",
    ]),
);

/// Style 3: seven-segment digits built from `_` and `|`.
pub static SEGMENT: Catalog = Catalog::new(
    "segment",
    3,
    1,
    [
        // 0
        Glyph::new(&[
            " _ ",
            "| |",
            "|_|",
        ]),
        // 1
        Glyph::new(&[
            "   ",
            "  |",
            "  |",
        ]),
        // 2
        Glyph::new(&[
            " _ ",
            " _|",
            "|_ ",
        ]),
        // 3
        Glyph::new(&[
            " _ ",
            " _|",
            " _|",
        ]),
        // 4
        Glyph::new(&[
            "   ",
            "|_|",
            "  |",
        ]),
        // 5
        Glyph::new(&[
            " _ ",
            "|_ ",
            " _|",
        ]),
        // 6
        Glyph::new(&[
            " _ ",
            "|_ ",
            "|_|",
        ]),
        // 7
        Glyph::new(&[
            " _ ",
            "  |",
            "  |",
        ]),
        // 8
        Glyph::new(&[
            " _ ",
            "|_|",
            "|_|",
        ]),
        // 9
        Glyph::new(&[
            " _ ",
            "|_|",
            " _|",
        ]),
    ],
    Glyph::new(&[
        " ",
        "·",
        "·",
    ]),
);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
