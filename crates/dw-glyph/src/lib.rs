//! # dw-glyph: Block-Art Clock Faces
//!
//! Turns a plain clock string like `"12:34:56"` into a multi-line block-art
//! rendering, using one of a small set of builtin glyph catalogs. Pure data
//! plus pure functions: nothing here touches the terminal.
//!
//! # Architecture
//!
//! ```text
//! Style (id 1..=3 or name)
//!     │
//!     ▼
//! catalog.rs:  Style → &'static Catalog, Catalog::lookup(char) → Glyph
//!     │
//!     ▼
//! builtin.rs:  the glyph tables themselves (static data)
//!     │
//!     ▼
//! styler.rs:   compose glyphs row by row into StyledText
//! ```
//!
//! # Invariants
//!
//! Every glyph in a catalog has the catalog's height, and every row of a
//! glyph has the same display width. Both are properties of the static
//! tables and are enforced by the unit tests in [`builtin`], not checked on
//! every call.
//!
//! # Example
//!
//! ```
//! use dw_glyph::Style;
//!
//! let styled = Style::Segment.apply("12:30")?;
//! assert_eq!(styled.height(), 3);
//! println!("{styled}");
//! # Ok::<(), dw_glyph::StyleError>(())
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod styler;

pub use catalog::{Catalog, Glyph, Style};
pub use error::StyleError;
pub use styler::{style, StyledText};
