pub mod names;

pub use names::TierNameMigrator;

use crate::models::{TierId, TierPresentation};
use std::borrow::Cow;

// Shorthands over the process-wide migrator.

pub fn display_name<'a>(code: impl Into<TierId<'a>>) -> Cow<'a, str> {
    TierNameMigrator::global().display_name(code)
}

pub fn color_token<'a>(code: impl Into<TierId<'a>>) -> &'static str {
    TierNameMigrator::global().color_token(code)
}

pub fn icon_glyph<'a>(code: impl Into<TierId<'a>>) -> &'static str {
    TierNameMigrator::global().icon_glyph(code)
}

pub fn present<'a>(code: impl Into<TierId<'a>>) -> TierPresentation {
    TierNameMigrator::global().present(code)
}
