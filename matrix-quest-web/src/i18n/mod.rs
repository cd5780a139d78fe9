mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, LOCALE_KEY, current_lang, set_lang};
pub use format::{fmt_date_iso, fmt_number, fmt_pct};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
