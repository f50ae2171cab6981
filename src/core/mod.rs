pub mod apostrophe;
pub mod blank;
pub mod duration;
pub mod fraction;

pub use apostrophe::{capostrophe, Capostrophe};
pub use blank::{nullify, nullify_fields, nullify_json, Blank, Nullify};
pub use duration::{hms, HmsExt, MAX_HMS_DECIMALS};
pub use fraction::{frac, FracExt, DEFAULT_FRAC_DECIMALS, MAX_FRAC_DECIMALS};
