pub(crate) mod reveal;
pub(crate) mod units;
