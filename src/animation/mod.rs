pub(crate) mod ambient;
pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod lerp;
pub(crate) mod spring;
