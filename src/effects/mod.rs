pub(crate) mod counter;
pub(crate) mod glow;
pub(crate) mod grid;
pub(crate) mod shimmer;
pub(crate) mod transitions;
