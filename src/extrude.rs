pub(crate) mod direction;
pub(crate) mod engine;
pub(crate) mod overlap;
pub(crate) mod params;
pub(crate) mod steps;
pub(crate) mod threading;
