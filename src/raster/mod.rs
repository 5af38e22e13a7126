pub(crate) mod coverage;
pub(crate) mod modulate;
pub(crate) mod pixmap;
