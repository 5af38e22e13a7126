pub(crate) mod logo;
pub(crate) mod model;
