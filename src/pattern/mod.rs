pub(crate) mod builtin;
pub(crate) mod edit;
pub(crate) mod model;
