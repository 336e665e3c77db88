pub(crate) mod expand;
pub(crate) mod resolve;
