pub(crate) mod primitives;
pub(crate) mod svg;
pub(crate) mod text;
