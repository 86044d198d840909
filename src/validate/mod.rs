pub(crate) mod document;
pub(crate) mod primitives;
pub(crate) mod report;
