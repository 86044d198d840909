pub(crate) mod defaults;
pub(crate) mod schema;
