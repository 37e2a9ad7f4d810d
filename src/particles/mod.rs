pub(crate) mod extract;
pub(crate) mod mapping;
pub(crate) mod particle;
