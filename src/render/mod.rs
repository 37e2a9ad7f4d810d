pub(crate) mod animator;
pub(crate) mod frame;
pub(crate) mod pipeline;
