pub(crate) mod offset;
pub(crate) mod padding;
pub(crate) mod resize;
