pub(crate) mod rounded;
