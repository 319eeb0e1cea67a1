pub(crate) mod shift;
