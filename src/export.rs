pub(crate) mod artifacts;
pub(crate) mod descriptor;
