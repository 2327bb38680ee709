pub(crate) mod args;
pub(crate) mod query;

pub(crate) use args::{Cli, OutputFormat};
pub(crate) use query::Query;
