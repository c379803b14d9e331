// Career search: substring filtering and autocomplete over the static catalog.

pub mod handlers;
pub mod matcher;
