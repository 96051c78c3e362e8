pub mod cache;
pub mod pagination;
pub mod query;
pub mod status;
pub mod table;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
