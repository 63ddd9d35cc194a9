use crate::error::ItemListError;

pub type ItemListResult<T> = Result<T, ItemListError>;
