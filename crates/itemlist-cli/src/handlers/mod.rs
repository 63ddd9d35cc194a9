pub mod backup;
pub mod item;
pub mod search;
