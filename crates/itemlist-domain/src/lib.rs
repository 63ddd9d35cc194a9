pub mod item;
pub mod notification;
pub mod search;
pub mod store;

pub use item::{Item, ItemId};
pub use notification::{
    BroadcastSink, Notification, NotificationKind, NotificationSink, TracingSink,
};
pub use search::WebSearch;
pub use store::ItemStore;
