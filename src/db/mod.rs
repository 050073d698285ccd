pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod queries;

pub use initialize::{init_db, init_db_file};
pub use pool::DbPool;
pub use queries::{add_event, delete_event, events_between, list_events, update_event};
