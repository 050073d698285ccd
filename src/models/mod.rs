pub mod event;
pub mod event_type;

pub use event::{CalendarEvent, Event, EventInput};
pub use event_type::EventType;
