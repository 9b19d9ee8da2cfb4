pub mod controller;
pub mod events;
pub mod filter;
pub mod search;
pub mod sort;
pub mod state;


pub use events::{
    EventQueue,
    ViewEvent,
};
pub use filter::FilterMode;
pub use sort::SortMode;
