//! Cascading route → direction → stop selection.
//!
//! [`SelectionController`] is the only writer of [`SelectionState`]. Each
//! choice clears the levels below it before the next fetch is issued, and
//! fetch results that arrive after the user has moved on are discarded.

mod controller;
mod state;
mod view;


pub use controller::{SelectionController, SelectionEvent};
pub use state::{Level, SelectionState};
pub use view::{DepartureRow, DepartureTable, SelectOption, SelectionView};
