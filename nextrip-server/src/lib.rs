//! NexTrip departure browser.
//!
//! A web application that lets a rider narrow down a transit query
//! (route, then direction, then stop) and shows the upcoming departures
//! reported by the Metro Transit NexTrip API.

pub mod domain;
pub mod nextrip;
pub mod selection;
pub mod web;

#[cfg(test)]
mod test_utils;
