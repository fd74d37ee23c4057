//! Process lifetime management

pub mod startup;
