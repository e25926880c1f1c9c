//! Command line front end for the Smart Learning Advisor.

pub mod cli;
pub mod commands;
