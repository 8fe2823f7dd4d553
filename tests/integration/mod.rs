//! Integration tests for resolver construction from directory maps

mod alias_rules;
mod error_handling;
mod resolver_properties;
mod resolver_scenarios;
