//! Scoped symbol table.
//!
//! Maps names to declared entities across nested scopes. Lookups prefer the
//! innermost scope that declares a name, so inner declarations shadow outer
//! ones; redeclaring a name inside one scope is refused.

pub mod symbol_table;

#[cfg(test)]
mod tests;
