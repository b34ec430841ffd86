//! Game-variant layers over the generic card containers. Each variant
//! supplies its stocked deck and its [`crate::hand::Showdown`] scoring.

pub mod texas;
