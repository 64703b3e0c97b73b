//! DANGAME (workspace facade crate).
//!
//! Re-exports the member crates under `dangame::{core,engine,input,term,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub use dangame_core as core;
pub use dangame_engine as engine;
pub use dangame_input as input;
pub use dangame_term as term;
pub use dangame_types as types;
