//! Infrastructure configuration modules.

pub mod logging;
pub mod presale;
pub mod settings;
pub mod wallet;
