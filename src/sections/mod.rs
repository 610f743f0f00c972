//! The module's sections, each owning its entries and emitting itself
//! through the `Section` contract.

use super::*;

pub use self::code::*;
pub use self::data::*;
pub use self::data_count::*;
pub use self::elements::*;
pub use self::exports::*;
pub use self::functions::*;
pub use self::globals::*;
pub use self::imports::*;
pub use self::memories::*;
pub use self::start::*;
pub use self::tables::*;
pub use self::types::*;

mod types;
mod imports;
mod functions;
mod tables;
mod memories;
mod globals;
mod exports;
mod start;
mod elements;
mod data_count;
mod code;
mod data;
