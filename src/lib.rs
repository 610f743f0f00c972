//! Build WebAssembly modules in memory and serialize them to the binary format.
//!
//! ```no_run
//! use wasm_assembler::{Module, FuncBody, ValType};
//!
//! let mut module = Module::new();
//! let ty = module.declare_type(&[], &[ValType::I32]);
//! let mut body = FuncBody::new(&[]);
//! body.code.i32_const(5).i32_const(10).i32_add().end();
//! let func = module.finalize_function(ty, &body).unwrap();
//! module.export_function("_start", func);
//! let bytes = module.serialize();
//! ```

#![allow(unused_imports)] // workaround spurious warnings

use failure::Fail;
use lazy_static::lazy_static;
use log::{debug, trace, warn};
use serde::Serialize;

use std::collections::HashMap;
use std::path::Path;
use std::{fmt, fs, io};

pub use self::code::*;
pub use self::encode::*;
pub use self::error::*;
pub use self::instructions::*;
pub use self::module::*;
pub use self::section::*;
pub use self::sink::*;
pub use self::structure::*;

pub mod leb128;
mod sink;
mod encode;
mod structure;
mod error;
mod section;
pub mod sections;
mod instructions;
mod code;
mod module;
