//! A `no_std` command line binder that splits a raw, unsplit command line with strict
//! quoting rules, then binds its tokens to a declared set of named arguments.
#![no_std]

extern crate alloc;

pub mod lexer;
pub mod parser;
pub mod spec;

pub use lexer::{Tokens, tokenize};
pub use parser::{BoundArgument, Error, InvalidValue, ParsedArgs};
pub use spec::{ArgumentKind, ArgumentSet, ArgumentSpec};
