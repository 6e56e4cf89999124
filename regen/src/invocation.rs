//! Resolution of the bound arguments into a complete generator invocation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::cli;
use crate::cmdline::{self, ParsedArgs};

/// Extension replacing the input one when no output path is given.
pub const OUTPUT_EXTENSION: &str = "designer.cs";

/// Defines everything the generator needs, with defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Path to the schema to read.
    pub input: PathBuf,

    /// Path to the file to generate.
    pub output: PathBuf,

    /// Namespace of the generated code.
    pub namespace: String,
}

impl Invocation {
    /// Build the invocation from bound arguments. The output defaults to the input path with a
    /// `.designer.cs` extension, and the namespace to the input file name without extension.
    pub fn from_args(args: &ParsedArgs<'_>) -> Result<Self, Error> {
        let input = args
            .get(cli::IN)
            .map(PathBuf::from)
            .ok_or_else(|| cmdline::Error::RequiredArgumentMissing(cli::IN.to_string()))?;

        let namespace = match args.get(cli::NAMESPACE) {
            Some(namespace) => namespace.to_string(),
            None => default_namespace(&input)?,
        };

        let output = match args.get(cli::OUT) {
            Some(output) => PathBuf::from(output),
            None => input.with_extension(OUTPUT_EXTENSION),
        };

        Ok(Invocation {
            input,
            output,
            namespace,
        })
    }
}

fn default_namespace(input: &Path) -> Result<String, Error> {
    input
        .file_stem()
        .map(|x| x.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidInput(input.display().to_string()))
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (namespace {})",
            self.input.display(),
            self.output.display(),
            self.namespace
        )
    }
}
