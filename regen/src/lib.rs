//! regen, the command line front-end that prepares a typed dataset regeneration.
#![deny(missing_docs)]

pub use regen_cmdline as cmdline;

pub mod cli;
pub mod invocation;

pub use invocation::Invocation;

use cmdline::ParsedArgs;

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the binding of arguments.
    #[error(transparent)]
    Parser(#[from] cmdline::Error),

    /// A process argument is not valid UTF-8 and cannot be represented on the command line.
    #[error("argument is not valid UTF-8: \"{0}\"")]
    NonUtf8Argument(String),

    /// The input path does not name a file, so no default can be derived from it.
    #[error("input path has no file name: \"{0}\"")]
    InvalidInput(String),
}

/// Parse the raw command line and resolve the invocation with its defaults.
pub fn run(line: &str) -> Result<Invocation, Error> {
    let set = cli::arguments();

    let args = ParsedArgs::from_command_line(line, &set)?;
    tracing::debug!(
        specified = args.iter().filter(|(_, x)| x.is_specified()).count(),
        "arguments bound"
    );

    let invocation = Invocation::from_args(&args)?;
    tracing::debug!(?invocation, "invocation resolved");

    Ok(invocation)
}

/// Render the report printed on stdout: the resolved invocation, or the error followed by the
/// usage. User input errors are only logged at debug level.
pub fn report(res: &Result<Invocation, Error>) -> String {
    match res {
        Ok(invocation) => {
            tracing::info!(
                input = %invocation.input.display(),
                output = %invocation.output.display(),
                namespace = %invocation.namespace,
                "ready to generate"
            );
            invocation.to_string()
        }
        Err(err) => {
            tracing::debug!(%err, "invalid command line");
            format!("{err}\n\n{}", cli::usage(&cli::arguments()))
        }
    }
}
