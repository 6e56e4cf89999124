//! Command line surface of the `regen` tool.

use std::ffi::OsString;

use crate::Error;
use crate::cmdline::{ArgumentKind, ArgumentSet, ArgumentSpec};

/// Primary name of the input schema argument.
pub const IN: &str = "in";

/// Primary name of the generated file argument.
pub const OUT: &str = "out";

/// Primary name of the namespace argument.
pub const NAMESPACE: &str = "namespace";

const HELP: &[(&str, &str)] = &[
    (IN, "path to the .xsd schema, e.g. \"C:\\My Project\\Data.xsd\""),
    (
        OUT,
        "path to the generated file, default is the input path with a .designer.cs extension",
    ),
    (NAMESPACE, "namespace of the generated code, default is the input file name"),
];

const DESCRIPTION: &str = "Runs the typed dataset generator on the specified schema. Use it when \
manual or build-step changes are made to the .xsd file, to regenerate the .designer.cs file \
before building. Values containing spaces must be enclosed in double quotes.";

/// Declare the arguments accepted by the tool.
pub fn arguments() -> ArgumentSet {
    let mut set = ArgumentSet::new();

    set.register(ArgumentSpec::new(IN, ArgumentKind::Path).alias("i").required());
    set.register(ArgumentSpec::new(OUT, ArgumentKind::Path).alias("o"));
    set.register(ArgumentSpec::new(NAMESPACE, ArgumentKind::Text).alias("n"));

    set
}

/// Render the usage message for the given arguments.
pub fn usage(set: &ArgumentSet) -> String {
    let prefix = set.prefix();
    let mut out = format!("Usage: regen {}\n", set.synopsis());

    for spec in set {
        let mut names = format!("{prefix}{}", spec.primary_name());
        if let Some(alias) = spec.alias_name() {
            names.push_str(&format!(" or {prefix}{alias}"));
        }

        let help = HELP
            .iter()
            .find(|(name, _)| *name == spec.primary_name())
            .map_or("", |(_, help)| *help);

        out.push_str(&format!("   {names}: {help}\n"));
    }

    out.push('\n');
    out.push_str(DESCRIPTION);
    out
}

/// Convert process arguments to strings, rejecting the first one that is not valid UTF-8 rather
/// than silently replacing its bytes.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|x| Error::NonUtf8Argument(x.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Rebuild a raw command line from already split arguments. Arguments that are empty or
/// contain spaces are enclosed in double quotes.
pub fn command_line<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut line = String::new();

    for (i, arg) in args.into_iter().enumerate() {
        let arg = arg.as_ref();

        if i > 0 {
            line.push(' ');
        }

        if arg.is_empty() || arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::cmdline::{ParsedArgs, tokenize};

    use super::*;

    #[test]
    fn it_should_declare_tool_arguments() {
        let set = arguments();

        assert_that!(set.len(), eq(3));
        assert_that!(set.lookup("i").map(|x| x.primary_name()), eq(Some(IN)));
        assert_that!(set.lookup("o").map(|x| x.primary_name()), eq(Some(OUT)));
        assert_that!(set.lookup("n").map(|x| x.primary_name()), eq(Some(NAMESPACE)));
        assert_that!(set.lookup(IN).map(|x| x.is_required()), eq(Some(true)));
    }

    #[test]
    fn it_should_render_usage() {
        let text = usage(&arguments());

        assert_that!(
            text.as_str(),
            starts_with("Usage: regen -in <path> [-out <path>] [-namespace <text>]\n")
        );
        assert_that!(text.as_str(), contains_substring("   -in or -i: path to the .xsd schema"));
        assert_that!(text.as_str(), contains_substring("   -namespace or -n: namespace"));
        assert_that!(text.as_str(), ends_with("enclosed in double quotes."));
    }

    #[test]
    fn it_should_quote_arguments_with_spaces() {
        let line = command_line(["/usr/bin/regen", "-in", "/my data/a.xsd", ""]);

        assert_that!(line.as_str(), eq(r#"/usr/bin/regen -in "/my data/a.xsd" """#));
    }

    #[test]
    fn it_should_convert_utf8_args() {
        let args = utf8_args(["regen", "-in", "données.xsd"].map(OsString::from));

        assert_that!(
            args,
            eq(&Ok(vec![
                "regen".to_string(),
                "-in".to_string(),
                "données.xsd".to_string()
            ]))
        );
    }

    #[cfg(unix)]
    #[test]
    fn it_should_reject_non_utf8_args() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(vec![b'a', 0xff, b'.', b'x']);
        let args = utf8_args([OsString::from("regen"), OsString::from("-in"), bad]);

        assert_that!(
            args,
            eq(&Err(Error::NonUtf8Argument("a\u{FFFD}.x".to_string())))
        );
    }

    #[test]
    fn it_should_rebuild_tokens_faithfully() {
        let argv = ["regen", "-in", "/my data/a b.xsd", "-namespace", "Demo"];
        let line = command_line(argv);

        let tokens = tokenize(&line).unwrap();
        assert_that!(tokens, eq(&argv.map(String::from).to_vec()));

        let set = arguments();
        let args = ParsedArgs::from_command_line(&line, &set).unwrap();
        assert_that!(args.get(IN), eq(Some("/my data/a b.xsd")));
    }
}
