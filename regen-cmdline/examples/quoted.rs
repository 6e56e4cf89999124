use core::panic;

use regen_cmdline::{ArgumentKind, ArgumentSet, ArgumentSpec, ParsedArgs};

struct MyArgs {
    input: String,
    jobs: Option<u32>,
}

fn main() {
    let line = r#"tool.exe -in "C:\My Projects\data.xsd" -jobs 4"#;

    let mut set = ArgumentSet::new();
    set.register(ArgumentSpec::new("in", ArgumentKind::Path).required());
    set.register(ArgumentSpec::new("jobs", ArgumentKind::Number));

    let parsed = ParsedArgs::from_command_line(line, &set).expect("must be parsed");

    let args = MyArgs {
        input: parsed.get("in").expect("must be present").to_owned(),
        jobs: parsed.try_get_one("jobs").expect("must be a number"),
    };

    if args.input != r"C:\My Projects\data.xsd" {
        panic!("invalid input");
    }

    if args.jobs != Some(4) {
        panic!("invalid jobs");
    }
}
