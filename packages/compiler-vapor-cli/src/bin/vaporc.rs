/**
 * Vue Vapor Compiler CLI - vaporc
 *
 * Compiles one element described as JSON.
 */
use clap::{Arg, Command};
use compiler_vapor_cli::{compile_file, render_output, Emit};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("vaporc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Vue Vapor element compiler")
        .arg(
            Arg::new("input")
                .value_name("ELEMENT_JSON")
                .required(true)
                .help("Path to the element JSON"),
        )
        .arg(
            Arg::new("options")
                .short('o')
                .long("options")
                .value_name("PATH")
                .help("Path to compiler options JSON"),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .value_name("KIND")
                .value_parser(["ir", "code"])
                .default_value("code")
                .help("Print the IR or the generated code"),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .unwrap_or_default();
    let options = matches.get_one::<String>("options").map(PathBuf::from);
    let emit = matches
        .get_one::<String>("emit")
        .and_then(|value| Emit::parse(value))
        .unwrap_or(Emit::Code);

    let output = match compile_file(&input, options.as_deref()) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    };

    for error in &output.errors {
        eprintln!("Error: {}", error.contextual_message());
    }

    match render_output(&output, emit) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }

    if !output.errors.is_empty() {
        process::exit(1);
    }
}
