//! A small command-line front end over `pathmux`, for exploring how a set
//! of patterns behaves without writing any Rust.
//!
//! ```text
//! pathmux register patterns.txt
//! pathmux match patterns.txt GET example.com /items/42
//! pathmux relate "/items/{id}" "/items/42"
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use pathmux::{describe_relationship, Pattern, PatternSet};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("register") => run_register(&args[1..]),
        Some("match") => run_match(&args[1..]),
        Some("relate") => run_relate(&args[1..]),
        _ => {
            eprintln!("usage: pathmux <register|match|relate> ...");
            ExitCode::FAILURE
        }
    }
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

/// Register every pattern line in `text` into `set`, reporting each one as
/// it goes. Does not stop at the first bad line: a malformed pattern or a
/// conflict is reported and the rest of the file is still processed.
fn register_all(set: &PatternSet, text: &str, report: bool) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Pattern::parse(line) {
            Ok(pattern) => {
                let rendered = pattern.to_string();
                match set.register(pattern) {
                    Ok(()) => {
                        if report {
                            println!("ok: {rendered}");
                        }
                    }
                    Err(conflict) => {
                        if report {
                            println!("conflict: {conflict}");
                        } else {
                            eprintln!("conflict: {conflict}");
                        }
                    }
                }
            }
            Err(e) => {
                if report {
                    println!("error: {line}: {e}");
                } else {
                    eprintln!("error: {line}: {e}");
                }
            }
        }
    }
}

fn run_register(args: &[String]) -> ExitCode {
    let Some(path) = args.first() else {
        eprintln!("usage: pathmux register <file|->");
        return ExitCode::FAILURE;
    };
    match read_source(path) {
        Ok(text) => {
            let set = PatternSet::new();
            register_all(&set, &text, true);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("reading {path}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_match(args: &[String]) -> ExitCode {
    let [path, method, host, request_path] = args else {
        eprintln!("usage: pathmux match <file|-> <method> <host> <path>");
        return ExitCode::FAILURE;
    };
    let text = match read_source(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("reading {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let set = PatternSet::new();
    register_all(&set, &text, false);

    match set.matches(method, host, request_path) {
        Some(m) => {
            println!("matched: {}", m.pattern);
            let mut names: Vec<_> = m.bindings.keys().collect();
            names.sort();
            for name in names {
                println!("  {name} = {}", m.bindings[name]);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("no match");
            ExitCode::SUCCESS
        }
    }
}

fn run_relate(args: &[String]) -> ExitCode {
    let [a, b] = args else {
        eprintln!("usage: pathmux relate <pattern1> <pattern2>");
        return ExitCode::FAILURE;
    };
    match describe_relationship(a, b) {
        Ok(description) => {
            println!("{description}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
