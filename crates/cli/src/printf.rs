// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! printf-style interpolation of shell arguments for `errcheck fatalf`.
//!
//! Supported verbs: `%s`, `%v`, `%d`, `%q` and the `%%` escape. Mistakes are
//! rendered inline rather than rejected:
//!
//! - missing argument: `%!d(MISSING)`
//! - `%d` with a non-integer, or an unknown verb: `%!d(string=abc)`
//! - trailing `%`: `%!(NOVERB)`
//! - unused arguments: `%!(EXTRA string=a, string=b)`

use std::fmt::Write;

pub fn sprintf(format: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        match args.next() {
            Some(arg) => render(&mut out, verb, arg),
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
        }
    }

    let extra: Vec<String> = args.map(|a| format!("string={a}")).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }
    out
}

fn render(out: &mut String, verb: char, arg: &str) {
    match verb {
        's' | 'v' => out.push_str(arg),
        'd' => match arg.parse::<i64>() {
            Ok(n) => {
                let _ = write!(out, "{n}");
            }
            Err(_) => {
                let _ = write!(out, "%!d(string={arg})");
            }
        },
        'q' => {
            let _ = write!(out, "{arg:?}");
        }
        other => {
            let _ = write!(out, "%!{other}(string={arg})");
        }
    }
}

#[cfg(test)]
#[path = "printf_tests.rs"]
mod tests;
