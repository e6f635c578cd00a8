/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text
/// - Error message formatting
use std::io::{self, Write};

/// Print colored text to stdout, plain when no terminal is available
fn print_color(s: &str, fg: term::color::Color) {
    write_color(term::stdout(), &mut io::stdout(), s, fg);
}

/// Color through `terminal` when there is one; anything short of a
/// successful colored write falls back to plain text on `plain`
fn write_color<T, W>(terminal: Option<Box<T>>, plain: &mut W, s: &str, fg: term::color::Color)
where
    T: term::Terminal + ?Sized,
    W: Write,
{
    let colored = match terminal {
        Some(mut t) => write_colored(&mut *t, s, fg).is_ok(),
        None => false,
    };
    if !colored {
        let _ = write!(plain, "{}", s);
    }
}

fn write_colored<T: term::Terminal + ?Sized>(t: &mut T, s: &str, fg: term::color::Color) -> term::Result<()> {
    t.fg(fg)?;
    let _ = t.attr(term::Attr::Bold);
    write!(t, "{}", s)?;
    let _ = t.reset();
    Ok(())
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}
