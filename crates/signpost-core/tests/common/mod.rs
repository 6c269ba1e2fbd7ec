use signpost_core::{Formatter, GlobalOptions};

/// Options with colors turned on
pub fn colored() -> GlobalOptions {
    GlobalOptions { show_colors: true }
}

/// Options with colors turned off
pub fn plain() -> GlobalOptions {
    GlobalOptions { show_colors: false }
}

/// Removes every ANSI escape sequence from `s`
#[allow(dead_code)]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Runs `f` with a formatter over `options`
#[allow(dead_code)]
pub fn with_formatter<T>(options: &GlobalOptions, f: impl FnOnce(Formatter<'_>) -> T) -> T {
    f(Formatter::new(options))
}
