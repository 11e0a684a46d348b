use std::io::{self, BufRead, IsTerminal, Write};

pub(crate) fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Ask a yes/no question on stderr; anything but "y"/"yes" is a no.
pub(crate) fn confirm(question: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
