//! Console confirmation output

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Colour-relevant parts of the environment.
#[derive(Debug, Clone, Default)]
pub struct ColorEnv {
    pub no_color: bool,
    pub force_color: bool,
    pub term: Option<String>,
    pub stdout_is_terminal: bool,
}

impl ColorEnv {
    pub fn detect() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            force_color: std::env::var_os("FORCE_COLOR").is_some(),
            term: std::env::var("TERM").ok(),
            stdout_is_terminal: io::stdout().is_terminal(),
        }
    }
}

/// Decide how stdout is coloured.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; `TERM=dumb` and non-terminals get
/// plain bytes unless colour is forced.
pub fn color_choice(env: &ColorEnv) -> ColorChoice {
    // https://no-color.org/
    if env.no_color {
        return ColorChoice::Never;
    }
    if env.force_color {
        return ColorChoice::Always;
    }
    if env.term.as_deref() == Some("dumb") || !env.stdout_is_terminal {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Print `<output path> generated successfully.` to stdout.
pub fn print_confirmation(output_path: &Path, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_confirmation(&mut stdout, output_path)
}

/// Write the confirmation line to any colour-capable writer.
pub fn write_confirmation<W: WriteColor>(out: &mut W, output_path: &Path) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", output_path.display())?;
    out.reset()?;
    writeln!(out, " generated successfully.")?;
    out.flush()
}
