//! Line-oriented form loop over stdin/stdout.

use projboard_core::App;
use std::io::{self, BufRead, Write};

/// Reads one form per iteration until input ends.
///
/// Each form is three lines: title, description, people. Rejected forms are
/// reported through the app's alert sink and their fields are kept, so the
/// next iteration overwrites them.
pub fn run(app: &mut App, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        let Some(title) = prompt(&mut lines, &mut output, "Title: ")? else {
            break;
        };
        let Some(description) = prompt(&mut lines, &mut output, "Description: ")? else {
            break;
        };
        let Some(people) = prompt(&mut lines, &mut output, "People: ")? else {
            break;
        };

        let form = app.input_mut();
        form.set_title(title);
        form.set_description(description);
        form.set_people(people);
        if form.submit().is_ok() {
            writeln!(output, "\n{}", app.render())?;
        }
    }
    output.flush()
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    output: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    lines.next().transpose()
}
