//! Interactive console for the Kamasutra cipher.
//!
//! Prints the source and mapped lowercase alphabets, asks for a mode and one
//! line of text, and prints the transformed result.

use std::io::{self, BufRead, Write};

use kamasutra::{alphabet, KamasutraCipher, Mode};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let cipher = KamasutraCipher::new();

    writeln!(out, "SRC LOWER: {}", alphabet::lower_alphabet())?;
    writeln!(out, "MAP LOWER: {}", cipher.perm_lower())?;
    writeln!(out)?;

    writeln!(
        out,
        "Камасутра (RU, с Ё/ё). Выберите режим: 1) Шифровать  2) Расшифровать"
    )?;
    let mode = read_mode(&mut input, &mut out)?;

    write!(out, "Введите текст: ")?;
    out.flush()?;
    let text = read_line(&mut input)?;

    let result = match mode {
        Mode::Encrypt => cipher.encrypt(&text),
        Mode::Decrypt => cipher.decrypt(&text),
    };
    writeln!(out, "Результат: {}", result)?;

    Ok(())
}

/// Reads lines until a valid mode selector is entered, re-prompting on
/// invalid input.
fn read_mode(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Mode> {
    loop {
        let line = read_line(input)?;
        match Mode::parse(&line) {
            Ok(mode) => return Ok(mode),
            Err(_) => {
                write!(out, "Повторите ввод (1-2): ")?;
                out.flush()?;
            }
        }
    }
}

/// Reads one line from the console, without the trailing line break.
///
/// # Errors
/// Returns `UnexpectedEof` if the stream is closed before a line arrives.
fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input closed",
        ));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
