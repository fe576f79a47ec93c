use std::io::{self, Stderr, Stdout, Write};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

pub struct OtpWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl OtpWriter {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for OtpWriter {
    fn default() -> Self {
        OtpWriter::new()
    }
}

pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);

    // Cursor home, then erase to the end of the screen
    fn clear_screen(&mut self) {
        self.write(CLEAR_SCREEN);
    }
}

impl OutErr for OtpWriter {
    fn write_err(&mut self, s: &str) {
        match self.err.write_all(s.as_bytes()) {
            Ok(_) => (),
            Err(e) => eprintln!("{}", e),
        }
    }

    fn write(&mut self, s: &str) {
        let result = self
            .out
            .write_all(s.as_bytes())
            .and_then(|_| self.out.flush());
        match result {
            Ok(_) => (),
            Err(e) => eprintln!("{}", e),
        }
    }
}
