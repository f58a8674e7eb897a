//! rulex CLI
//!
//! Tokenizes a rule file and lists its tokens.

use std::io::{self, BufWriter, Write};

use rulexc::{parse_args, run, Command, DriverError, USAGE};

fn main() {
    rulexc::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Lex(options)) => options,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(&options, &mut out).and_then(|_| out.flush().map_err(DriverError::from));
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
