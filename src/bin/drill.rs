//! Console classification drill: fizz/buzz/POP over 7..=120.
//!
//! One line per number — the matched labels concatenated, the number itself
//! when nothing matches, and the override name for numbers divisible by 3,
//! 5, and 7 at once.
//!
//! Usage:
//!   drill [NAME]
//!
//! `NAME` replaces the default override label ("Craig Barkley").

use std::env;
use std::io;

use kyu::classify::RuleSet;
use kyu::Error;

const DEFAULT_OVERRIDE: &str = "Craig Barkley";

fn main() -> Result<(), Error> {
    let name = env::args().nth(1).unwrap_or_else(|| DEFAULT_OVERRIDE.to_owned());

    let rules = RuleSet::from_pairs(&[(3, "fizz"), (5, "buzz"), (7, "POP")])?
        .with_override(name);

    rules.emit(7..=120, &mut io::stdout().lock())?;
    Ok(())
}
