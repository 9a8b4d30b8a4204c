use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use nextword::{DEFAULT_CANDIDATE_NUM, Nextword, Params};

const USAGE: &str =
    "usage: cargo run -p nextword --example suggest -- <data-dir> [--greedy] [--candidate-num=N]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let data_dir = args.next().map(PathBuf::from).context(USAGE)?;

    let mut greedy = false;
    let mut candidate_num = DEFAULT_CANDIDATE_NUM;
    for arg in args {
        if arg == "--greedy" {
            greedy = true;
        } else if let Some(raw) = arg.strip_prefix("--candidate-num=") {
            candidate_num = raw
                .parse()
                .with_context(|| format!("invalid candidate count {raw:?}"))?;
        } else {
            bail!("unexpected argument {arg:?}\n{USAGE}");
        }
    }

    let nw = Nextword::new(
        Params::new(&data_dir)
            .candidate_num(candidate_num)
            .greedy(greedy),
    )
    .with_context(|| format!("opening data directory {}", data_dir.display()))?;

    // One request per line, candidates on one line separated by spaces.
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let candidates = nw.suggest(&line)?;
        writeln!(stdout, "{}", candidates.join(" "))?;
        stdout.flush()?;
    }

    Ok(())
}
