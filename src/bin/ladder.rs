use std::path::PathBuf;

use clap::Parser;
use ladder_paths::{
    ladder::{dictionary::Dictionary, search::find_ladder},
    logging,
    utility::get_progressspinner,
};
use serde_json::json;
use tracing::error;

/// Finds a shortest word ladder between two words. Consecutive words differ
/// by one substitution, insertion or deletion.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace separated word list
    #[arg(short, long, env = "LADDER_PATHS_DICTIONARY")]
    dictionary: PathBuf,
    /// First word of the ladder
    #[arg(short, long)]
    begin: String,
    /// Last word of the ladder, must be in the dictionary
    #[arg(short, long)]
    end: String,
    /// Print the ladder as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let spinner = get_progressspinner("Reading dictionary");
    let dictionary = Dictionary::from_file(&args.dictionary);
    spinner.finish_and_clear();
    let dictionary = match dictionary {
        Ok(dictionary) => dictionary,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let begin = args.begin.to_lowercase();
    let end = args.end.to_lowercase();

    match find_ladder(&begin, &end, &dictionary) {
        Ok(ladder) if args.json => {
            let words = ladder.map(|ladder| ladder.words);
            println!("{}", json!({ "begin": begin, "end": end, "ladder": words }));
        }
        Ok(Some(ladder)) => println!("Word ladder found: {}", ladder.words.join(" -> ")),
        Ok(None) => println!("No word ladder found."),
        Err(err) => {
            eprintln!("Error: {} (word1: '{}', word2: '{}')", err, begin, end);
            std::process::exit(2);
        }
    }
}
