use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Single-dash spellings of `--decks` and `--unique`, accepted among terms.
const DECKS_TERM: &str = "-decks";
const UNIQUE_TERM: &str = "-unique";

const AFTER_HELP: &str = "\
Terms:
  <deck>                   load a saved deck ('*' loads the whole collection)
  -<attr>                  print an attribute
  -<attr>#                 use an attribute without printing it
  -<attr><op><value>       keep cards matching the clause
  -<attr><op><v>/<op><v>   keep cards matching at least one clause
  -<stat>-<attr>           report total, max, min, avg, median or unique
  -decks, -unique          same as --decks and --unique

Operators:
  numbers   =  !=  <  <=  >  >=
  text      =  !=  ?  (contains)  !?  (does not contain)

Examples:
  cardq elves -amount -name -cmc<2/>5
  cardq '*' -name -type#?Creature -usd>=1_5
  cardq '*' -total-usd -median-cmc

Options must come before the first term.";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cardq", bin_name = "cardq", version)]
#[command(about = "Query a trading-card collection with attribute flags", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Deck names and attribute flags (e.g. elves -name -cmc<3 -total-usd)
    #[arg(
        value_name = "TERMS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub terms: Vec<String>,

    /// List saved decks
    #[arg(long)]
    pub decks: bool,

    /// Report how many result rows matched
    #[arg(long)]
    pub unique: bool,

    /// Deck directory (overrides CARDQ_DECK_DIR and the config file)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Split terms into (deck names, attribute tokens), keeping order.
    /// The `-decks`/`-unique` switches belong to neither.
    pub fn split_terms(&self) -> (Vec<&str>, Vec<&str>) {
        self.terms
            .iter()
            .map(String::as_str)
            .filter(|term| *term != DECKS_TERM && *term != UNIQUE_TERM)
            .partition(|term| !term.starts_with('-'))
    }

    pub fn lists_decks(&self) -> bool {
        self.decks || self.has_term(DECKS_TERM)
    }

    pub fn counts_unique(&self) -> bool {
        self.unique || self.has_term(UNIQUE_TERM)
    }

    fn has_term(&self, switch: &str) -> bool {
        self.terms.iter().any(|term| term == switch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cardq").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn attribute_flags_are_terms() {
        let cli = parse(&["elves", "-name", "-cmc<2/>5", "-total-usd"]);
        let (decks, tokens) = cli.split_terms();
        assert_eq!(decks, vec!["elves"]);
        assert_eq!(tokens, vec!["-name", "-cmc<2/>5", "-total-usd"]);
    }

    #[test]
    fn leading_attribute_flag_is_a_term() {
        let cli = parse(&["-avg-cmc", "*"]);
        let (decks, tokens) = cli.split_terms();
        assert_eq!(decks, vec!["*"]);
        assert_eq!(tokens, vec!["-avg-cmc"]);
    }

    #[test]
    fn options_before_terms() {
        let cli = parse(&["--decks", "--unique", "--output", "json", "-v", "elves"]);
        assert!(cli.decks);
        assert!(cli.unique);
        assert!(cli.verbose);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.terms, vec!["elves"]);
    }

    #[test]
    fn single_dash_switches() {
        let cli = parse(&["elves", "-unique", "-name", "-decks", "-unique-name"]);
        assert!(cli.lists_decks());
        assert!(cli.counts_unique());
        let (decks, tokens) = cli.split_terms();
        assert_eq!(decks, vec!["elves"]);
        assert_eq!(tokens, vec!["-name", "-unique-name"]);

        let plain = parse(&["elves", "-name"]);
        assert!(!plain.lists_decks());
        assert!(!plain.counts_unique());
    }

    #[test]
    fn no_arguments() {
        let cli = parse(&[]);
        assert!(cli.terms.is_empty());
        assert_eq!(cli.output, OutputFormat::Text);
    }
}
