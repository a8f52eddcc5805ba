//! Command-line flags.

use digest_core::{DigestConfig, SegmenterKind};

pub const USAGE: &str = "\
review-digest: summarize product review comments

Usage: review-digest [options] < input

Input (stdin):
  {\"comments\": [\"text\", {\"text\": \"...\", \"rating\": 1-5}, ...]}
  or plain text with one comment per line

Options:
  --sentences <n>          Sentences to extract from large comment sets (default 2)
  --segmenter <kind>       plain, annotated or none (default annotated)
  -h, --help               Show this help message

Environment:
  DIGEST_TARGET_SENTENCES, DIGEST_SEGMENTER, DIGEST_VOCABULARY, RUST_LOG";

/// Settings given on the command line; they take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub target_sentences: Option<usize>,
    pub segmenter: Option<SegmenterKind>,
}

impl Overrides {
    pub fn apply(&self, config: &mut DigestConfig) {
        if let Some(n) = self.target_sentences {
            config.target_sentences = n;
        }
        if let Some(kind) = self.segmenter {
            config.segmenter = kind;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Summarize(Overrides),
}

/// Parse arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut overrides = Overrides::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--sentences" => {
                let value = iter.next().ok_or("--sentences needs a value")?;
                let n = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("Invalid sentence count: {}", value))?;
                overrides.target_sentences = Some(n);
            }
            "--segmenter" => {
                let value = iter.next().ok_or("--segmenter needs a value")?;
                let kind = value.parse::<SegmenterKind>().map_err(|e| e.to_string())?;
                overrides.segmenter = Some(kind);
            }
            other => {
                return Err(format!(
                    "Unknown option: {}. Use 'review-digest --help' for usage.",
                    other
                ))
            }
        }
    }

    Ok(Command::Summarize(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(&[]), Ok(Command::Summarize(Overrides::default())));
    }

    #[test]
    fn test_flags() {
        let cmd = parse_args(&args(&["--sentences", "3", "--segmenter", "plain"])).unwrap();
        assert_eq!(
            cmd,
            Command::Summarize(Overrides {
                target_sentences: Some(3),
                segmenter: Some(SegmenterKind::Plain),
            })
        );
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse_args(&args(&["--sentences", "3", "-h"])), Ok(Command::Help));
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_args(&args(&["--sentences", "zero"])).is_err());
        assert!(parse_args(&args(&["--sentences", "0"])).is_err());
        assert!(parse_args(&args(&["--sentences"])).is_err());
        assert!(parse_args(&args(&["--segmenter", "spacy"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = DigestConfig::default();
        Overrides {
            target_sentences: Some(3),
            segmenter: Some(SegmenterKind::None),
        }
        .apply(&mut config);
        assert_eq!(config.target_sentences, 3);
        assert_eq!(config.segmenter, SegmenterKind::None);
    }
}
