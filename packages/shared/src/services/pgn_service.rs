use once_cell::sync::Lazy;
use regex::Regex;

static MOVE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.").expect("MOVE_NUMBER_RE regex should be valid"));
static BRACE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("BRACE_COMMENT_RE regex should be valid"));
static PAREN_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("PAREN_COMMENT_RE regex should be valid"));
static TAG_PAIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("TAG_PAIR_RE regex should be valid"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE regex should be valid"));
static RESULT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(1-0|0-1|1/2-1/2)\s*$").expect("RESULT_RE regex should be valid"));

pub struct PgnService;

impl PgnService {
    /// Renders the move list as a numbered transcript: `1. e2e4 e7e5 2. g1f3`.
    /// The pair number advances after each white/black pair.
    pub fn synthesize(moves: &[String]) -> String {
        if moves.is_empty() {
            return String::new();
        }

        let mut pgn = String::new();
        let mut move_number = 1;
        let mut white_to_move = true;

        for notation in moves {
            if white_to_move {
                pgn.push_str(&move_number.to_string());
                pgn.push_str(". ");
            }
            pgn.push_str(notation);
            pgn.push(' ');

            white_to_move = !white_to_move;
            if white_to_move {
                move_number += 1;
            }
        }

        pgn.trim_end().to_string()
    }

    /// Strips move numbers, comments, tag pairs and a trailing result token,
    /// then splits what remains into move tokens.
    pub fn parse(text: &str) -> Vec<String> {
        let cleaned = MOVE_NUMBER_RE.replace_all(text, "");
        let cleaned = BRACE_COMMENT_RE.replace_all(&cleaned, "");
        let cleaned = PAREN_COMMENT_RE.replace_all(&cleaned, "");
        let cleaned = TAG_PAIR_RE.replace_all(&cleaned, "");
        let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
        let cleaned = RESULT_RE.replace_all(cleaned.trim(), "");

        cleaned
            .split_whitespace()
            .map(|token| token.to_string())
            .collect()
    }
}
