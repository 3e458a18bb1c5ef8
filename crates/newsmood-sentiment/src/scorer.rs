//! Rule-based polarity model for English news headlines.
//!
//! Word valences live on a `[-4.0, 4.0]` scale. A headline's valences are
//! adjusted for boosters, negation, capitalised emphasis, contrastive "but"
//! and exclamation marks, summed, then squashed into a compound score in
//! `[-1.0, 1.0]`.

use crate::error::ClassificationError;

/// Word valences. Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("strong", 2.3),
    ("stronger", 2.1),
    ("strength", 2.2),
    ("win", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    ("victory", 2.8),
    ("success", 2.7),
    ("successful", 2.8),
    ("gain", 2.4),
    ("gains", 1.8),
    ("growth", 1.6),
    ("grow", 1.6),
    ("growing", 1.4),
    ("boost", 1.7),
    ("boosts", 1.5),
    ("rally", 1.6),
    ("rallies", 1.5),
    ("surge", 1.8),
    ("surges", 1.8),
    ("soar", 2.0),
    ("soars", 2.0),
    ("record", 0.9),
    ("profit", 1.9),
    ("profits", 1.9),
    ("recovery", 1.4),
    ("recover", 1.3),
    ("rebound", 1.2),
    ("improve", 1.9),
    ("improves", 1.8),
    ("improved", 2.1),
    ("optimism", 2.5),
    ("optimistic", 2.3),
    ("hope", 1.9),
    ("hopes", 1.8),
    ("confidence", 2.3),
    ("confident", 2.2),
    ("breakthrough", 2.3),
    ("innovative", 2.2),
    ("approve", 2.0),
    ("approved", 1.8),
    ("agreement", 2.2),
    ("deal", 0.8),
    ("support", 1.7),
    ("safe", 1.9),
    ("secure", 1.4),
    ("stable", 1.2),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("celebrate", 2.7),
    ("praise", 2.6),
    ("happy", 2.7),
    ("love", 3.2),
    ("welcome", 2.0),
    ("thrive", 2.6),
    ("thriving", 2.6),
    ("upbeat", 2.2),
    ("boom", 1.6),
    ("positive", 2.6),
    ("opportunity", 1.8),
    ("award", 2.5),
    ("rescue", 1.5),
    ("peace", 2.5),
    // Negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lose", -1.7),
    ("loses", -1.3),
    ("lost", -1.3),
    ("fall", -0.9),
    ("falls", -1.1),
    ("fell", -1.1),
    ("drop", -1.1),
    ("drops", -1.1),
    ("decline", -1.1),
    ("declines", -1.0),
    ("plunge", -2.1),
    ("plunges", -2.1),
    ("slump", -1.8),
    ("crash", -1.7),
    ("crashes", -1.7),
    ("crisis", -3.1),
    ("recession", -2.0),
    ("layoffs", -1.9),
    ("layoff", -1.9),
    ("cuts", -1.2),
    ("shutdown", -1.5),
    ("shuts", -1.0),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("fear", -2.2),
    ("fears", -1.8),
    ("worry", -1.9),
    ("worries", -1.8),
    ("concern", -1.4),
    ("concerns", -1.4),
    ("risk", -1.1),
    ("risks", -1.1),
    ("threat", -2.4),
    ("threatens", -2.0),
    ("warning", -1.4),
    ("warns", -0.4),
    ("fail", -2.5),
    ("fails", -1.8),
    ("failed", -2.3),
    ("failure", -2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("scandal", -1.9),
    ("fraud", -2.8),
    ("lawsuit", -0.9),
    ("sued", -1.1),
    ("ban", -2.6),
    ("banned", -2.0),
    ("illegal", -2.6),
    ("recall", -0.4),
    ("dangerous", -2.1),
    ("harmful", -2.6),
    ("death", -2.9),
    ("dead", -3.3),
    ("killed", -3.5),
    ("war", -2.9),
    ("attack", -2.1),
    ("violence", -3.1),
    ("disaster", -3.1),
    ("chaos", -2.7),
    ("collapse", -2.2),
    ("uncertainty", -1.4),
    ("volatile", -1.1),
    ("inflation", -0.8),
    ("angry", -2.3),
    ("anger", -2.7),
    ("sad", -2.1),
    ("hate", -2.7),
    ("terrible", -2.1),
    ("negative", -2.7),
    ("struggle", -1.5),
    ("struggles", -1.5),
    ("pressure", -1.2),
    ("debt", -1.5),
    ("strike", -0.5),
    ("protest", -1.0),
    ("criticism", -1.9),
    ("slams", -1.7),
];

/// Words that shift the valence of the word after them.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", B_INCR),
    ("extremely", B_INCR),
    ("hugely", B_INCR),
    ("highly", B_INCR),
    ("incredibly", B_INCR),
    ("really", B_INCR),
    ("so", B_INCR),
    ("most", B_INCR),
    ("more", B_INCR),
    ("sharply", B_INCR),
    ("massive", B_INCR),
    ("deeply", B_INCR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("barely", B_DECR),
    ("marginally", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("partly", B_DECR),
];

/// Words that invert the valence of the next three words.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
    "can't", "cant", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont",
    "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "hardly",
];

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZE_ALPHA: f64 = 15.0;

/// Polarity breakdown for one text.
///
/// `pos`, `neu` and `neg` are proportions that sum to 1.0 (or are all 0.0
/// for empty text). `compound` is the normalized overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A model that scores the polarity of a piece of text.
///
/// Implementations must be deterministic for a given input.
pub trait PolarityModel: Send + Sync {
    /// Score `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError`] if the model cannot score the text.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, ClassificationError>;
}

/// The built-in lexicon and rule model. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconModel;

impl PolarityModel for LexiconModel {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, ClassificationError> {
        Ok(score_text(text))
    }
}

/// Compound score of `text` under the built-in lexicon.
///
/// Returns `0.0` for empty text or text with no lexicon words.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    score_text(text).compound
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|&(_, v)| v)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// A token with its lowercase form and whether it was written in capitals.
struct Token {
    lower: String,
    shouted: bool,
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if word.is_empty() {
                return None;
            }
            let has_letters = word.chars().any(char::is_alphabetic);
            Some(Token {
                lower: word.to_lowercase(),
                shouted: has_letters && word.chars().count() > 1 && word == word.to_uppercase(),
            })
        })
        .collect()
}

fn score_text(text: &str) -> PolarityScores {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return PolarityScores::default();
    }

    // Capitalised emphasis only counts when the text is not entirely shouted.
    let mixed_case = tokens.iter().any(|t| !t.shouted);
    let but_index = tokens.iter().position(|t| t.lower == "but");

    let mut valences = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        if lookup(BOOSTERS, &token.lower).is_some() {
            valences.push(0.0);
            continue;
        }
        let Some(base) = lookup(LEXICON, &token.lower) else {
            valences.push(0.0);
            continue;
        };

        let mut valence = base;
        if token.shouted && mixed_case {
            valence += CAPS_INCR.copysign(base);
        }

        // Boosters up to three words back, decaying with distance.
        for (distance, decay) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            let Some(prev) = i.checked_sub(distance).map(|j| &tokens[j]) else {
                break;
            };
            if let Some(scalar) = lookup(BOOSTERS, &prev.lower) {
                // Boosters push away from zero, dampeners toward it.
                valence += scalar * decay * base.signum();
            }
        }

        let negated = (1..=3)
            .filter_map(|d| i.checked_sub(d))
            .any(|j| is_negation(&tokens[j].lower));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        if let Some(b) = but_index {
            if i < b {
                valence *= 0.5;
            } else if i > b {
                valence *= 1.5;
            }
        }

        valences.push(valence);
    }

    let mut sum: f64 = valences.iter().sum();
    if sum != 0.0 {
        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        #[allow(clippy::cast_precision_loss)]
        let emphasis = exclamations as f64 * EXCLAMATION_INCR;
        sum += emphasis.copysign(sum);
    }

    let compound = normalize(sum);
    let (pos, neu, neg) = proportions(&valences);

    PolarityScores {
        neg,
        neu,
        pos,
        compound,
    }
}

/// Squash an unbounded sum into `[-1.0, 1.0]`.
fn normalize(sum: f64) -> f64 {
    let score = sum / (sum * sum + NORMALIZE_ALPHA).sqrt();
    score.clamp(-1.0, 1.0)
}

/// Share of positive, neutral and negative weight across the tokens.
fn proportions(valences: &[f64]) -> (f64, f64, f64) {
    let mut pos = 0.0;
    let mut neg = 0.0;
    let mut neu = 0.0;
    for &v in valences {
        if v > 0.0 {
            pos += v + 1.0;
        } else if v < 0.0 {
            neg += v.abs() + 1.0;
        } else {
            neu += 1.0;
        }
    }
    let total = pos + neg + neu;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (pos / total, neu / total, neg / total)
}
