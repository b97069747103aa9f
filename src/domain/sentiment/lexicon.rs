use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Valences on a -4..=4 scale, tuned for news headlines.
static VALENCES: &[(&str, f64)] = &[
    // Positive
    ("acclaim", 2.1),
    ("accomplish", 1.8),
    ("achieve", 1.6),
    ("admire", 2.1),
    ("advance", 1.1),
    ("amazing", 2.8),
    ("award", 2.5),
    ("awesome", 3.1),
    ("beat", 1.2),
    ("beautiful", 2.9),
    ("benefit", 1.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bold", 1.1),
    ("boom", 1.9),
    ("boost", 1.7),
    ("brave", 2.4),
    ("breakthrough", 2.4),
    ("brilliant", 2.8),
    ("bullish", 1.9),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("champion", 2.9),
    ("cheer", 2.3),
    ("clever", 2.0),
    ("comfort", 1.5),
    ("confidence", 2.3),
    ("confident", 2.2),
    ("creative", 1.9),
    ("delight", 2.9),
    ("eager", 1.5),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("encourage", 2.3),
    ("energetic", 1.9),
    ("enjoy", 2.2),
    ("enthusiastic", 1.9),
    ("exceed", 1.6),
    ("excellence", 3.1),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("expand", 1.0),
    ("fair", 1.3),
    ("famous", 1.9),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fun", 2.3),
    ("gain", 1.8),
    ("generous", 2.3),
    ("glad", 2.0),
    ("glory", 2.2),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("grow", 1.4),
    ("growth", 1.6),
    ("happy", 2.7),
    ("healthy", 1.7),
    ("helpful", 1.8),
    ("hero", 2.6),
    ("honor", 2.2),
    ("hope", 1.9),
    ("ideal", 2.4),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improvement", 2.0),
    ("innovative", 1.9),
    ("inspire", 2.7),
    ("inspiring", 2.2),
    ("joy", 2.8),
    ("jump", 1.0),
    ("launch", 0.3),
    ("lead", 0.9),
    ("love", 3.2),
    ("lucky", 1.8),
    ("magnificent", 2.9),
    ("milestone", 1.6),
    ("nice", 1.8),
    ("opportunity", 1.8),
    ("optimism", 2.5),
    ("optimistic", 2.3),
    ("outperform", 1.9),
    ("outstanding", 3.0),
    ("partnership", 1.0),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("popular", 1.8),
    ("positive", 2.6),
    ("praise", 2.6),
    ("profit", 1.9),
    ("profitable", 1.9),
    ("progress", 1.8),
    ("promising", 2.3),
    ("prosper", 2.3),
    ("proud", 2.1),
    ("rally", 1.7),
    ("rebound", 1.5),
    ("record", 1.1),
    ("recover", 1.4),
    ("recovery", 1.4),
    ("relief", 2.1),
    ("remarkable", 2.1),
    ("reward", 2.3),
    ("rich", 2.6),
    ("rise", 1.1),
    ("robust", 1.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("secure", 1.4),
    ("smart", 1.7),
    ("soar", 2.2),
    ("solid", 1.2),
    ("spectacular", 2.6),
    ("splendid", 2.8),
    ("stable", 1.2),
    ("stellar", 2.8),
    ("strength", 2.2),
    ("strong", 2.3),
    ("succeed", 2.2),
    ("success", 2.7),
    ("successful", 2.8),
    ("superb", 3.1),
    ("support", 1.7),
    ("surge", 1.8),
    ("terrific", 2.1),
    ("thrill", 1.5),
    ("thrilled", 1.9),
    ("thrilling", 2.1),
    ("thrive", 2.4),
    ("top", 0.8),
    ("triumph", 3.0),
    ("trust", 2.3),
    ("upbeat", 1.9),
    ("upgrade", 1.6),
    ("valuable", 2.1),
    ("victory", 2.8),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    // Negative
    ("abandon", -1.9),
    ("abuse", -3.2),
    ("accuse", -1.9),
    ("afraid", -2.2),
    ("alarm", -1.4),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoy", -1.9),
    ("anxious", -1.0),
    ("arrest", -1.4),
    ("attack", -2.1),
    ("awful", -2.0),
    ("backlash", -1.9),
    ("bad", -2.5),
    ("ban", -2.6),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("bearish", -1.9),
    ("betray", -3.2),
    ("blame", -1.4),
    ("bleak", -2.4),
    ("breach", -1.8),
    ("broken", -2.1),
    ("brutal", -3.1),
    ("bug", -1.2),
    ("catastrophe", -3.4),
    ("chaos", -2.7),
    ("cheat", -2.1),
    ("collapse", -2.2),
    ("complaint", -1.7),
    ("concern", -1.1),
    ("conflict", -1.3),
    ("controversy", -1.6),
    ("corrupt", -3.0),
    ("corruption", -1.9),
    ("crash", -2.2),
    ("crime", -2.5),
    ("crisis", -3.1),
    ("criticism", -1.9),
    ("criticize", -1.9),
    ("cruel", -2.8),
    ("cut", -1.1),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dead", -3.3),
    ("death", -2.9),
    ("debt", -1.5),
    ("decline", -1.5),
    ("defeat", -2.0),
    ("defect", -1.4),
    ("deficit", -1.7),
    ("delay", -1.3),
    ("depressed", -2.3),
    ("desperate", -1.3),
    ("destroy", -2.7),
    ("devastated", -3.1),
    ("devastating", -3.2),
    ("dire", -2.4),
    ("disappoint", -2.3),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("dismal", -3.0),
    ("dispute", -1.7),
    ("doom", -1.7),
    ("doubt", -1.5),
    ("downgrade", -1.6),
    ("dread", -2.0),
    ("drop", -1.1),
    ("error", -1.7),
    ("evil", -3.4),
    ("fail", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fall", -1.2),
    ("fatal", -2.5),
    ("fear", -2.2),
    ("fight", -1.6),
    ("fire", -1.4),
    ("flaw", -1.6),
    ("fraud", -2.8),
    ("frustrate", -2.0),
    ("frustrated", -2.4),
    ("furious", -2.7),
    ("gloom", -2.6),
    ("grim", -2.7),
    ("guilty", -1.8),
    ("hack", -1.6),
    ("halt", -1.2),
    ("harm", -2.5),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("horrific", -3.4),
    ("hostile", -2.2),
    ("hurt", -2.4),
    ("illegal", -2.6),
    ("injury", -1.7),
    ("investigation", -1.2),
    ("jail", -2.2),
    ("kill", -3.7),
    ("lawsuit", -1.8),
    ("layoff", -2.1),
    ("leak", -1.4),
    ("lie", -1.6),
    ("lose", -1.8),
    ("loss", -1.9),
    ("mess", -1.5),
    ("miss", -1.1),
    ("mistake", -1.4),
    ("negative", -2.7),
    ("nightmare", -2.5),
    ("outage", -1.9),
    ("outrage", -2.3),
    ("pain", -2.3),
    ("panic", -2.3),
    ("pathetic", -2.7),
    ("penalty", -1.9),
    ("pessimistic", -1.5),
    ("plummet", -2.3),
    ("plunge", -2.0),
    ("poison", -2.5),
    ("poor", -2.1),
    ("probe", -1.1),
    ("problem", -1.7),
    ("protest", -1.0),
    ("rage", -2.6),
    ("recall", -1.2),
    ("recession", -2.3),
    ("regret", -1.8),
    ("reject", -1.7),
    ("risk", -1.1),
    ("ruin", -2.8),
    ("sad", -2.1),
    ("scam", -2.7),
    ("scandal", -2.6),
    ("scare", -2.2),
    ("setback", -1.8),
    ("severe", -1.6),
    ("shame", -2.1),
    ("shock", -1.6),
    ("shortage", -1.6),
    ("shutdown", -1.9),
    ("sick", -2.3),
    ("sink", -1.3),
    ("slash", -1.4),
    ("slow", -0.9),
    ("slump", -1.9),
    ("stress", -1.8),
    ("struggle", -1.6),
    ("sue", -1.6),
    ("suffer", -2.1),
    ("suspend", -1.3),
    ("terrible", -2.5),
    ("threat", -2.4),
    ("tragedy", -3.4),
    ("tragic", -3.1),
    ("trouble", -1.7),
    ("tumble", -1.6),
    ("turmoil", -2.2),
    ("ugly", -2.3),
    ("uncertainty", -1.4),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("victim", -2.4),
    ("violation", -2.2),
    ("violence", -3.1),
    ("violent", -2.9),
    ("volatile", -1.0),
    ("war", -2.9),
    ("warn", -1.4),
    ("warning", -1.4),
    ("weak", -1.9),
    ("weakness", -1.8),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Words that scale the valence of the word that follows them.
static BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("enormously", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("massively", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("sharply", 0.293),
    ("significantly", 0.293),
    ("so", 0.293),
    ("substantially", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

static NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mustnt", "neither", "never", "no", "nobody", "none", "nor", "not",
    "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_entries(
        VALENCES.iter().copied(),
        BOOSTERS.iter().copied(),
        NEGATIONS.iter().copied(),
    )
});

/// Word valences plus the modifier words the scorer needs.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    pub fn from_entries<'a>(
        valences: impl IntoIterator<Item = (&'a str, f64)>,
        boosters: impl IntoIterator<Item = (&'a str, f64)>,
        negations: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            valences: valences
                .into_iter()
                .map(|(w, v)| (w.to_lowercase(), v))
                .collect(),
            boosters: boosters
                .into_iter()
                .map(|(w, v)| (w.to_lowercase(), v))
                .collect(),
            negations: negations.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// The built-in headline lexicon, shared process-wide.
    pub fn builtin() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    /// Valence for a lowercase word, trying common inflections when the
    /// word itself is unknown.
    pub fn valence(&self, word: &str) -> Option<f64> {
        if let Some(v) = self.valences.get(word) {
            return Some(*v);
        }
        candidate_stems(word)
            .into_iter()
            .find_map(|stem| self.valences.get(&stem).copied())
    }

    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.replace('\'', ""))
    }
}

fn candidate_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if word.len() < 4 {
        return stems;
    }
    if let Some(base) = word.strip_suffix("ies") {
        stems.push(format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("es") {
        stems.push(base.to_string());
    }
    if let Some(base) = word.strip_suffix('s') {
        stems.push(base.to_string());
    }
    if let Some(base) = word.strip_suffix("ied") {
        stems.push(format!("{base}y"));
    }
    for suffix in ["ed", "ing"] {
        if let Some(base) = word.strip_suffix(suffix) {
            stems.push(base.to_string());
            stems.push(format!("{base}e"));
            if let Some(single) = undouble(base) {
                stems.push(single.to_string());
            }
        }
    }
    stems
}

/// "dropp" -> "drop", "winn" -> "win"
fn undouble(base: &str) -> Option<&str> {
    let mut chars = base.chars().rev();
    let (last, before) = (chars.next()?, chars.next()?);
    let is_consonant = last.is_ascii_alphabetic() && !"aeiou".contains(last);
    (last == before && is_consonant).then(|| &base[..base.len() - last.len_utf8()])
}
