use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Split text into word tokens (`\w+` runs), in order of appearance.
///
/// No case folding, stopword removal or stemming is applied: `Milk` and
/// `milk` are different terms.
pub fn tokenize(text: &str) -> Vec<&str> {
    RE.find_iter(text).map(|m| m.as_str()).collect()
}
