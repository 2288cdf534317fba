//! Fuzzy matching over command history
//!
//! A candidate matches when the query is a case-insensitive subsequence of it.
//! Matches are ranked by a score where lower is better:
//!
//! - a contiguous occurrence of the query scores the character index of its
//!   first occurrence, so earlier matches rank first;
//! - otherwise the score is the number of candidate characters skipped while
//!   greedily consuming the query, so sparser matches rank last.
//!
//! Ties keep the order in which candidates were supplied.

/// A ranked match produced by [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// The matching candidate, as supplied.
    pub text: &'a str,
    /// Match score, lower is better.
    pub score: usize,
    /// Position of the candidate in the input sequence.
    pub index: usize,
}

/// Return the candidates matching `query`, best first.
///
/// The full ranked set is returned; display truncation is left to callers.
pub fn search<'a, S>(query: &str, candidates: &'a [S]) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    rank(query, candidates)
        .into_iter()
        .map(|hit| hit.text)
        .collect()
}

/// Return every matching candidate with its score, best first.
pub fn rank<'a, S>(query: &str, candidates: &'a [S]) -> Vec<SearchHit<'a>>
where
    S: AsRef<str>,
{
    let query: Vec<char> = query.to_lowercase().chars().collect();

    let mut hits: Vec<SearchHit<'a>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let text = candidate.as_ref();
            let folded: Vec<char> = text.to_lowercase().chars().collect();
            score(&query, &folded).map(|score| SearchHit { text, score, index })
        })
        .collect();

    // `sort_by_key` is stable, which keeps equal scores in input order.
    hits.sort_by_key(|hit| hit.score);
    hits
}

/// Whether `query` is a case-insensitive subsequence of `candidate`.
pub fn is_match(query: &str, candidate: &str) -> bool {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    let folded: Vec<char> = candidate.to_lowercase().chars().collect();
    is_subsequence(&query, &folded)
}

/// Score a case-folded candidate, or `None` when it does not match.
fn score(query: &[char], candidate: &[char]) -> Option<usize> {
    if !is_subsequence(query, candidate) {
        return None;
    }

    if let Some(position) = find_contiguous(query, candidate) {
        return Some(position);
    }

    let mut skipped = 0;
    let mut matched = 0;
    for ch in candidate {
        if matched == query.len() {
            break;
        }
        if *ch == query[matched] {
            matched += 1;
        } else {
            skipped += 1;
        }
    }
    Some(skipped)
}

fn is_subsequence(query: &[char], candidate: &[char]) -> bool {
    if query.len() > candidate.len() {
        return false;
    }
    let mut remaining = query.iter().peekable();
    for ch in candidate {
        match remaining.peek() {
            Some(expected) if *expected == ch => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}

fn find_contiguous(query: &[char], candidate: &[char]) -> Option<usize> {
    if query.is_empty() {
        return Some(0);
    }
    candidate
        .windows(query.len())
        .position(|window| window == query)
}
