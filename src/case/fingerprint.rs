use super::error::CaseError;
use super::style::Profile;

/// Structural profile computed from an arbitrary input. Recognition is an
/// exact comparison against [`Style::profile`](super::Style::profile).
pub type Fingerprint = Profile;

/// Compute the fingerprint of `input`.
///
/// Checks run in a fixed order and the first failure wins: empty or
/// whitespace input, leading non-letter, trailing non-letter, sequenced
/// separators, then multiple distinct separators.
pub fn extract_fingerprint(input: &str) -> Result<Fingerprint, CaseError> {
    let mut chars = input.chars();
    let (Some(first), last) = (chars.next(), chars.next_back()) else {
        return Err(CaseError::UnrecognizedStyle);
    };
    if input.chars().any(char::is_whitespace) {
        return Err(CaseError::UnrecognizedStyle);
    }

    if !first.is_alphabetic() {
        return Err(CaseError::UselessLeadingSeparator(first));
    }

    let last = last.unwrap_or(first);
    if !last.is_alphabetic() {
        return Err(CaseError::UselessTrailingSeparator(last));
    }

    let separator = find_separator(input)?;
    let mut letters = input.chars().filter(|c| c.is_alphabetic());

    Ok(Fingerprint {
        separator,
        all_upper: letters.clone().all(char::is_uppercase),
        all_lower: letters.all(char::is_lowercase),
        first_capitalized: first.is_uppercase(),
        capitalized_after_separator: capitalized_after(separator, input),
    })
}

/// Single pass over the non-letters. Runs of identical non-letters are
/// reported before multiplicity.
fn find_separator(input: &str) -> Result<Option<char>, CaseError> {
    let mut distinct: Vec<char> = Vec::new();
    let mut runs: Vec<String> = Vec::new();
    let mut run = String::new();

    for c in input.chars() {
        if c.is_alphabetic() {
            close_run(&mut run, &mut runs);
            continue;
        }
        if !distinct.contains(&c) {
            distinct.push(c);
        }
        if !run.ends_with(c) {
            close_run(&mut run, &mut runs);
        }
        run.push(c);
    }
    close_run(&mut run, &mut runs);

    if !runs.is_empty() {
        return Err(CaseError::ExtraSequencedSeparators(runs));
    }
    if distinct.len() > 1 {
        return Err(CaseError::MultipleSeparators(distinct));
    }
    Ok(distinct.first().copied())
}

fn close_run(run: &mut String, runs: &mut Vec<String>) {
    let taken = std::mem::take(run);
    if taken.chars().count() > 1 {
        runs.push(taken);
    }
}

/// True when every occurrence of `separator` is followed by an uppercase
/// character. A separator with nothing after it counts as not capitalized.
fn capitalized_after(separator: Option<char>, input: &str) -> bool {
    let Some(separator) = separator else {
        return false;
    };
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != separator {
            continue;
        }
        match chars.peek() {
            Some(next) if next.is_uppercase() => {}
            _ => return false,
        }
    }
    true
}
