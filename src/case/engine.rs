use super::error::CaseError;
use super::fingerprint::extract_fingerprint;
use super::style::Style;

/// Recognize the style `input` is written in.
pub fn recognize(input: &str) -> Result<Style, CaseError> {
    let fingerprint = extract_fingerprint(input)?;
    tracing::debug!("Fingerprint of '{}': {:?}", input, fingerprint);

    let style = Style::ALL
        .into_iter()
        .find(|style| style.profile() == fingerprint)
        .ok_or(CaseError::UnrecognizedStyle)?;
    tracing::debug!("Recognized '{}' as {}", input, style);
    Ok(style)
}

/// Split `input` into lowercase words, according to its recognized style.
pub fn split_words(input: &str) -> Result<Vec<String>, CaseError> {
    let style = recognize(input)?;

    let words: Vec<String> = match style.separator() {
        Some(separator) => input.split(separator).map(str::to_lowercase).collect(),
        None => split_on_capitals(input),
    };
    tracing::trace!("Split '{}' into {:?}", input, words);
    Ok(words)
}

/// Rewrite `input` in the `target` style.
pub fn convert(input: &str, target: Style) -> Result<String, CaseError> {
    let words = split_words(input)?;
    Ok(render(&words, target))
}

/// Join already-split words in `target` style. Infallible.
pub fn render<S: AsRef<str>>(words: &[S], target: Style) -> String {
    let mut words: Vec<String> = words
        .iter()
        .map(|w| {
            let w = w.as_ref();
            match target {
                Style::Camel | Style::Pascal | Style::Train => capitalize(w),
                Style::ScreamingSnake => w.to_uppercase(),
                Style::Snake | Style::Kebab | Style::Dot | Style::Path => w.to_lowercase(),
            }
        })
        .collect();

    if target == Style::Camel {
        if let Some(first) = words.first_mut() {
            *first = first.to_lowercase();
        }
    }

    match target.separator() {
        Some(separator) => words.join(separator.to_string().as_str()),
        None => words.concat(),
    }
}

fn split_on_capitals(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in input.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current).to_lowercase());
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words
}

/// First character uppercase, the rest lowercase.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&[&str]] = &[
        &["user", "name"],
        &["get", "http", "response"],
        &["id", "of", "it"],
        &["domain", "model", "context", "protocol"],
    ];

    #[test]
    fn test_recognize_examples() {
        assert_eq!(recognize("user_name"), Ok(Style::Snake));
        assert_eq!(recognize("UserName"), Ok(Style::Pascal));
        assert_eq!(recognize("userName"), Ok(Style::Camel));
        assert_eq!(recognize("USER_NAME"), Ok(Style::ScreamingSnake));
        assert_eq!(recognize("user-name"), Ok(Style::Kebab));
        assert_eq!(recognize("User-Name"), Ok(Style::Train));
        assert_eq!(recognize("user.name"), Ok(Style::Dot));
        assert_eq!(recognize("user/name"), Ok(Style::Path));
    }

    #[test]
    fn test_recognize_propagates_extractor_errors() {
        assert_eq!(
            recognize("-leading"),
            Err(CaseError::UselessLeadingSeparator('-'))
        );
        assert_eq!(
            recognize("multi--sep"),
            Err(CaseError::ExtraSequencedSeparators(vec!["--".into()]))
        );
        assert_eq!(
            recognize("mix.ed-sep"),
            Err(CaseError::MultipleSeparators(vec!['.', '-']))
        );
        assert_eq!(recognize(""), Err(CaseError::UnrecognizedStyle));
        assert_eq!(recognize("has space"), Err(CaseError::UnrecognizedStyle));
    }

    #[test]
    fn test_recognize_rejects_patterns_outside_table() {
        // single lowercase word carries no style signal
        assert_eq!(recognize("user"), Err(CaseError::UnrecognizedStyle));
        assert_eq!(recognize("USER"), Err(CaseError::UnrecognizedStyle));
        assert_eq!(recognize("User_Name"), Err(CaseError::UnrecognizedStyle));
        assert_eq!(recognize("user-Name"), Err(CaseError::UnrecognizedStyle));
        assert_eq!(recognize("USER-NAME"), Err(CaseError::UnrecognizedStyle));
        assert_eq!(recognize("User.Name"), Err(CaseError::UnrecognizedStyle));
    }

    #[test]
    fn test_single_capitalized_word_is_pascal() {
        assert_eq!(recognize("User"), Ok(Style::Pascal));
        assert_eq!(split_words("User"), Ok(vec!["user".to_string()]));
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("userName").unwrap(), ["user", "name"]);
        assert_eq!(split_words("GetHttpResponse").unwrap(), ["get", "http", "response"]);
        assert_eq!(split_words("USER_NAME").unwrap(), ["user", "name"]);
        assert_eq!(split_words("User-Name").unwrap(), ["user", "name"]);
        assert_eq!(split_words("a/b/c").unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_on_every_capital() {
        assert_eq!(split_words("userID").unwrap(), ["user", "i", "d"]);
    }

    #[test]
    fn test_split_propagates_errors() {
        assert_eq!(split_words("user"), Err(CaseError::UnrecognizedStyle));
        assert_eq!(
            split_words("user_"),
            Err(CaseError::UselessTrailingSeparator('_'))
        );
    }

    #[test]
    fn test_convert_examples() {
        assert_eq!(convert("user_name", Style::Kebab).unwrap(), "user-name");
        assert_eq!(convert("userName", Style::ScreamingSnake).unwrap(), "USER_NAME");
        assert_eq!(convert("USER_NAME", Style::Camel).unwrap(), "userName");
        assert_eq!(convert("user.name", Style::Pascal).unwrap(), "UserName");
        assert_eq!(convert("UserName", Style::Train).unwrap(), "User-Name");
        assert_eq!(convert("User-Name", Style::Path).unwrap(), "user/name");
        assert_eq!(convert("user/name", Style::Dot).unwrap(), "user.name");
    }

    #[test]
    fn test_convert_propagates_errors() {
        assert_eq!(
            convert("mix.ed-sep", Style::Snake),
            Err(CaseError::MultipleSeparators(vec!['.', '-']))
        );
        assert_eq!(convert("user", Style::Camel), Err(CaseError::UnrecognizedStyle));
    }

    #[test]
    fn test_convert_to_same_style_is_identity() {
        for &words in SAMPLES {
            for style in Style::ALL {
                let rendered = render(words, style);
                assert_eq!(convert(&rendered, style).unwrap(), rendered, "{style}");
            }
        }
    }

    #[test]
    fn test_round_trip_between_all_styles() {
        for &words in SAMPLES {
            for from in Style::ALL {
                let source = render(words, from);
                assert_eq!(recognize(&source), Ok(from), "{source}");
                for to in Style::ALL {
                    let converted = convert(&source, to).unwrap();
                    assert_eq!(split_words(&converted).unwrap(), words, "{from} -> {to}");
                }
            }
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }
}
