use std::cmp;

/// Lowercases, folds Portuguese/Spanish diacritics and turns punctuation into
/// single spaces, so `"São Paulo → Ribeirão Preto"` becomes
/// `"sao paulo ribeirao preto"`.
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            c if c.is_alphanumeric() => c,
            _ => ' ',
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Levenshtein edit distance counted in chars.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ac != bc);
            let insertion = current[j] + 1;
            let deletion = previous[j + 1] + 1;
            current[j + 1] = cmp::min(substitution, cmp::min(insertion, deletion));
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Similarity in `0.0..=1.0` of an already normalized needle against an
/// already normalized hay. Every needle token is matched against its best hay
/// token; a hay token starting with the needle token counts as a full match.
pub fn score(needle: &str, hay: &str) -> f64 {
    let hay_tokens: Vec<&str> = hay.split_whitespace().collect();
    let needle_tokens: Vec<&str> = needle.split_whitespace().collect();
    if needle_tokens.is_empty() || hay_tokens.is_empty() {
        return 0.0;
    }

    let total: f64 = needle_tokens
        .iter()
        .map(|token| {
            hay_tokens
                .iter()
                .map(|hay_token| token_score(token, hay_token))
                .fold(0.0, f64::max)
        })
        .sum();
    total / needle_tokens.len() as f64
}

fn token_score(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    1.0 - distance(needle, hay) as f64 / longest as f64
}

#[test]
fn normalize_folds_accents() {
    assert_eq!(normalize("São Paulo → Ribeirão Preto"), "sao paulo ribeirao preto");
    assert_eq!(normalize("  Centro,  Goiânia - GO "), "centro goiania go");
}

#[test]
fn distance_basics() {
    assert_eq!(distance("", ""), 0);
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("abc", ""), 3);
    assert_eq!(distance("kitten", "sitting"), 3);
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn prefix_is_full_match() {
    assert_eq!(score("camp", "sao paulo campinas"), 1.0);
}

#[test]
fn empty_needle_scores_zero() {
    assert_eq!(score("", "campinas"), 0.0);
}
