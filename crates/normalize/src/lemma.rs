//! Rule-based base-form reduction.
//!
//! A deliberately small, deterministic lemmatizer: an irregular-form table
//! plus ordered suffix rules. It is a pure function of the single token —
//! no sentence context, no dictionaries loaded at runtime — so the same
//! token always reduces the same way on every machine.
//!
//! The reduction does not have to be linguistically perfect to be useful:
//! queries and catalog keys pass through the same rules, so what matters is
//! that inflected variants of the same word land on the same stem.

/// Irregular plural/past forms that suffix rules cannot reach.
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Words that look inflected but are not.
const INVARIANT: &[&str] = &["news", "series", "species"];

/// Reduces a single token to its base form.
///
/// Tokens containing an apostrophe (contractions, possessives) and tokens of
/// three characters or fewer are returned unchanged — short function words
/// like "is" and "are" carry no inflection worth stripping.
pub fn lemmatize(token: &str) -> String {
    if token.contains('\'') {
        return token.to_string();
    }
    if let Some(&(_, base)) = IRREGULAR.iter().find(|&&(form, _)| form == token) {
        return base.to_string();
    }
    if INVARIANT.contains(&token) {
        return token.to_string();
    }

    let len = token.chars().count();
    if len <= 3 {
        return token.to_string();
    }

    // Plural suffixes first, then participle/past suffixes. Rules apply at
    // most once.
    if len > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if let Some(stem) = token.strip_suffix("sses") {
            return format!("{stem}ss");
        }
    }
    if len >= 4 && token.ends_with("oes") {
        // "-oes" plurals drop only the "es": goes -> go, heroes -> hero.
        return token[..token.len() - 2].to_string();
    }
    for es_suffix in ["xes", "zes", "ches", "shes"] {
        if let Some(stem) = token.strip_suffix(es_suffix) {
            let keep = &es_suffix[..es_suffix.len() - 2];
            return format!("{stem}{keep}");
        }
    }
    if token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }
    if len > 5 {
        if let Some(stem) = token.strip_suffix("ing") {
            return undouble(stem);
        }
    }
    if len > 4 {
        if let Some(stem) = token.strip_suffix("ied") {
            return format!("{stem}y");
        }
        if let Some(stem) = token.strip_suffix("ed") {
            return undouble(stem);
        }
    }

    token.to_string()
}

/// Strips the doubled final consonant left behind by -ing/-ed suffixation
/// ("stopp" -> "stop"), leaving natural doubles like "ll"/"ss"/"zz" alone.
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if let [.., a, b] = chars.as_slice() {
        if a == b
            && a.is_ascii_alphabetic()
            && !matches!(*a, 'l' | 's' | 'z' | 'a' | 'e' | 'i' | 'o' | 'u')
        {
            return stem[..stem.len() - b.len_utf8()].to_string();
        }
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_suffixes() {
        assert_eq!(lemmatize("guitars"), "guitar");
        assert_eq!(lemmatize("hobbies"), "hobby");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("matches"), "match");
        assert_eq!(lemmatize("heroes"), "hero");
    }

    #[test]
    fn participles_and_past_forms() {
        assert_eq!(lemmatize("playing"), "play");
        assert_eq!(lemmatize("singing"), "sing");
        assert_eq!(lemmatize("running"), "run");
        assert_eq!(lemmatize("stopped"), "stop");
        assert_eq!(lemmatize("tried"), "try");
        assert_eq!(lemmatize("asked"), "ask");
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("mice"), "mouse");
    }

    #[test]
    fn short_and_invariant_words_untouched() {
        assert_eq!(lemmatize("is"), "is");
        assert_eq!(lemmatize("are"), "are");
        assert_eq!(lemmatize("his"), "his");
        assert_eq!(lemmatize("news"), "news");
        assert_eq!(lemmatize("series"), "series");
        assert_eq!(lemmatize("falling"), "fall");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("it's"), "it's");
    }

    #[test]
    fn non_inflected_words_untouched() {
        assert_eq!(lemmatize("cricket"), "cricket");
        assert_eq!(lemmatize("name"), "name");
        assert_eq!(lemmatize("capital"), "capital");
        assert_eq!(lemmatize("1945"), "1945");
    }
}
