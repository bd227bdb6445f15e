// file: src/extractor/keywords.rs
// description: ordered whole-word keyword matching
// reference: https://docs.rs/regex

use regex::Regex;

/// Case-insensitive whole-word matcher for an ordered keyword list. The
/// position of a keyword in the list is its rank.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    patterns: Vec<(String, Regex)>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<(String, Regex)> = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() || patterns.iter().any(|(k, _)| *k == keyword) {
                continue;
            }
            let regex = whole_word_regex(&keyword)?;
            patterns.push((keyword, regex));
        }

        Ok(Self { patterns })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|(_, re)| re.is_match(text))
    }

    /// Lowest rank among the keywords present in `text`.
    pub fn best_rank(&self, text: &str) -> Option<usize> {
        self.patterns.iter().position(|(_, re)| re.is_match(text))
    }

    /// Keywords present in `text`, in list order.
    pub fn found_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns
            .iter()
            .filter(move |(_, re)| re.is_match(text))
            .map(|(keyword, _)| keyword.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// `\b` only holds next to word characters, so keywords such as `c++` or
/// `.net` get an explicit non-word (or text edge) guard instead.
pub fn whole_word_regex(keyword: &str) -> Result<Regex, regex::Error> {
    let starts_with_word = keyword.chars().next().is_some_and(is_word_char);
    let ends_with_word = keyword.chars().last().is_some_and(is_word_char);

    let prefix = if starts_with_word { r"\b" } else { r"(?:^|[^\w])" };
    let suffix = if ends_with_word { r"\b" } else { r"(?:$|[^\w])" };

    Regex::new(&format!(
        "(?i){}{}{}",
        prefix,
        regex::escape(keyword),
        suffix
    ))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_only() {
        let set = KeywordSet::new(["java"]).unwrap();
        assert!(set.is_match("Java, Python"));
        assert!(!set.is_match("JavaScript developer"));
        assert!(!set.is_match("javas"));
    }

    #[test]
    fn test_symbol_keywords() {
        let set = KeywordSet::new(["c++", "c#", "node.js"]).unwrap();
        assert!(set.is_match("Languages: C++, Rust"));
        assert!(set.is_match("c#"));
        assert!(set.is_match("built with Node.js."));
        assert!(!set.is_match("abc++"));
    }

    #[test]
    fn test_best_rank_is_lowest_index() {
        let set = KeywordSet::new(["phd", "master of science", "bachelor of science"]).unwrap();
        assert_eq!(set.best_rank("Bachelor of Science then PhD"), Some(0));
        assert_eq!(set.best_rank("Bachelor of Science in CS"), Some(2));
        assert_eq!(set.best_rank("High school"), None);
    }

    #[test]
    fn test_duplicates_and_blanks_skipped() {
        let set = KeywordSet::new(["SQL", "sql", " ", "excel"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.found_in("sql and EXCEL").collect::<Vec<_>>(), vec!["sql", "excel"]);
    }

    #[test]
    fn test_empty_set_never_matches() {
        let set = KeywordSet::new(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_match("anything"));
    }
}
