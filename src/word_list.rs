//! `word_list` — load the list of words to look for.
//!
//! Format: one word per line. Surrounding whitespace is trimmed, blank lines and
//! lines starting with `#` are skipped. Everything else is kept exactly as
//! written, in file order: the order decides the order of the results, and
//! repeated words are kept (each is searched separately unless the solver is
//! told to dedupe).
//!
//! `parse_from_str` works everywhere, including WASM; `load_from_path` is
//! native-only.

const COMMENT_PREFIX: char = '#';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Words in the order they appeared.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .map(str::to_string)
            .collect();

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Append words given some other way (e.g. on the command line).
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let word_list = WordList::parse_from_str("cat\ndog\nbird");
        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let word_list = WordList::parse_from_str("zebra\napple\nzebra");
        assert_eq!(word_list.words, vec!["zebra", "apple", "zebra"]);
    }

    #[test]
    fn test_parse_keeps_case() {
        let word_list = WordList::parse_from_str("CAT\nDog");
        assert_eq!(word_list.words, vec!["CAT", "Dog"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let word_list = WordList::parse_from_str("# animals\n\ncat\n   \n  # more\ndog\n");
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let word_list = WordList::parse_from_str("  cat  \n\tdog\t");
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_extend() {
        let mut word_list = WordList::parse_from_str("cat");
        word_list.extend(["dog", "emu"]);
        assert_eq!(word_list.len(), 3);
        assert_eq!(word_list.words[2], "emu");
    }
}
