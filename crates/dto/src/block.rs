use serde::Serialize;

/// A building block of a construction: either a whole player word (every
/// letter consumed) or a single loose letter. Kept as a tagged variant
/// rather than a plain string internally — a one-character player word and
/// a stolen letter look identical as text but score differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Word(String),
    Letter(char),
}

impl Block {
    pub fn is_letter(&self) -> bool {
        matches!(self, Block::Letter(_))
    }

    pub fn text(&self) -> String {
        match self {
            Block::Word(w) => w.clone(),
            Block::Letter(c) => c.to_string(),
        }
    }
}

/// On the wire a block is just its text; the word/letter distinction is an
/// internal scoring detail the client doesn't need.
impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_text() {
        let word = Block::Word("cat".to_string());
        let letter = Block::Letter('o');
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"cat\"");
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"o\"");
    }

    #[test]
    fn letter_and_single_char_word_are_distinct() {
        let word = Block::Word("o".to_string());
        let letter = Block::Letter('o');
        assert_eq!(word.text(), letter.text());
        assert!(!word.is_letter());
        assert!(letter.is_letter());
    }
}
