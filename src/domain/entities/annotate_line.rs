//! AnnotateLine - one parsed line of `cvs annotate` output
//!
//! Server lines look like `1.3          (alice    12-Mar-24): let x = 1;`.
//! Parsing is pure and never fails loudly: lines that don't carry the
//! parenthesized author/date group simply yield `None`.

/// Characters skipped after the closing parenthesis (`": "`)
const CONTENT_SEPARATOR_LEN: usize = 2;

/// Structured view of an annotated content line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotateLine {
    /// 1-based position within the file, 0 when parsed standalone
    pub line_num: usize,
    pub revision: String,
    pub author: String,
    pub date_string: String,
    pub content: String,
}

impl AnnotateLine {
    /// Parse a single annotate content line.
    ///
    /// Returns `None` unless the line has a `(` past its first character
    /// and the first `)` of the line comes after it.
    pub fn parse(line: &str) -> Option<Self> {
        let open = line.find('(')?;
        let close = line.find(')')?;
        if open == 0 || close <= open {
            return None;
        }

        let revision = line[..open].trim().to_string();
        let user_date = &line[open + 1..close];

        let (author, date_string) = match user_date.rfind(' ') {
            Some(space) if space > 0 => (
                user_date[..space].trim().to_string(),
                user_date[space..].trim().to_string(),
            ),
            _ => (user_date.to_string(), user_date.to_string()),
        };

        let after = &line[close + 1..];
        let content = after
            .char_indices()
            .nth(CONTENT_SEPARATOR_LEN)
            .map(|(idx, _)| &after[idx..])
            .unwrap_or("")
            .to_string();

        Some(Self {
            line_num: 0,
            revision,
            author,
            date_string,
            content,
        })
    }

    pub fn with_line_num(mut self, line_num: usize) -> Self {
        self.line_num = line_num;
        self
    }
}
