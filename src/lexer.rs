use crate::ast::{Fragment, FragmentToken};

/// Splits raw predicate text into literal text and `$n` placeholders.
///
/// Quoted string literals (single or double quotes, `\` escapes) are copied
/// verbatim, so a `$0` inside quotes is never treated as a placeholder. A `$`
/// without digits, or with more digits than a `usize` holds, is literal text.
/// Lexing never fails: an unterminated literal simply runs to the end of the
/// input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Copies a quoted literal, quotes included, into `text`.
    fn read_quoted(&mut self, quote: char, text: &mut String) {
        text.push(quote);
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            text.push(ch);
            self.advance();
            match ch {
                '\\' => {
                    if let Some(escaped) = self.current_char() {
                        text.push(escaped);
                        self.advance();
                    }
                }
                c if c == quote => return,
                _ => {}
            }
        }
    }

    /// Consumes a digit run. `None` when the number does not fit a `usize`.
    fn read_number(&mut self) -> Option<usize> {
        let mut n = Some(0usize);
        while let Some(d) = self.current_char().and_then(|c| c.to_digit(10)) {
            n = n
                .and_then(|n| n.checked_mul(10))
                .and_then(|n| n.checked_add(d as usize));
            self.advance();
        }
        n
    }

    pub fn next_token(&mut self) -> Option<FragmentToken> {
        let mut text = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                '"' | '\'' => self.read_quoted(ch, &mut text),
                '$' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                    let start = self.position;
                    self.advance(); // $
                    match self.read_number() {
                        Some(n) if text.is_empty() => return Some(FragmentToken::Placeholder(n)),
                        Some(_) => {
                            self.position = start;
                            return Some(FragmentToken::Text(text));
                        }
                        // out of range, kept as literal text
                        None => text.extend(&self.input[start..self.position]),
                    }
                }
                _ => {
                    text.push(ch);
                    self.advance();
                }
            }
        }

        if text.is_empty() {
            None
        } else {
            Some(FragmentToken::Text(text))
        }
    }

    pub fn tokenize(mut self) -> Fragment {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        Fragment::new(tokens)
    }
}

/// Tokenizes a raw predicate fragment.
pub fn tokenize(input: &str) -> Fragment {
    Lexer::new(input).tokenize()
}
