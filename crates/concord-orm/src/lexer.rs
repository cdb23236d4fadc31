//! Tokenizer for model definition text.
//!
//! Every token records its 1-based line and its byte span so the parser can
//! group tokens into field lines and slice attribute arguments verbatim.
//! `//` comments (including `///` doc comments) are dropped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Number(String),
    Str(String),
    At,
    AtAt,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Question,
    Comma,
    Colon,
    Dot,
    Other(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ident(&self, expected: &str) -> bool {
        self.ident() == Some(expected)
    }
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `source` into tokens. Never fails; unknown characters become
/// [`TokenKind::Other`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();
    let mut line = 1;

    while let Some((start, c)) = chars.next() {
        let single = move |kind: TokenKind| Token {
            kind,
            line,
            start,
            end: start + c.len_utf8(),
        };

        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '/' if chars.peek().is_some_and(|&(_, next)| next == '/') => {
                while chars.peek().is_some_and(|&(_, next)| next != '\n') {
                    chars.next();
                }
            }
            '@' => {
                if chars.peek().is_some_and(|&(_, next)| next == '@') {
                    chars.next();
                    tokens.push(Token {
                        kind: TokenKind::AtAt,
                        line,
                        start,
                        end: start + 2,
                    });
                } else {
                    tokens.push(single(TokenKind::At));
                }
            }
            '{' => tokens.push(single(TokenKind::LBrace)),
            '}' => tokens.push(single(TokenKind::RBrace)),
            '[' => tokens.push(single(TokenKind::LBracket)),
            ']' => tokens.push(single(TokenKind::RBracket)),
            '(' => tokens.push(single(TokenKind::LParen)),
            ')' => tokens.push(single(TokenKind::RParen)),
            '?' => tokens.push(single(TokenKind::Question)),
            ',' => tokens.push(single(TokenKind::Comma)),
            ':' => tokens.push(single(TokenKind::Colon)),
            '.' => tokens.push(single(TokenKind::Dot)),
            '"' => {
                let mut value = String::new();
                let mut end = start + 1;
                while let Some(&(idx, next)) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                    end = idx + next.len_utf8();
                    match next {
                        '"' => break,
                        '\\' => {
                            if let Some((escaped_idx, escaped)) =
                                chars.next_if(|&(_, e)| e != '\n')
                            {
                                value.push(escaped);
                                end = escaped_idx + escaped.len_utf8();
                            }
                        }
                        other => value.push(other),
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Str(value),
                    line,
                    start,
                    end,
                });
            }
            c if c.is_ascii_digit()
                || (c == '-' && chars.peek().is_some_and(|&(_, n)| n.is_ascii_digit())) =>
            {
                let mut end = start + 1;
                while let Some((idx, next)) =
                    chars.next_if(|&(_, n)| n.is_ascii_digit() || n == '.')
                {
                    end = idx + next.len_utf8();
                }
                tokens.push(Token {
                    kind: TokenKind::Number(source[start..end].to_string()),
                    line,
                    start,
                    end,
                });
            }
            c if is_ident_start(c) => {
                let mut end = start + 1;
                while let Some((idx, next)) = chars.next_if(|&(_, n)| is_ident_continue(n)) {
                    end = idx + next.len_utf8();
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(source[start..end].to_string()),
                    line,
                    start,
                    end,
                });
            }
            other => tokens.push(single(TokenKind::Other(other))),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn field_line_tokens() {
        assert_eq!(
            kinds("id Int @id @default(autoincrement())"),
            vec![
                TokenKind::Ident("id".into()),
                TokenKind::Ident("Int".into()),
                TokenKind::At,
                TokenKind::Ident("id".into()),
                TokenKind::At,
                TokenKind::Ident("default".into()),
                TokenKind::LParen,
                TokenKind::Ident("autoincrement".into()),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn comments_are_dropped_and_lines_counted() {
        let tokens = tokenize("// header\nmodel A {\n  /// doc\n  id Int // trailing\n}");
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![2, 2, 2, 4, 4, 5]);
    }

    #[test]
    fn block_attribute_and_list_markers() {
        assert_eq!(
            kinds("@@id([a, b]) posts Post[] name String?"),
            vec![
                TokenKind::AtAt,
                TokenKind::Ident("id".into()),
                TokenKind::LParen,
                TokenKind::LBracket,
                TokenKind::Ident("a".into()),
                TokenKind::Comma,
                TokenKind::Ident("b".into()),
                TokenKind::RBracket,
                TokenKind::RParen,
                TokenKind::Ident("posts".into()),
                TokenKind::Ident("Post".into()),
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Ident("name".into()),
                TokenKind::Ident("String".into()),
                TokenKind::Question,
            ]
        );
    }

    #[test]
    fn strings_numbers_and_spans() {
        let source = r#"@default("a \"b\"") @default(-1.5)"#;
        let tokens = tokenize(source);
        assert_eq!(tokens[3].kind, TokenKind::Str("a \"b\"".into()));
        assert_eq!(&source[tokens[3].start..tokens[3].end], r#""a \"b\"""#);
        assert_eq!(tokens[8].kind, TokenKind::Number("-1.5".into()));
    }

    #[test]
    fn unknown_characters_do_not_fail() {
        assert_eq!(
            kinds("a = b;"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Other('='),
                TokenKind::Ident("b".into()),
                TokenKind::Other(';'),
            ]
        );
    }
}
