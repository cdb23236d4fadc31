//! Recursive-descent parser turning model definition tokens into [`Model`]s.
//!
//! Only `model <Name> { ... }` blocks produce output. Other top-level blocks
//! (`datasource`, `generator`, `enum`, ...) are skipped by brace matching.
//! Inside a model every source line is parsed on its own; a line that does
//! not fit `<field> <Type>[?][[]] <modifiers...>` is logged and skipped.

use concord_core::orm::{Field, Model, Relation};

use crate::lexer::{Token, TokenKind, tokenize};

/// Parse model definitions from `source`. Never fails.
#[must_use]
pub fn parse_models(source: &str) -> Vec<Model> {
    let tokens = tokenize(source);
    Parser {
        source,
        tokens: &tokens,
    }
    .models()
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
}

impl Parser<'_> {
    fn models(&self) -> Vec<Model> {
        let mut models = Vec::new();
        let mut pos = 0;

        while pos < self.tokens.len() {
            if let Some((name, body_start)) = self.model_header(pos) {
                let end = self.matching_brace(body_start - 1);
                models.push(self.model(name, &self.tokens[body_start..end]));
                pos = end + 1;
            } else if self.tokens[pos].kind == TokenKind::LBrace {
                pos = self.matching_brace(pos) + 1;
            } else {
                pos += 1;
            }
        }

        tracing::debug!(models = models.len(), "parsed model definitions");
        models
    }

    /// `model <Ident> {` starting at `pos`: returns the name and the index of
    /// the first token inside the block.
    fn model_header(&self, pos: usize) -> Option<(&str, usize)> {
        let keyword = self.tokens.get(pos)?;
        let name = self.tokens.get(pos + 1)?.ident()?;
        let brace = self.tokens.get(pos + 2)?;
        (keyword.is_ident("model") && brace.kind == TokenKind::LBrace).then_some((name, pos + 3))
    }

    /// Index of the `}` closing the `{` at `open`, or `tokens.len()` when the
    /// block is unterminated.
    fn matching_brace(&self, open: usize) -> usize {
        let mut depth = 0usize;
        for (idx, token) in self.tokens.iter().enumerate().skip(open) {
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return idx;
                    }
                }
                _ => {}
            }
        }
        self.tokens.len()
    }

    fn model(&self, name: &str, body: &[Token]) -> Model {
        let mut model = Model {
            name: name.to_string(),
            ..Model::default()
        };

        for line in body.chunk_by(|a, b| a.line == b.line) {
            if !self.line(line, &mut model) {
                tracing::debug!(
                    model = %model.name,
                    line = line[0].line,
                    "skipping unrecognized model line"
                );
            }
        }

        model
    }

    /// Parse one line into `model`. Returns `false` when the line was skipped.
    fn line(&self, tokens: &[Token], model: &mut Model) -> bool {
        match tokens.first().map(|t| &t.kind) {
            Some(TokenKind::AtAt) => {
                block_attribute(tokens, model);
                true
            }
            Some(TokenKind::Ident(_)) => self.field(tokens, model),
            _ => false,
        }
    }

    fn field(&self, tokens: &[Token], model: &mut Model) -> bool {
        let (Some(name), Some(field_type)) = (
            tokens.first().and_then(Token::ident),
            tokens.get(1).and_then(Token::ident),
        ) else {
            return false;
        };

        let mut pos = 2;
        if tokens.get(pos).is_some_and(|t| t.kind == TokenKind::Question) {
            pos += 1;
        }
        let mut is_list = false;
        if tokens.get(pos).is_some_and(|t| t.kind == TokenKind::LBracket)
            && tokens.get(pos + 1).is_some_and(|t| t.kind == TokenKind::RBracket)
        {
            is_list = true;
            pos += 2;
        }

        let mut field = Field {
            name: name.to_string(),
            field_type: field_type.to_string(),
            optional: true,
            default: None,
            is_list,
            is_id: false,
        };

        while pos < tokens.len() {
            if tokens[pos].kind == TokenKind::At {
                pos = self.field_attribute(tokens, pos + 1, &mut field, model);
            } else if tokens[pos].is_ident("NOT")
                && tokens.get(pos + 1).is_some_and(|t| t.is_ident("NULL"))
            {
                field.optional = false;
                pos += 2;
            } else {
                pos += 1;
            }
        }

        model.fields.push(field);
        true
    }

    /// Parse `@name[.name...][(args)]` whose name starts at `pos`. Returns the
    /// index after the attribute.
    fn field_attribute(
        &self,
        tokens: &[Token],
        mut pos: usize,
        field: &mut Field,
        model: &mut Model,
    ) -> usize {
        let Some(attribute) = tokens.get(pos).and_then(Token::ident) else {
            return pos;
        };
        pos += 1;
        while tokens.get(pos).is_some_and(|t| t.kind == TokenKind::Dot)
            && tokens.get(pos + 1).and_then(Token::ident).is_some()
        {
            pos += 2;
        }

        let args = if tokens.get(pos).is_some_and(|t| t.kind == TokenKind::LParen) {
            let close = matching_paren(tokens, pos);
            let inner = &tokens[pos + 1..close.min(tokens.len())];
            pos = close + 1;
            Some(inner)
        } else {
            None
        };

        match (attribute, args) {
            ("id", _) => field.is_id = true,
            ("required", _) => field.optional = false,
            ("default", Some(inner)) => field.default = self.verbatim(inner),
            ("relation", Some(inner)) => {
                if let Some(relation) = relation(&field.name, &field.field_type, inner) {
                    model.relations.push(relation);
                }
            }
            _ => {}
        }

        pos
    }

    /// Source text spanned by `tokens`, trimmed.
    fn verbatim(&self, tokens: &[Token]) -> Option<String> {
        let first = tokens.first()?;
        let last = tokens.last()?;
        let text = self.source.get(first.start..last.end)?.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// `@@id([...])` sets the model key; other block attributes are ignored.
fn block_attribute(tokens: &[Token], model: &mut Model) {
    if tokens.get(1).is_some_and(|t| t.is_ident("id")) {
        if let Some(columns) = bracket_list(&tokens[2..]) {
            model.primary_key = Some(columns);
        }
    }
}

/// Index of the `)` closing the `(` at `open`; `tokens.len()` if unclosed.
fn matching_paren(tokens: &[Token], open: usize) -> usize {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return idx;
                }
            }
            _ => {}
        }
    }
    tokens.len()
}

/// Identifiers inside the first `[ ... ]` of `tokens`.
fn bracket_list(tokens: &[Token]) -> Option<Vec<String>> {
    let open = tokens.iter().position(|t| t.kind == TokenKind::LBracket)?;
    let close = open + tokens[open..].iter().position(|t| t.kind == TokenKind::RBracket)?;
    let names: Vec<String> = tokens[open + 1..close]
        .iter()
        .filter_map(Token::ident)
        .map(str::to_string)
        .collect();
    (!names.is_empty()).then_some(names)
}

/// Value list following `key:` inside relation arguments.
fn keyed_list(tokens: &[Token], key: &str) -> Option<Vec<String>> {
    let at = tokens
        .windows(2)
        .position(|w| w[0].is_ident(key) && w[1].kind == TokenKind::Colon)?;
    bracket_list(&tokens[at + 2..])
}

fn relation(field_name: &str, field_type: &str, args: &[Token]) -> Option<Relation> {
    let fields = keyed_list(args, "fields")?;
    let references = keyed_list(args, "references")?;
    Some(Relation {
        name: field_name.to_string(),
        fields,
        to_model: field_type.to_string(),
        references,
    })
}
