//! JSDoc tag parsing: turns the body of a `/** ... */` comment into an [`AnnotatedBlock`].
//!
//! Parsing is sloppy on purpose. Nothing here fails; odd text ends up in a
//! directive's description.

use crate::ast::{AnnotatedBlock, DirectiveRecord, TypeToken};
use crate::lexer::{Lexer, TokenType};
use crate::utils::get_line_and_column;
use log::warn;

/// Extracts every doc comment in `source` as an annotation block, in source order.
pub fn extract_blocks(source: &str) -> Vec<AnnotatedBlock> {
    let mut lexer = Lexer::new(source);
    let mut blocks = Vec::new();
    for token in lexer.lex() {
        match token.ttype {
            TokenType::DocComment(body) => {
                let mut block = parse_comment(&body);
                block.span = Some((token.pos_start, token.pos_end - token.pos_start).into());
                blocks.push(block);
            }
            TokenType::UnterminatedComment => {
                let (line, column) = get_line_and_column(source, token.pos_start);
                warn!("unterminated comment at {line}:{column} ignored");
            }
            _ => {}
        }
    }
    blocks
}

/// Parses a doc comment body (the text between `/**` and `*/`).
pub fn parse_comment(body: &str) -> AnnotatedBlock {
    let mut description: Vec<&str> = Vec::new();
    let mut chunks: Vec<Vec<&str>> = Vec::new();

    for line in body.lines().map(unwrap_line) {
        if is_tag_line(line) {
            chunks.push(vec![line.trim_start()]);
        } else if let Some(chunk) = chunks.last_mut() {
            chunk.push(line);
        } else {
            description.push(line);
        }
    }

    AnnotatedBlock::new(
        description.join("\n").trim(),
        chunks.iter().map(|chunk| parse_tag(&chunk.join("\n"))).collect(),
    )
}

// Strips the `*` gutter and a single following space.
fn unwrap_line(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix('*').unwrap_or(line);
    line.strip_prefix(' ').unwrap_or(line)
}

fn is_tag_line(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('@')
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_title_char)
}

fn is_title_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn takes_type(title: &str) -> bool {
    takes_name(title) || matches!(title, "returns" | "return")
}

fn takes_name(title: &str) -> bool {
    matches!(
        title,
        "param" | "arg" | "argument" | "property" | "prop" | "typedef"
    )
}

/// Tag ::= "@" Title [ "{" TypeExpr "}" ] [ Name ] Description
fn parse_tag(text: &str) -> DirectiveRecord {
    let text = text.strip_prefix('@').unwrap_or(text);
    let title_len = text
        .find(|c: char| !is_title_char(c))
        .unwrap_or(text.len());
    let (title, mut rest) = text.split_at(title_len);
    let mut directive = DirectiveRecord::new(title);

    if takes_type(title) {
        if let Some((expr, after)) = read_type_expression(rest.trim_start()) {
            directive.type_token = Some(type_token(expr));
            rest = after;
        }
    }

    if takes_name(title) {
        let trimmed = rest.trim_start();
        let name_len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        directive.name = trimmed[..name_len].to_string();
        rest = &trimmed[name_len..];
    }

    directive.description = strip_dash(rest.trim()).to_string();
    directive
}

// `{...}` with nested braces. Returns the inner expression and the remaining text.
fn read_type_expression(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((text[1..i].trim(), &text[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

fn type_token(expr: &str) -> TypeToken {
    let is_name_path = !expr.is_empty()
        && expr.split('.').all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| is_title_char(c) || c == '$')
        });
    if is_name_path {
        TypeToken::named(expr)
    } else {
        TypeToken::anonymous()
    }
}

fn strip_dash(description: &str) -> &str {
    let mut chars = description.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), Some(c)) if c.is_whitespace() => &description[1 + c.len_utf8()..],
        _ => description,
    }
}
