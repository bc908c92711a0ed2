/// The kinds of token the source scanner distinguishes.
///
/// The scanner only needs to find doc comments reliably, so everything that is
/// not a comment, a string literal or whitespace is lumped into [`TokenType::Code`].
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    /// Represents the end of the input file.
    Eof,
    /// A run of whitespace characters.
    Whitespace,
    /// A `/** ... */` comment. Holds the text between the delimiters.
    DocComment(String),
    /// A `// ...` or `/* ... */` comment that is not a doc comment.
    Comment(String),
    /// A `"..."`, `'...'` or `` `...` `` literal. Holds the unescaped-as-written content.
    String(String),
    /// A `/.../flags` regular expression literal. Holds the pattern between the slashes.
    Regex(String),
    /// Any other source text.
    Code,
    /// A block comment with no closing `*/`.
    UnterminatedComment,
    /// A string literal with no closing quote.
    Unknown,
}

/// A token with its type and byte position
#[derive(Debug, Clone)]
pub struct Token {
    pub ttype: TokenType,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(ttype: TokenType, pos_start: usize, pos_end: usize) -> Token {
        Token {
            ttype,
            pos_start,
            pos_end,
        }
    }
}

/// Scans JavaScript/TypeScript source for comments.
///
/// A `/` starts a regex literal when the last significant character is an
/// operator or opening punctuation (or there is none), and a division otherwise.
/// Keyword contexts such as `return /x/` are read as division.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
    last_significant: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
            last_significant: None,
        }
    }

    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.ttype == TokenType::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    pub fn next_token(&mut self) -> Token {
        let start_pos = self.position;

        let ttype = if let Some(char) = self.advance() {
            match char {
                '/' => match self.peek() {
                    Some('/') => self.read_line_comment(),
                    Some('*') => self.read_block_comment(),
                    _ if self.regex_allowed() => self.read_regex(),
                    _ => TokenType::Code,
                },
                '"' | '\'' | '`' => self.read_string(char),
                c if c.is_whitespace() => self.read_whitespace(),
                _ => self.read_code(),
            }
        } else {
            TokenType::Eof
        };

        match ttype {
            TokenType::Whitespace | TokenType::Comment(_) | TokenType::DocComment(_) => {}
            _ => self.last_significant = self.input[start_pos..self.position].chars().last(),
        }
        Token::new(ttype, start_pos, self.position)
    }

    fn regex_allowed(&self) -> bool {
        match self.last_significant {
            None => true,
            Some(c) => "(,=:[!&|?{};+-*%<>~^".contains(c),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let char = self.chars.next();
        if let Some(c) = char {
            self.position += c.len_utf8();
        }
        char
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn read_whitespace(&mut self) -> TokenType {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        TokenType::Whitespace
    }

    fn read_code(&mut self) -> TokenType {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '/' | '"' | '\'' | '`') {
                break;
            }
            self.advance();
        }
        TokenType::Code
    }

    fn read_line_comment(&mut self) -> TokenType {
        self.advance(); // Consume the second '/'
        let mut comment_text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            comment_text.push(c);
            self.advance();
        }
        TokenType::Comment(comment_text.trim().to_string())
    }

    fn read_block_comment(&mut self) -> TokenType {
        self.advance(); // Consume the '*'
        // `/**/` is an empty plain comment, not a doc comment
        let is_doc = self.rest().starts_with('*') && !self.rest().starts_with("*/");
        if is_doc {
            self.advance();
        }

        let Some(end) = self.rest().find("*/") else {
            while self.advance().is_some() {}
            return TokenType::UnterminatedComment;
        };
        let body = self.rest()[..end].to_string();
        while self.position < self.input.len() && !self.rest().starts_with("*/") {
            self.advance();
        }
        self.advance();
        self.advance();

        if is_doc {
            TokenType::DocComment(body)
        } else {
            TokenType::Comment(body.trim().to_string())
        }
    }

    fn read_regex(&mut self) -> TokenType {
        let mut pattern = String::new();
        let mut in_class = false;
        while let Some(c) = self.peek() {
            match c {
                '\n' => return TokenType::Code,
                '/' if !in_class => break,
                '[' => in_class = true,
                ']' => in_class = false,
                '\\' => {
                    pattern.push(c);
                    self.advance();
                    match self.peek() {
                        Some('\n') | None => return TokenType::Code,
                        Some(escaped) => {
                            pattern.push(escaped);
                            self.advance();
                        }
                    }
                    continue;
                }
                _ => {}
            }
            pattern.push(c);
            self.advance();
        }
        if self.advance().is_none() {
            return TokenType::Code;
        }
        while self.peek().is_some_and(char::is_alphanumeric) {
            self.advance();
        }
        TokenType::Regex(pattern)
    }

    fn read_string(&mut self, quote: char) -> TokenType {
        let mut value = String::new();
        while let Some(c) = self.advance() {
            if c == quote {
                return TokenType::String(value);
            }
            if c == '\\' {
                match self.advance() {
                    Some(escaped) => {
                        value.push('\\');
                        value.push(escaped);
                    }
                    None => return TokenType::Unknown, // Unclosed escape sequence
                }
            } else if c == '\n' && quote != '`' {
                return TokenType::Unknown; // Newline in a plain string
            } else {
                value.push(c);
            }
        }
        TokenType::Unknown // Unclosed string
    }
}
