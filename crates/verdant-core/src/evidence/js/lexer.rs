//! Tokenizer for the JavaScript found in data modules.
//!
//! Comments are dropped and string, template and numeric literals become
//! single tokens, so nothing inside them is mistaken for code. Regular
//! expression literals are not recognised.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Tok {
    Ident(String),
    Str(String),
    /// Cooked template text; `None` when the template has substitutions.
    Template(Option<String>),
    /// Numeric literal as written.
    Num(String),
    Spread,
    Punct(char),
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Ident(s) => write!(f, "`{}`", s),
            Tok::Str(_) => f.write_str("string"),
            Tok::Template(_) => f.write_str("template literal"),
            Tok::Num(n) => write!(f, "`{}`", n),
            Tok::Spread => f.write_str("`...`"),
            Tok::Punct(c) => write!(f, "`{}`", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub tok: Tok,
    /// A line break separates this token from the previous one.
    pub newline_before: bool,
}

pub fn tokenize(src: &str) -> Result<Vec<Token>, String> {
    Lexer {
        chars: src.chars().collect(),
        pos: 0,
    }
    .run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn run(mut self) -> Result<Vec<Token>, String> {
        let mut tokens = Vec::new();
        let mut newline = false;

        while let Some(c) = self.peek(0) {
            let tok = match c {
                '\n' => {
                    newline = true;
                    self.pos += 1;
                    continue;
                }
                c if c.is_whitespace() => {
                    self.pos += 1;
                    continue;
                }
                '/' if self.peek(1) == Some('/') => {
                    while self.peek(0).is_some_and(|c| c != '\n') {
                        self.pos += 1;
                    }
                    continue;
                }
                '/' if self.peek(1) == Some('*') => {
                    newline |= self.block_comment()?;
                    continue;
                }
                '"' | '\'' => Tok::Str(self.string(c)?),
                '`' => Tok::Template(self.template()?),
                '.' if self.peek(1) == Some('.') && self.peek(2) == Some('.') => {
                    self.pos += 3;
                    Tok::Spread
                }
                c if c.is_ascii_digit()
                    || (c == '.' && self.peek(1).is_some_and(|d| d.is_ascii_digit())) =>
                {
                    Tok::Num(self.number())
                }
                c if is_ident_start(c) => Tok::Ident(self.ident()),
                c => {
                    self.pos += 1;
                    Tok::Punct(c)
                }
            };
            tokens.push(Token {
                tok,
                newline_before: newline,
            });
            newline = false;
        }

        Ok(tokens)
    }

    /// Skip a block comment; reports whether it spanned a line break.
    fn block_comment(&mut self) -> Result<bool, String> {
        self.pos += 2;
        let mut newline = false;
        loop {
            match self.peek(0) {
                None => return Err("unterminated block comment".into()),
                Some('*') if self.peek(1) == Some('/') => {
                    self.pos += 2;
                    return Ok(newline);
                }
                Some(c) => {
                    newline |= c == '\n';
                    self.pos += 1;
                }
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, String> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek(0) {
                None | Some('\n') => return Err("unterminated string literal".into()),
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some('\\') => self.escape(&mut out)?,
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn template(&mut self) -> Result<Option<String>, String> {
        self.pos += 1;
        let mut out = String::new();
        let mut substituted = false;
        loop {
            match self.peek(0) {
                None => return Err("unterminated template literal".into()),
                Some('`') => {
                    self.pos += 1;
                    return Ok((!substituted).then_some(out));
                }
                Some('\\') => self.escape(&mut out)?,
                Some('$') if self.peek(1) == Some('{') => {
                    self.pos += 2;
                    self.substitution()?;
                    substituted = true;
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    /// Skip a `${ ... }` body, including nested strings and templates.
    fn substitution(&mut self) -> Result<(), String> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.peek(0) {
                None => return Err("unterminated template substitution".into()),
                Some('{') => {
                    depth += 1;
                    self.pos += 1;
                }
                Some('}') => {
                    depth -= 1;
                    self.pos += 1;
                }
                Some(q @ ('"' | '\'')) => {
                    self.string(q)?;
                }
                Some('`') => {
                    self.template()?;
                }
                Some(_) => self.pos += 1,
            }
        }
        Ok(())
    }

    /// Consume an escape sequence starting at the backslash.
    fn escape(&mut self, out: &mut String) -> Result<(), String> {
        self.pos += 1;
        let c = self.peek(0).ok_or("unterminated escape sequence")?;
        self.pos += 1;
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            // line continuation
            '\n' => {}
            '\r' => {
                if self.peek(0) == Some('\n') {
                    self.pos += 1;
                }
            }
            'x' => {
                let code = self.hex_digits(2)?;
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            'u' if self.peek(0) == Some('{') => {
                self.pos += 1;
                let start = self.pos;
                while self.peek(0).is_some_and(|c| c != '}') {
                    self.pos += 1;
                }
                if self.peek(0).is_none() {
                    return Err("unterminated unicode escape".into());
                }
                let digits: String = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                let code = u32::from_str_radix(&digits, 16)
                    .map_err(|_| format!("invalid unicode escape `{}`", digits))?;
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            'u' => {
                let code = self.hex_digits(4)?;
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            other => out.push(other),
        }
        Ok(())
    }

    fn hex_digits(&mut self, n: usize) -> Result<u32, String> {
        let end = self.pos + n;
        let digits: String = self
            .chars
            .get(self.pos..end)
            .ok_or("truncated escape sequence")?
            .iter()
            .collect();
        self.pos = end;
        u32::from_str_radix(&digits, 16).map_err(|_| format!("invalid escape `{}`", digits))
    }

    fn number(&mut self) -> String {
        let start = self.pos;
        let hex = self.chars[start] == '0' && matches!(self.peek(1), Some('x' | 'X'));
        while let Some(c) = self.peek(0) {
            let exponent_sign = !hex
                && matches!(c, '+' | '-')
                && matches!(self.chars.get(self.pos - 1), Some('e' | 'E'));
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while self.peek(0).is_some_and(is_ident_part) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_alphanumeric()
}
