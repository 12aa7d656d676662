//! Top-level statement scan: which names a module binds and which it exports.
//!
//! Only statements at bracket depth 0 are considered, so declarations inside
//! functions or object literals never shadow module-level ones.

use super::lexer::{Tok, Token};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// Initializer expression starting at this token index.
    Expr(usize),
    /// Imported name; evaluates to the module specifier, as a bundler
    /// resolves an asset import to its path.
    Import(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    /// Exported expression starting at this token index.
    Expr(usize),
    /// Exported local binding.
    Local(String),
}

#[derive(Debug, Default)]
pub struct ModuleScope {
    pub bindings: HashMap<String, Binding>,
    pub exports: HashMap<String, Export>,
}

/// Collect bindings and exports. A later statement for the same name wins.
pub fn scan(tokens: &[Token]) -> ModuleScope {
    let mut scope = ModuleScope::default();
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        if depth == 0 && statement_start(tokens, i) {
            if let Some(resume) = scope.statement(tokens, i) {
                i = resume;
                continue;
            }
        }
        match tokens[i].tok {
            Tok::Punct('(' | '[' | '{') => depth += 1,
            Tok::Punct(')' | ']' | '}') => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    scope
}

impl ModuleScope {
    /// Try to read a statement header at `i`. Returns the index to resume
    /// scanning from, which is always past `i` and never skips an unbalanced
    /// bracket.
    fn statement(&mut self, tokens: &[Token], i: usize) -> Option<usize> {
        match ident_at(tokens, i)? {
            "import" => self.import(tokens, i + 1),
            "export" => match ident_at(tokens, i + 1) {
                Some("const" | "let" | "var") => self.declaration(tokens, i + 2, true),
                _ if punct_at(tokens, i + 1, '{') => self.export_list(tokens, i + 2),
                _ => None,
            },
            "const" | "let" | "var" => self.declaration(tokens, i + 1, false),
            "module" if punct_at(tokens, i + 1, '.') && ident_at(tokens, i + 2) == Some("exports") => {
                if punct_at(tokens, i + 3, '.') {
                    self.named_export(tokens, i + 4)
                } else {
                    self.export_object(tokens, i + 3)
                }
            }
            "exports" if punct_at(tokens, i + 1, '.') => self.named_export(tokens, i + 2),
            _ => None,
        }
    }

    /// `NAME = expr, NAME = expr` after `const`/`let`/`var`.
    fn declaration(&mut self, tokens: &[Token], mut k: usize, exported: bool) -> Option<usize> {
        let mut resume = None;
        while let Some(name) = ident_at(tokens, k) {
            if !assign_at(tokens, k + 1) {
                break;
            }
            let start = k + 2;
            self.bindings.insert(name.to_string(), Binding::Expr(start));
            if exported {
                self.exports
                    .insert(name.to_string(), Export::Local(name.to_string()));
            }
            resume.get_or_insert(start);
            match next_declarator(tokens, start) {
                Some(next) => k = next,
                None => break,
            }
        }
        resume
    }

    /// `{ a, b as c }` after `export`. Re-exports from another module are
    /// not followed.
    fn export_list(&mut self, tokens: &[Token], mut k: usize) -> Option<usize> {
        let mut pairs = Vec::new();
        loop {
            match &tokens.get(k)?.tok {
                Tok::Punct('}') => {
                    k += 1;
                    break;
                }
                Tok::Punct(',') => k += 1,
                Tok::Ident(local) if ident_at(tokens, k + 1) == Some("as") => {
                    pairs.push((local.clone(), name_at(tokens, k + 2)?.to_string()));
                    k += 3;
                }
                Tok::Ident(local) => {
                    pairs.push((local.clone(), local.clone()));
                    k += 1;
                }
                _ => return None,
            }
        }
        if ident_at(tokens, k) == Some("from") {
            return Some(k);
        }
        for (local, exported) in pairs {
            self.exports.insert(exported, Export::Local(local));
        }
        Some(k)
    }

    /// `exports.NAME = expr` / `module.exports.NAME = expr`, from `NAME`.
    fn named_export(&mut self, tokens: &[Token], k: usize) -> Option<usize> {
        let name = ident_at(tokens, k)?;
        if !assign_at(tokens, k + 1) {
            return None;
        }
        self.exports
            .insert(name.to_string(), Export::Expr(k + 2));
        Some(k + 2)
    }

    /// `module.exports = { a, b: expr }`, from the `=`. Property heads are
    /// mapped until one that is not a plain key (spread, computed, method).
    fn export_object(&mut self, tokens: &[Token], k: usize) -> Option<usize> {
        if !assign_at(tokens, k) || !punct_at(tokens, k + 1, '{') {
            return None;
        }
        let resume = k + 1;
        let mut p = k + 2;
        loop {
            let key = match &tokens.get(p)?.tok {
                Tok::Punct('}') => break,
                Tok::Ident(s) | Tok::Str(s) => s.clone(),
                _ => break,
            };
            if punct_at(tokens, p + 1, ':') {
                self.exports.insert(key, Export::Expr(p + 2));
                p = value_end(tokens, p + 2)?;
            } else if punct_at(tokens, p + 1, ',') || punct_at(tokens, p + 1, '}') {
                self.exports.insert(key.clone(), Export::Local(key));
                p += 1;
            } else {
                break;
            }
            if punct_at(tokens, p, ',') {
                p += 1;
            }
        }
        Some(resume)
    }

    /// `import a, { b as c }, * as d from 'spec'`, after `import`.
    fn import(&mut self, tokens: &[Token], mut k: usize) -> Option<usize> {
        let mut names = Vec::new();
        loop {
            match &tokens.get(k)?.tok {
                Tok::Ident(s) if s == "from" => break,
                Tok::Ident(s) if s == "as" => {
                    names.pop();
                    names.push(ident_at(tokens, k + 1)?.to_string());
                    k += 2;
                }
                Tok::Ident(s) => {
                    names.push(s.clone());
                    k += 1;
                }
                Tok::Punct('{' | '}' | ',' | '*') => k += 1,
                _ => return None,
            }
        }
        let Tok::Str(spec) = &tokens.get(k + 1)?.tok else {
            return None;
        };
        for name in names {
            self.bindings.insert(name, Binding::Import(spec.clone()));
        }
        Some(k + 2)
    }
}

fn statement_start(tokens: &[Token], i: usize) -> bool {
    i == 0
        || tokens[i].newline_before
        || matches!(tokens[i - 1].tok, Tok::Punct(';' | '}'))
}

fn ident_at(tokens: &[Token], k: usize) -> Option<&str> {
    match &tokens.get(k)?.tok {
        Tok::Ident(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Identifier or string; `export { a as "b c" }` is legal.
fn name_at(tokens: &[Token], k: usize) -> Option<&str> {
    match &tokens.get(k)?.tok {
        Tok::Ident(s) | Tok::Str(s) => Some(s.as_str()),
        _ => None,
    }
}

fn punct_at(tokens: &[Token], k: usize, c: char) -> bool {
    matches!(tokens.get(k), Some(Token { tok: Tok::Punct(p), .. }) if *p == c)
}

/// A lone `=`, not `==` or `=>`.
fn assign_at(tokens: &[Token], k: usize) -> bool {
    punct_at(tokens, k, '=') && !punct_at(tokens, k + 1, '=') && !punct_at(tokens, k + 1, '>')
}

/// Index of the next declarator name when the initializer at `start` is
/// followed by a depth-0 comma.
fn next_declarator(tokens: &[Token], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (k, token) in tokens.iter().enumerate().skip(start) {
        if depth == 0 && k > start && token.newline_before {
            return None;
        }
        match token.tok {
            Tok::Punct('(' | '[' | '{') => depth += 1,
            Tok::Punct(')' | ']' | '}') => depth = depth.checked_sub(1)?,
            Tok::Punct(',') if depth == 0 => return Some(k + 1),
            Tok::Punct(';') if depth == 0 => return None,
            _ => {}
        }
    }
    None
}

/// Index of the `,` or `}` that ends the property value starting at `start`.
fn value_end(tokens: &[Token], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (k, token) in tokens.iter().enumerate().skip(start) {
        match token.tok {
            Tok::Punct('(' | '[' | '{') => depth += 1,
            Tok::Punct('}') if depth == 0 => return Some(k),
            Tok::Punct(')' | ']' | '}') => depth = depth.checked_sub(1)?,
            Tok::Punct(',') if depth == 0 => return Some(k),
            _ => {}
        }
    }
    None
}
