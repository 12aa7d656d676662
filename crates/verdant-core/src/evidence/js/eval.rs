//! Folding literal initializers into JSON values.
//!
//! Supported: object and array literals (with spreads, shorthand properties,
//! numeric and computed keys), strings, templates without substitutions,
//! numbers, `true`/`false`/`null`/`undefined`, and references to other
//! top-level bindings. Anything else is reported as unsupported.

use super::lexer::{Tok, Token};
use super::scan::{Binding, Export, ModuleScope};
use serde_json::{Map, Number, Value};

pub struct Evaluator<'t> {
    tokens: &'t [Token],
    scope: &'t ModuleScope,
    /// Bindings currently being evaluated, for cycle detection.
    resolving: Vec<String>,
}

impl<'t> Evaluator<'t> {
    pub fn new(tokens: &'t [Token], scope: &'t ModuleScope) -> Self {
        Self {
            tokens,
            scope,
            resolving: Vec::new(),
        }
    }

    /// Value of an exported name, or `None` when the module does not export it.
    pub fn export(&mut self, name: &str) -> Option<Result<Value, String>> {
        let scope = self.scope;
        let export = scope.exports.get(name)?;
        Some(match export {
            Export::Expr(start) => self.initializer(*start),
            Export::Local(local) => self.binding(local),
        })
    }

    pub fn binding(&mut self, name: &str) -> Result<Value, String> {
        let scope = self.scope;
        match scope.bindings.get(name) {
            None => Err(format!("`{}` is not defined at module level", name)),
            Some(Binding::Import(spec)) => Ok(Value::String(spec.clone())),
            Some(Binding::Expr(start)) => {
                if self.resolving.iter().any(|n| n == name) {
                    return Err(format!("`{}` refers to itself", name));
                }
                self.resolving.push(name.to_string());
                let value = self.initializer(*start);
                self.resolving.pop();
                value
            }
        }
    }

    /// Evaluate the expression at `start`, which must end the statement,
    /// declarator or property it belongs to.
    fn initializer(&mut self, start: usize) -> Result<Value, String> {
        let mut pos = start;
        let value = self.value(&mut pos)?;
        match self.tokens.get(pos) {
            None => Ok(value),
            Some(t) if t.newline_before => Ok(value),
            Some(Token {
                tok: Tok::Punct(';' | ',' | '}'),
                ..
            }) => Ok(value),
            Some(t) => Err(format!("unsupported expression at {}", t.tok)),
        }
    }

    fn value(&mut self, pos: &mut usize) -> Result<Value, String> {
        let tokens = self.tokens;
        let token = tokens.get(*pos).ok_or("unexpected end of module")?;
        *pos += 1;
        match &token.tok {
            Tok::Punct('{') => self.object(pos),
            Tok::Punct('[') => self.array(pos),
            Tok::Punct(sign @ ('-' | '+')) => match tokens.get(*pos).map(|t| &t.tok) {
                Some(Tok::Num(raw)) => {
                    *pos += 1;
                    number(raw, *sign == '-')
                }
                _ => Err(format!("unsupported unary `{}`", sign)),
            },
            Tok::Num(raw) => number(raw, false),
            Tok::Str(s) | Tok::Template(Some(s)) => Ok(Value::String(s.clone())),
            Tok::Template(None) => Err("template literal with substitutions".into()),
            Tok::Ident(id) => match id.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                "null" | "undefined" => Ok(Value::Null),
                _ => self.binding(id),
            },
            other => Err(format!("unsupported expression at {}", other)),
        }
    }

    fn object(&mut self, pos: &mut usize) -> Result<Value, String> {
        let tokens = self.tokens;
        let mut map = Map::new();
        loop {
            let token = tokens.get(*pos).ok_or("unterminated object literal")?;
            *pos += 1;
            let key = match &token.tok {
                Tok::Punct('}') => return Ok(Value::Object(map)),
                Tok::Spread => {
                    match self.value(pos)? {
                        Value::Object(spread) => map.extend(spread),
                        Value::Null => {}
                        _ => return Err("only objects can be spread into an object".into()),
                    }
                    self.separator(pos, '}')?;
                    continue;
                }
                Tok::Ident(s) | Tok::Str(s) => s.clone(),
                Tok::Num(raw) => property_key(&number(raw, false)?),
                Tok::Punct('[') => {
                    let key = property_key(&self.value(pos)?);
                    self.expect(pos, ']')?;
                    key
                }
                other => return Err(format!("unsupported property key {}", other)),
            };

            let value = match tokens.get(*pos).map(|t| &t.tok) {
                Some(Tok::Punct(':')) => {
                    *pos += 1;
                    self.value(pos)?
                }
                Some(Tok::Punct(',' | '}')) if matches!(token.tok, Tok::Ident(_)) => {
                    self.binding(&key)?
                }
                _ => return Err(format!("unsupported property `{}`", key)),
            };
            map.insert(key, value);
            self.separator(pos, '}')?;
        }
    }

    fn array(&mut self, pos: &mut usize) -> Result<Value, String> {
        let tokens = self.tokens;
        let mut items = Vec::new();
        loop {
            match tokens.get(*pos).map(|t| &t.tok) {
                None => return Err("unterminated array literal".into()),
                Some(Tok::Punct(']')) => {
                    *pos += 1;
                    return Ok(Value::Array(items));
                }
                // hole
                Some(Tok::Punct(',')) => {
                    *pos += 1;
                    items.push(Value::Null);
                    continue;
                }
                Some(Tok::Spread) => {
                    *pos += 1;
                    match self.value(pos)? {
                        Value::Array(spread) => items.extend(spread),
                        _ => return Err("only arrays can be spread into an array".into()),
                    }
                }
                Some(_) => items.push(self.value(pos)?),
            }
            self.separator(pos, ']')?;
        }
    }

    /// Consume a `,`, or leave `close` for the caller.
    fn separator(&self, pos: &mut usize, close: char) -> Result<(), String> {
        match self.tokens.get(*pos).map(|t| &t.tok) {
            Some(Tok::Punct(',')) => {
                *pos += 1;
                Ok(())
            }
            Some(Tok::Punct(c)) if *c == close => Ok(()),
            Some(other) => Err(format!("expected `,` or `{}`, found {}", close, other)),
            None => Err(format!("expected `{}` before end of module", close)),
        }
    }

    fn expect(&self, pos: &mut usize, c: char) -> Result<(), String> {
        match self.tokens.get(*pos).map(|t| &t.tok) {
            Some(Tok::Punct(p)) if *p == c => {
                *pos += 1;
                Ok(())
            }
            _ => Err(format!("expected `{}`", c)),
        }
    }
}

/// Numeric literal to JSON. Integers stay integers where they fit.
fn number(raw: &str, negative: bool) -> Result<Value, String> {
    let cleaned = raw.replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let radix = match lower.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    let int = match radix {
        Some(radix) => Some(
            i64::from_str_radix(&lower[2..], radix)
                .map_err(|_| format!("invalid number `{}`", raw))?,
        ),
        None if lower.bytes().all(|b| b.is_ascii_digit()) => lower.parse::<i64>().ok(),
        None => None,
    };

    let number = match int {
        Some(i) => Number::from(if negative { -i } else { i }),
        None => {
            let f: f64 = lower
                .parse()
                .map_err(|_| format!("invalid number `{}`", raw))?;
            Number::from_f64(if negative { -f } else { f })
                .ok_or_else(|| format!("number `{}` is not finite", raw))?
        }
    };
    Ok(Value::Number(number))
}

/// Property-key string for a key value, as `Object.keys` would report it.
fn property_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::js::{scan, tokenize};
    use serde_json::json;

    fn eval(src: &str, name: &str) -> Result<Value, String> {
        let tokens = tokenize(src).unwrap();
        let scope = scan(&tokens);
        let mut evaluator = Evaluator::new(&tokens, &scope);
        evaluator.export(name).expect("exported")
    }

    #[test]
    fn numeric_and_computed_keys_become_strings() {
        let src = "export const details = { 1: { water: 'weekly' }, 0x10: 'hex', 2.5: `half`, ['id']: 3 };";
        assert_eq!(
            eval(src, "details").unwrap(),
            json!({ "1": { "water": "weekly" }, "16": "hex", "2.5": "half", "id": 3 })
        );
    }

    #[test]
    fn references_and_spreads_resolve_through_bindings() {
        let src = "const base = { family: 'Araceae' };\n\
                   const ids = [1, 2];\n\
                   export const plant = { ...base, name: 'Monstera', ids: [...ids, 3], base };";
        assert_eq!(
            eval(src, "plant").unwrap(),
            json!({
                "family": "Araceae",
                "name": "Monstera",
                "ids": [1, 2, 3],
                "base": { "family": "Araceae" }
            })
        );
    }

    #[test]
    fn scalars_follow_javascript_spelling() {
        let src = "export const xs = [-1, +2, 1_000, 0b101, 1e3, .5, true, null, undefined, 'q',];";
        assert_eq!(
            eval(src, "xs").unwrap(),
            json!([-1, 2, 1000, 5, 1000.0, 0.5, true, null, null, "q"])
        );
    }

    #[test]
    fn imported_asset_evaluates_to_its_path() {
        let src = "import monstera from './assets/monstera.jpg';\n\
                   export const plants = [{ image: monstera }];";
        assert_eq!(
            eval(src, "plants").unwrap(),
            json!([{ "image": "./assets/monstera.jpg" }])
        );
    }

    #[test]
    fn unsupported_expressions_are_errors() {
        assert!(eval("export const a = [1].map(x => x);", "a").is_err());
        assert!(eval("export const a = `${b}`;", "a").is_err());
        assert!(eval("export const a = missing;", "a").is_err());
        assert!(eval("export const a = { f() {} };", "a").is_err());
    }

    #[test]
    fn self_reference_is_reported() {
        let err = eval("export const a = { again: a };", "a").unwrap_err();
        assert_eq!(err, "`a` refers to itself");
    }
}
