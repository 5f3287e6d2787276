// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser. Precedence high→low: parens, `not`,
//! comparison, `and`, `or` — operator table from the condition grammar.

use crate::ast::{CompareOp, Condition, Literal, Operand};
use crate::lexer::{lex, Token};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of expression")]
    UnexpectedEof,
    #[error("unexpected token: {0:?}")]
    Unexpected(Token),
    #[error("expected {expected}, found {found:?}")]
    Expected { expected: &'static str, found: Token },
}

pub fn parse(src: &str) -> Result<Condition, ParseError> {
    let tokens = lex(src);
    let mut p = Parser { tokens, pos: 0 };
    let cond = p.parse_or()?;
    p.expect_eof()?;
    Ok(cond)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos).cloned().unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        match self.peek() {
            Token::Eof => Ok(()),
            other => Err(ParseError::Unexpected(other.clone())),
        }
    }

    fn parse_or(&mut self) -> Result<Condition, ParseError> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), Token::Or) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Condition::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Condition, ParseError> {
        let mut lhs = self.parse_not()?;
        while matches!(self.peek(), Token::And) {
            self.advance();
            let rhs = self.parse_not()?;
            lhs = Condition::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> Result<Condition, ParseError> {
        if matches!(self.peek(), Token::Not) {
            self.advance();
            let inner = self.parse_not()?;
            return Ok(Condition::Not(Box::new(inner)));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Condition, ParseError> {
        if matches!(self.peek(), Token::LParen) {
            self.advance();
            let inner = self.parse_or()?;
            match self.advance() {
                Token::RParen => return Ok(inner),
                other => return Err(ParseError::Expected { expected: ")", found: other }),
            }
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Condition, ParseError> {
        let lhs = self.parse_operand()?;
        match self.peek().clone() {
            Token::Eq => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Eq)?)
            }
            Token::Ne => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Ne)?)
            }
            Token::Gt => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Gt)?)
            }
            Token::Lt => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Lt)?)
            }
            Token::Ge => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Ge)?)
            }
            Token::Le => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Le)?)
            }
            Token::Contains => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Contains)?)
            }
            Token::NotContains => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::NotContains)?)
            }
            Token::Regex => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::Regex)?)
            }
            Token::In => {
                self.advance();
                Ok(self.compare(lhs, CompareOp::In)?)
            }
            Token::Not if matches!(self.tokens.get(self.pos + 1), Some(Token::In)) => {
                self.advance();
                self.advance();
                Ok(self.compare(lhs, CompareOp::NotIn)?)
            }
            Token::Not if matches!(self.tokens.get(self.pos + 1), Some(Token::IsNull)) => {
                self.advance();
                self.advance();
                Ok(Condition::IsNull { operand: lhs, negate: true })
            }
            Token::IsNull => {
                self.advance();
                Ok(Condition::IsNull { operand: lhs, negate: false })
            }
            _ => Err(ParseError::Expected { expected: "comparison operator", found: self.peek().clone() }),
        }
    }

    fn compare(&mut self, lhs: Operand, op: CompareOp) -> Result<Condition, ParseError> {
        let rhs = if matches!(op, CompareOp::In | CompareOp::NotIn) {
            self.parse_list_operand()?
        } else {
            self.parse_operand()?
        };
        Ok(Condition::Compare { lhs, op, rhs })
    }

    fn parse_list_operand(&mut self) -> Result<Operand, ParseError> {
        if matches!(self.peek(), Token::LBracket) {
            self.advance();
            let mut items = Vec::new();
            if !matches!(self.peek(), Token::RBracket) {
                loop {
                    items.push(self.parse_literal()?);
                    if matches!(self.peek(), Token::Comma) {
                        self.advance();
                        continue;
                    }
                    break;
                }
            }
            match self.advance() {
                Token::RBracket => Ok(Operand::Literal(Literal::List(items))),
                other => Err(ParseError::Expected { expected: "]", found: other }),
            }
        } else {
            self.parse_operand()
        }
    }

    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        match self.parse_operand()? {
            Operand::Literal(lit) => Ok(lit),
            Operand::Path(p) => Ok(Literal::Str(p)),
        }
    }

    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        match self.advance() {
            Token::LParen => Err(ParseError::Unexpected(Token::LParen)),
            Token::Path(p) => Ok(Operand::Path(p)),
            Token::Str(s) => Ok(Operand::Literal(Literal::Str(s))),
            Token::Bareword(w) => Ok(Operand::Literal(classify_bareword(&w))),
            other => Err(ParseError::Unexpected(other)),
        }
    }
}

fn classify_bareword(word: &str) -> Literal {
    match word {
        "True" | "TRUE" | "true" => return Literal::Bool(true),
        "False" | "FALSE" | "false" => return Literal::Bool(false),
        "None" | "NONE" | "none" | "null" | "NULL" => return Literal::None,
        _ => {}
    }
    if let Ok(n) = word.parse::<f64>() {
        return Literal::Num(n);
    }
    Literal::Str(word.to_string())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
