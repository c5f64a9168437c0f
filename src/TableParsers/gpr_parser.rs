/// Gene-protein-reaction rules such as `(cg0001 and cg0002) or cg0003`.
/// `and` binds tighter than `or`; `&&`/`||` are accepted as well and operator
/// words are case-insensitive. Every gene becomes a gene product `G_<gene>`,
/// created on first use.
use crate::NetworkModel::annotations::Annotation;
use crate::NetworkModel::model::{Association, GeneProduct, Model};
use crate::TableParsers::identifiers::to_id;
use crate::errors::ConversionError;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(|\)|[^\s()]+").unwrap());

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    And,
    Or,
    Gene(&'a str),
}

fn tokenize(expression: &str) -> Vec<Token<'_>> {
    TOKEN
        .find_iter(expression)
        .map(|m| {
            let text = m.as_str();
            match text {
                "(" => Token::Open,
                ")" => Token::Close,
                "&&" | "&" => Token::And,
                "||" | "|" => Token::Or,
                _ if text.eq_ignore_ascii_case("and") => Token::And,
                _ if text.eq_ignore_ascii_case("or") => Token::Or,
                _ => Token::Gene(text),
            }
        })
        .collect()
}

struct GprParser<'a, 'm> {
    expression: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
    model: &'m mut Model,
}

impl<'a, 'm> GprParser<'a, 'm> {
    fn error(&self, reason: &str) -> ConversionError {
        ConversionError::GprSyntax {
            expression: self.expression.to_string(),
            reason: reason.to_string(),
        }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.position)
    }

    fn parse_or(&mut self) -> Result<Association, ConversionError> {
        let mut children = vec![self.parse_and()?];
        while self.peek() == Some(&Token::Or) {
            self.position += 1;
            children.push(self.parse_and()?);
        }
        Ok(combine(children, false))
    }

    fn parse_and(&mut self) -> Result<Association, ConversionError> {
        let mut children = vec![self.parse_factor()?];
        while self.peek() == Some(&Token::And) {
            self.position += 1;
            children.push(self.parse_factor()?);
        }
        Ok(combine(children, true))
    }

    fn parse_factor(&mut self) -> Result<Association, ConversionError> {
        match self.peek().cloned() {
            Some(Token::Open) => {
                self.position += 1;
                let inner = self.parse_or()?;
                if self.peek() != Some(&Token::Close) {
                    return Err(self.error("missing ')'"));
                }
                self.position += 1;
                Ok(inner)
            }
            Some(Token::Gene(gene)) => {
                self.position += 1;
                Ok(Association::GeneProductRef(gene_product(self.model, gene)))
            }
            Some(Token::Close) => Err(self.error("unexpected ')'")),
            Some(Token::And) | Some(Token::Or) => Err(self.error("operator without operand")),
            None => Err(self.error("unexpected end of expression")),
        }
    }
}

/// a single child is returned as is; children of the same operator are merged
fn combine(mut children: Vec<Association>, conjunction: bool) -> Association {
    if children.len() == 1 {
        if let Some(only) = children.pop() {
            return only;
        }
    }
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Association::And(grand) if conjunction => flat.extend(grand),
            Association::Or(grand) if !conjunction => flat.extend(grand),
            other => flat.push(other),
        }
    }
    if conjunction {
        Association::And(flat)
    } else {
        Association::Or(flat)
    }
}

/// id of the gene product for `gene`, created if the model doesn't have it yet
pub fn gene_product(model: &mut Model, gene: &str) -> String {
    let id = to_id(gene, 'G');
    model
        .gene_products
        .entry(id.clone())
        .or_insert_with(|| GeneProduct {
            id: id.clone(),
            label: gene.to_string(),
            name: None,
            meta_id: None,
            annotation: Annotation::new(),
        });
    id
}

/// Parses a gene association and registers its gene products in the model.
pub fn parse_gpr(expression: &str, model: &mut Model) -> Result<Association, ConversionError> {
    let tokens = tokenize(expression);
    let mut parser = GprParser {
        expression,
        tokens,
        position: 0,
        model,
    };
    let association = parser.parse_or()?;
    if parser.position < parser.tokens.len() {
        return Err(parser.error("unexpected trailing tokens"));
    }
    Ok(association)
}
