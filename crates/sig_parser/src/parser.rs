//! Recursive-descent parser over `nom`.
//!
//! Parses into an intermediate [`ParseNode`] tree first, then lowers into
//! normalized [`sig_ast::Expr`] nodes. Lowering is where the integer-exponent
//! restriction is enforced: the node model carries `i32` powers, so `^` must
//! be applied to an integer literal (possibly negated or parenthesized).

use crate::error::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{map, opt, recognize},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use sig_ast::{arith, Constant, Expr};
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum ParseNode {
    Number(BigRational),
    Constant(Constant),
    Variable(String),
    Add(Box<ParseNode>, Box<ParseNode>),
    Sub(Box<ParseNode>, Box<ParseNode>),
    Mul(Box<ParseNode>, Box<ParseNode>),
    Div(Box<ParseNode>, Box<ParseNode>),
    Pow(Box<ParseNode>, Box<ParseNode>),
    Neg(Box<ParseNode>),
    Function(String, Vec<ParseNode>),
}

impl ParseNode {
    fn lower(self) -> Result<Expr, ParseError> {
        Ok(match self {
            ParseNode::Number(r) => Expr::rational(r),
            ParseNode::Constant(c) => Expr::constant(c),
            ParseNode::Variable(name) => Expr::var(&name),
            ParseNode::Add(l, r) => arith::add(&l.lower()?, &r.lower()?),
            ParseNode::Sub(l, r) => arith::sub(&l.lower()?, &r.lower()?),
            ParseNode::Mul(l, r) => arith::mul(&l.lower()?, &r.lower()?),
            ParseNode::Div(l, r) => arith::div(&l.lower()?, &r.lower()?),
            ParseNode::Neg(e) => arith::neg(&e.lower()?),
            ParseNode::Pow(base, exp) => {
                let exp = exp.lower()?;
                let n = arith::as_i32(&exp)
                    .ok_or_else(|| ParseError::NonIntegerExponent(exp.to_string()))?;
                arith::pow(&base.lower()?, n)
            }
            ParseNode::Function(name, args) => {
                let mut lowered = Vec::with_capacity(args.len());
                for a in args {
                    lowered.push(a.lower()?);
                }
                Expr::func(&name, lowered)
            }
        })
    }
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

/// Integer or decimal literal as an exact rational (`0.5` is 1/2).
fn number(input: &str) -> IResult<&str, ParseNode> {
    let (rest, whole) = digit1(input)?;
    let (rest, frac) = opt(preceded(char('.'), digit1))(rest)?;
    let mut numer: BigInt = whole.parse().unwrap_or_default();
    let mut denom = BigInt::one();
    if let Some(frac) = frac {
        for c in frac.chars() {
            numer = numer * 10 + BigInt::from(c.to_digit(10).unwrap_or(0));
            denom *= 10;
        }
    }
    Ok((rest, ParseNode::Number(BigRational::new(numer, denom))))
}

fn name_or_call(input: &str) -> IResult<&str, ParseNode> {
    let (rest, name) = identifier(input)?;
    let (rest, args) = opt(delimited(
        ws(tag("(")),
        separated_list0(ws(tag(",")), expr_node),
        tag(")"),
    ))(rest)?;
    let node = match args {
        Some(args) => ParseNode::Function(name.to_string(), args),
        None => match name {
            "pi" | "PI" => ParseNode::Constant(Constant::Pi),
            "i" => ParseNode::Constant(Constant::I),
            "inf" => ParseNode::Constant(Constant::Infinity),
            _ => ParseNode::Variable(name.to_string()),
        },
    };
    Ok((rest, node))
}

fn parens(input: &str) -> IResult<&str, ParseNode> {
    delimited(ws(tag("(")), expr_node, tag(")"))(input)
}

fn atom(input: &str) -> IResult<&str, ParseNode> {
    preceded(multispace0, alt((number, name_or_call, parens)))(input)
}

fn power_expr(input: &str) -> IResult<&str, ParseNode> {
    let (rest, base) = atom(input)?;
    let (rest, exp) = opt(preceded(ws(tag("^")), unary))(rest)?;
    Ok((
        rest,
        match exp {
            Some(e) => ParseNode::Pow(Box::new(base), Box::new(e)),
            None => base,
        },
    ))
}

fn unary(input: &str) -> IResult<&str, ParseNode> {
    alt((
        map(preceded(ws(tag("-")), unary), |e| ParseNode::Neg(Box::new(e))),
        power_expr,
    ))(input)
}

fn term(input: &str) -> IResult<&str, ParseNode> {
    let (rest, first) = unary(input)?;
    let (rest, ops) = many0(pair(ws(alt((tag("*"), tag("/")))), unary))(rest)?;
    let node = ops.into_iter().fold(first, |acc, (op, rhs)| match op {
        "*" => ParseNode::Mul(Box::new(acc), Box::new(rhs)),
        _ => ParseNode::Div(Box::new(acc), Box::new(rhs)),
    });
    Ok((rest, node))
}

fn expr_node(input: &str) -> IResult<&str, ParseNode> {
    let (rest, first) = term(input)?;
    let (rest, ops) = many0(pair(ws(alt((tag("+"), tag("-")))), term))(rest)?;
    let node = ops.into_iter().fold(first, |acc, (op, rhs)| match op {
        "+" => ParseNode::Add(Box::new(acc), Box::new(rhs)),
        _ => ParseNode::Sub(Box::new(acc), Box::new(rhs)),
    });
    Ok((rest, node))
}

/// Parse `input` into a normalized expression.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    match expr_node(input) {
        Ok((rest, node)) => {
            if rest.trim().is_empty() {
                node.lower()
            } else {
                Err(ParseError::UnconsumedInput(rest.to_string()))
            }
        }
        Err(e) => Err(ParseError::Syntax(e.to_string())),
    }
}

/// Parse, then substitute each binding in `subs` into the result.
pub fn parse_with(input: &str, subs: &HashMap<String, Expr>) -> Result<Expr, ParseError> {
    let mut expr = parse(input)?;
    for (name, replacement) in subs {
        expr = sig_ast::substitute(&expr, name, replacement);
    }
    Ok(expr)
}
