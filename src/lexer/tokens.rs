use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::ast::types::DataType;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("inteiro", Keyword::Int);
        map.insert("real", Keyword::Double);
        map.insert("imprimir", Keyword::Print);
        map
    };
    pub static ref OPERATOR_LOOKUP: HashMap<char, Operator> = {
        let mut map = HashMap::new();
        map.insert('+', Operator::Add);
        map.insert('-', Operator::Sub);
        map.insert('*', Operator::Mul);
        map.insert('/', Operator::Div);
        map.insert('=', Operator::Assign);
        map
    };
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, Punctuation> = {
        let mut map = HashMap::new();
        map.insert('(', Punctuation::OpenParen);
        map.insert(')', Punctuation::CloseParen);
        map.insert('!', Punctuation::ExclamationMark);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Int,    // inteiro
    Double, // real
    Print,  // imprimir
}

impl Keyword {
    pub fn spelling(&self) -> &'static str {
        match self {
            Keyword::Int => "inteiro",
            Keyword::Double => "real",
            Keyword::Print => "imprimir",
        }
    }

    /// The declared type a type keyword introduces, `None` for `imprimir`.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Keyword::Int => Some(DataType::Int),
            Keyword::Double => Some(DataType::Double),
            Keyword::Print => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Assign,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Assign => '=',
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Assign => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punctuation {
    OpenParen,
    CloseParen,
    ExclamationMark, // statement terminator, not negation
}

impl Punctuation {
    pub fn symbol(&self) -> char {
        match self {
            Punctuation::OpenParen => '(',
            Punctuation::CloseParen => ')',
            Punctuation::ExclamationMark => '!',
        }
    }
}

/// Token class, i.e. a token with its payload erased.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    IntLiteral,
    DoubleLiteral,
    Operator,
    Punctuation,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::DoubleLiteral => "decimal literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Keyword(Keyword),
    Identifier(String),
    IntLiteral(i32),
    DoubleLiteral(f64),
    Operator(Operator),
    Punctuation(Punctuation),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::IntLiteral(_) => TokenKind::IntLiteral,
            Token::DoubleLiteral(_) => TokenKind::DoubleLiteral,
            Token::Operator(_) => TokenKind::Operator,
            Token::Punctuation(_) => TokenKind::Punctuation,
        }
    }

    pub fn debug(&self) {
        match self {
            Token::Identifier(_) | Token::IntLiteral(_) | Token::DoubleLiteral(_) => {
                println!("{} ({})", self.kind(), self)
            }
            _ => println!("{} `{}`", self.kind(), self),
        }
    }
}

/// Tokens display as the lexeme that produces them.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(keyword) => write!(f, "{}", keyword.spelling()),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::IntLiteral(value) => write!(f, "{}", value),
            Token::DoubleLiteral(value) => write!(f, "{:?}", value),
            Token::Operator(operator) => write!(f, "{}", operator.symbol()),
            Token::Punctuation(punctuation) => write!(f, "{}", punctuation.symbol()),
        }
    }
}
