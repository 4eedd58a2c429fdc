//! The fixed operator table.
//!
//! Each operator kind carries its source symbol, the group it belongs to, a
//! numeric precedence and an associativity. Several symbols are shared
//! between kinds (`+` is both binary add and unary plus, `++` is both pre and
//! post increment); the lexer only emits the symbol and the expression parser
//! decides which kind it is from context.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorGroup {
    Assignment,
    Binary,
    Unary,
    Relational,
    Delimiter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Assignment,
    AddAssignment,
    SubAssignment,
    MulAssignment,
    DivAssignment,

    LogicalOr,
    LogicalAnd,

    Equal,
    NotEqual,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Add,
    Sub,

    Div,
    Mod,
    Mul,

    UnaryPlus,
    UnaryMinus,
    LogicalNegation,
    PreIncrement,
    PreDecrement,

    Pow,

    PostIncrement,
    PostDecrement,

    OpenParenthesis,
    CloseParenthesis,
}

impl OperatorKind {
    /// Table order matters: when a symbol is shared, the first kind listed is
    /// the one a bare symbol lookup resolves to.
    pub const ALL: [OperatorKind; 28] = [
        OperatorKind::Assignment,
        OperatorKind::AddAssignment,
        OperatorKind::SubAssignment,
        OperatorKind::MulAssignment,
        OperatorKind::DivAssignment,
        OperatorKind::LogicalOr,
        OperatorKind::LogicalAnd,
        OperatorKind::Equal,
        OperatorKind::NotEqual,
        OperatorKind::Less,
        OperatorKind::LessEquals,
        OperatorKind::Greater,
        OperatorKind::GreaterEquals,
        OperatorKind::Add,
        OperatorKind::Sub,
        OperatorKind::Div,
        OperatorKind::Mod,
        OperatorKind::Mul,
        OperatorKind::UnaryPlus,
        OperatorKind::UnaryMinus,
        OperatorKind::LogicalNegation,
        OperatorKind::PreIncrement,
        OperatorKind::PreDecrement,
        OperatorKind::Pow,
        OperatorKind::PostIncrement,
        OperatorKind::PostDecrement,
        OperatorKind::OpenParenthesis,
        OperatorKind::CloseParenthesis,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorKind::Assignment => "=",
            OperatorKind::AddAssignment => "+=",
            OperatorKind::SubAssignment => "-=",
            OperatorKind::MulAssignment => "*=",
            OperatorKind::DivAssignment => "/=",
            OperatorKind::LogicalOr => "||",
            OperatorKind::LogicalAnd => "&&",
            OperatorKind::Equal => "==",
            OperatorKind::NotEqual => "!=",
            OperatorKind::Less => "<",
            OperatorKind::LessEquals => "<=",
            OperatorKind::Greater => ">",
            OperatorKind::GreaterEquals => ">=",
            OperatorKind::Add | OperatorKind::UnaryPlus => "+",
            OperatorKind::Sub | OperatorKind::UnaryMinus => "-",
            OperatorKind::Div => "/",
            OperatorKind::Mod => "%",
            OperatorKind::Mul => "*",
            OperatorKind::LogicalNegation => "!",
            OperatorKind::PreIncrement | OperatorKind::PostIncrement => "++",
            OperatorKind::PreDecrement | OperatorKind::PostDecrement => "--",
            OperatorKind::Pow => "^",
            OperatorKind::OpenParenthesis => "(",
            OperatorKind::CloseParenthesis => ")",
        }
    }

    pub fn group(&self) -> OperatorGroup {
        match self {
            OperatorKind::Assignment
            | OperatorKind::AddAssignment
            | OperatorKind::SubAssignment
            | OperatorKind::MulAssignment
            | OperatorKind::DivAssignment => OperatorGroup::Assignment,
            OperatorKind::Equal
            | OperatorKind::NotEqual
            | OperatorKind::Less
            | OperatorKind::LessEquals
            | OperatorKind::Greater
            | OperatorKind::GreaterEquals => OperatorGroup::Relational,
            OperatorKind::UnaryPlus
            | OperatorKind::UnaryMinus
            | OperatorKind::LogicalNegation
            | OperatorKind::PreIncrement
            | OperatorKind::PreDecrement
            | OperatorKind::PostIncrement
            | OperatorKind::PostDecrement => OperatorGroup::Unary,
            OperatorKind::OpenParenthesis | OperatorKind::CloseParenthesis => {
                OperatorGroup::Delimiter
            }
            OperatorKind::LogicalOr
            | OperatorKind::LogicalAnd
            | OperatorKind::Add
            | OperatorKind::Sub
            | OperatorKind::Div
            | OperatorKind::Mod
            | OperatorKind::Mul
            | OperatorKind::Pow => OperatorGroup::Binary,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            OperatorKind::OpenParenthesis | OperatorKind::CloseParenthesis => 0,
            OperatorKind::Assignment
            | OperatorKind::AddAssignment
            | OperatorKind::SubAssignment
            | OperatorKind::MulAssignment
            | OperatorKind::DivAssignment => 1,
            OperatorKind::LogicalOr => 3,
            OperatorKind::LogicalAnd => 4,
            OperatorKind::Equal | OperatorKind::NotEqual => 8,
            OperatorKind::Less
            | OperatorKind::LessEquals
            | OperatorKind::Greater
            | OperatorKind::GreaterEquals => 9,
            OperatorKind::Add | OperatorKind::Sub => 11,
            OperatorKind::Div | OperatorKind::Mod | OperatorKind::Mul => 12,
            OperatorKind::UnaryPlus
            | OperatorKind::UnaryMinus
            | OperatorKind::LogicalNegation
            | OperatorKind::PreIncrement
            | OperatorKind::PreDecrement
            | OperatorKind::Pow => 13,
            OperatorKind::PostIncrement | OperatorKind::PostDecrement => 14,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self.group() {
            OperatorGroup::Assignment | OperatorGroup::Unary => Associativity::RightToLeft,
            _ if *self == OperatorKind::Pow => Associativity::RightToLeft,
            _ => Associativity::LeftToRight,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.group() == OperatorGroup::Unary
    }
}
