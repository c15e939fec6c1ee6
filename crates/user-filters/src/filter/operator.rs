//! Operator table.
//!
//! Every known comparison operator is described once, in [`OPERATORS`], by
//! its wire token, its display phrase, the shape of value it expects and the
//! SQL template it renders through. Renderers look the operator up instead
//! of branching on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A condition operator.
///
/// Operators arrive as string tokens (`"eq"`, `"startsWith"`, ...). Tokens
/// that are not in [`OPERATORS`] are kept verbatim in [`Operator::Unknown`]
/// so that renderers can still show them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Eq,
    Neq,
    Contains,
    StartsWith,
    EndsWith,
    In,
    NotIn,
    Gt,
    Lt,
    Gte,
    Lte,
    Between,
    IsEmpty,
    IsNotEmpty,
    IsNull,
    IsNotNull,
    /// An operator token with no entry in the table.
    Unknown(String),
}

/// The shape of value an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No value (`isNull`, `isEmpty`, ...).
    Unary,
    /// A single scalar.
    Binary,
    /// A `[start, end]` pair.
    Range,
    /// A sequence of scalars.
    List,
}

/// How an operator renders into a SQL-like fragment.
///
/// The field is always substituted already back-quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlTemplate {
    /// `field <symbol> 'value'` when quoted, `field <symbol> value` otherwise.
    Compare {
        symbol: &'static str,
        quoted: bool,
    },
    /// `field LIKE '<prefix>value<suffix>'`.
    Like {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// `field IN (...)` or `field NOT IN (...)`.
    Membership { negated: bool },
    /// `field BETWEEN start AND end`.
    Between,
    /// A value-free template; every `{field}` is replaced by the field.
    Fixed(&'static str),
}

/// One row of the operator table.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorSpec {
    pub operator: Operator,
    pub token: &'static str,
    pub phrase: &'static str,
    pub arity: Arity,
    pub sql: SqlTemplate,
}

const fn spec(
    operator: Operator,
    token: &'static str,
    phrase: &'static str,
    arity: Arity,
    sql: SqlTemplate,
) -> OperatorSpec {
    OperatorSpec {
        operator,
        token,
        phrase,
        arity,
        sql,
    }
}

/// All known operators, in display order.
pub static OPERATORS: [OperatorSpec; 16] = [
    spec(
        Operator::Eq,
        "eq",
        "Equals",
        Arity::Binary,
        SqlTemplate::Compare {
            symbol: "=",
            quoted: true,
        },
    ),
    spec(
        Operator::Neq,
        "neq",
        "Not equals",
        Arity::Binary,
        SqlTemplate::Compare {
            symbol: "!=",
            quoted: true,
        },
    ),
    spec(
        Operator::Contains,
        "contains",
        "Contains",
        Arity::Binary,
        SqlTemplate::Like {
            prefix: "%",
            suffix: "%",
        },
    ),
    spec(
        Operator::StartsWith,
        "startsWith",
        "Starts with",
        Arity::Binary,
        SqlTemplate::Like {
            prefix: "",
            suffix: "%",
        },
    ),
    spec(
        Operator::EndsWith,
        "endsWith",
        "Ends with",
        Arity::Binary,
        SqlTemplate::Like {
            prefix: "%",
            suffix: "",
        },
    ),
    spec(
        Operator::In,
        "in",
        "Is any of",
        Arity::List,
        SqlTemplate::Membership { negated: false },
    ),
    spec(
        Operator::NotIn,
        "notIn",
        "Is none of",
        Arity::List,
        SqlTemplate::Membership { negated: true },
    ),
    spec(
        Operator::Gt,
        "gt",
        "Greater than",
        Arity::Binary,
        SqlTemplate::Compare {
            symbol: ">",
            quoted: false,
        },
    ),
    spec(
        Operator::Lt,
        "lt",
        "Less than",
        Arity::Binary,
        SqlTemplate::Compare {
            symbol: "<",
            quoted: false,
        },
    ),
    spec(
        Operator::Gte,
        "gte",
        "Greater than or equal to",
        Arity::Binary,
        SqlTemplate::Compare {
            symbol: ">=",
            quoted: false,
        },
    ),
    spec(
        Operator::Lte,
        "lte",
        "Less than or equal to",
        Arity::Binary,
        SqlTemplate::Compare {
            symbol: "<=",
            quoted: false,
        },
    ),
    spec(
        Operator::Between,
        "between",
        "Between",
        Arity::Range,
        SqlTemplate::Between,
    ),
    spec(
        Operator::IsEmpty,
        "isEmpty",
        "Is empty",
        Arity::Unary,
        SqlTemplate::Fixed("{field} = '' OR {field} IS NULL"),
    ),
    spec(
        Operator::IsNotEmpty,
        "isNotEmpty",
        "Is not empty",
        Arity::Unary,
        SqlTemplate::Fixed("{field} != '' AND {field} IS NOT NULL"),
    ),
    spec(
        Operator::IsNull,
        "isNull",
        "Is null",
        Arity::Unary,
        SqlTemplate::Fixed("{field} IS NULL"),
    ),
    spec(
        Operator::IsNotNull,
        "isNotNull",
        "Is not null",
        Arity::Unary,
        SqlTemplate::Fixed("{field} IS NOT NULL"),
    ),
];

impl Operator {
    /// Resolves a wire token. Matching is case-sensitive; anything not in
    /// the table becomes [`Operator::Unknown`].
    pub fn from_token(token: &str) -> Self {
        OPERATORS
            .iter()
            .find(|s| s.token == token)
            .map(|s| s.operator.clone())
            .unwrap_or_else(|| Operator::Unknown(token.to_string()))
    }

    /// Returns the table row for this operator, or `None` if unknown.
    pub fn spec(&self) -> Option<&'static OperatorSpec> {
        OPERATORS.iter().find(|s| &s.operator == self)
    }

    /// Returns the wire token.
    pub fn token(&self) -> &str {
        match self {
            Operator::Unknown(token) => token.as_str(),
            known => known.spec().map(|s| s.token).unwrap_or_default(),
        }
    }

    /// Returns the display phrase; unknown operators show their raw token.
    pub fn phrase(&self) -> &str {
        match self.spec() {
            Some(spec) => spec.phrase,
            None => self.token(),
        }
    }

    /// Returns the arity, or `None` for unknown operators.
    pub fn arity(&self) -> Option<Arity> {
        self.spec().map(|s| s.arity)
    }

    /// Returns true for operators that take no value.
    pub fn is_unary(&self) -> bool {
        self.arity() == Some(Arity::Unary)
    }

    /// Returns true if the operator is in the table.
    pub fn is_known(&self) -> bool {
        !matches!(self, Operator::Unknown(_))
    }
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Unknown(String::new())
    }
}

impl From<String> for Operator {
    fn from(token: String) -> Self {
        Operator::from_token(&token)
    }
}

impl From<&str> for Operator {
    fn from(token: &str) -> Self {
        Operator::from_token(token)
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Unknown(token) => token,
            known => known.token().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_row_round_trips_its_token() {
        for spec in &OPERATORS {
            let op = Operator::from_token(spec.token);
            assert_eq!(op, spec.operator, "token {}", spec.token);
            assert_eq!(op.token(), spec.token);
            assert_eq!(op.spec(), Some(spec));
        }
    }

    #[test]
    fn test_table_tokens_are_unique() {
        for (i, a) in OPERATORS.iter().enumerate() {
            for b in &OPERATORS[i + 1..] {
                assert_ne!(a.token, b.token);
            }
        }
    }

    #[test]
    fn test_unknown_token_is_preserved() {
        let op = Operator::from_token("fuzzyMatch");
        assert_eq!(op, Operator::Unknown("fuzzyMatch".to_string()));
        assert_eq!(op.token(), "fuzzyMatch");
        assert_eq!(op.phrase(), "fuzzyMatch");
        assert!(op.spec().is_none());
        assert!(!op.is_known());
        assert!(!op.is_unary());
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(!Operator::from_token("EQ").is_known());
        assert!(!Operator::from_token("startswith").is_known());
    }

    #[test]
    fn test_unary_operators() {
        let unary: Vec<&str> = OPERATORS
            .iter()
            .filter(|s| s.arity == Arity::Unary)
            .map(|s| s.token)
            .collect();
        assert_eq!(unary, vec!["isEmpty", "isNotEmpty", "isNull", "isNotNull"]);
    }

    #[test]
    fn test_phrases() {
        assert_eq!(Operator::Eq.phrase(), "Equals");
        assert_eq!(Operator::NotIn.phrase(), "Is none of");
        assert_eq!(Operator::Gte.phrase(), "Greater than or equal to");
        assert_eq!(Operator::IsNotNull.phrase(), "Is not null");
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&Operator::StartsWith).unwrap();
        assert_eq!(json, r#""startsWith""#);

        let op: Operator = serde_json::from_str(r#""notIn""#).unwrap();
        assert_eq!(op, Operator::NotIn);

        let op: Operator = serde_json::from_str(r#""regex""#).unwrap();
        assert_eq!(serde_json::to_string(&op).unwrap(), r#""regex""#);
    }
}
