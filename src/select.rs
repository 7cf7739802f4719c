//! Output selection for cmdlet results.
//!
//! A selection expression picks what an invocation writes to the output
//! stream: `*` for the whole response, a response field name, or `^Name` to
//! echo the value the caller bound to input parameter `Name`. The selectable
//! names are closed per operation; each operation declares its response
//! fields and input parameters with [`field_set!`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CmdletError, Result};

/// A closed set of named fields over some source type.
pub trait FieldSet: Copy + fmt::Debug + 'static {
    type Source;

    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn project(self, source: &Self::Source) -> Value;

    /// Case-insensitive lookup by field name.
    fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|field| field.name()).collect()
    }
}

/// Declares a [`FieldSet`] enum whose variants map to fields of a serializable struct.
macro_rules! field_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $source:ty {
            $($variant:ident => $field:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($variant),*
        }

        impl $crate::select::FieldSet for $name {
            type Source = $source;

            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unused_variables)]
            fn project(self, source: &$source) -> ::serde_json::Value {
                match self {
                    $(Self::$variant => $crate::select::to_value(&source.$field)),*
                }
            }
        }
    };
}

pub(crate) use field_set;

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Parsed form of a `--select` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<F, P> {
    /// `*`
    Whole,
    Field(F),
    /// `^Name`
    Param(P),
}

impl<F, P> Selection<F, P>
where
    F: FieldSet,
    P: FieldSet,
    F::Source: Serialize,
{
    pub fn parse(expression: &str) -> Result<Self> {
        let expression = expression.trim();
        if expression == "*" {
            return Ok(Selection::Whole);
        }

        if let Some(param) = expression.strip_prefix('^') {
            return P::lookup(param).map(Selection::Param).ok_or_else(|| {
                CmdletError::invalid_argument(
                    "Select",
                    expression,
                    format!(
                        "no input parameter named '{}' (expected one of: {})",
                        param,
                        P::names().join(", ")
                    ),
                )
            });
        }

        if expression.is_empty() {
            return Err(CmdletError::invalid_argument(
                "Select",
                expression,
                "the selection expression is empty",
            ));
        }

        F::lookup(expression).map(Selection::Field).ok_or_else(|| {
            CmdletError::invalid_argument(
                "Select",
                expression,
                format!(
                    "the response has no field named '{}' (expected '*', '^ParameterName' or one of: {})",
                    expression,
                    F::names().join(", ")
                ),
            )
        })
    }

    /// Parses `expression` when present, otherwise falls back to `default`.
    pub fn resolve(expression: Option<&str>, default: Self) -> Result<Self> {
        match expression {
            Some(expression) => Self::parse(expression),
            None => Ok(default),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Selection::Param(_))
    }

    pub fn project(&self, response: &F::Source, request: &P::Source) -> Result<Value> {
        Ok(match self {
            Selection::Whole => serde_json::to_value(response)?,
            Selection::Field(field) => field.project(response),
            Selection::Param(param) => param.project(request),
        })
    }
}

impl<F: FieldSet, P: FieldSet> fmt::Display for Selection<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Whole => write!(f, "*"),
            Selection::Field(field) => write!(f, "{}", field.name()),
            Selection::Param(param) => write!(f, "^{}", param.name()),
        }
    }
}
