//! Filter-clause builder for dynamic SELECTs.
//!
//! Predicates are pushed in any combination; each one takes the next `$n`
//! placeholder at push time and its value is stored at the same position.
//! WHERE and HAVING predicates are kept apart, so the order they appear in
//! the final SQL never disturbs the numbering. `LIMIT` always binds last.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// A bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
    Float(f64),
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Accumulates predicates and their parameters for one SELECT.
#[derive(Debug, Clone)]
pub struct FilterClause {
    select: String,
    wheres: Vec<String>,
    group_by: Option<String>,
    havings: Vec<String>,
    order_by: Option<String>,
    params: Vec<SqlParam>,
}

impl FilterClause {
    /// Start from the `SELECT ... FROM ... JOIN ...` head of the query.
    pub fn new(select: impl Into<String>) -> Self {
        Self {
            select: select.into(),
            wheres: Vec::new(),
            group_by: None,
            havings: Vec::new(),
            order_by: None,
            params: Vec::new(),
        }
    }

    /// Store a parameter and return its 1-based placeholder index.
    fn next_placeholder(&mut self, param: SqlParam) -> usize {
        self.params.push(param);
        self.params.len()
    }

    /// Append `lhs op $n` to the WHERE conjunction.
    pub fn and_where(&mut self, lhs: &str, op: &str, param: impl Into<SqlParam>) -> &mut Self {
        let n = self.next_placeholder(param.into());
        self.wheres.push(format!("{} {} ${}", lhs, op, n));
        self
    }

    /// Append `lhs op $n` to the HAVING conjunction.
    pub fn and_having(&mut self, lhs: &str, op: &str, param: impl Into<SqlParam>) -> &mut Self {
        let n = self.next_placeholder(param.into());
        self.havings.push(format!("{} {} ${}", lhs, op, n));
        self
    }

    pub fn group_by(&mut self, columns: &str) -> &mut Self {
        self.group_by = Some(columns.to_owned());
        self
    }

    pub fn order_by(&mut self, columns: &str) -> &mut Self {
        self.order_by = Some(columns.to_owned());
        self
    }

    /// Number of parameters bound so far.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Finish the statement with `LIMIT $n`.
    pub fn build(mut self, limit: i64) -> BuiltQuery {
        let limit_n = self.next_placeholder(SqlParam::BigInt(limit));

        let mut sql = self.select.trim().to_owned();
        if !self.wheres.is_empty() {
            sql.push_str("\nWHERE ");
            sql.push_str(&self.wheres.join("\n  AND "));
        }
        if let Some(group_by) = &self.group_by {
            sql.push_str("\nGROUP BY ");
            sql.push_str(group_by);
        }
        if !self.havings.is_empty() {
            sql.push_str("\nHAVING ");
            sql.push_str(&self.havings.join("\n  AND "));
        }
        if let Some(order_by) = &self.order_by {
            sql.push_str("\nORDER BY ");
            sql.push_str(order_by);
        }
        sql.push_str(&format!("\nLIMIT ${}", limit_n));

        BuiltQuery {
            sql,
            params: self.params,
        }
    }
}

/// Final SQL text with parameters in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl BuiltQuery {
    /// Prepare a typed query with every parameter bound in order.
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut query = sqlx::query_as::<Postgres, O>(&self.sql);
        for param in &self.params {
            query = match param {
                SqlParam::Text(v) => query.bind(v.as_str()),
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::BigInt(v) => query.bind(*v),
                SqlParam::Float(v) => query.bind(*v),
            };
        }
        query
    }
}
