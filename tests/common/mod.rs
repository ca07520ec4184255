// Shared result set double for the builder and merge tests.
//
// The fake never evaluates predicates: `filtered` records the call and
// returns the same rows, the way a mocked `Realm.Results` would.
#![allow(dead_code)]

use realm_query_builder::{ResultSet, Value};
use std::{cell::RefCell, fmt, rc::Rc};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Filtered(String, Vec<Value>),
    Sorted(String, bool),
    Aggregate(&'static str, Option<String>),
}

#[derive(Debug)]
pub struct FakeError(pub String);

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FakeError {}

#[derive(Debug, Clone, Default)]
pub struct FakeResults {
    rows: Vec<String>,
    calls: Rc<RefCell<Vec<Call>>>,
    failure: Option<String>,
    aggregate: Option<Value>,
    sort_keys: Vec<(String, bool)>,
}

impl FakeResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: &[&str]) -> Self {
        FakeResults {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        FakeResults {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_aggregate(value: Value) -> Self {
        FakeResults {
            aggregate: Some(value),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn filtered_calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Filtered(expr, values) => Some((expr, values)),
                _ => None,
            })
            .collect()
    }

    /// Sorts applied to this handle, oldest first.
    pub fn sort_keys(&self) -> &[(String, bool)] {
        &self.sort_keys
    }

    fn record_aggregate(&self, name: &'static str, property: Option<&str>) -> Option<Value> {
        self.calls
            .borrow_mut()
            .push(Call::Aggregate(name, property.map(str::to_string)));
        self.aggregate.clone()
    }
}

impl ResultSet for FakeResults {
    type Item = String;
    type Error = FakeError;

    fn filtered(&self, expression: &str, values: &[Value]) -> Result<Self, Self::Error> {
        self.calls
            .borrow_mut()
            .push(Call::Filtered(expression.to_string(), values.to_vec()));

        match &self.failure {
            Some(message) => Err(FakeError(message.clone())),
            None => Ok(self.clone()),
        }
    }

    fn sorted(&self, property: &str, descending: bool) -> Self {
        self.calls
            .borrow_mut()
            .push(Call::Sorted(property.to_string(), descending));

        let mut next = self.clone();
        next.sort_keys.push((property.to_string(), descending));
        next
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, index: usize) -> Option<String> {
        self.rows.get(index).cloned()
    }

    fn min(&self, property: Option<&str>) -> Option<Value> {
        self.record_aggregate("min", property)
    }

    fn max(&self, property: Option<&str>) -> Option<Value> {
        self.record_aggregate("max", property)
    }

    fn sum(&self, property: Option<&str>) -> Option<Value> {
        self.record_aggregate("sum", property)
    }

    fn avg(&self, property: Option<&str>) -> Option<Value> {
        self.record_aggregate("avg", property)
    }
}

pub fn s(v: &str) -> Value {
    Value::String(v.to_string())
}

/// `["value0", "value1", ...]`
pub fn generate_values(len: usize) -> Vec<Value> {
    (0..len).map(|i| Value::String(format!("value{}", i))).collect()
}

/// Placeholder numbers in order of appearance.
pub fn placeholders(expression: &str) -> Vec<usize> {
    expression
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        })
        .collect()
}
