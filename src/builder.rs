use tracing::debug;

use crate::{
    ast::{ActionKind, Comparison, LogicOp, SortOrder},
    config::BuilderOptions,
    convert::values_to_json,
    error::QueryError,
    lexer,
    merge::merge_states,
    render::{RenderedQuery, render_with},
    results::ResultSet,
    state::QueryState,
    value::Value,
};

/// Immutable, chainable predicate builder over a [`ResultSet`].
///
/// Every chain method takes `&self` and returns a new builder; the receiver
/// is never changed. A builder can therefore be the root of any number of
/// independent chains.
///
/// Nothing is evaluated until a terminal method (`result`, `first`, `size`,
/// ...) renders the chain and hands it to the result set. The one exception
/// is [`sorted`](Self::sorted), which rebinds the result set immediately.
///
/// # Examples
///
/// ```
/// use realm_query_builder::query;
/// # use realm_query_builder::{ResultSet, Value};
/// # #[derive(Clone)]
/// # struct Rows(Vec<String>);
/// # impl ResultSet for Rows {
/// #     type Item = String;
/// #     type Error = std::convert::Infallible;
/// #     fn filtered(&self, _: &str, _: &[Value]) -> Result<Self, Self::Error> { Ok(self.clone()) }
/// #     fn sorted(&self, _: &str, _: bool) -> Self { self.clone() }
/// #     fn len(&self) -> usize { self.0.len() }
/// #     fn get(&self, index: usize) -> Option<String> { self.0.get(index).cloned() }
/// #     fn min(&self, _: Option<&str>) -> Option<Value> { None }
/// #     fn max(&self, _: Option<&str>) -> Option<Value> { None }
/// #     fn sum(&self, _: Option<&str>) -> Option<Value> { None }
/// #     fn avg(&self, _: Option<&str>) -> Option<Value> { None }
/// # }
/// # fn main() -> Result<(), realm_query_builder::QueryError> {
/// # let people = Rows(vec!["Jo".into()]);
/// let adults = query(people)
///     .greater_than_or_equal_to("age", 18)
///     .or()
///     .begin_group()
///     .equal_to("guardian", true, false)
///     .contains("name", "jo", true)
///     .end_group()?
///     .limit(20);
///
/// let rendered = adults.render();
/// assert_eq!(
///     rendered.expression,
///     "age >= $0 OR (guardian == $1 AND name CONTAINS[c] $2) LIMIT(20)"
/// );
///
/// let results = adults.result()?;
/// assert_eq!(results.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// # Extending
///
/// Domain-specific predicates go in an extension trait:
///
/// ```
/// use realm_query_builder::{QueryBuilder, query};
/// # use realm_query_builder::{ResultSet, Value};
/// # #[derive(Clone)]
/// # struct Rows(Vec<String>);
/// # impl ResultSet for Rows {
/// #     type Item = String;
/// #     type Error = std::convert::Infallible;
/// #     fn filtered(&self, _: &str, _: &[Value]) -> Result<Self, Self::Error> { Ok(self.clone()) }
/// #     fn sorted(&self, _: &str, _: bool) -> Self { self.clone() }
/// #     fn len(&self) -> usize { self.0.len() }
/// #     fn get(&self, index: usize) -> Option<String> { self.0.get(index).cloned() }
/// #     fn min(&self, _: Option<&str>) -> Option<Value> { None }
/// #     fn max(&self, _: Option<&str>) -> Option<Value> { None }
/// #     fn sum(&self, _: Option<&str>) -> Option<Value> { None }
/// #     fn avg(&self, _: Option<&str>) -> Option<Value> { None }
/// # }
/// trait ActiveExt {
///     fn active(&self) -> Self;
/// }
///
/// impl<R: ResultSet> ActiveExt for QueryBuilder<R> {
///     fn active(&self) -> Self {
///         self.equal_to("active", true, false)
///     }
/// }
///
/// let builder = query(Rows(Vec::new())).active().greater_than("age", 30);
/// assert_eq!(builder.render().expression, "active == $0 AND age > $1");
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<R> {
    results: R,
    state: QueryState,
    options: BuilderOptions,
}

impl<R: ResultSet> QueryBuilder<R> {
    pub fn new(results: R) -> Self {
        Self::with_options(results, BuilderOptions::default())
    }

    pub fn with_options(results: R, options: BuilderOptions) -> Self {
        QueryBuilder {
            results,
            state: QueryState::new(),
            options,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    /// The result set terminal methods filter (already sorted, if `sorted` was called).
    pub fn results(&self) -> &R {
        &self.results
    }

    /// Clone, then apply `f` to the clone's state.
    fn mutate(&self, f: impl FnOnce(&mut QueryState)) -> Self {
        let mut next = self.clone();
        f(&mut next.state);
        next
    }

    // ========================================
    // Filters
    // ========================================

    /// Appends `<property> <operator> $0` bound to `value`.
    #[doc(alias = "where")]
    pub fn where_(
        &self,
        property: impl Into<String>,
        operator: Comparison,
        value: impl Into<Value>,
    ) -> Self {
        let kind = ActionKind::Comparison {
            property: property.into(),
            operator,
            value: value.into(),
        };
        self.mutate(|state| state.push_action(kind))
    }

    pub fn equal_to(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
        case_insensitive: bool,
    ) -> Self {
        self.where_(
            property,
            Comparison::EQUAL.with_case_insensitive(case_insensitive),
            value,
        )
    }

    pub fn not_equal_to(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
        case_insensitive: bool,
    ) -> Self {
        self.where_(
            property,
            Comparison::NOT_EQUAL.with_case_insensitive(case_insensitive),
            value,
        )
    }

    /// `LIKE`: `?` matches one character, `*` any run of characters.
    pub fn like(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
        case_insensitive: bool,
    ) -> Self {
        self.where_(
            property,
            Comparison::LIKE.with_case_insensitive(case_insensitive),
            value,
        )
    }

    pub fn contains(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
        case_insensitive: bool,
    ) -> Self {
        self.where_(
            property,
            Comparison::CONTAINS.with_case_insensitive(case_insensitive),
            value,
        )
    }

    pub fn begins_with(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
        case_insensitive: bool,
    ) -> Self {
        self.where_(
            property,
            Comparison::BEGINS_WITH.with_case_insensitive(case_insensitive),
            value,
        )
    }

    pub fn ends_with(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
        case_insensitive: bool,
    ) -> Self {
        self.where_(
            property,
            Comparison::ENDS_WITH.with_case_insensitive(case_insensitive),
            value,
        )
    }

    pub fn greater_than(&self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_(property, Comparison::GreaterThan, value)
    }

    pub fn greater_than_or_equal_to(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.where_(property, Comparison::GreaterEqual, value)
    }

    pub fn less_than(&self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_(property, Comparison::LessThan, value)
    }

    pub fn less_than_or_equal_to(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.where_(property, Comparison::LessEqual, value)
    }

    /// `(<property> >= start AND <property> <= end)`, appended as one step.
    pub fn between(
        &self,
        property: impl Into<String>,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        let property = property.into();
        let (start, end) = (start.into(), end.into());

        self.mutate(|state| {
            state.open_group();
            state.push_action(ActionKind::Comparison {
                property: property.clone(),
                operator: Comparison::GreaterEqual,
                value: start,
            });
            state.push_action(ActionKind::Comparison {
                property,
                operator: Comparison::LessEqual,
                value: end,
            });
            state.close_last_group();
        })
    }

    /// `(<property> == v0 OR <property> == v1 ...)`.
    ///
    /// An empty list can match nothing and appends `FALSEPREDICATE` instead,
    /// without opening a group.
    #[doc(alias = "in")]
    pub fn in_<I, V>(&self, property: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let property = property.into();
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();

        self.mutate(|state| {
            if values.is_empty() {
                state.push_action(ActionKind::Constant(false));
                return;
            }

            state.open_group();
            for (index, value) in values.into_iter().enumerate() {
                if index != 0 {
                    state.set_operator(LogicOp::Or);
                }
                state.push_action(ActionKind::Comparison {
                    property: property.clone(),
                    operator: Comparison::EQUAL,
                    value,
                });
            }
            state.close_last_group();
        })
    }

    /// Appends `TRUEPREDICATE`.
    pub fn true_predicate(&self) -> Self {
        self.mutate(|state| state.push_action(ActionKind::Constant(true)))
    }

    /// Appends `FALSEPREDICATE`.
    pub fn false_predicate(&self) -> Self {
        self.mutate(|state| state.push_action(ActionKind::Constant(false)))
    }

    /// Appends predicate text whose `$0..$n` refer to `values`.
    ///
    /// The placeholders are renumbered when the chain is rendered, so a
    /// fragment is always written as if it were the whole predicate:
    ///
    /// ```
    /// use realm_query_builder::query;
    /// # use realm_query_builder::{ResultSet, Value};
    /// # #[derive(Clone)]
    /// # struct Rows(Vec<String>);
    /// # impl ResultSet for Rows {
    /// #     type Item = String;
    /// #     type Error = std::convert::Infallible;
    /// #     fn filtered(&self, _: &str, _: &[Value]) -> Result<Self, Self::Error> { Ok(self.clone()) }
    /// #     fn sorted(&self, _: &str, _: bool) -> Self { self.clone() }
    /// #     fn len(&self) -> usize { self.0.len() }
    /// #     fn get(&self, index: usize) -> Option<String> { self.0.get(index).cloned() }
    /// #     fn min(&self, _: Option<&str>) -> Option<Value> { None }
    /// #     fn max(&self, _: Option<&str>) -> Option<Value> { None }
    /// #     fn sum(&self, _: Option<&str>) -> Option<Value> { None }
    /// #     fn avg(&self, _: Option<&str>) -> Option<Value> { None }
    /// # }
    /// let builder = query(Rows(Vec::new()))
    ///     .equal_to("name", "Ada", false)
    ///     .raw("tags.@count > $0", [2]);
    ///
    /// assert_eq!(builder.render().expression, "name == $0 AND tags.@count > $1");
    /// ```
    pub fn raw<I, V>(&self, fragment: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let fragment = lexer::tokenize(fragment);
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();

        if fragment.placeholder_span() != values.len() {
            debug!(
                placeholders = fragment.placeholder_span(),
                values = values.len(),
                "raw fragment placeholder count differs from bound values"
            );
        }

        self.mutate(|state| state.push_action(ActionKind::Raw { fragment, values }))
    }

    // ========================================
    // Structure
    // ========================================

    /// Connect the next action with `OR`.
    pub fn or(&self) -> Self {
        self.mutate(|state| state.set_operator(LogicOp::Or))
    }

    /// Connect the next action with `AND` (the default).
    pub fn and(&self) -> Self {
        self.mutate(|state| state.set_operator(LogicOp::And))
    }

    /// Negate the next action or group. Repeated calls stack.
    pub fn not(&self) -> Self {
        self.mutate(|state| state.negate())
    }

    pub fn begin_group(&self) -> Self {
        self.mutate(|state| state.open_group())
    }

    /// Close the innermost open group.
    ///
    /// Fails under the strict group policy when no group is open or the
    /// group holds no action.
    pub fn end_group(&self) -> Result<Self, QueryError> {
        let mut next = self.clone();
        next.state.close_group(self.options.group_policy)?;
        Ok(next)
    }

    // ========================================
    // Result shaping
    // ========================================

    /// Append to the `DISTINCT(..)` property list.
    pub fn distinct<I, S>(&self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mutate(|state| state.add_distinct(properties))
    }

    /// Rebind the result set to its sorted form.
    ///
    /// Applied immediately, unlike filters. Earlier builders in the chain
    /// keep the unsorted result set.
    pub fn sorted(&self, property: &str, order: SortOrder) -> Self {
        debug!(property, descending = order.is_descending(), "sorting result set");

        let mut next = self.clone();
        next.results = self.results.sorted(property, order.is_descending());
        next
    }

    /// Set `LIMIT(n)`. The last call wins.
    pub fn limit(&self, limit: usize) -> Self {
        self.mutate(|state| state.set_limit(limit))
    }

    /// Splice `other`'s chain after this one.
    ///
    /// A trailing `or()`/`and()` on this builder decides how the spliced
    /// chain attaches. The result keeps this builder's result set and
    /// options; `other`'s sort order and limit are dropped.
    pub fn merge<S>(&self, other: &QueryBuilder<S>) -> Self {
        QueryBuilder {
            results: self.results.clone(),
            state: merge_states(&self.state, &other.state),
            options: self.options,
        }
    }

    // ========================================
    // Terminal operations
    // ========================================

    /// Render the chain without touching the result set.
    pub fn render(&self) -> RenderedQuery {
        render_with(&self.state, self.options.spacing)
    }

    /// Filter the result set with the rendered predicate.
    pub fn result(&self) -> Result<R, QueryError> {
        let RenderedQuery { expression, values } = self.render();

        debug!(%expression, values = values.len(), "filtering result set");

        self.results
            .filtered(&expression, &values)
            .map_err(|e| {
                debug!(error = %e, %expression, "result set rejected predicate");
                QueryError::Delegation {
                    values: values_to_json(&values),
                    expression,
                    source: Box::new(e),
                }
            })
    }

    pub fn first(&self) -> Result<Option<R::Item>, QueryError> {
        Ok(self.result()?.get(0))
    }

    pub fn last(&self) -> Result<Option<R::Item>, QueryError> {
        let results = self.result()?;
        Ok(results.len().checked_sub(1).and_then(|i| results.get(i)))
    }

    pub fn size(&self) -> Result<usize, QueryError> {
        Ok(self.result()?.len())
    }

    /// First object whose `property` equals `value`.
    pub fn find_by(
        &self,
        property: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<R::Item>, QueryError> {
        self.equal_to(property, value, false).limit(1).first()
    }

    pub fn min(&self, property: Option<&str>) -> Result<Option<Value>, QueryError> {
        Ok(self.result()?.min(property))
    }

    pub fn max(&self, property: Option<&str>) -> Result<Option<Value>, QueryError> {
        Ok(self.result()?.max(property))
    }

    pub fn sum(&self, property: Option<&str>) -> Result<Option<Value>, QueryError> {
        Ok(self.result()?.sum(property))
    }

    pub fn avg(&self, property: Option<&str>) -> Result<Option<Value>, QueryError> {
        Ok(self.result()?.avg(property))
    }
}
