//! Typed query surface: filters, projections, sorts
//! Everything renders down to the BSON documents the store consumes

use bson::{Bson, Document};
use mongodb::options::FindOptions;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn key(self) -> i32 {
        match self {
            Order::Asc => 1,
            Order::Desc => -1,
        }
    }
}

/// Record-selection predicate
///
/// Equality and comparison conditions on single fields, combinable with
/// `and` / `or` / `nor`; `not` negates a whole clause
#[derive(Debug, Clone, Default)]
pub struct Filter(Document);

impl Filter {
    /// Match every record
    pub fn all() -> Self {
        Self(Document::new())
    }

    /// Field equals value
    pub fn eq(field: &str, value: impl Into<Bson>) -> Self {
        let mut filter = Document::new();
        filter.insert(field, value);
        Self(filter)
    }

    /// Field differs from value
    pub fn ne(field: &str, value: impl Into<Bson>) -> Self {
        Self::compare(field, "$ne", value)
    }

    /// Field greater than value
    pub fn gt(field: &str, value: impl Into<Bson>) -> Self {
        Self::compare(field, "$gt", value)
    }

    /// Field greater than or equal to value
    pub fn gte(field: &str, value: impl Into<Bson>) -> Self {
        Self::compare(field, "$gte", value)
    }

    /// Field less than value
    pub fn lt(field: &str, value: impl Into<Bson>) -> Self {
        Self::compare(field, "$lt", value)
    }

    /// Field less than or equal to value
    pub fn lte(field: &str, value: impl Into<Bson>) -> Self {
        Self::compare(field, "$lte", value)
    }

    /// Field value is one of the given values
    pub fn one_of(field: &str, values: impl IntoIterator<Item = impl Into<Bson>>) -> Self {
        let values: Vec<Bson> = values.into_iter().map(Into::into).collect();
        Self::compare(field, "$in", values)
    }

    /// Field value is none of the given values
    pub fn none_of(field: &str, values: impl IntoIterator<Item = impl Into<Bson>>) -> Self {
        let values: Vec<Bson> = values.into_iter().map(Into::into).collect();
        Self::compare(field, "$nin", values)
    }

    /// Every clause matches
    pub fn and(clauses: impl IntoIterator<Item = Filter>) -> Self {
        Self::combine("$and", clauses)
    }

    /// At least one clause matches
    pub fn or(clauses: impl IntoIterator<Item = Filter>) -> Self {
        Self::combine("$or", clauses)
    }

    /// No clause matches
    pub fn nor(clauses: impl IntoIterator<Item = Filter>) -> Self {
        Self::combine("$nor", clauses)
    }

    /// The clause does not match (single-clause `$nor`)
    pub fn not(clause: Filter) -> Self {
        Self::combine("$nor", [clause])
    }

    /// The rendered filter document
    pub fn to_document(&self) -> Document {
        self.0.clone()
    }

    fn compare(field: &str, op: &str, value: impl Into<Bson>) -> Self {
        let mut condition = Document::new();
        condition.insert(op, value);
        let mut filter = Document::new();
        filter.insert(field, condition);
        Self(filter)
    }

    fn combine(op: &str, clauses: impl IntoIterator<Item = Filter>) -> Self {
        let clauses: Vec<Document> = clauses.into_iter().map(|clause| clause.0).collect();
        let mut filter = Document::new();
        filter.insert(op, clauses);
        Self(filter)
    }
}

impl From<Filter> for Document {
    fn from(filter: Filter) -> Self {
        filter.0
    }
}

/// Field selection for query results
///
/// Inclusion and exclusion are mutually exclusive modes; the store keeps
/// `_id` in inclusion mode unless it is excluded explicitly
#[derive(Debug, Clone)]
pub enum Projection {
    /// Keep only the listed fields
    Include(Vec<String>),
    /// Drop the listed fields
    Exclude(Vec<String>),
}

impl Projection {
    /// Keep only the listed fields
    pub fn include(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Include(fields.into_iter().map(Into::into).collect())
    }

    /// Drop the listed fields
    pub fn exclude(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Exclude(fields.into_iter().map(Into::into).collect())
    }

    /// The rendered projection document (field -> 1 or field -> 0)
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        match self {
            Self::Include(fields) => {
                for field in fields {
                    doc.insert(field, 1);
                }
            }
            Self::Exclude(fields) => {
                for field in fields {
                    doc.insert(field, 0);
                }
            }
        }
        doc
    }
}

/// Multi-key ordering, keys applied in the order they were added
#[derive(Debug, Clone, Default)]
pub struct Sort(Document);

impl Sort {
    /// Order by one field
    pub fn by(field: &str, order: Order) -> Self {
        Self(Document::new()).then(field, order)
    }

    /// Order by one field, ascending
    pub fn asc(field: &str) -> Self {
        Self::by(field, Order::Asc)
    }

    /// Order by one field, descending
    pub fn desc(field: &str) -> Self {
        Self::by(field, Order::Desc)
    }

    /// Add a lower-priority sort key
    pub fn then(mut self, field: &str, order: Order) -> Self {
        self.0.insert(field, order.key());
        self
    }

    /// The rendered sort document (field -> 1 or field -> -1)
    pub fn to_document(&self) -> Document {
        self.0.clone()
    }
}

/// A complete find request: filter plus result shaping
#[derive(Debug, Clone, Default)]
pub struct Query {
    filter: Filter,
    projection: Option<Projection>,
    sort: Option<Sort>,
    limit: Option<i64>,
    skip: Option<u64>,
}

impl Query {
    /// Query matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the projection
    pub fn select(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Cap the number of returned records
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip the first records of the result
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// The rendered filter document
    pub fn filter_document(&self) -> Document {
        self.filter.to_document()
    }

    /// Driver options carrying projection, sort, limit and skip
    pub(crate) fn to_find_options(&self) -> FindOptions {
        let mut options = FindOptions::default();
        options.projection = self.projection.as_ref().map(Projection::to_document);
        options.sort = self.sort.as_ref().map(Sort::to_document);
        options.limit = self.limit;
        options.skip = self.skip;
        options
    }
}
