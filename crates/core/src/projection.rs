//! Explicit field projection for domain records.
//!
//! Domain records are never serialized wholesale. Each record type
//! publishes a [`Schema`] (field name to getter) and callers name the
//! fields they want in the response. Names outside the schema are
//! rejected before any getter runs.

use serde_json::{Map, Value};

use crate::error::CoreError;

/// Reads one field of a record as JSON.
pub type Getter<R> = fn(&R) -> Value;

/// Ordered mapping from field name to getter for record type `R`.
///
/// Name `R` on the constructor (`Schema::<Self>::new()`): the getter
/// closures take their argument type from it.
///
/// # Example
///
/// ```
/// use respond_core::projection::{Record, Schema};
/// use serde_json::json;
///
/// struct User {
///     id: i64,
///     email: String,
///     password_hash: String,
/// }
///
/// impl Record for User {
///     fn schema() -> Schema<Self> {
///         Schema::<Self>::new()
///             .field("id", |u| json!(u.id))
///             .field("email", |u| json!(u.email))
///             .field("password_hash", |u| json!(u.password_hash))
///     }
/// }
///
/// let user = User { id: 7, email: "a@b.c".into(), password_hash: "x".into() };
/// let projected = User::schema().project(&user, &["id", "email"]).unwrap();
/// assert_eq!(projected.len(), 2);
/// assert!(!projected.contains_key("password_hash"));
/// ```
pub struct Schema<R> {
    fields: Vec<(&'static str, Getter<R>)>,
}

impl<R> Schema<R> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register a field. A name registered twice keeps its first getter.
    pub fn field(mut self, name: &'static str, getter: Getter<R>) -> Self {
        if self.getter(name).is_none() {
            self.fields.push((name, getter));
        }
        self
    }

    /// Field names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.getter(name).is_some()
    }

    pub fn getter(&self, name: &str) -> Option<Getter<R>> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, getter)| *getter)
    }

    /// Project `record` onto the requested `fields`.
    ///
    /// Every name is checked against the schema first, so an unknown name
    /// fails the whole projection. Repeated names are emitted once.
    pub fn project(&self, record: &R, fields: &[&str]) -> Result<Map<String, Value>, CoreError> {
        if let Some(unknown) = fields.iter().find(|name| !self.contains(name)) {
            return Err(CoreError::UnknownField((*unknown).to_string()));
        }

        let mut result = Map::new();
        for name in fields {
            if result.contains_key(*name) {
                continue;
            }
            if let Some(getter) = self.getter(name) {
                result.insert((*name).to_string(), getter(record));
            }
        }
        Ok(result)
    }
}

impl<R> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// A domain record with a known set of projectable fields.
pub trait Record: Sized {
    fn schema() -> Schema<Self>;
}

/// Object-safe view over any [`Record`].
///
/// Lets heterogeneous code paths (such as the `ok` builder) accept a
/// record without knowing its concrete type.
pub trait Projectable {
    fn project(&self, fields: &[&str]) -> Result<Map<String, Value>, CoreError>;
}

impl<R: Record> Projectable for R {
    fn project(&self, fields: &[&str]) -> Result<Map<String, Value>, CoreError> {
        R::schema().project(self, fields)
    }
}

/// Project every record in `records`, failing on the first unknown field.
pub fn project_all<'a, R, I>(records: I, fields: &[&str]) -> Result<Vec<Value>, CoreError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let schema = R::schema();
    records
        .into_iter()
        .map(|record| schema.project(record, fields).map(Value::Object))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    struct Account {
        id: i64,
        name: String,
        secret: String,
    }

    impl Record for Account {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .field("id", |a| json!(a.id))
                .field("name", |a| json!(a.name))
                .field("secret", |a| json!(a.secret))
        }
    }

    fn account() -> Account {
        Account {
            id: 1,
            name: "alice".into(),
            secret: "hunter2".into(),
        }
    }

    // -- Schema::project ----------------------------------------------------

    #[test]
    fn projects_only_requested_fields() {
        let projected = account().project(&["id", "name"]).unwrap();

        assert_eq!(Value::Object(projected), json!({ "id": 1, "name": "alice" }));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = account().project(&["id", "nickname"]);

        assert_matches!(result, Err(CoreError::UnknownField(name)) if name == "nickname");
    }

    #[test]
    fn repeated_field_appears_once() {
        let projected = account().project(&["name", "name"]).unwrap();

        assert_eq!(projected.len(), 1);
    }

    #[test]
    fn empty_field_list_projects_to_empty_object() {
        let projected = account().project(&[]).unwrap();

        assert!(projected.is_empty());
    }

    // -- Schema -------------------------------------------------------------

    #[test]
    fn names_keep_registration_order() {
        let names: Vec<_> = Account::schema().names().collect();

        assert_eq!(names, vec!["id", "name", "secret"]);
    }

    #[test]
    fn duplicate_registration_keeps_first_getter() {
        let schema = Schema::<Account>::new()
            .field("id", |a| json!(a.id))
            .field("id", |_| json!("shadowed"));

        assert_eq!(schema.names().count(), 1);
        assert_eq!(schema.project(&account(), &["id"]).unwrap()["id"], 1);
    }

    // -- project_all --------------------------------------------------------

    #[test]
    fn project_all_maps_each_record() {
        let records = vec![account(), account()];

        let projected = project_all(&records, &["id"]).unwrap();

        assert_eq!(projected, vec![json!({ "id": 1 }), json!({ "id": 1 })]);
    }

    #[test]
    fn project_all_fails_on_unknown_field() {
        let records = vec![account()];

        assert_matches!(
            project_all(&records, &["missing"]),
            Err(CoreError::UnknownField(_))
        );
    }
}
