use std::fmt;

use crate::coerce::{Kind, Primitive};

const OPTIONAL: &str = "optional";

/// Implemented by structs that can be populated by a [`Binder`].
///
/// Usually derived with `#[derive(Bind)]`, but a [`Schema`] can be written by
/// hand just as well:
///
/// ```
/// use envsnatch::{Bind, Schema};
///
/// struct Config {
///     host: String,
///     port: u16,
/// }
///
/// impl Bind for Config {
///     fn schema() -> Schema<Self> {
///         Schema::<Self>::new()
///             .field::<String>("HOST", |config| &mut config.host)
///             .field::<u16>("PORT,optional", |config| &mut config.port)
///     }
/// }
///
/// assert_eq!(2, Config::schema().len());
/// ```
///
/// [`Binder`]: crate::Binder
pub trait Bind: Sized + 'static {
    fn schema() -> Schema<Self>;
}

/// How a single field is bound, parsed from its tag.
///
/// A tag is either `KEY` or `KEY,optional`. Anything after a second part is
/// ignored, as is a second part other than `optional`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    source_key: String,
    optional: bool,
    kind: Kind,
}

impl FieldSpec {
    pub fn parse(tag: &str, kind: Kind) -> Self {
        let mut parts = tag.split(',');
        let source_key = parts.next().unwrap_or_default().to_owned();
        let optional = parts.next() == Some(OPTIONAL);

        Self {
            source_key,
            optional,
            kind,
        }
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

type Assign<T> = Box<dyn Fn(&mut T, &str)>;

pub(crate) struct SchemaField<T> {
    spec: FieldSpec,
    assign: Assign<T>,
}

impl<T> SchemaField<T> {
    pub(crate) fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Coerce `raw` and write it through. An unparsable value leaves the
    /// field untouched.
    pub(crate) fn assign(&self, destination: &mut T, raw: &str) {
        (self.assign)(destination, raw)
    }
}

/// The fields of `T` a [`Binder`] populates, in declaration order.
///
/// [`Binder`]: crate::Binder
pub struct Schema<T> {
    fields: Vec<SchemaField<T>>,
}

impl<T: 'static> Schema<T> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field bound according to `tag`, reached through `accessor`.
    pub fn field<V: Primitive>(mut self, tag: &str, accessor: fn(&mut T) -> &mut V) -> Self {
        let assign = move |destination: &mut T, raw: &str| {
            if let Some(value) = V::coerce(raw) {
                *accessor(destination) = value;
            }
        };

        self.fields.push(SchemaField {
            spec: FieldSpec::parse(tag, V::KIND),
            assign: Box::new(assign),
        });
        self
    }

    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(SchemaField::spec)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render a `.env` template listing every variable the schema reads.
    ///
    /// Optional variables are commented out. Fields without a source key are
    /// left out.
    pub fn requirements(&self) -> String {
        let mut requirements = String::new();

        for spec in self.specs().filter(|spec| !spec.source_key.is_empty()) {
            if spec.optional {
                requirements.push_str("# ");
            }
            requirements.push_str(&spec.source_key);
            requirements.push_str("=\n");
        }
        requirements
    }

    pub(crate) fn fields(&self) -> &[SchemaField<T>] {
        &self.fields
    }
}

impl<T: 'static> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.fields.iter().map(|field| &field.spec))
            .finish()
    }
}
