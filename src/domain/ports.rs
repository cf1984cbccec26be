use crate::domain::model::{FieldKind, FieldValue, Record};
use std::borrow::Cow;

/// Field access by name. This is what lets the filters and the sorter work
/// over any row type without knowing its fields at compile time.
///
/// Plain structs usually get an implementation from [`impl_searchable!`],
/// which also declares each field's kind. Schemaless rows ([`Record`],
/// `serde_json::Value`) leave `declared_kind` at its default, and the kind is
/// then probed from the data.
///
/// [`impl_searchable!`]: crate::impl_searchable
pub trait Searchable {
    /// `None` when the row has no field of that name.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Kind of `name` as declared by the type, independent of any value.
    fn declared_kind(_name: &str) -> Option<FieldKind>
    where
        Self: Sized,
    {
        None
    }
}

impl<T: Searchable> Searchable for &T {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }

    fn declared_kind(name: &str) -> Option<FieldKind> {
        T::declared_kind(name)
    }
}

impl Searchable for Record {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        self.data.get(name).map(FieldValue::from)
    }
}

impl Searchable for serde_json::Map<String, serde_json::Value> {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(FieldValue::from)
    }
}

impl Searchable for serde_json::Value {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        self.as_object()?.get(name).map(FieldValue::from)
    }
}

/// Converts a struct field into a [`FieldValue`] and names its kind.
pub trait AsFieldValue {
    const KIND: FieldKind;

    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(self.as_str()))
    }
}

impl AsFieldValue for &str {
    const KIND: FieldKind = FieldKind::Text;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(*self))
    }
}

impl AsFieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

macro_rules! integer_field {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                const KIND: FieldKind = FieldKind::Integer;

                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

integer_field!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer_field {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                const KIND: FieldKind = FieldKind::Integer;

                fn as_field_value(&self) -> FieldValue<'_> {
                    i64::try_from(*self)
                        .map(FieldValue::Integer)
                        .unwrap_or(FieldValue::Float(*self as f64))
                }
            }
        )*
    };
}

wide_integer_field!(u64, usize, isize);

impl AsFieldValue for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl<V: AsFieldValue> AsFieldValue for Option<V> {
    const KIND: FieldKind = V::KIND;

    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.as_field_value(),
            None => FieldValue::Null,
        }
    }
}

/// Registers a name → field accessor table for a struct.
///
/// ```
/// use datatable_search::{impl_searchable, FieldKind, Searchable};
///
/// struct Customer {
///     name: String,
///     city: Option<String>,
///     orders: u32,
/// }
///
/// impl_searchable!(Customer {
///     "Name" => name: String,
///     "City" => city: Option<String>,
///     "Orders" => orders: u32,
/// });
///
/// assert_eq!(Customer::declared_kind("City"), Some(FieldKind::Text));
/// assert_eq!(Customer::declared_kind("Orders"), Some(FieldKind::Integer));
/// ```
#[macro_export]
macro_rules! impl_searchable {
    ($ty:ty { $($key:literal => $field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::Searchable for $ty {
            fn field_value(&self, name: &str) -> ::core::option::Option<$crate::FieldValue<'_>> {
                match name {
                    $($key => ::core::option::Option::Some(
                        <$fty as $crate::AsFieldValue>::as_field_value(&self.$field),
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn declared_kind(name: &str) -> ::core::option::Option<$crate::FieldKind> {
                match name {
                    $($key => ::core::option::Option::Some(<$fty as $crate::AsFieldValue>::KIND),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}
