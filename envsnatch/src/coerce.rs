use std::{fmt, str::FromStr};

/// The primitive kind a field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    SignedInt,
    UnsignedInt,
    Float,
    Bool,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::SignedInt => "signed integer",
            Self::UnsignedInt => "unsigned integer",
            Self::Float => "float",
            Self::Bool => "bool",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A type a field can be bound to.
///
/// Implemented for `String`, every signed and unsigned integer width, `f32`,
/// `f64` and `bool`. The trait is sealed: a field of any other type is a
/// compile error rather than something discovered while binding.
pub trait Primitive: sealed::Sealed + Sized + 'static {
    const KIND: Kind;

    /// Parse `raw` into `Self`, returning `None` if it isn't a valid literal.
    fn coerce(raw: &str) -> Option<Self>;
}

impl sealed::Sealed for String {}

impl Primitive for String {
    const KIND: Kind = Kind::String;

    fn coerce(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

fn from_str<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse::<T>().ok()
}

macro_rules! impl_primitive {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: Kind = Kind::$kind;

                fn coerce(raw: &str) -> Option<Self> {
                    from_str(raw)
                }
            }
        )+
    };
}

impl_primitive!(SignedInt => i8, i16, i32, i64, i128, isize);
impl_primitive!(UnsignedInt => u8, u16, u32, u64, u128, usize);
impl_primitive!(Float => f32, f64);

impl sealed::Sealed for bool {}

/// Accepts `1`, `t`, `T`, `true`, `True`, `TRUE` and their `false`
/// counterparts (`0`, `f`, `F`, `false`, `False`, `FALSE`).
impl Primitive for bool {
    const KIND: Kind = Kind::Bool;

    fn coerce(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Some(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Some(false),
            _ => None,
        }
    }
}
