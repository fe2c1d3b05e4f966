//! Capability fragments and their composition
//!
//! A builder is made of several independent capabilities: an aesthetics
//! block, a statistic parameter block, a `color_by` option and so on. Each
//! one seals itself into a fragment of the final configuration document.
//! The builder then concatenates its fragments in a fixed, declared order,
//! so a later capability overrides an earlier one on a shared key.

use serde_json::Value;

use crate::options::Options;

/// A number passed to a builder, emitted the way it was given.
///
/// Integers stay integers (`3`, not `3.0`). Non-finite floats have no JSON
/// form and are dropped from the fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    UInt(u64),
    Float(f64),
}

macro_rules! num_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Num {
                fn from(value: $source) -> Self {
                    Num::$variant(value as $target)
                }
            }
        )*
    };
}

num_from!(Int as i64: i8, i16, i32, i64, isize);
num_from!(UInt as u64: u8, u16, u32, u64, usize);
num_from!(Float as f64: f32, f64);

impl From<Num> for Value {
    fn from(num: Num) -> Self {
        match num {
            Num::Int(i) => Value::from(i),
            Num::UInt(u) => Value::from(u),
            // NaN and infinities become `null`, which fragments drop
            Num::Float(f) => Value::from(f),
        }
    }
}

/// A contributor of one fragment to a configuration document.
///
/// Implementations must be pure: the same parameters always produce the same
/// fragment, and unset parameters are omitted rather than emitted as null.
pub trait Capability {
    fn fragment(&self) -> Options;
}

impl Capability for Options {
    fn fragment(&self) -> Options {
        self.clone()
    }
}

impl<C: Capability + ?Sized> Capability for &C {
    fn fragment(&self) -> Options {
        (**self).fragment()
    }
}

/// Merge fragments left to right; later fragments win on key collision.
pub fn compose(parts: &[&dyn Capability]) -> Options {
    let composed = parts
        .iter()
        .fold(Options::new(), |acc, part| acc.merge(part.fragment()));
    tracing::trace!(keys = composed.len(), parts = parts.len(), "composed fragment");
    composed
}

/// Declare a capability struct.
///
/// Every field is optional and maps to one document key. The macro generates
/// the struct, a chainable setter per field and the [`Capability`] impl that
/// emits set fields in declaration order.
macro_rules! capability {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                $(#[$fmeta])*
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::capability::Capability for $name {
            fn fragment(&self) -> $crate::options::Options {
                $crate::options::Options::of([
                    $(
                        ($key, self.$field.clone().map(serde_json::Value::from)),
                    )*
                ])
            }
        }
    };
}

/// Forward chainable setters from a builder to one of its capability
/// delegates.
macro_rules! forward {
    ($delegate:ident { $( $field:ident : $ty:ty ),* $(,)? }) => {
        $(
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.$delegate.$field = Some(value.into());
                self
            }
        )*
    };
}

capability! {
    /// `color_by`: which color channel (`color`, `fill`, `paint_a`, ...)
    /// data-driven colors are taken from.
    pub struct ColorOption {
        color_by: String => "color_by",
    }
}

capability! {
    /// `fill_by`: counterpart of [`ColorOption`] for fills.
    pub struct FillOption {
        fill_by: String => "fill_by",
    }
}
