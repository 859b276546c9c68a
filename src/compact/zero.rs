use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// The capability of telling whether a value is the "zero" or "empty" value of its kind.
///
/// | Kind | Zero when |
/// |-|-|
/// | integers, floats | equal to `0` (`-0.0` is zero, `NaN` isn't) |
/// | `bool` | `false` |
/// | `char` | `'\0'` |
/// | `()` | always |
/// | `str`, `String`, `Cow<str>` | empty |
/// | slices, `Vec`, `VecDeque`, sets, maps | empty |
/// | `[T; N]` | `N == 0`, or every element is zero |
/// | `Option<T>` | `None` only; `Some` is never zero, whatever it holds |
/// | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | the pointee is zero |
///
/// `Option` is the nullable pointer here: it's checked for null but not looked through. References
/// and owning pointers can't be null, so they're transparent.
///
/// # Examples
/// ```
/// # use collection_utils::compact::IsZero;
/// assert!(0_u8.is_zero());
/// assert!("".is_zero());
/// assert!(Vec::<i32>::new().is_zero());
/// assert!(None::<i32>.is_zero());
/// assert!(!Some(0).is_zero());
/// assert!(Box::new(0.0_f64).is_zero());
/// ```
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero_numeric {
    ($zero:literal => $($t:ty),+) => {
        $(
            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

impl_is_zero_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_is_zero_numeric!(0.0 => f32, f64);

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl IsZero for () {
    fn is_zero(&self) -> bool {
        true
    }
}

macro_rules! impl_is_zero_len {
    ($([$($generics:tt)*] $t:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> IsZero for $t {
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_is_zero_len!(
    [] str,
    [] String,
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
);

impl IsZero for Cow<'_, str> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero, const N: usize> IsZero for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(IsZero::is_zero)
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_is_zero_deref {
    ($($t:ty),+) => {
        $(
            impl<T: IsZero + ?Sized> IsZero for $t {
                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }
            }
        )+
    };
}

impl_is_zero_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
