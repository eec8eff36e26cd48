//! Conversion of log call arguments into message text
//!
//! Every argument of a log call becomes text through [`Loggable`]. Plain
//! values (strings, numbers, booleans) render as-is; anything else is wrapped
//! in [`Inspect`] and rendered through its `Debug` implementation. The parts
//! are joined with single spaces in call order. Rendering never fails: a
//! formatting impl that reports an error yields [`UNREPRESENTABLE`].

use std::fmt::{self, Debug, Display, Write};

/// Text used when a value's formatting impl reports an error.
pub const UNREPRESENTABLE: &str = "[unrepresentable]";

/// Compact inspections longer than this switch to the multi-line form.
pub const INSPECT_BREAK_LENGTH: usize = 72;

/// A value that can appear in a log call.
pub trait Loggable {
    fn render(&self) -> String;
}

/// Render a `Display` value, never panicking.
pub fn display_lossy<T: Display + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    match write!(out, "{}", value) {
        Ok(()) => out,
        Err(_) => UNREPRESENTABLE.to_string(),
    }
}

/// Debug-oriented inspection of a structured value.
pub fn inspect_lossy<T: Debug + ?Sized>(value: &T) -> String {
    let mut compact = String::new();
    if write!(compact, "{:?}", value).is_err() {
        return UNREPRESENTABLE.to_string();
    }
    if compact.len() <= INSPECT_BREAK_LENGTH {
        return compact;
    }

    let mut pretty = String::new();
    match write!(pretty, "{:#?}", value) {
        Ok(()) => pretty,
        Err(_) => compact,
    }
}

/// Join rendered values with single spaces.
pub fn render_values(values: &[&dyn Loggable]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&value.render());
    }
    line
}

/// Wrapper rendering a value through `Debug`.
///
/// # Examples
///
/// ```
/// use transport_logger::{inspect, Loggable};
///
/// #[derive(Debug)]
/// struct User { id: u32 }
///
/// assert_eq!(inspect(&User { id: 7 }).render(), "User { id: 7 }");
/// ```
pub struct Inspect<'a, T: Debug + ?Sized>(pub &'a T);

pub fn inspect<T: Debug + ?Sized>(value: &T) -> Inspect<'_, T> {
    Inspect(value)
}

impl<T: Debug + ?Sized> Loggable for Inspect<'_, T> {
    fn render(&self) -> String {
        inspect_lossy(self.0)
    }
}

impl Loggable for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Loggable for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Loggable for fmt::Arguments<'_> {
    fn render(&self) -> String {
        display_lossy(self)
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Loggable> Loggable for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "None".to_string(),
        }
    }
}

macro_rules! loggable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn render(&self) -> String {
                    display_lossy(self)
                }
            }
        )*
    };
}

loggable_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
