//! Call-site capture for the `{fileName}`, `{lineNumber}`, `{functionName}`
//! and `{columnNumber}` template tokens

use std::panic::Location;
use std::path::Path;

/// Where a log call was made. Missing pieces leave their template token in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    pub file_name: Option<String>,
    pub line_number: Option<u32>,
    pub function_name: Option<String>,
    pub column_number: Option<u32>,
}

impl CallSite {
    /// Call site from a source path; only the basename is kept.
    pub fn new(file: &str, line: u32, column: u32) -> Self {
        Self {
            file_name: Some(basename(file).to_string()),
            line_number: Some(line),
            function_name: None,
            column_number: Some(column),
        }
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        let function = function.into();
        self.function_name = if function.is_empty() { None } else { Some(function) };
        self
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.is_none()
            && self.line_number.is_none()
            && self.function_name.is_none()
            && self.column_number.is_none()
    }
}

/// Turns the caller of a logging method into a [`CallSite`].
///
/// The location passed in is the user's call: every public logging method is
/// `#[track_caller]`, so the logger's own frames are already skipped.
pub trait CallSiteResolver: Send + Sync {
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallSite>;
}

/// Default resolver: file, line and column from `#[track_caller]`.
///
/// Function names are not available this way; `{functionName}` stays literal
/// unless the call came through one of the logging macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackCallerResolver;

impl CallSiteResolver for TrackCallerResolver {
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallSite> {
        Some(CallSite::from_location(caller))
    }
}

/// Resolver that never reports a call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallSite;

impl CallSiteResolver for NoCallSite {
    fn resolve(&self, _caller: &'static Location<'static>) -> Option<CallSite> {
        None
    }
}

fn basename(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file)
}

/// Reduce a `type_name` path of a probe fn to the enclosing function's name.
#[doc(hidden)]
pub fn function_name_from_path(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the function this macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::call_site::function_name_from_path(__type_name_of(__here))
    }};
}

/// Full call site of the macro invocation.
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        $crate::CallSite::new(::std::file!(), ::std::line!(), ::std::column!())
            .with_function($crate::__function_name!())
    };
}
