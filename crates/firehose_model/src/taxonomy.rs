//! Stable taxonomy identifiers for classified diagnostics.

use serde::Serialize;
use std::fmt;

/// A stable, short identifier naming the category of a diagnostic.
///
/// Identifiers are rendered in kebab case (e.g. `calling-external`) and are
/// meant to stay the same across runs so reports can be deduplicated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Taxonomy {
    /// A call to a function with no definition.
    UndefinedFunctionReference,
    /// A use of a global variable with no definition.
    UndefinedVariableReference,
    /// A call out to an external (native) function.
    CallingExternal,
    /// The entry point was called with extra arguments.
    CallingUserMain,
    /// An unusually large allocation.
    LargeAlloc,
    /// A call to `execve`.
    Execve,
    /// The executable contains module-level assembly.
    ModuleLevelAssembly,
    /// A function contains inline assembly.
    InlineAsm,
    /// An operation was silently ignored.
    SilentlyIgnoring,
    /// The POSIX runtime was used with too few arguments to `main()`.
    PosixRuntime,
    /// A symbol could not be loaded.
    SymbolLoading,
    /// An external call failed.
    ExternalCall,
    /// Anything no rule recognized.
    Other,
}

impl Taxonomy {
    /// Every identifier, in declaration order.
    pub const ALL: [Taxonomy; 13] = [
        Taxonomy::UndefinedFunctionReference,
        Taxonomy::UndefinedVariableReference,
        Taxonomy::CallingExternal,
        Taxonomy::CallingUserMain,
        Taxonomy::LargeAlloc,
        Taxonomy::Execve,
        Taxonomy::ModuleLevelAssembly,
        Taxonomy::InlineAsm,
        Taxonomy::SilentlyIgnoring,
        Taxonomy::PosixRuntime,
        Taxonomy::SymbolLoading,
        Taxonomy::ExternalCall,
        Taxonomy::Other,
    ];

    /// Returns the markup identifier for this taxonomy entry.
    pub fn as_str(self) -> &'static str {
        match self {
            Taxonomy::UndefinedFunctionReference => "undefined-function-reference",
            Taxonomy::UndefinedVariableReference => "undefined-variable-reference",
            Taxonomy::CallingExternal => "calling-external",
            Taxonomy::CallingUserMain => "calling-user-main",
            Taxonomy::LargeAlloc => "large-alloc",
            Taxonomy::Execve => "execve",
            Taxonomy::ModuleLevelAssembly => "module-level-assembly",
            Taxonomy::InlineAsm => "inline-asm",
            Taxonomy::SilentlyIgnoring => "silently-ignoring",
            Taxonomy::PosixRuntime => "posix-runtime",
            Taxonomy::SymbolLoading => "symbol-loading",
            Taxonomy::ExternalCall => "external-call",
            Taxonomy::Other => "other",
        }
    }

    /// Returns the failure kind for identifiers that denote a hard failure.
    pub fn failure_kind(self) -> Option<FailureKind> {
        FailureKind::try_from(self).ok()
    }

    /// Returns the class of result this identifier produces.
    pub fn class(self) -> ResultClass {
        match self.failure_kind() {
            Some(_) => ResultClass::Failure,
            None => ResultClass::Info,
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a classified diagnostic becomes an info or a failure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultClass {
    /// Informational; rendered as `<info>`.
    Info,
    /// A hard failure; rendered as `<failure>`.
    Failure,
}

impl fmt::Display for ResultClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultClass::Info => write!(f, "info"),
            ResultClass::Failure => write!(f, "failure"),
        }
    }
}

/// The only identifiers a [`Failure`](crate::Failure) may carry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// A symbol could not be loaded.
    SymbolLoading,
    /// An external call failed.
    ExternalCall,
}

impl FailureKind {
    /// Returns the `failure-id` attribute value.
    pub fn as_str(self) -> &'static str {
        Taxonomy::from(self).as_str()
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FailureKind> for Taxonomy {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::SymbolLoading => Taxonomy::SymbolLoading,
            FailureKind::ExternalCall => Taxonomy::ExternalCall,
        }
    }
}

/// Returned when a taxonomy identifier that is not a failure kind is used
/// where one is required.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[error("'{0}' is not a failure identifier")]
pub struct UnsanctionedFailure(pub Taxonomy);

impl TryFrom<Taxonomy> for FailureKind {
    type Error = UnsanctionedFailure;

    fn try_from(id: Taxonomy) -> Result<Self, Self::Error> {
        match id {
            Taxonomy::SymbolLoading => Ok(FailureKind::SymbolLoading),
            Taxonomy::ExternalCall => Ok(FailureKind::ExternalCall),
            other => Err(UnsanctionedFailure(other)),
        }
    }
}
