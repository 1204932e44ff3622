//! Maps diagnostic text to a stable taxonomy identifier.

use firehose_model::Taxonomy;

/// Message prefixes, in priority order. The first prefix that starts the
/// message wins.
const PREFIX_RULES: &[(&str, Taxonomy)] = &[
    ("undefined reference to function", Taxonomy::UndefinedFunctionReference),
    ("undefined reference to variable", Taxonomy::UndefinedVariableReference),
    ("calling external", Taxonomy::CallingExternal),
    ("calling __user_main with extra arguments", Taxonomy::CallingUserMain),
    ("Large alloc", Taxonomy::LargeAlloc),
    ("execve", Taxonomy::Execve),
    ("executable has module level assembly", Taxonomy::ModuleLevelAssembly),
    ("unable to load symbol", Taxonomy::SymbolLoading),
    ("failed external call", Taxonomy::ExternalCall),
];

/// Substrings checked anywhere in the message when no prefix matched.
const SUBSTRING_RULES: &[(&str, Taxonomy)] = &[
    ("has inline asm", Taxonomy::InlineAsm),
    ("silently ignoring", Taxonomy::SilentlyIgnoring),
    ("when main() has less than two arguments", Taxonomy::PosixRuntime),
];

/// Classifies a fully formatted diagnostic message.
///
/// Never fails: a message no rule recognizes is [`Taxonomy::Other`].
pub fn classify(message: &str) -> Taxonomy {
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| message.starts_with(prefix))
        .or_else(|| {
            SUBSTRING_RULES
                .iter()
                .find(|(needle, _)| message.contains(needle))
        })
        .map_or(Taxonomy::Other, |&(_, id)| id)
}
