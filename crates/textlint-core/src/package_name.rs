//! Package naming conventions for rules, filter rules, and plugins.
//!
//! textlint packages are recognised purely by name. A package whose name
//! contains `textlint-rule-` is a rule, `textlint-filter-rule-` a filter rule,
//! and `textlint-plugin-` a plugin. Detection is a substring test, so
//! `@scope/textlint-rule-foo` is a rule too.

/// Well-known package name prefixes.
pub struct PackageNamePrefix;

impl PackageNamePrefix {
    /// Prefix of lint rule packages.
    pub const RULE: &'static str = "textlint-rule-";
    /// Prefix of filter rule packages.
    pub const FILTER_RULE: &'static str = "textlint-filter-rule-";
    /// Prefix of plugin packages.
    pub const PLUGIN: &'static str = "textlint-plugin-";
}

/// Helper library for rule authors. Matches the rule prefix but is not a rule.
pub const RULE_HELPER_PACKAGE: &str = "textlint-rule-helper";

/// What a package is, judged from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// A lint rule package.
    Rule,
    /// A filter rule package.
    FilterRule,
    /// A plugin package.
    Plugin,
    /// Anything else, including [`RULE_HELPER_PACKAGE`].
    Unrelated,
}

impl PackageKind {
    /// Classifies a package name.
    ///
    /// Filter rules win over rules, and rules win over plugins, when a name
    /// happens to contain more than one prefix.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if is_filter_rule(name) {
            Self::FilterRule
        } else if is_rule(name) {
            Self::Rule
        } else if is_plugin(name) {
            Self::Plugin
        } else {
            Self::Unrelated
        }
    }

    /// Returns the naming prefix for this kind, if it has one.
    #[must_use]
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Rule => Some(PackageNamePrefix::RULE),
            Self::FilterRule => Some(PackageNamePrefix::FILTER_RULE),
            Self::Plugin => Some(PackageNamePrefix::PLUGIN),
            Self::Unrelated => None,
        }
    }
}

/// Returns `true` if `name` denotes a rule package.
///
/// [`RULE_HELPER_PACKAGE`] is never a rule.
#[must_use]
pub fn is_rule(name: &str) -> bool {
    name != RULE_HELPER_PACKAGE && name.contains(PackageNamePrefix::RULE)
}

/// Returns `true` if `name` denotes a filter rule package.
#[must_use]
pub fn is_filter_rule(name: &str) -> bool {
    name.contains(PackageNamePrefix::FILTER_RULE)
}

/// Returns `true` if `name` denotes a plugin package.
#[must_use]
pub fn is_plugin(name: &str) -> bool {
    name.contains(PackageNamePrefix::PLUGIN)
}

/// Strips the first occurrence of `prefix` from `name`.
///
/// `textlint-rule-no-todo` becomes `no-todo` and
/// `@scope/textlint-rule-foo` becomes `@scope/foo`.
#[must_use]
pub fn bare_name(prefix: &str, name: &str) -> String {
    name.replacen(prefix, "", 1)
}

/// Expands a user-facing name into the full package name for `prefix`.
///
/// ```
/// use textlint_core::package_name::{full_package_name, PackageNamePrefix};
///
/// let plugin = PackageNamePrefix::PLUGIN;
/// assert_eq!(full_package_name(plugin, "markdown"), "textlint-plugin-markdown");
/// assert_eq!(full_package_name(plugin, "@scope/html"), "@scope/textlint-plugin-html");
/// assert_eq!(full_package_name(plugin, "@scope"), "@scope/textlint-plugin");
/// ```
#[must_use]
pub fn full_package_name(prefix: &str, name: &str) -> String {
    if name.contains(prefix) {
        return name.to_string();
    }
    match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, rest)) => format!("@{scope}/{prefix}{rest}"),
            None => format!("@{scoped}/{}", prefix.trim_end_matches('-')),
        },
        None => format!("{prefix}{name}"),
    }
}
