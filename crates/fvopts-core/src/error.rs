//! Error types for finite-volume source options.
//!
//! Organised by subsystem: configuration dictionaries, the type registry,
//! time-varying functions, cell selection, model construction and reload
//! ([`ConfigError`]), and per-call equation modification ([`SourceError`]).

use std::error::Error;
use std::fmt;

/// Errors from looking up entries in a [`Dictionary`](crate::Dictionary).
#[derive(Clone, Debug, PartialEq)]
pub enum DictError {
    /// A required key is absent.
    MissingKey {
        /// Scope (dictionary path) that was searched.
        scope: String,
        /// The missing key.
        key: String,
    },
    /// The key exists but holds the wrong kind of entry.
    WrongType {
        /// Scope (dictionary path) that was searched.
        scope: String,
        /// The offending key.
        key: String,
        /// Entry kind the caller asked for.
        expected: &'static str,
        /// Entry kind actually stored.
        found: &'static str,
    },
    /// The entry has the right kind but an unusable value.
    InvalidValue {
        /// Scope (dictionary path) that was searched.
        scope: String,
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl DictError {
    /// The key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key, .. }
            | Self::WrongType { key, .. }
            | Self::InvalidValue { key, .. } => key,
        }
    }
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { scope, key } => {
                write!(f, "keyword '{key}' is undefined in dictionary '{scope}'")
            }
            Self::WrongType {
                scope,
                key,
                expected,
                found,
            } => write!(
                f,
                "keyword '{key}' in dictionary '{scope}' should be a {expected}, found a {found}"
            ),
            Self::InvalidValue { scope, key, reason } => {
                write!(f, "keyword '{key}' in dictionary '{scope}': {reason}")
            }
        }
    }
}

impl Error for DictError {}

/// Errors from building or querying a runtime type registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The same type name was registered twice.
    ///
    /// Indicates a build or initialisation defect, never a user error.
    DuplicateType {
        /// What the registry constructs (e.g. `"fvSource"`).
        kind: String,
        /// The repeated type name.
        type_name: String,
    },
    /// No constructor is registered under the requested name.
    UnknownType {
        /// What the registry constructs (e.g. `"fvSource"`).
        kind: String,
        /// The requested type name.
        type_name: String,
        /// Every registered type name, sorted.
        known: Vec<String>,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateType { kind, type_name } => {
                write!(f, "duplicate {kind} type '{type_name}' registered")
            }
            Self::UnknownType {
                kind,
                type_name,
                known,
            } => {
                write!(f, "unknown {kind} type '{type_name}'; valid types are: ")?;
                if known.is_empty() {
                    write!(f, "(none)")
                } else {
                    write!(f, "{}", known.join(", "))
                }
            }
        }
    }
}

impl Error for RegistryError {}

/// Errors from selecting or constructing a time-varying function.
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionError {
    /// A required coefficient is missing or malformed.
    Dict(DictError),
    /// The requested function type is not registered.
    Registry(RegistryError),
    /// A coefficient was read but violates the function's constraints.
    InvalidCoefficient {
        /// Function type name.
        function: String,
        /// Coefficient key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dict(e) => write!(f, "{e}"),
            Self::Registry(e) => write!(f, "{e}"),
            Self::InvalidCoefficient {
                function,
                key,
                reason,
            } => write!(f, "function '{function}': coefficient '{key}' {reason}"),
        }
    }
}

impl Error for FunctionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dict(e) => Some(e),
            Self::Registry(e) => Some(e),
            Self::InvalidCoefficient { .. } => None,
        }
    }
}

impl From<DictError> for FunctionError {
    fn from(e: DictError) -> Self {
        Self::Dict(e)
    }
}

impl From<RegistryError> for FunctionError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

/// Errors from describing or resolving a cell selection.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionError {
    /// The selection keys in the configuration are missing or malformed.
    Dict(DictError),
    /// `selectionMode` names a mode this library cannot resolve.
    UnsupportedMode {
        /// The configured mode.
        mode: String,
    },
    /// No cell zone with this name exists.
    UnknownZone {
        /// Requested zone.
        name: String,
        /// Zones that do exist.
        known: Vec<String>,
    },
    /// No cell set with this name exists.
    UnknownSet {
        /// Requested set.
        name: String,
        /// Sets that do exist.
        known: Vec<String>,
    },
    /// A cell index is not below the mesh cell count.
    CellOutOfRange {
        /// Offending cell index.
        cell: usize,
        /// Number of cells in the mesh.
        cell_count: usize,
    },
    /// A cell index appears twice in one selection.
    DuplicateCell {
        /// Offending cell index.
        cell: usize,
    },
    /// A cell volume is non-finite or not positive.
    InvalidVolume {
        /// Offending cell index.
        cell: usize,
        /// The rejected volume.
        volume: f64,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dict(e) => write!(f, "{e}"),
            Self::UnsupportedMode { mode } => write!(
                f,
                "unsupported selectionMode '{mode}'; valid modes are: all, cellSet, cellZone"
            ),
            Self::UnknownZone { name, known } => {
                write!(f, "cell zone '{name}' not found; zones: [{}]", known.join(", "))
            }
            Self::UnknownSet { name, known } => {
                write!(f, "cell set '{name}' not found; sets: [{}]", known.join(", "))
            }
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell {cell} out of range for mesh of {cell_count} cells")
            }
            Self::DuplicateCell { cell } => write!(f, "cell {cell} selected more than once"),
            Self::InvalidVolume { cell, volume } => {
                write!(f, "cell {cell} has invalid volume {volume}")
            }
        }
    }
}

impl Error for SelectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dict(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DictError> for SelectionError {
    fn from(e: DictError) -> Self {
        Self::Dict(e)
    }
}

/// Errors from constructing or reloading a source-term model.
///
/// Every variant carries the configured instance name so that a host
/// running many sources can tell which block failed.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A required key is missing or malformed.
    Dict {
        /// Instance name from the configuration.
        instance: String,
        /// The underlying lookup failure.
        reason: DictError,
    },
    /// The configured `type` is not registered.
    Registry {
        /// Instance name from the configuration.
        instance: String,
        /// The underlying registry failure.
        reason: RegistryError,
    },
    /// The value function could not be built.
    Function {
        /// Instance name from the configuration.
        instance: String,
        /// The underlying function failure.
        reason: FunctionError,
    },
    /// The cell selection could not be resolved.
    Selection {
        /// Instance name from the configuration.
        instance: String,
        /// The underlying selection failure.
        reason: SelectionError,
    },
    /// A value was read but is not acceptable for this model.
    InvalidValue {
        /// Instance name from the configuration.
        instance: String,
        /// Offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Instance name of the failing source.
    pub fn instance(&self) -> &str {
        match self {
            Self::Dict { instance, .. }
            | Self::Registry { instance, .. }
            | Self::Function { instance, .. }
            | Self::Selection { instance, .. }
            | Self::InvalidValue { instance, .. } => instance,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dict { instance, reason } => write!(f, "source '{instance}': {reason}"),
            Self::Registry { instance, reason } => write!(f, "source '{instance}': {reason}"),
            Self::Function { instance, reason } => {
                write!(f, "source '{instance}': value function: {reason}")
            }
            Self::Selection { instance, reason } => {
                write!(f, "source '{instance}': cell selection: {reason}")
            }
            Self::InvalidValue {
                instance,
                key,
                reason,
            } => write!(f, "source '{instance}': keyword '{key}' {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dict { reason, .. } => Some(reason),
            Self::Registry { reason, .. } => Some(reason),
            Self::Function { reason, .. } => Some(reason),
            Self::Selection { reason, .. } => Some(reason),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Errors from a single equation-modification call.
///
/// Checked before the equation is touched: a call that returns one of
/// these has not modified the equation.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceError {
    /// `fieldi` does not index the source's field list.
    FieldIndexOutOfRange {
        /// Source instance name.
        source: String,
        /// The requested field index.
        fieldi: usize,
        /// Number of fields the source applies to.
        field_count: usize,
    },
    /// The equation is for a different field than `fieldi` names.
    FieldMismatch {
        /// Source instance name.
        source: String,
        /// Field the source expected at `fieldi`.
        expected: String,
        /// Field the equation is for.
        found: String,
    },
    /// A per-cell input field does not match the equation's cell count.
    FieldSizeMismatch {
        /// Source instance name.
        source: String,
        /// Name of the input field.
        field: String,
        /// The equation's cell count.
        expected: usize,
        /// The field's length.
        found: usize,
    },
    /// A selected cell is not below the equation's cell count.
    CellOutOfRange {
        /// Source instance name.
        source: String,
        /// Offending cell index.
        cell: usize,
        /// The equation's cell count.
        cell_count: usize,
    },
    /// The value function produced NaN or infinity.
    NonFiniteValue {
        /// Source instance name.
        source: String,
        /// Time at which it was evaluated.
        time: f64,
    },
    /// The model does not implement this entry point.
    Unsupported {
        /// Source instance name.
        source: String,
        /// The entry point, e.g. `"addRhoSup"`.
        form: &'static str,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldIndexOutOfRange {
                source,
                fieldi,
                field_count,
            } => write!(
                f,
                "source '{source}': field index {fieldi} out of range ({field_count} fields)"
            ),
            Self::FieldMismatch {
                source,
                expected,
                found,
            } => write!(
                f,
                "source '{source}': expected equation for field '{expected}', got '{found}'"
            ),
            Self::FieldSizeMismatch {
                source,
                field,
                expected,
                found,
            } => write!(
                f,
                "source '{source}': field '{field}' has {found} values, equation has {expected} cells"
            ),
            Self::CellOutOfRange {
                source,
                cell,
                cell_count,
            } => write!(
                f,
                "source '{source}': selected cell {cell} out of range for equation of {cell_count} cells"
            ),
            Self::NonFiniteValue { source, time } => {
                write!(f, "source '{source}': non-finite value at time {time}")
            }
            Self::Unsupported { source, form } => {
                write!(f, "source '{source}': {form} is not implemented")
            }
        }
    }
}

impl Error for SourceError {}
