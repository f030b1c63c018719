//! Error types for the restaurant directory engine.
//!
//! Every failure in this crate is a value, never a panic: the parser, the
//! commands, and the execution façade each have their own error enum, and each
//! variant carries the exact message shown to the user. Constraint messages
//! for the domain value objects live on [`ValidationError`] so the parser can
//! surface them verbatim.

/// Validation errors raised by the domain value objects.
///
/// The `#[error]` strings on these variants are the canonical constraint
/// messages. The parser reuses them unchanged when a field value fails
/// validation, so a given bad input always produces the same message
/// regardless of which command carried it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name was empty or all whitespace.
    #[error("Names cannot be blank.")]
    EmptyName,

    /// Phone was not an 8-digit number starting with 6, 8 or 9.
    #[error("Phone numbers must be exactly 8 digits and start with 6, 8 or 9.")]
    InvalidPhone,

    /// Address exceeded 100 characters or did not match the expected shape.
    #[error(
        "Addresses must be at most 100 characters and take the form 'STREET, Singapore POSTAL', \
         where STREET uses letters, digits, the characters #'/.+-, and spaces, \
         and POSTAL is a 6-digit postal code."
    )]
    InvalidAddress,

    /// Tag label was empty or all whitespace.
    #[error("Tags cannot be blank.")]
    EmptyTag,

    /// Rating was not a whole number in [0, 5].
    ///
    /// Raised both for out-of-range values and for payloads that are not
    /// numbers at all; the user sees one constraint either way.
    #[error("Ratings must be a whole number between 0 and 5.")]
    InvalidRating,
}

/// Parse-time errors: the command line could not be turned into a command.
///
/// `InvalidFormat` and `UnknownCommand` are deliberately distinct variants
/// with distinct messages so callers (and tests) can tell a malformed known
/// command apart from an unrecognized command word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line was malformed for the command it named. Carries the
    /// command's usage text.
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: String },

    /// The command word is not one the parser knows.
    #[error("Unknown command")]
    UnknownCommand,

    /// An index argument was not a positive whole number.
    ///
    /// One canonical message, independent of which command asked for the
    /// index. Zero, negatives, non-digits and fractions all land here.
    #[error("The index must be a single positive whole number.")]
    InvalidIndex,

    /// A single-valued prefix appeared more than once.
    #[error("Multiple values specified for the following single-valued field(s): {prefixes}")]
    DuplicatePrefixes { prefixes: String },

    /// A field value failed its value object's validation.
    #[error(transparent)]
    Constraint(#[from] ValidationError),
}

/// Mutation errors raised by the identity-unique collection.
///
/// These surface to the user through [`CommandError`]; the collection itself
/// stays ignorant of commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Inserting or replacing would leave two weakly-identical restaurants.
    #[error("This restaurant already exists in the directory")]
    DuplicateRestaurant,

    /// No entry matched the given restaurant by strong equality.
    #[error("The target restaurant does not exist in the directory")]
    RestaurantNotFound,
}

/// Execute-time domain errors: the command parsed but the model refused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The restaurant being added or edited collides with an existing one
    /// on the name+phone+address identity.
    #[error("This restaurant already exists in the directory")]
    DuplicateRestaurant,

    /// A display index did not resolve against the current filtered view.
    #[error("The restaurant index provided is invalid")]
    InvalidDisplayedIndex,

    /// Edit was given no fields to change.
    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    /// Untag named tags the restaurant does not carry.
    #[error("These tags are not present on the restaurant: {tags}")]
    TagsNotPresent { tags: String },

    /// Mark on a restaurant already marked as visited.
    #[error("This restaurant is already marked as visited: {restaurant}")]
    AlreadyVisited { restaurant: String },

    /// Unmark on a restaurant that is not marked as visited.
    #[error("This restaurant is not marked as visited")]
    NotVisited,

    /// Unrate on a restaurant with no rating.
    #[error("This restaurant does not have a rating")]
    NoRating,

    /// Internal miss: a resolved restaurant vanished from the collection.
    #[error("The target restaurant does not exist in the directory")]
    RestaurantNotFound,
}

impl From<ModelError> for CommandError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::DuplicateRestaurant => CommandError::DuplicateRestaurant,
            ModelError::RestaurantNotFound => CommandError::RestaurantNotFound,
        }
    }
}

/// Façade-level errors returned by [`Engine::execute`](crate::Engine::execute).
///
/// Parse and command errors pass through unchanged. Persistence failures are
/// translated into one of two user-facing templates; by the time either is
/// returned the in-memory mutation has already been applied and is kept.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The line could not be parsed; nothing was executed or saved.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The command was rejected by the model; nothing was saved.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The write-through failed because the process may not write the file.
    #[error("Could not save your restaurant data: permission denied writing to {path}")]
    SavePermissionDenied { path: String },

    /// The write-through failed for any other reason.
    #[error("Could not save your restaurant data: {detail}")]
    SaveFailed { detail: String },
}

impl CommandError {
    /// Create a `TagsNotPresent` error from the offending tag labels.
    pub fn tags_not_present<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|t| format!("[{}]", t.as_ref()))
            .collect::<Vec<_>>()
            .join("");
        Self::TagsNotPresent { tags }
    }
}

impl ParseError {
    /// Create an `InvalidFormat` error carrying a command's usage text.
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        Self::InvalidFormat {
            usage: usage.into(),
        }
    }

    /// Create a `DuplicatePrefixes` error from the repeated prefixes.
    pub fn duplicate_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::DuplicatePrefixes { prefixes }
    }
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type ParseResult<T> = Result<T, ParseError>;
pub type ModelResult<T> = Result<T, ModelError>;
pub type CommandResult<T> = Result<T, CommandError>;
pub type EngineResult<T> = Result<T, EngineError>;
