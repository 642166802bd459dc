/// Controls how INSERT statements handle conflicts with existing rows.
///
/// The mode only changes the INSERT clause. Cascaded inserts use the same
/// mode as the statement that triggered them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A conflicting row makes the statement fail.
    #[default]
    Default,

    /// A conflicting row is skipped.
    IgnoreConflict,
}

impl Mode {
    /// The conflict clause written between `INSERT` and `INTO`. Empty for
    /// [`Mode::Default`].
    pub fn clause(self) -> &'static str {
        match self {
            Mode::Default => "",
            Mode::IgnoreConflict => "OR IGNORE",
        }
    }
}
