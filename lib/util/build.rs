/// Trait for types that build other types.
///
/// Implemented by staging types that are frozen into an immutable value,
/// such as [`Setup`][`crate::chess::Setup`].
pub trait Build {
    /// The type to be built.
    type Output;

    /// The reason why [`Build::Output`] could not be built.
    type Error;

    /// Build an instance of [`Build::Output`].
    fn build(self) -> Result<Self::Output, Self::Error>;
}
