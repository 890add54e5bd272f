//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `List<_>` or
//! `Task<_, E>` directly. [`TypeConstructor`] works around this: every
//! container names itself applied to a different inner type through the
//! `WithType<B>` associated type, which is enough to write `Functor`,
//! `Applicative`, `Monad` and a fully generic `Traversable`.
//!
//! # Example
//!
//! ```rust
//! use effecta::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = transform_type(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` bound keeps the result usable as a
    /// type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// The bound required of every value passed through a type class method.
///
/// Effects such as `Task` and `State` store their pipelines and replay them
/// on each run, so the values they hand out must be clonable and shareable
/// across the threads a runtime may move a run to.
///
/// This trait is implemented for every type satisfying the bounds.
///
/// ```rust
/// use effecta::typeclass::Value;
///
/// fn assert_value<T: Value>() {}
/// assert_value::<i32>();
/// assert_value::<String>();
/// assert_value::<Vec<(u8, char)>>();
/// ```
pub trait Value: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Value for T {}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
