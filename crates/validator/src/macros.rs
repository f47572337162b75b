//! Declarative validator definitions.
//!
//! Every leaf validator in [`crate::validators`] is written as one
//! `validator!` block naming its struct, its pass condition, the error it
//! reports, and a lowercase factory function.
//!
//! ```rust,ignore
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::required() }
//!     fn not_blank();
//! }
//! ```

/// Declares a validator struct, its `Validate` impl and a factory function.
///
/// The `rule` block is the pass condition. The `error` block builds the
/// [`ValidationError`](crate::foundation::ValidationError) returned when the
/// condition is false. Struct validators always derive `Debug` and `Clone`;
/// extra derives go in a `#[derive(...)]` attribute before the name.
///
/// Four shapes are accepted:
///
/// - `Name for T;` declares a zero-sized validator.
/// - `Name { field: Ty } for T;` declares one whose `new` takes every field in order.
/// - The same plus `new(args) { body }` supplies a hand-written constructor.
/// - The same plus `new(args) -> E { body }` makes the constructor, and the
///   factory, return `Result<Self, E>`.
///
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { char_len(input) >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
///     fn min_length(min: usize);
/// }
///
/// validator! {
///     pub MatchesPattern { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("pattern") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_pattern(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Shared `Validate` impl; `$recv` carries the receiver tokens.
    (@validate $name:ident, $input:ty, ($($recv:tt)+), $inp:ident, $einp:ident, $rule:block, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                $($recv)+,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // Zero-sized validator.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        $crate::validator!(@validate $name, $input, (&self), $inp, $einp, $rule, $err);

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // Fields with a fallible hand-written constructor.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($recv:ident, $inp:ident) $rule:block
        error($erecv:ident, $einp:ident) $err:block
        new($($arg:ident: $aty:ty),* $(,)?) -> $ety:ty $ctor:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $fety:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($arg: $aty),*) -> ::std::result::Result<Self, $ety> $ctor
        }

        $crate::validator!(@validate $name, $input, (&$recv), $inp, $einp, $rule, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $fety> {
            $name::new($($farg),*)
        }
    };

    // Fields with an infallible hand-written constructor.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($recv:ident, $inp:ident) $rule:block
        error($erecv:ident, $einp:ident) $err:block
        new($($arg:ident: $aty:ty),* $(,)?) $ctor:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($arg: $aty),*) -> Self $ctor
        }

        $crate::validator!(@validate $name, $input, (&$recv), $inp, $einp, $rule, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Fields taken by `new` in declaration order.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($recv:ident, $inp:ident) $rule:block
        error($erecv:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($recv, $inp) $rule
            error($erecv, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };
}
