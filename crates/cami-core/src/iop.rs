//! Integer-overflow protection (IOP).
//!
//! Every routine that can outgrow a machine word returns an [`Iop`]: the
//! fixed-width value when it fits, otherwise the arbitrary precision value.
//! Two strategies produce it:
//!
//! - [`protect`] runs a checked fixed-width computation first and falls back
//!   to the exact one when any step overflows.
//! - [`narrow`] computes exactly and demotes the result when it fits, which
//!   suits recurrences whose intermediates overflow long before the result.
//!
//! A promotion ("capture") emits a `warn` event with target `camimath::iop`
//! unless [`IopConfig::notify`] is off. The event carries the `call` that
//! overflowed and the `repr` it was promoted to.

use std::fmt;

use cami_integers::{Frac64, Integer, Rational};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Controls the notice emitted when a result is promoted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IopConfig {
    /// Emit a `warn` event on every capture.
    pub notify: bool,
}

impl IopConfig {
    /// Captures are silent.
    pub const SILENT: Self = Self { notify: false };

    /// Captures are reported.
    pub const VERBOSE: Self = Self { notify: true };

    /// Creates a config with the given notification switch.
    #[must_use]
    pub const fn new(notify: bool) -> Self {
        Self { notify }
    }
}

impl Default for IopConfig {
    fn default() -> Self {
        Self::VERBOSE
    }
}

/// A value in fixed-width or arbitrary precision representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Iop<S, B> {
    /// The result fits the fixed-width type.
    Fixed(S),
    /// The result was promoted to arbitrary precision.
    Big(B),
}

impl<S, B> Iop<S, B> {
    /// Returns true if the value was promoted.
    #[must_use]
    pub fn is_big(&self) -> bool {
        matches!(self, Iop::Big(_))
    }

    /// Returns true if the value is fixed-width.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Iop::Fixed(_))
    }

    /// Returns the fixed-width value, if any.
    #[must_use]
    pub fn fixed(self) -> Option<S> {
        match self {
            Iop::Fixed(s) => Some(s),
            Iop::Big(_) => None,
        }
    }

    /// Returns the arbitrary precision value, if any.
    #[must_use]
    pub fn big(self) -> Option<B> {
        match self {
            Iop::Fixed(_) => None,
            Iop::Big(b) => Some(b),
        }
    }

    /// Returns the value in arbitrary precision, widening if needed.
    #[must_use]
    pub fn into_big(self) -> B
    where
        S: Widen<B>,
    {
        match self {
            Iop::Fixed(s) => s.widen(),
            Iop::Big(b) => b,
        }
    }

    /// Maps both representations.
    #[must_use]
    pub fn map<S2, B2>(self, fixed: impl FnOnce(S) -> S2, big: impl FnOnce(B) -> B2) -> Iop<S2, B2> {
        match self {
            Iop::Fixed(s) => Iop::Fixed(fixed(s)),
            Iop::Big(b) => Iop::Big(big(b)),
        }
    }
}

impl<S: fmt::Display, B: fmt::Display> fmt::Display for Iop<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iop::Fixed(s) => fmt::Display::fmt(s, f),
            Iop::Big(b) => fmt::Display::fmt(b, f),
        }
    }
}

/// Lossless promotion to the arbitrary precision type.
pub trait Widen<B> {
    /// Promotes `self`.
    fn widen(self) -> B;
}

impl Widen<Integer> for i64 {
    fn widen(self) -> Integer {
        Integer::new(self)
    }
}

impl Widen<Rational> for Frac64 {
    fn widen(self) -> Rational {
        Rational::from(self)
    }
}

impl<S: Widen<B>, B> Widen<Vec<B>> for Vec<S> {
    fn widen(self) -> Vec<B> {
        self.into_iter().map(Widen::widen).collect()
    }
}

/// Fallible demotion to the fixed-width type.
pub trait Narrow<S> {
    /// Returns the fixed-width value if it represents `self` exactly.
    fn narrow(&self) -> Option<S>;
}

impl Narrow<i64> for Integer {
    fn narrow(&self) -> Option<i64> {
        self.to_i64()
    }
}

impl Narrow<Frac64> for Rational {
    fn narrow(&self) -> Option<Frac64> {
        self.to_frac64()
    }
}

impl<S, B: Narrow<S>> Narrow<Vec<S>> for Vec<B> {
    fn narrow(&self) -> Option<Vec<S>> {
        self.iter().map(Narrow::narrow).collect()
    }
}

/// Drops module paths from a type name: `alloc::vec::Vec<a::b::Rational>`
/// becomes `Vec<Rational>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            ident.clear();
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(c);
        }
    }
    out.push_str(&ident);
    out
}

fn capture(cfg: IopConfig, call: &dyn fmt::Display, repr: &str) {
    if cfg.notify {
        warn!(
            target: "camimath::iop",
            call = %call,
            repr,
            "IOP capture: output converted to arbitrary precision"
        );
    }
}

fn capture_as<B>(cfg: IopConfig, call: &dyn fmt::Display) {
    if cfg.notify {
        capture(cfg, call, &short_type_name(std::any::type_name::<B>()));
    }
}

/// Runs `fixed`; if it overflows (returns `None`), reports a capture and
/// returns the result of `big` instead.
pub fn protect<S, B>(
    cfg: IopConfig,
    call: impl fmt::Display,
    fixed: impl FnOnce() -> Option<S>,
    big: impl FnOnce() -> B,
) -> Iop<S, B> {
    match fixed() {
        Some(value) => Iop::Fixed(value),
        None => {
            capture_as::<B>(cfg, &call);
            Iop::Big(big())
        }
    }
}

/// Demotes an exactly computed `value` when it fits; otherwise reports a
/// capture and keeps it.
pub fn narrow<S, B: Narrow<S>>(cfg: IopConfig, call: impl fmt::Display, value: B) -> Iop<S, B> {
    match value.narrow() {
        Some(fixed) => Iop::Fixed(fixed),
        None => {
            capture_as::<B>(cfg, &call);
            Iop::Big(value)
        }
    }
}

/// Representation selected by a threshold test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// Machine word.
    Fixed,
    /// Arbitrary precision.
    Big,
}

/// Selects [`Width::Big`] when `n > nc`.
///
/// For routines with a known overflow threshold `nc` this avoids the trial
/// computation. A capture, reported as a promotion to `Integer`, is emitted
/// only when `call` names the caller.
#[must_use]
pub fn type_iop(n: i64, nc: i64, call: Option<&dyn fmt::Display>, cfg: IopConfig) -> Width {
    if n <= nc {
        return Width::Fixed;
    }
    if let Some(call) = call {
        capture(cfg, call, "Integer");
    }
    Width::Big
}
