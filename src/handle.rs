//! Number handles: the shared-ownership record every other module builds
//! on, plus the recycle pool and the three process-wide singletons.
//!
//! A [`Number`] is cheap to clone (an `Arc` bump) and, on its last drop,
//! salvages its `BigInt`'s backing storage into a free list so the next
//! [`Number::new`] can reuse the allocation instead of starting from
//! scratch. `Arc` rather than `Rc` so the free list and the singletons can
//! live in ordinary `static`s guarded the same way the rest of this crate
//! guards process-wide state.

use std::sync::{Arc, Mutex, OnceLock};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

#[derive(Debug, Default)]
struct Inner {
    scale: u32,
    value: BigInt,
}

/// A handle to an immutable-by-convention decimal value `value · 10^(-scale)`.
///
/// Cloning a `Number` is a share (`refs` in the spec's terms), not a deep
/// copy; [`Number::copy`] is an explicit alias for the same operation so
/// call sites can spell out that they mean to take a new share.
#[derive(Debug, Clone)]
pub struct Number(Arc<Inner>);

fn pool() -> &'static Mutex<Vec<Inner>> {
    static POOL: OnceLock<Mutex<Vec<Inner>>> = OnceLock::new();
    POOL.get_or_init(|| Mutex::new(Vec::new()))
}

impl Drop for Number {
    fn drop(&mut self) {
        // `strong_count == 1` here means this drop is the last share; after
        // `drop` returns, the generated glue will deallocate the Arc's box.
        // Steal the BigInt's storage first so the allocation survives into
        // the free list instead of being freed only to be reallocated by
        // the next `new`.
        if Arc::strong_count(&self.0) == 1 {
            if let Some(inner) = Arc::get_mut(&mut self.0) {
                let salvaged = Inner {
                    scale: inner.scale,
                    value: std::mem::take(&mut inner.value),
                };
                if let Ok(mut free) = pool().lock() {
                    free.push(salvaged);
                }
            }
        }
    }
}

impl Number {
    /// Allocates (or reclaims from the free list) a handle with value 0 at
    /// the given scale.
    pub fn new(scale: u32) -> Number {
        let reused = pool().lock().expect("number pool poisoned").pop();
        let inner = match reused {
            Some(mut inner) => {
                inner.scale = scale;
                inner.value.set_zero();
                inner
            }
            None => Inner {
                scale,
                value: BigInt::zero(),
            },
        };
        Number(Arc::new(inner))
    }

    pub(crate) fn from_parts(scale: u32, value: BigInt) -> Number {
        Number(Arc::new(Inner { scale, value }))
    }

    /// Takes an additional share of this handle (`refs += 1`).
    pub fn copy(&self) -> Number {
        self.clone()
    }

    pub fn scale(&self) -> u32 {
        self.0.scale
    }

    pub(crate) fn value(&self) -> &BigInt {
        &self.0.value
    }

    pub fn is_zero(&self) -> bool {
        self.0.value.is_zero()
    }

    pub fn is_neg(&self) -> bool {
        self.0.value.is_negative()
    }

    /// Count of decimal digits of `|value|`; zero has length 1.
    pub fn length(&self) -> usize {
        self.0.value.abs().to_str_radix(10).len()
    }

    /// Flips the sign. Mutates in place when this handle is uniquely held;
    /// otherwise allocates a fresh handle and drops this share of the old
    /// one.
    pub fn negate(&mut self) {
        if let Some(inner) = Arc::get_mut(&mut self.0) {
            let v = std::mem::take(&mut inner.value);
            inner.value = -v;
        } else {
            let negated = -self.0.value.clone();
            *self = Number::from_parts(self.0.scale, negated);
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        crate::compare::compare(self, other, true) == std::cmp::Ordering::Equal
    }
}
impl Eq for Number {}

/// Drops the share held in `slot`, if any, leaving it empty.
pub fn release(slot: &mut Option<Number>) {
    slot.take();
}

/// Releases `slot` and installs a fresh share of [`zero`].
pub fn init_zero(slot: &mut Option<Number>) {
    release(slot);
    *slot = Some(zero());
}

struct Singletons {
    zero: Number,
    one: Number,
    two: Number,
}

fn singletons() -> &'static Singletons {
    static SINGLETONS: OnceLock<Singletons> = OnceLock::new();
    SINGLETONS.get_or_init(|| Singletons {
        zero: Number::from_parts(0, BigInt::zero()),
        one: Number::from_parts(0, BigInt::from(1)),
        two: Number::from_parts(0, BigInt::from(2)),
    })
}

/// Forces initialization of the `ZERO`/`ONE`/`TWO` singletons and the free
/// list. Idempotent; callers should invoke this once at startup, though
/// every accessor also initializes lazily on first use.
pub fn init_numbers() {
    let _ = singletons();
    let _ = pool();
}

/// A fresh share of the `0` singleton.
pub fn zero() -> Number {
    singletons().zero.copy()
}

/// A fresh share of the `1` singleton.
pub fn one() -> Number {
    singletons().one.copy()
}

/// A fresh share of the `2` singleton.
pub fn two() -> Number {
    singletons().two.copy()
}
