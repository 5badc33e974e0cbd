// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenience re-export of common members
//!
//! Like the standard library's prelude, this module simplifies importing of
//! common items. Unlike the standard prelude, the contents of this module must
//! be imported manually:
//!
//! ```
//! use fakerng::prelude::*;
//! # let mut r = StdRng::seed_from_u64(0);
//! # let _: f32 = r.random();
//! ```

#[doc(no_inline)]
pub use crate::distributions::Distribution;
#[doc(no_inline)]
pub use crate::rngs::{AnyRng, Engine, SmallRng, StdRng};
#[doc(no_inline)]
pub use crate::seq::{IndexedMutRandom, IndexedRandom};
#[cfg(feature = "getrandom")]
#[doc(no_inline)]
pub use crate::FromEntropy;
#[doc(no_inline)]
pub use crate::{Rng, RngCore, SeedableRng};
