//! # Interactions with fixed size integers
use crate::algorithm::trial_division;
use crate::data::factorization::{Factorizable, FactorizationError};

macro_rules! impl_factorizable {
    ($t:ident) => {
        impl Factorizable for $t {
            type Factor = $t;
            type Power = u32;

            fn prime_factors(&self) -> Result<Vec<(Self::Factor, Self::Power)>, FactorizationError> {
                trial_division::factorize(*self)
            }
        }
    }
}

impl_factorizable!(i8);
impl_factorizable!(i16);
impl_factorizable!(i32);
impl_factorizable!(i64);
impl_factorizable!(isize);
impl_factorizable!(u8);
impl_factorizable!(u16);
impl_factorizable!(u32);
impl_factorizable!(u64);
impl_factorizable!(usize);
