use crate::bitfield;

pub trait FloatParts {
    const BITS_EXPONENT: u32;
    const BITS_FRACTION: u32;
    const EXP_BIAS: i64;

    fn get_sign(&self) -> bool;
    fn get_exponent(&self) -> u64;
    fn get_fraction(&self) -> u64;

    fn compose(sign: bool, exponent: u64, fraction: u64) -> Self;
}

macro_rules! parts_impl {
    ($bits:ty) => {
        fn get_sign(&self) -> bool {
            bitfield::get_bit(
                Self::BITS_FRACTION + Self::BITS_EXPONENT,
                self.to_bits() as u64,
            ) == 1
        }

        fn get_exponent(&self) -> u64 {
            bitfield::get_bit_field(
                Self::BITS_FRACTION,
                Self::BITS_EXPONENT,
                self.to_bits() as u64,
            )
        }

        fn get_fraction(&self) -> u64 {
            bitfield::get_bit_field(0, Self::BITS_FRACTION, self.to_bits() as u64)
        }

        fn compose(sign: bool, exponent: u64, fraction: u64) -> Self {
            let mut bits = 0;
            bitfield::set_bit_field(0, Self::BITS_FRACTION, fraction, &mut bits);
            bitfield::set_bit_field(Self::BITS_FRACTION, Self::BITS_EXPONENT, exponent, &mut bits);
            bitfield::set_bit(
                Self::BITS_FRACTION + Self::BITS_EXPONENT,
                sign as u64,
                &mut bits,
            );
            Self::from_bits(bits as $bits)
        }
    };
}

impl FloatParts for f32 {
    const BITS_EXPONENT: u32 = 8;
    const BITS_FRACTION: u32 = 23;
    const EXP_BIAS: i64 = 127;

    parts_impl!(u32);
}

impl FloatParts for f64 {
    const BITS_EXPONENT: u32 = 11;
    const BITS_FRACTION: u32 = 52;
    const EXP_BIAS: i64 = 1023;

    parts_impl!(u64);
}

#[cfg(test)]
mod test {
    use super::FloatParts;
    use pcg_rand::Pcg64;
    use rand::{Rng, SeedableRng};

    #[test]
    fn one_sits_at_the_bias() {
        assert!(!1.0f64.get_sign());
        assert_eq!(1.0f64.get_exponent(), 1023);
        assert_eq!(1.0f64.get_fraction(), 0);

        assert!(!1.0f32.get_sign());
        assert_eq!(1.0f32.get_exponent(), 127);
        assert_eq!(1.0f32.get_fraction(), 0);
    }

    #[test]
    fn sign_of_negatives() {
        assert!((-2.5f64).get_sign());
        assert!(!2.5f64.get_sign());
        assert!((-0.0f64).get_sign());
    }

    #[test]
    fn compose_roundtrip_rand() {
        let mut rng = Pcg64::seed_from_u64(0x1234);

        for _ in 0..1000 {
            let val = f64::from_bits(rng.gen());
            let recomposed = f64::compose(val.get_sign(), val.get_exponent(), val.get_fraction());
            assert_eq!(recomposed.to_bits(), val.to_bits());
        }
    }
}
