use crate::bitfield;
use crate::numeric::FloatParts;

/// Target layout of a floatx pattern: `tot_bits` in total, split into
/// one sign bit, `exp_bits` exponent bits and `tot_bits - exp_bits - 1`
/// fraction bits, from most to least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatxFormat {
    tot_bits: u32,
    exp_bits: u32,
}

impl FloatxFormat {
    /// Constructs a format descriptor; panics unless `3 <= tot_bits <= 64`
    /// and `1 <= exp_bits <= tot_bits - 2`.
    pub fn new(tot_bits: u32, exp_bits: u32) -> Self {
        assert!(
            (3..=64).contains(&tot_bits),
            "total width must be between 3 and 64 bits"
        );
        assert!(
            exp_bits >= 1 && exp_bits <= tot_bits - 2,
            "exponent width must leave room for a sign and a fraction bit"
        );

        Self { tot_bits, exp_bits }
    }

    pub fn tot_bits(&self) -> u32 {
        self.tot_bits
    }

    pub fn exp_bits(&self) -> u32 {
        self.exp_bits
    }

    pub fn frac_bits(&self) -> u32 {
        self.tot_bits - self.exp_bits - 1
    }

    pub fn exp_bias(&self) -> i64 {
        (1 << (self.exp_bits - 1)) - 1
    }

    /// Encodes `val` into this format. The low `tot_bits` bits of the
    /// returned word carry the `[sign | exponent | fraction]` pattern,
    /// all higher bits are zero.
    ///
    /// Magnitudes above the representable range saturate to the
    /// format's infinity with the sign preserved; magnitudes below it
    /// degrade to a subnormal and finally to signed zero. Every NaN
    /// payload maps to the exponent-all-ones, fraction-all-ones
    /// pattern. Dropped fraction bits truncate toward zero.
    pub fn encode(&self, val: f64) -> u64 {
        let frac_bits = self.frac_bits();
        let exp_field_max = bitfield::field_mask(self.exp_bits);

        let sign = val.get_sign();
        let exponent = val.get_exponent();
        let fraction = val.get_fraction();

        let (new_exponent, new_fraction) = if exponent == 0 && fraction == 0 {
            (0, 0)
        } else if exponent == bitfield::field_mask(f64::BITS_EXPONENT) {
            // infinity keeps an empty fraction; every NaN payload
            // collapses to all ones, built directly in target width
            let new_fraction = if fraction == 0 {
                0
            } else {
                bitfield::field_mask(frac_bits)
            };
            (exp_field_max, new_fraction)
        } else {
            // double subnormals fall into the smallest magnitude class
            let class_exponent = if exponent == 0 { 1 } else { exponent as i64 };
            let rebiased = class_exponent - f64::EXP_BIAS + self.exp_bias();

            if rebiased > exp_field_max as i64 {
                (exp_field_max, 0)
            } else if rebiased < -(frac_bits as i64) {
                (0, 0)
            } else if rebiased <= 0 {
                // subnormal window: the stored fraction moves right by
                // one position per exponent step below the minimum
                let shifted = fraction >> ((1 - rebiased) as u32);
                (0, adapt_fraction(shifted, frac_bits))
            } else {
                (rebiased as u64, adapt_fraction(fraction, frac_bits))
            }
        };

        let mut floatx = 0;
        bitfield::set_bit(self.tot_bits - 1, sign as u64, &mut floatx);
        bitfield::set_bit_field(frac_bits, self.exp_bits, new_exponent, &mut floatx);
        bitfield::set_bit_field(0, frac_bits, new_fraction, &mut floatx);
        floatx
    }
}

/// Encodes `val` into the floatx layout with `tot_bits` total bits of
/// which `exp_bits` hold the exponent; see [`FloatxFormat::encode`].
pub fn double_to_floatx(val: f64, tot_bits: u32, exp_bits: u32) -> u64 {
    FloatxFormat::new(tot_bits, exp_bits).encode(val)
}

fn adapt_fraction(fraction: u64, frac_bits: u32) -> u64 {
    if frac_bits < f64::BITS_FRACTION {
        fraction >> (f64::BITS_FRACTION - frac_bits)
    } else {
        fraction << (frac_bits - f64::BITS_FRACTION)
    }
}
