//! Arithmetic over GF(256), the finite field Reed-Solomon coding is defined
//! over for QR Codes, under the primitive polynomial `x^8 + x^4 + x^3 + x^2 + 1`
//! (0x11D).
//!
//! Tables are built once from the recurrence the standard's reference
//! algorithm uses rather than from repeated "Russian peasant" multiplication,
//! so every multiply and polynomial long-division step is a table lookup.

use std::sync::OnceLock;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        for (i, slot) in exp.iter_mut().enumerate().take(8) {
            *slot = 1u8 << i;
        }
        for i in 8..256 {
            exp[i] = exp[i - 4] ^ exp[i - 5] ^ exp[i - 6] ^ exp[i - 8];
        }
        let mut log = [0u8; 256];
        for (i, &value) in exp.iter().enumerate().take(255) {
            log[value as usize] = i as u8;
        }
        Tables { exp, log }
    })
}

/// `alpha^n`, wrapping `n` modulo 255 (the multiplicative order of GF(256)\{0}).
///
/// `n` may be negative, as produced by the `log[a] - log[b]` subtraction used
/// during polynomial long division.
pub(crate) fn exp(n: i32) -> u8 {
    tables().exp[n.rem_euclid(255) as usize]
}

/// `log_alpha(v)` for `v` in `[1, 255]`.
///
/// `log(0)` is undefined in GF(256) and must never be requested; callers hold
/// the invariant that `v != 0` before calling this.
pub(crate) fn log(v: u8) -> u8 {
    debug_assert!(v != 0, "gf256::log(0) is undefined");
    tables().log[v as usize]
}

/// `a * b` over GF(256).
pub(crate) fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else {
        exp(i32::from(log(a)) + i32::from(log(b)))
    }
}

/// A polynomial over GF(256), coefficients ordered highest power first.
///
/// Leading zero coefficients are trimmed on construction (but at least one
/// coefficient — possibly zero — is always kept).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Polynomial(Vec<u8>);

impl Polynomial {
    pub(crate) fn new(coeffs: Vec<u8>) -> Self {
        assert!(!coeffs.is_empty(), "polynomial must have at least one coefficient");
        let first_nonzero = coeffs.iter().position(|&c| c != 0).unwrap_or(coeffs.len() - 1);
        Polynomial(coeffs[first_nonzero..].to_vec())
    }

    /// Builds `coeffs` (trimmed) multiplied by `x^shift`, i.e. `shift` extra
    /// zero low-order coefficients appended.
    pub(crate) fn shifted(coeffs: &[u8], shift: usize) -> Self {
        let mut v = Self::new(coeffs.to_vec()).0;
        v.extend(std::iter::repeat(0u8).take(shift));
        Polynomial(v)
    }

    pub(crate) fn coeffs(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// The monomial `x^1 + alpha^power` as a degree-1 polynomial `[1, alpha^power]`.
    fn linear_factor(power: i32) -> Self {
        Polynomial(vec![1, exp(power)])
    }

    /// `self * other`, length `len(self) + len(other) - 1`.
    pub(crate) fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut out = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.0.iter().enumerate() {
                if b == 0 {
                    continue;
                }
                out[i + j] ^= mul(a, b);
            }
        }
        Polynomial::new(out)
    }

    /// `self mod other` via iterative long division: while `len(self) >= len(other)`,
    /// cancel the leading term using a GF(256) scale factor derived from logs.
    pub(crate) fn rem(&self, other: &Polynomial) -> Polynomial {
        let mut cur = self.0.clone();
        while cur.len() >= other.0.len() {
            if cur[0] == 0 {
                cur.remove(0);
                continue;
            }
            let ratio = i32::from(log(cur[0])) - i32::from(log(other.0[0]));
            for (k, &d) in other.0.iter().enumerate() {
                if d != 0 {
                    cur[k] ^= exp(i32::from(log(d)) + ratio);
                }
            }
            cur.remove(0);
        }
        if cur.is_empty() {
            cur.push(0);
        }
        Polynomial::new(cur)
    }

    /// The Reed-Solomon generator polynomial of the given degree:
    /// `product(x - alpha^i)` for `i` in `0..degree`, over GF(256) (subtraction is XOR).
    pub(crate) fn generator(degree: usize) -> Polynomial {
        let mut g = Polynomial::new(vec![1]);
        for i in 0..degree as i32 {
            g = g.mul(&Polynomial::linear_factor(i));
        }
        g
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn round_trip_exp_and_log() {
        for a in 1u32..=255 {
            let a = a as u8;
            assert_eq!(a, exp(i32::from(log(a))));
        }
    }

    #[test]
    fn wrap_exponents_modulo_255() {
        for n in 0..512i32 {
            assert_eq!(exp(n), exp(n % 255));
        }
        assert_eq!(exp(-1), exp(254));
    }

    #[test]
    fn multiply_by_one_is_identity() {
        for a in 0u16..256 {
            assert_eq!(a as u8, mul(a as u8, 1));
        }
    }

    #[test]
    fn trim_leading_zero_coefficients() {
        let p = Polynomial::new(vec![0, 0, 5, 3]);
        assert_eq!(&[5, 3], p.coeffs());
    }

    #[test]
    fn generator_has_degree_equal_to_its_parameter() {
        let g = Polynomial::generator(10);
        assert_eq!(11, g.len());
    }

    #[test]
    fn data_shifted_by_generator_degree_mod_generator_is_parity() {
        let degree = 7;
        let gen = Polynomial::generator(degree);
        let data = Polynomial::shifted(&[1, 2, 3, 4, 5, 6, 7, 8], degree);
        let remainder = data.rem(&gen);
        assert!(remainder.len() <= degree);
    }
}
