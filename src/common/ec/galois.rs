use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use crate::common::error::{QRError, QRResult};

// Galois field element
//------------------------------------------------------------------------------

/// Element of GF(256) reduced by x^8 + x^4 + x^3 + x^2 + 1.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct G(pub u8);

impl G {
    // Generator raised to the power i, i.e. 2^i
    pub fn gen_pow(i: usize) -> Self {
        Self(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<G> for u8 {
    fn from(g: G) -> Self {
        g.0
    }
}

impl TryFrom<i32> for G {
    type Error = QRError;

    fn try_from(v: i32) -> QRResult<Self> {
        u8::try_from(v).map(Self).map_err(|_| QRError::RangeError)
    }
}

impl TryFrom<usize> for G {
    type Error = QRError;

    fn try_from(v: usize) -> QRResult<Self> {
        u8::try_from(v).map(Self).map_err(|_| QRError::RangeError)
    }
}

impl Add for G {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    #[allow(clippy::suspicious_op_assign_impl)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Subtraction and addition coincide in characteristic 2
impl Sub for G {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self(0);
        }
        Self::gen_pow(self.log() + rhs.log())
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for G {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        debug_assert!(!rhs.is_zero(), "Division by zero");
        if self.is_zero() {
            return Self(0);
        }
        Self::gen_pow(self.log() + 255 - rhs.log())
    }
}


// Symbolic term
//------------------------------------------------------------------------------

/// Coefficient times a symbolic base raised to an exponent, e.g. `c·α^e`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Term {
    pub coeff: G,
    pub base: char,
    pub exp: usize,
}

impl Term {
    pub fn new(coeff: G, base: char, exp: usize) -> Self {
        Self { coeff, base, exp: exp % 255 }
    }

    pub fn alpha(exp: usize) -> Self {
        Self::new(G(1), ALPHA, exp)
    }

    // Non-zero field element in alpha notation
    pub fn from_g(g: G) -> Self {
        debug_assert!(!g.is_zero(), "Zero has no alpha exponent");
        Self::alpha(g.log())
    }

    /// Product of two terms over the same base, exponents added mod 255.
    pub fn try_mul(self, rhs: Self) -> QRResult<Self> {
        if self.base != rhs.base {
            return Err(QRError::IncompatibleBase);
        }
        Ok(Self::new(self.coeff * rhs.coeff, self.base, self.exp + rhs.exp))
    }

    // Field value, only defined for alpha terms
    pub fn value(self) -> QRResult<G> {
        if self.base != ALPHA {
            return Err(QRError::IncompatibleBase);
        }
        Ok(self.coeff * G::gen_pow(self.exp))
    }
}


// Polynomial
//------------------------------------------------------------------------------

/// Polynomial over GF(256), highest degree coefficient first.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Poly(pub Vec<G>);

impl Poly {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| G(b)).collect())
    }

    pub fn degree(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn coeffs(&self) -> &[G] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().map(|&g| g.into()).collect()
    }

    /// Convolution of coefficients with field multiply and add.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut res = vec![G(0); self.0.len() + rhs.0.len() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in rhs.0.iter().enumerate() {
                res[i + j] += a * b;
            }
        }
        Self(res)
    }

    /// Product of Π(x + α^i) for i in 0..degree, computed in alpha notation.
    pub fn generator(degree: usize) -> QRResult<Self> {
        let mut genp = Self(vec![G(1)]);
        for i in 0..degree {
            // Multiply by x, then add α^i times the previous polynomial
            let mut next = genp.0.clone();
            next.push(G(0));
            let root = Term::alpha(i);
            for (k, &c) in genp.0.iter().enumerate() {
                if !c.is_zero() {
                    next[k + 1] += Term::from_g(c).try_mul(root)?.value()?;
                }
            }
            genp = Self(next);
        }
        Ok(genp)
    }

    /// Remainder of `self·x^d` divided by a monic `den` of degree `d`.
    pub fn rem(&self, den: &Self) -> QRResult<Self> {
        debug_assert!(den.0.first() == Some(&G(1)), "Divisor must be monic");
        let deg = den.degree();
        let len = self.0.len();

        let mut res = self.0.clone();
        res.resize(len + deg, G(0));
        for i in 0..len {
            let lead = res[i];
            if lead.is_zero() {
                continue;
            }
            let lead = Term::from_g(lead);
            for (u, &v) in res[i + 1..].iter_mut().zip(den.0[1..].iter()) {
                if !v.is_zero() {
                    *u += lead.try_mul(Term::from_g(v))?.value()?;
                }
            }
        }
        Ok(Self(res.split_off(len)))
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static ALPHA: char = 'α';

const PRIMITIVE_POLY: u16 = 0x11d;

const fn exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 256 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table
}

const fn log_table() -> [u8; 256] {
    let exp = exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static EXP_TABLE: [u8; 256] = exp_table();

static LOG_TABLE: [u8; 256] = log_table();
