//! Operator overloading for building expressions.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expr::Expr;
use crate::symbol::Symbol;

macro_rules! impl_binary_ops {
    ($($rhs:ty),*) => {$(
        impl Add<$rhs> for Expr {
            type Output = Expr;

            fn add(self, rhs: $rhs) -> Expr {
                Expr::sum([self, Expr::from(rhs)])
            }
        }

        impl Sub<$rhs> for Expr {
            type Output = Expr;

            fn sub(self, rhs: $rhs) -> Expr {
                Expr::sum([self, Expr::from(rhs).negate()])
            }
        }

        impl Mul<$rhs> for Expr {
            type Output = Expr;

            fn mul(self, rhs: $rhs) -> Expr {
                Expr::product([self, Expr::from(rhs)])
            }
        }

        impl Div<$rhs> for Expr {
            type Output = Expr;

            fn div(self, rhs: $rhs) -> Expr {
                Expr::quotient(self, rhs)
            }
        }
    )*};
}

impl_binary_ops!(Expr, Symbol, i64, f64);

macro_rules! impl_scalar_lhs {
    ($($lhs:ty),*) => {$(
        impl Add<Expr> for $lhs {
            type Output = Expr;

            fn add(self, rhs: Expr) -> Expr {
                Expr::sum([Expr::from(self), rhs])
            }
        }

        impl Sub<Expr> for $lhs {
            type Output = Expr;

            fn sub(self, rhs: Expr) -> Expr {
                Expr::sum([Expr::from(self), rhs.negate()])
            }
        }

        impl Mul<Expr> for $lhs {
            type Output = Expr;

            fn mul(self, rhs: Expr) -> Expr {
                Expr::product([Expr::from(self), rhs])
            }
        }

        impl Div<Expr> for $lhs {
            type Output = Expr;

            fn div(self, rhs: Expr) -> Expr {
                Expr::quotient(self, rhs)
            }
        }
    )*};
}

impl_scalar_lhs!(i64, f64);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.negate()
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.clone().negate()
    }
}
