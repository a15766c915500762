//! Operator forwarding for the `dashu` newtypes.
//!
//! Each newtype gets the owned, owned-by-reference and reference-by-reference
//! forms of its binary operators, negation in both forms, and `Sum`/`Product`.

macro_rules! forward_binop {
    ($ty:ident: $($trait:ident::$method:ident),+ $(,)?) => {
        $(
            impl ::std::ops::$trait for $ty {
                type Output = $ty;

                fn $method(self, rhs: $ty) -> $ty {
                    $ty(::std::ops::$trait::$method(self.0, rhs.0))
                }
            }

            impl ::std::ops::$trait<&$ty> for $ty {
                type Output = $ty;

                fn $method(self, rhs: &$ty) -> $ty {
                    $ty(::std::ops::$trait::$method(self.0, &rhs.0))
                }
            }

            impl ::std::ops::$trait for &$ty {
                type Output = $ty;

                fn $method(self, rhs: Self) -> $ty {
                    $ty(::std::ops::$trait::$method(&self.0, &rhs.0))
                }
            }
        )+
    };
}

macro_rules! forward_neg {
    ($ty:ident) => {
        impl ::std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-self.0)
            }
        }

        impl ::std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-&self.0)
            }
        }
    };
}

macro_rules! fold_iter {
    ($ty:ident) => {
        impl ::std::iter::Sum for $ty {
            fn sum<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as ::num_traits::Zero>::zero(), |acc, x| acc + x)
            }
        }

        impl ::std::iter::Product for $ty {
            fn product<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as ::num_traits::One>::one(), |acc, x| acc * x)
            }
        }
    };
}
