/******************************************\
|==========================================|
|         Macro: impl_from_to_primitive    |
|==========================================|
\******************************************/

/// Adds `from_unchecked` and `index` to a `#[repr(u8)]` enum that defines a `NUM` constant.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc = concat!("Converts a raw `u8` discriminant into a ", stringify!($enum_name))]
            /// ## Safety
            /// - `index` must be smaller than `Self::NUM`
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!((index as usize) < Self::NUM, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            /// Discriminant as an array index
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_enum_iter          |
|==========================================|
\******************************************/

/// Adds an `iter()` over every variant, in discriminant order.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc = concat!("Iterates over every ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|            Macro: impl_bit_ops           |
|==========================================|
\******************************************/

/// Implements `&`, `|`, `^` and their assigning forms for a single field tuple struct.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        $crate::impl_bit_ops!(@op $struct_name, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        $crate::impl_bit_ops!(@op $struct_name, BitOr, bitor, BitOrAssign, bitor_assign, |);
        $crate::impl_bit_ops!(@op $struct_name, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

        impl std::ops::Not for $struct_name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }
    };

    (@op $struct_name:ident, $op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $tok:tt) => {
        impl std::ops::$op for $struct_name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $tok rhs.0)
            }
        }

        impl std::ops::$assign_op for $struct_name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0 $tok rhs.0;
            }
        }
    };
}
